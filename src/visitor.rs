//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics efficiently.
//! The `Visit` impl is the contract with the host traversal: one handler per
//! node type the rules care about, invoked in source order.

use oxc_ast::ast::{
    ExportDefaultDeclaration, ExportNamedDeclaration, ImportDeclaration, Program,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::SourceType;

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::rules::{DefaultExports, MetaInlineProperties, NoRedundantStoryName, NoStoriesOf};

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub default_exports: bool,
    pub meta_inline_properties: Option<MetaInlineProperties>,
    pub no_redundant_story_name: bool,
    pub no_stories_of: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            default_exports: true,
            meta_inline_properties: Some(MetaInlineProperties::new()),
            no_redundant_story_name: true,
            no_stories_of: true,
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            default_exports: false,
            meta_inline_properties: None,
            no_redundant_story_name: false,
            no_stories_of: false,
        }
    }

    pub fn with_default_exports(mut self, enabled: bool) -> Self {
        self.default_exports = enabled;
        self
    }

    pub fn with_meta_inline_properties(mut self, rule: MetaInlineProperties) -> Self {
        self.meta_inline_properties = Some(rule);
        self
    }

    pub fn with_no_redundant_story_name(mut self, enabled: bool) -> Self {
        self.no_redundant_story_name = enabled;
        self
    }

    pub fn with_no_stories_of(mut self, enabled: bool) -> Self {
        self.no_stories_of = enabled;
        self
    }
}

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self { ctx, config }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        self.visit_program(program);
        LintResult {
            diagnostics: self.ctx.into_diagnostics(),
        }
    }

    fn report_all(&mut self, diagnostics: Vec<Diagnostic>) {
        for diagnostic in diagnostics {
            self.ctx.report(diagnostic);
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_program(&mut self, program: &Program<'a>) {
        // default-exports is a whole-file check; report it first so the
        // file-level diagnostic precedes per-export ones
        if self.config.default_exports {
            let rule = DefaultExports::new();
            let diagnostics = rule.check(program);
            self.report_all(diagnostics);
        }
        walk::walk_program(self, program);
    }

    fn visit_import_declaration(&mut self, import: &ImportDeclaration<'a>) {
        if self.config.no_stories_of {
            let rule = NoStoriesOf::new();
            let diagnostics = rule.check(import);
            self.report_all(diagnostics);
        }
        walk::walk_import_declaration(self, import);
    }

    fn visit_export_named_declaration(&mut self, export: &ExportNamedDeclaration<'a>) {
        if self.config.no_redundant_story_name {
            let rule = NoRedundantStoryName::new();
            let diagnostics = rule.check(export);
            self.report_all(diagnostics);
        }
        walk::walk_export_named_declaration(self, export);
    }

    fn visit_export_default_declaration(&mut self, export: &ExportDefaultDeclaration<'a>) {
        if let Some(rule) = &self.config.meta_inline_properties {
            let diagnostics = rule.check(export);
            self.report_all(diagnostics);
        }
        walk::walk_export_default_declaration(self, export);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::tsx());
    let config = RulesConfig::default();
    LintRunner::new(ctx, config).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}
