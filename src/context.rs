//! Lint context for rule execution

use oxc_span::SourceType;

use crate::Diagnostic;

/// Context passed through a single file's lint run
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Source type (JS/TS/JSX etc)
    source_type: SourceType,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, source_type: SourceType) -> Self {
        Self {
            source_text,
            source_type,
            diagnostics: Vec::new(),
        }
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Get the source type
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Check if the source is TypeScript
    pub fn is_typescript(&self) -> bool {
        self.source_type.is_typescript()
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: oxc_span::Span) -> &'a str {
        &self.source_text[span.start as usize..span.end as usize]
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Get reference to diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
