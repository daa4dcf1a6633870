//! CSF lint rules
//!
//! This crate provides lint rules for Component Story Format (CSF) story
//! files, ported from eslint-plugin-storybook. Rules can be used:
//! 1. Standalone with an oxc AST for custom tooling
//! 2. Integrated with oxlint as a plugin (future)

pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category for CSF rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that enforce the Component Story Format itself
    Csf,
    /// Stricter conventions on top of the format (e.g. no legacy APIs)
    CsfStrict,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// Whether the rule offers an auto-fix
    const FIXABLE: bool = false;
    /// URL to documentation
    fn docs_url() -> String {
        format!(
            "https://github.com/storybookjs/eslint-plugin-storybook/blob/main/docs/rules/{}.md",
            Self::NAME
        )
    }
}
