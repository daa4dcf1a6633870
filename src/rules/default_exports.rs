//! storybook/default-exports
//!
//! Story files should have a default export (the meta object describing
//! the component under test).

use oxc_ast::ast::{Program, Statement};
use oxc_span::{GetSpan, Span};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

/// default-exports rule
#[derive(Debug, Clone, Default)]
pub struct DefaultExports;

impl RuleMeta for DefaultExports {
    const NAME: &'static str = "default-exports";
    const CATEGORY: RuleCategory = RuleCategory::Csf;
}

const SHOULD_HAVE_DEFAULT_EXPORT: &str = "The file should have a default export";

impl DefaultExports {
    pub fn new() -> Self {
        Self
    }

    /// Check a whole program for the presence of a default export
    pub fn check<'a>(&self, program: &Program<'a>) -> Vec<Diagnostic> {
        let has_default_export = program.body.iter().any(|stmt| {
            matches!(
                stmt,
                Statement::ExportDefaultDeclaration(_) | Statement::TSExportAssignment(_)
            )
        });

        if has_default_export {
            return Vec::new();
        }

        // Point at the first statement rather than the whole file
        let span = program
            .body
            .first()
            .map_or(Span::new(0, 0), |stmt| stmt.span());

        vec![
            Diagnostic::error(Self::NAME, span, SHOULD_HAVE_DEFAULT_EXPORT).with_help(
                "Add `export default { component: ... }` so the file is recognized as CSF.",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn check_source_as(source: &str, source_type: SourceType) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "fixture should parse");
        DefaultExports::new().check(&ret.program)
    }

    fn check_source(source: &str) -> Vec<Diagnostic> {
        check_source_as(source, SourceType::tsx())
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(DefaultExports::NAME, "default-exports");
    }

    #[test]
    fn test_default_export_present() {
        let diagnostics = check_source("export default { title: 'Button', component: Button }");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_export_assignment_counts() {
        let diagnostics = check_source_as("export = { title: 'Button' };", SourceType::ts());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_default_export() {
        let diagnostics = check_source("export const Primary = () => <button>hello</button>");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, SHOULD_HAVE_DEFAULT_EXPORT);
        assert!(diagnostics[0].fixes.is_empty());
    }

    #[test]
    fn test_empty_file() {
        let diagnostics = check_source("");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span(), Span::new(0, 0));
    }
}
