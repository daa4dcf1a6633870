//! storybook/no-redundant-story-name
//!
//! Named exports should not use the `name` annotation if it is redundant
//! to the name that would be generated from the export name.

use oxc_ast::ast::{BindingPattern, Declaration, ExportNamedDeclaration, Expression};

use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::{find_property, peel_casts, resolve_story_name, string_literal_value};
use crate::{RuleCategory, RuleMeta};

/// no-redundant-story-name rule
#[derive(Debug, Clone, Default)]
pub struct NoRedundantStoryName;

impl RuleMeta for NoRedundantStoryName {
    const NAME: &'static str = "no-redundant-story-name";
    const CATEGORY: RuleCategory = RuleCategory::Csf;
    const FIXABLE: bool = true;
}

const STORY_NAME_IS_REDUNDANT: &str = "Named exports should not use the name annotation \
    if it is redundant to the name that would be generated by the export name";
const REMOVE_REDUNDANT_NAME: &str = "Remove redundant name";

impl NoRedundantStoryName {
    pub fn new() -> Self {
        Self
    }

    /// Check a named export for a redundant story `name` property
    pub fn check<'a>(&self, export: &ExportNamedDeclaration<'a>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        // `export { Primary }` re-exports carry no declaration
        let Some(declaration) = &export.declaration else {
            return diagnostics;
        };

        let var_decl = match declaration {
            // Type-only declarations are never stories
            Declaration::TSTypeAliasDeclaration(_) | Declaration::TSInterfaceDeclaration(_) => {
                return diagnostics;
            }
            Declaration::VariableDeclaration(var_decl) => var_decl,
            _ => return diagnostics,
        };

        // Only the first declarator is examined
        let Some(declarator) = var_decl.declarations.first() else {
            return diagnostics;
        };
        let BindingPattern::BindingIdentifier(identifier) = &declarator.id else {
            return diagnostics;
        };
        let Some(init) = &declarator.init else {
            return diagnostics;
        };

        // `{ ... } satisfies Story` and friends are still object literals
        let Expression::ObjectExpression(object) = peel_casts(init) else {
            return diagnostics;
        };

        let Some(name_property) = find_property(object, "name") else {
            return diagnostics;
        };

        // Non-literal names are assumed intentional
        let Some(story_name) = string_literal_value(&name_property.value) else {
            return diagnostics;
        };

        if story_name == resolve_story_name(&identifier.name) {
            diagnostics.push(
                Diagnostic::warning(Self::NAME, name_property.span, STORY_NAME_IS_REDUNDANT)
                    .with_fix(Fix::delete(name_property.span).with_message(REMOVE_REDUNDANT_NAME)),
            );
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn check_source(source: &str) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty(), "fixture should parse");

        let mut diagnostics = Vec::new();
        let rule = NoRedundantStoryName::new();
        for stmt in &ret.program.body {
            if let oxc_ast::ast::Statement::ExportNamedDeclaration(export) = stmt {
                diagnostics.extend(rule.check(export));
            }
        }
        diagnostics
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(NoRedundantStoryName::NAME, "no-redundant-story-name");
        assert!(NoRedundantStoryName::FIXABLE);
    }

    #[test]
    fn test_redundant_name_is_flagged_with_fix() {
        let diagnostics = check_source("export const Primary = { name: 'Primary' }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].fixes.len(), 1);
        assert!(diagnostics[0].fixes[0].replacement.is_empty(), "fix is a deletion");
    }

    #[test]
    fn test_resolved_multi_word_name_is_flagged() {
        let diagnostics =
            check_source("export const PrimaryButton = { name: 'Primary Button' }");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_cast_wrapped_story_is_flagged() {
        let diagnostics =
            check_source("export const Primary = { name: 'Primary' } satisfies Story");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_different_name_is_kept() {
        let diagnostics = check_source("export const Primary = { name: 'Something Else' }");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_absent_name_is_fine() {
        let diagnostics = check_source("export const Primary = { args: { label: 'hi' } }");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_non_literal_name_is_kept() {
        let diagnostics = check_source("export const Primary = { name: getName() }");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_type_declarations_never_trigger() {
        let diagnostics = check_source(
            "export type Primary = { name: 'Primary' };\n\
             export interface PrimaryButton { name: 'Primary Button' }",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_function_exports_are_skipped() {
        let diagnostics = check_source("export function Primary() { return null }");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_only_first_declarator_is_examined() {
        let diagnostics = check_source(
            "export const First = { args: {} }, Second = { name: 'Second' };",
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_string_key_name_is_recognized() {
        let diagnostics = check_source("export const Primary = { 'name': 'Primary' }");
        assert_eq!(diagnostics.len(), 1);
    }
}
