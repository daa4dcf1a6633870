//! storybook/no-stories-of
//!
//! `storiesOf` is deprecated and should not be used.
//!
//! Importing the symbol at all is enough to flag; usage sites are not
//! cross-referenced.

use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

/// no-stories-of rule
#[derive(Debug, Clone, Default)]
pub struct NoStoriesOf;

impl RuleMeta for NoStoriesOf {
    const NAME: &'static str = "no-stories-of";
    const CATEGORY: RuleCategory = RuleCategory::CsfStrict;
}

/// The deprecated story-registration API
const DEPRECATED_API: &str = "storiesOf";

const DO_NOT_USE_STORIES_OF: &str = "storiesOf is deprecated and should not be used";

impl NoStoriesOf {
    pub fn new() -> Self {
        Self
    }

    /// Check an import declaration for the deprecated `storiesOf` binding
    pub fn check<'a>(&self, import: &ImportDeclaration<'a>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let Some(specifiers) = &import.specifiers else {
            return diagnostics;
        };

        for specifier in specifiers {
            let ImportDeclarationSpecifier::ImportSpecifier(spec) = specifier else {
                continue;
            };

            if spec.imported.name().as_str() == DEPRECATED_API {
                diagnostics.push(
                    Diagnostic::error(Self::NAME, spec.span, DO_NOT_USE_STORIES_OF).with_help(
                        "Migrate the file to Component Story Format: \
                         export a default meta object and one named export per story.",
                    ),
                );
            }
        }

        diagnostics
    }
}
