//! storybook/meta-inline-properties
//!
//! Meta (the default export) should only have inline properties: values
//! that are literals written at the export site, not references to outer
//! bindings or computed expressions.

use oxc_ast::ast::{ExportDefaultDeclaration, Expression, ObjectPropertyKind};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::utils::{is_inline_expression, peel_casts, static_property_name};
use crate::{RuleCategory, RuleMeta};

/// Configuration for meta-inline-properties
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaInlinePropertiesConfig {
    /// Meta properties that must be inline
    #[serde(default = "default_properties")]
    pub properties: Vec<String>,
}

fn default_properties() -> Vec<String> {
    vec!["title".to_string(), "args".to_string()]
}

impl Default for MetaInlinePropertiesConfig {
    fn default() -> Self {
        Self {
            properties: default_properties(),
        }
    }
}

/// meta-inline-properties rule
#[derive(Debug, Clone, Default)]
pub struct MetaInlineProperties {
    pub config: MetaInlinePropertiesConfig,
}

impl RuleMeta for MetaInlineProperties {
    const NAME: &'static str = "meta-inline-properties";
    const CATEGORY: RuleCategory = RuleCategory::CsfStrict;
}

const META_SHOULD_HAVE_INLINE_PROPERTIES: &str = "Meta should only have inline properties";

impl MetaInlineProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MetaInlinePropertiesConfig) -> Self {
        Self { config }
    }

    /// Check the default export for tracked properties that are not inline
    pub fn check<'a>(&self, export: &ExportDefaultDeclaration<'a>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        // Function/class/interface default exports are not a meta object
        let Some(declaration) = export.declaration.as_expression() else {
            return diagnostics;
        };
        let Expression::ObjectExpression(object) = peel_casts(declaration) else {
            return diagnostics;
        };

        // Duplicate keys can occur in source; the first occurrence wins
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        for entry in &object.properties {
            let ObjectPropertyKind::ObjectProperty(property) = entry else {
                continue;
            };
            let Some(name) = static_property_name(&property.key) else {
                continue;
            };
            if !self.config.properties.iter().any(|p| p == name) || !seen.insert(name) {
                continue;
            }

            if !is_inline_expression(&property.value) {
                diagnostics.push(
                    Diagnostic::error(
                        Self::NAME,
                        property.span,
                        format!("{}: {}", META_SHOULD_HAVE_INLINE_PROPERTIES, name),
                    )
                    .with_data("property", name),
                );
            }
        }

        diagnostics
    }
}
