//! Utility functions shared by the CSF lint rules

use oxc_ast::ast::{
    Expression, ObjectExpression, ObjectProperty, ObjectPropertyKind, PropertyKey,
};

/// Resolve the story label a human author would write for an export
/// identifier, e.g. `PrimaryButton` -> `Primary Button`.
///
/// A space is inserted before every maximal run of uppercase letters
/// (except at the start), then every word is capitalized. A run of
/// uppercase letters is kept as one word: `doABTest` -> `Do ABTest`.
pub fn resolve_story_name(identifier: &str) -> String {
    let mut spaced = String::with_capacity(identifier.len() + 8);
    let mut prev_is_upper = false;
    for (i, c) in identifier.chars().enumerate() {
        if c.is_uppercase() && !prev_is_upper && i > 0 {
            spaced.push(' ');
        }
        prev_is_upper = c.is_uppercase();
        spaced.push(c);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word, leaving the rest unchanged
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Peel TypeScript cast wrappers (and parentheses) off an expression.
///
/// Casts are transparent for shape classification: `{ ... } as Meta` and
/// `{ ... } satisfies Meta` are still object literals.
pub fn peel_casts<'a, 'b>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    match expr {
        Expression::TSAsExpression(e) => peel_casts(&e.expression),
        Expression::TSSatisfiesExpression(e) => peel_casts(&e.expression),
        Expression::TSTypeAssertion(e) => peel_casts(&e.expression),
        Expression::ParenthesizedExpression(e) => peel_casts(&e.expression),
        _ => expr,
    }
}

/// Get the compile-time name of a property key, if it has one.
///
/// Computed keys have no static name and are skipped by every rule.
pub fn static_property_name<'a, 'b>(key: &'b PropertyKey<'a>) -> Option<&'b str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// Find the first property of an object literal with the given key name.
///
/// Key names are not guaranteed unique in source; first match wins.
pub fn find_property<'a, 'b>(
    object: &'b ObjectExpression<'a>,
    name: &str,
) -> Option<&'b ObjectProperty<'a>> {
    object.properties.iter().find_map(|entry| match entry {
        ObjectPropertyKind::ObjectProperty(prop) => {
            (static_property_name(&prop.key) == Some(name)).then_some(&**prop)
        }
        ObjectPropertyKind::SpreadProperty(_) => None,
    })
}

/// Get the value of a string literal expression
pub fn string_literal_value<'a, 'b>(expr: &'b Expression<'a>) -> Option<&'b str> {
    match expr {
        Expression::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// Classify whether an expression is "inline": a self-contained literal
/// written at the declaration site, with no external reference or
/// computation.
///
/// This is a one-level classification. It never resolves identifiers to
/// their definitions; any indirection makes the value non-inline, even if
/// the outer binding is itself a literal.
pub fn is_inline_expression(expr: &Expression) -> bool {
    match expr {
        // Self-contained literals
        Expression::StringLiteral(_)
        | Expression::NumericLiteral(_)
        | Expression::BigIntLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::RegExpLiteral(_)
        | Expression::ObjectExpression(_)
        | Expression::ArrayExpression(_) => true,
        // A template is only static if it has nothing to interpolate
        Expression::TemplateLiteral(template) => template.expressions.is_empty(),
        // Casts don't change inline-ness of the wrapped expression
        Expression::TSAsExpression(e) => is_inline_expression(&e.expression),
        Expression::TSSatisfiesExpression(e) => is_inline_expression(&e.expression),
        Expression::TSTypeAssertion(e) => is_inline_expression(&e.expression),
        Expression::ParenthesizedExpression(e) => is_inline_expression(&e.expression),
        // Identifier references, calls, binary expressions, and every
        // other computed shape: the value is not visible at the site
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_lowercase_is_capitalized() {
        assert_eq!(resolve_story_name("primary"), "Primary");
    }

    #[test]
    fn test_resolve_splits_concatenated_words() {
        assert_eq!(resolve_story_name("PrimaryButton"), "Primary Button");
        assert_eq!(
            resolve_story_name("SomeLongStoryName"),
            "Some Long Story Name"
        );
    }

    #[test]
    fn test_resolve_camel_case() {
        assert_eq!(resolve_story_name("primaryButton"), "Primary Button");
    }

    #[test]
    fn test_resolve_no_uppercase_beyond_start_is_identity_modulo_case() {
        assert_eq!(resolve_story_name("Primary"), "Primary");
        assert_eq!(resolve_story_name("primary_button"), "Primary_button");
    }

    #[test]
    fn test_resolve_uppercase_runs_stay_together() {
        // Policy: a maximal uppercase run is one word, never split
        assert_eq!(resolve_story_name("ABTest"), "ABTest");
        assert_eq!(resolve_story_name("doABTest"), "Do ABTest");
        assert_eq!(resolve_story_name("withHTML"), "With HTML");
    }

    #[test]
    fn test_resolve_digits_are_not_boundaries() {
        assert_eq!(resolve_story_name("Primary2Button"), "Primary2 Button");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("button"), "Button");
        assert_eq!(capitalize("Button"), "Button");
        assert_eq!(capitalize(""), "");
    }
}
