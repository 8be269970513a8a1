//! CSS text generation for flattened tokens.
//!
//! Pure formatting; nothing here validates values.

use crate::schema::{FlattenedTokens, TokenCategory};

/// Prefix every token name gets when it becomes a custom property.
pub const CUSTOM_PROPERTY_PREFIX: &str = "--";

/// `color-primary` → `--color-primary`.
pub fn property_name(token: &str) -> String {
    format!("{}{}", CUSTOM_PROPERTY_PREFIX, token)
}

/// `("button", "bg")` → `--button-bg`.
pub fn component_property_name(component: &str, token: &str) -> String {
    format!("{}{}-{}", CUSTOM_PROPERTY_PREFIX, component, token)
}

/// One indented declaration line for an already-prefixed property.
pub(crate) fn declaration(property: &str, value: &str) -> String {
    format!("  {}: {};", property, value)
}

/// Renders `  --name: value;` lines joined by newlines.
///
/// ```rust
/// use livery_tokens::{css, FlattenedTokens};
///
/// let tokens = FlattenedTokens::new()
///     .with("spacing-1", "0.25rem")
///     .with("color-primary", "#3b82f6");
/// assert_eq!(
///     css::generate_css(&tokens),
///     "  --spacing-1: 0.25rem;\n  --color-primary: #3b82f6;"
/// );
/// ```
pub fn generate_css(tokens: &FlattenedTokens) -> String {
    tokens
        .iter()
        .map(|(name, value)| declaration(&property_name(name), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`generate_css`], restricted to tokens owned by `category`.
pub fn category_css(tokens: &FlattenedTokens, category: TokenCategory) -> String {
    generate_css(&tokens.in_category(category))
}

/// Wraps declaration lines in a `:root` rule.
pub(crate) fn wrap_root(body: &str) -> String {
    if body.is_empty() {
        ":root {\n}\n".to_string()
    } else {
        format!(":root {{\n{}\n}}\n", body)
    }
}

/// A complete `:root { ... }` stylesheet for `tokens`.
pub fn root_block(tokens: &FlattenedTokens) -> String {
    wrap_root(&generate_css(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_names() {
        assert_eq!(property_name("color-primary"), "--color-primary");
        assert_eq!(component_property_name("card", "radius"), "--card-radius");
    }

    #[test]
    fn test_generate_css_empty() {
        assert_eq!(generate_css(&FlattenedTokens::new()), "");
    }

    #[test]
    fn test_category_css_filters() {
        let tokens = FlattenedTokens::new()
            .with("color-primary", "#fff")
            .with("radius-sm", "2px")
            .with("radius-lg", "8px");
        assert_eq!(
            category_css(&tokens, TokenCategory::BorderRadius),
            "  --radius-sm: 2px;\n  --radius-lg: 8px;"
        );
        assert_eq!(category_css(&tokens, TokenCategory::Shadows), "");
    }

    #[test]
    fn test_root_block() {
        let tokens = FlattenedTokens::new().with("shadow-none", "none");
        assert_eq!(root_block(&tokens), ":root {\n  --shadow-none: none;\n}\n");
    }
}
