//! The default token set.
//!
//! Every token name the schema knows has a value here. Brand themes are
//! layered on top of this set, never in place of it.

use once_cell::sync::Lazy;

use crate::schema::{CategoryTokens, FlattenedTokens, TokenSchema};

const COLORS: &[(&str, &str)] = &[
    ("color-primary", "#3b82f6"),
    ("color-primary-hover", "#2563eb"),
    ("color-primary-active", "#1d4ed8"),
    ("color-secondary", "#64748b"),
    ("color-secondary-hover", "#475569"),
    ("color-accent", "#10b981"),
    ("color-accent-hover", "#059669"),
    ("color-background", "#ffffff"),
    ("color-surface", "#f8fafc"),
    ("color-surface-hover", "#f1f5f9"),
    ("color-surface-active", "#e2e8f0"),
    ("color-text-primary", "#1e293b"),
    ("color-text-secondary", "#64748b"),
    ("color-text-muted", "#94a3b8"),
    ("color-text-inverse", "#ffffff"),
    ("color-border", "#e2e8f0"),
    ("color-border-hover", "#cbd5e1"),
    ("color-error", "#ef4444"),
    ("color-warning", "#f59e0b"),
    ("color-success", "#10b981"),
    ("color-info", "#3b82f6"),
];

const TYPOGRAPHY: &[(&str, &str)] = &[
    ("font-family-sans", "Inter, system-ui, sans-serif"),
    ("font-family-serif", "Georgia, serif"),
    ("font-family-mono", "Consolas, monospace"),
    ("font-size-xs", "0.75rem"),
    ("font-size-sm", "0.875rem"),
    ("font-size-base", "1rem"),
    ("font-size-lg", "1.125rem"),
    ("font-size-xl", "1.25rem"),
    ("font-size-2xl", "1.5rem"),
    ("font-size-3xl", "1.875rem"),
    ("font-size-4xl", "2.25rem"),
    ("font-size-5xl", "3rem"),
    ("font-size-6xl", "3.75rem"),
    ("font-size-7xl", "4.5rem"),
    ("font-size-8xl", "6rem"),
    ("font-weight-light", "300"),
    ("font-weight-normal", "400"),
    ("font-weight-medium", "500"),
    ("font-weight-semibold", "600"),
    ("font-weight-bold", "700"),
    ("font-weight-extrabold", "800"),
    ("line-height-tight", "1.25"),
    ("line-height-normal", "1.5"),
    ("line-height-relaxed", "1.75"),
    ("letter-spacing-tight", "-0.025em"),
    ("letter-spacing-normal", "0em"),
    ("letter-spacing-wide", "0.025em"),
];

const SPACING: &[(&str, &str)] = &[
    ("spacing-0", "0"),
    ("spacing-1", "0.25rem"),
    ("spacing-2", "0.5rem"),
    ("spacing-3", "0.75rem"),
    ("spacing-4", "1rem"),
    ("spacing-5", "1.25rem"),
    ("spacing-6", "1.5rem"),
    ("spacing-7", "1.75rem"),
    ("spacing-8", "2rem"),
    ("spacing-9", "2.25rem"),
    ("spacing-10", "2.5rem"),
    ("spacing-11", "2.75rem"),
    ("spacing-12", "3rem"),
    ("spacing-14", "3.5rem"),
    ("spacing-16", "4rem"),
    ("spacing-20", "5rem"),
    ("spacing-24", "6rem"),
    ("spacing-28", "7rem"),
    ("spacing-32", "8rem"),
    ("spacing-36", "9rem"),
    ("spacing-40", "10rem"),
    ("spacing-44", "11rem"),
    ("spacing-48", "12rem"),
    ("spacing-52", "13rem"),
    ("spacing-56", "14rem"),
    ("spacing-60", "15rem"),
    ("spacing-64", "16rem"),
    ("spacing-72", "18rem"),
    ("spacing-80", "20rem"),
    ("spacing-96", "24rem"),
];

const BORDER_RADIUS: &[(&str, &str)] = &[
    ("radius-none", "0"),
    ("radius-xs", "0.125rem"),
    ("radius-sm", "0.125rem"),
    ("radius-md", "0.375rem"),
    ("radius-lg", "0.5rem"),
    ("radius-xl", "0.75rem"),
    ("radius-2xl", "1rem"),
    ("radius-3xl", "1.5rem"),
    ("radius-full", "9999px"),
];

const SHADOWS: &[(&str, &str)] = &[
    ("shadow-xs", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
    (
        "shadow-sm",
        "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
    ),
    (
        "shadow-md",
        "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
    ),
    (
        "shadow-lg",
        "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
    ),
    (
        "shadow-xl",
        "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
    ),
    ("shadow-2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
    ("shadow-inner", "inset 0 2px 4px 0 rgba(0, 0, 0, 0.06)"),
    ("shadow-none", "none"),
];

static DEFAULT_TOKENS: Lazy<TokenSchema> = Lazy::new(|| TokenSchema {
    colors: table(COLORS),
    typography: table(TYPOGRAPHY),
    spacing: table(SPACING),
    border_radius: table(BORDER_RADIUS),
    shadows: table(SHADOWS),
});

static DEFAULT_FLATTENED: Lazy<FlattenedTokens> = Lazy::new(|| DEFAULT_TOKENS.flatten());

fn table(entries: &[(&str, &str)]) -> CategoryTokens {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// The complete default token schema.
pub fn default_tokens() -> &'static TokenSchema {
    &DEFAULT_TOKENS
}

/// The default token schema, flattened.
pub fn default_flattened() -> &'static FlattenedTokens {
    &DEFAULT_FLATTENED
}

/// Looks up a default value by token name.
pub fn default_value(name: &str) -> Option<&'static str> {
    DEFAULT_FLATTENED.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TokenCategory;

    #[test]
    fn test_defaults_cover_every_category() {
        for category in TokenCategory::ALL {
            assert!(
                !default_tokens().category(category).is_empty(),
                "category {} has no defaults",
                category
            );
        }
    }

    #[test]
    fn test_flattened_defaults_have_no_collisions() {
        assert_eq!(default_flattened().len(), default_tokens().len());
    }

    #[test]
    fn test_default_primary_color() {
        assert_eq!(default_value("color-primary"), Some("#3b82f6"));
        assert_eq!(default_value("radius-full"), Some("9999px"));
        assert_eq!(default_value("nope"), None);
    }

    #[test]
    fn test_defaults_keep_category_membership() {
        for (category, name, _) in default_tokens().iter() {
            assert_eq!(TokenCategory::of(name), Some(category), "{} misfiled", name);
        }
    }
}
