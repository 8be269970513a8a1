//! Token value validation.
//!
//! Each token is dispatched by name prefix to a per-kind check. The checks are
//! intentionally permissive (bare CSS keywords pass as colors, shadows only
//! need a recognizable fragment) and tokens whose name matches no known prefix
//! are not checked at all.
//!
//! | Prefix | Kind | Accepts |
//! |--------|------|---------|
//! | `color-` | [`TokenKind::Color`] | `#rgb`, `#rrggbb`, `rgb(..)`, `rgba(..)`, alphabetic keywords |
//! | `font-size-` | [`TokenKind::FontSize`] | number + `rem em px % vh vw vmin vmax` |
//! | `font-family-` | [`TokenKind::FontFamily`] | letters, whitespace, `,` `-` and quotes |
//! | `spacing-` | [`TokenKind::Spacing`] | `0`, number + `rem em px vh vw %` |
//! | `radius-` | [`TokenKind::Radius`] | `0`, number + `rem em px %`, `9999px` |
//! | `shadow-` | [`TokenKind::Shadow`] | `none`, or any value mentioning a length/color/`inset` |
//!
//! # Example
//!
//! ```rust
//! use livery_tokens::{FlattenedTokens, TokenValidator};
//!
//! let tokens = FlattenedTokens::new()
//!     .with("color-primary", "#7c3aed")
//!     .with("spacing-4", "1rem")
//!     .with("color-accent", "#ff");
//!
//! let report = TokenValidator::new().validate(&tokens);
//! assert!(!report.is_valid());
//! assert_eq!(report.errors(), ["color-accent: #ff"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schema::FlattenedTokens;

static COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$|^rgb\([0-9]+,\s*[0-9]+,\s*[0-9]+\)$|^rgba\([0-9]+,\s*[0-9]+,\s*[0-9]+,\s*[01]?\.?[0-9]*\)$|^[a-zA-Z]+$|^transparent$|^currentcolor$",
    )
    .expect("color pattern compiles")
});

static FONT_SIZE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?(rem|em|px|%|vh|vw|vmin|vmax)$").expect("font-size pattern compiles")
});

static SPACING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0$|^[0-9]+(\.[0-9]+)?(rem|em|px|vh|vw|%)$").expect("spacing pattern compiles")
});

static FONT_FAMILY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[a-zA-Z\s,\-'"`]+$"#).expect("font-family pattern compiles")
});

static RADIUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0$|^[0-9]+(\.[0-9]+)?(rem|em|px|%)$").expect("radius pattern compiles")
});

const SHADOW_FRAGMENTS: &[&str] = &["px", "rem", "em", "rgba", "rgb", "inset"];

/// Accepts hex, `rgb()`, `rgba()`, and alphabetic CSS color keywords.
pub fn is_valid_color(value: &str) -> bool {
    COLOR.is_match(value)
}

/// Accepts a non-negative number immediately followed by a length unit.
pub fn is_valid_font_size(value: &str) -> bool {
    FONT_SIZE.is_match(value)
}

pub fn is_valid_spacing(value: &str) -> bool {
    SPACING.is_match(value)
}

/// Accepts font stacks made only of letters, whitespace, commas, hyphens and quotes.
pub fn is_valid_font_family(value: &str) -> bool {
    FONT_FAMILY.is_match(value)
}

pub fn is_valid_radius(value: &str) -> bool {
    RADIUS.is_match(value) || value == "9999px"
}

/// Loose check: `none`, or anything containing a length unit, a color function, or `inset`.
pub fn is_valid_shadow(value: &str) -> bool {
    value == "none" || SHADOW_FRAGMENTS.iter().any(|fragment| value.contains(fragment))
}

/// A value check for one kind of token.
pub type TokenCheck = fn(&str) -> bool;

/// The kinds of token the validator recognizes by name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Color,
    FontSize,
    FontFamily,
    Spacing,
    Radius,
    Shadow,
}

impl TokenKind {
    /// Kinds in dispatch order.
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Color,
        TokenKind::FontSize,
        TokenKind::FontFamily,
        TokenKind::Spacing,
        TokenKind::Radius,
        TokenKind::Shadow,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            TokenKind::Color => "color-",
            TokenKind::FontSize => "font-size-",
            TokenKind::FontFamily => "font-family-",
            TokenKind::Spacing => "spacing-",
            TokenKind::Radius => "radius-",
            TokenKind::Shadow => "shadow-",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::FontSize => "font size",
            TokenKind::FontFamily => "font family",
            TokenKind::Spacing => "spacing",
            TokenKind::Radius => "border radius",
            TokenKind::Shadow => "shadow",
        }
    }

    /// The built-in check for this kind.
    pub fn default_check(&self) -> TokenCheck {
        match self {
            TokenKind::Color => is_valid_color,
            TokenKind::FontSize => is_valid_font_size,
            TokenKind::FontFamily => is_valid_font_family,
            TokenKind::Spacing => is_valid_spacing,
            TokenKind::Radius => is_valid_radius,
            TokenKind::Shadow => is_valid_shadow,
        }
    }

    /// Finds the kind whose prefix `name` starts with, in dispatch order.
    pub fn for_token(name: &str) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|kind| name.starts_with(kind.prefix()))
    }
}

/// Outcome of validating a flattened token set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// True iff no token failed its check.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing tokens as `"name: value"` strings, in token order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Dispatches tokens to per-kind checks.
///
/// Checks can be replaced per kind with [`with_check`](Self::with_check):
///
/// ```rust
/// use livery_tokens::{FlattenedTokens, TokenKind, TokenValidator};
///
/// let strict = TokenValidator::new()
///     .with_check(TokenKind::Color, |v| v.starts_with('#'));
///
/// let tokens = FlattenedTokens::new().with("color-primary", "blue");
/// assert!(!strict.validate(&tokens).is_valid());
/// assert!(TokenValidator::new().validate(&tokens).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct TokenValidator {
    checks: [TokenCheck; 6],
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenValidator {
    pub fn new() -> Self {
        Self {
            checks: TokenKind::ALL.map(|kind| kind.default_check()),
        }
    }

    /// Replaces the check used for `kind`.
    pub fn with_check(mut self, kind: TokenKind, check: TokenCheck) -> Self {
        self.checks[Self::slot(kind)] = check;
        self
    }

    fn slot(kind: TokenKind) -> usize {
        match kind {
            TokenKind::Color => 0,
            TokenKind::FontSize => 1,
            TokenKind::FontFamily => 2,
            TokenKind::Spacing => 3,
            TokenKind::Radius => 4,
            TokenKind::Shadow => 5,
        }
    }

    /// Checks a single token. Unrecognized names always pass.
    pub fn check(&self, name: &str, value: &str) -> bool {
        match TokenKind::for_token(name) {
            Some(kind) => (self.checks[Self::slot(kind)])(value),
            None => true,
        }
    }

    /// Validates every token, collecting each failure as `"name: value"`.
    pub fn validate(&self, tokens: &FlattenedTokens) -> ValidationReport {
        let mut errors = Vec::new();

        for (name, value) in tokens.iter() {
            if self.check(name, value) {
                continue;
            }
            if let Some(kind) = TokenKind::for_token(name) {
                tracing::warn!("Invalid {} format for {}: {}", kind.label(), name, value);
            }
            errors.push(format!("{}: {}", name, value));
        }

        ValidationReport { errors }
    }
}
