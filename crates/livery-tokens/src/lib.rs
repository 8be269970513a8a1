//! # Livery Tokens - Design Tokens for Multi-Brand Themes
//!
//! `livery-tokens` turns a brand's structured design-token tree into CSS
//! custom properties, validating every value before it goes live.
//!
//! ## Core Concepts
//!
//! - [`TokenSchema`]: Tokens grouped into five categories (colors, typography,
//!   spacing, border radius, shadows)
//! - [`FlattenedTokens`]: The same tokens as one `name → value` map, ready to
//!   become `--name` custom properties
//! - [`default_tokens`]: The complete fallback set every brand is layered on
//! - [`TokenValidator`]: Permissive, per-category format checks
//! - [`TokenEngine`]: Owner of the live token state, projecting it onto a
//!   [`StyleSurface`]
//!
//! ## Quick Start
//!
//! ```rust
//! use livery_tokens::{BrandTheme, RootStyle, TokenEngine, TokenSchema};
//!
//! let theme: BrandTheme = serde_yaml::from_str(r##"
//! layout: modern
//! assets:
//!   logo: /brands/pmc/assets/logo.svg
//!   favicon: /brands/pmc/assets/favicon.ico
//! tokens:
//!   colors:
//!     color-primary: "#7c3aed"
//!   borderRadius:
//!     radius-full: 9999px
//! "##).unwrap();
//!
//! let mut engine = TokenEngine::with_surface(RootStyle::new());
//! engine.apply_tokens(&theme, "pmc");
//!
//! assert_eq!(
//!     engine.surface().to_css(),
//!     ":root {\n  --color-primary: #7c3aed;\n  --radius-full: 9999px;\n}\n"
//! );
//! ```
//!
//! ## Fail-Closed Applies
//!
//! A token set that fails validation is rejected as a whole. The engine keeps
//! whatever was live before and reports the failures through
//! [`ApplyOutcome::Rejected`]; it never applies half a theme.

pub mod css;
mod defaults;
mod engine;
mod schema;
mod surface;
mod theme;
mod validator;

pub use defaults::{default_flattened, default_tokens, default_value};
pub use engine::{ApplyOutcome, TokenEngine};
pub use schema::{CategoryTokens, FlattenedTokens, TokenCategory, TokenSchema, UnknownCategory};
pub use surface::{Headless, RootStyle, StyleSurface};
pub use theme::{BrandAssets, BrandTheme, Layout};
pub use validator::{
    is_valid_color, is_valid_font_family, is_valid_font_size, is_valid_radius, is_valid_shadow,
    is_valid_spacing, TokenCheck, TokenKind, TokenValidator, ValidationReport,
};
