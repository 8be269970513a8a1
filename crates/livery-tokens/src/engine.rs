//! The token engine: owner of the live token state.
//!
//! A [`TokenEngine`] holds the tokens currently applied to a surface and the
//! brand they came from. Every mutation goes through validation first; a set
//! that fails validation never touches the state or the surface.
//!
//! There is exactly one engine per session by construction: the host creates
//! it once and passes it (or a reference to it) to whoever needs to apply or
//! read tokens.
//!
//! ```rust
//! use livery_tokens::{BrandTheme, RootStyle, StyleSurface, TokenEngine, TokenSchema};
//!
//! let mut tokens = TokenSchema::default();
//! tokens.colors.insert("color-primary".into(), "#7c3aed".into());
//!
//! let mut engine = TokenEngine::with_surface(RootStyle::new());
//! assert!(engine.apply_tokens(&BrandTheme::with_tokens(tokens), "pmc").is_applied());
//!
//! assert_eq!(engine.token("color-primary"), Some("#7c3aed"));
//! assert_eq!(engine.surface().property("--color-primary"), Some("#7c3aed"));
//!
//! engine.reset_tokens();
//! assert_eq!(engine.current_brand(), "");
//! assert_eq!(engine.token("color-primary"), Some("#3b82f6"));
//! ```

use crate::css;
use crate::defaults::{default_flattened, default_value};
use crate::schema::{FlattenedTokens, TokenCategory};
use crate::surface::{Headless, StyleSurface};
use crate::theme::BrandTheme;
use crate::validator::{TokenValidator, ValidationReport};

/// Result of an apply attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The set passed validation and is now live.
    Applied {
        brand: String,
        tokens: usize,
    },
    /// The set failed validation; the previous state is still live.
    Rejected(ValidationReport),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }

    /// The validation report of a rejected apply.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            ApplyOutcome::Rejected(report) => Some(report),
            ApplyOutcome::Applied { .. } => None,
        }
    }
}

/// Owns the applied token state and projects it onto a [`StyleSurface`].
#[derive(Debug, Clone)]
pub struct TokenEngine<S = Headless> {
    surface: S,
    validator: TokenValidator,
    current_brand: String,
    applied: FlattenedTokens,
}

impl TokenEngine<Headless> {
    /// An engine with no document attached.
    ///
    /// State still follows validation outcomes; only the property writes are
    /// skipped.
    pub fn new() -> Self {
        Self::with_surface(Headless)
    }
}

impl Default for TokenEngine<Headless> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StyleSurface> TokenEngine<S> {
    /// An engine writing to `surface`, starting from the default tokens.
    pub fn with_surface(surface: S) -> Self {
        Self {
            surface,
            validator: TokenValidator::new(),
            current_brand: String::new(),
            applied: default_flattened().clone(),
        }
    }

    /// Replaces the validator used to gate applies.
    pub fn with_validator(mut self, validator: TokenValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn validator(&self) -> &TokenValidator {
        &self.validator
    }

    /// Flattens a theme's token tree. A theme without tokens yields an empty set.
    pub fn flatten_brand_tokens(&self, theme: &BrandTheme) -> FlattenedTokens {
        match &theme.tokens {
            Some(tokens) => tokens.flatten(),
            None => {
                tracing::warn!("brand theme has no token tree; nothing to flatten");
                FlattenedTokens::new()
            }
        }
    }

    /// Flattens, validates and, if valid, applies a theme's tokens.
    ///
    /// On rejection nothing changes: the previous brand and tokens stay live
    /// and the surface is not written.
    pub fn apply_tokens(&mut self, theme: &BrandTheme, brand_id: &str) -> ApplyOutcome {
        let flattened = self.flatten_brand_tokens(theme);
        self.apply_flattened(flattened, brand_id)
    }

    /// Merges `partial` over the defaults, then validates and applies the result.
    pub fn apply_partial(&mut self, partial: &FlattenedTokens, brand_id: &str) -> ApplyOutcome {
        let merged = self.merge_with_defaults(partial);
        self.apply_flattened(merged, brand_id)
    }

    /// Validates and applies an already-flattened set.
    pub fn apply_flattened(&mut self, tokens: FlattenedTokens, brand_id: &str) -> ApplyOutcome {
        let report = self.validator.validate(&tokens);
        if !report.is_valid() {
            tracing::warn!(
                brand = display_brand(brand_id),
                errors = report.errors().len(),
                "invalid tokens; keeping previously applied tokens"
            );
            return ApplyOutcome::Rejected(report);
        }

        if self.surface.is_available() {
            for (name, value) in tokens.iter() {
                self.surface.set_property(&css::property_name(name), value);
            }
        }

        let count = tokens.len();
        self.applied = tokens;
        self.current_brand = brand_id.to_string();

        tracing::info!(brand = display_brand(brand_id), tokens = count, "tokens applied");
        ApplyOutcome::Applied {
            brand: brand_id.to_string(),
            tokens: count,
        }
    }

    /// Restores the defaults and clears the current brand.
    ///
    /// Every property of the set that was live before the reset is removed
    /// from the surface.
    pub fn reset_tokens(&mut self) {
        let previous = std::mem::replace(&mut self.applied, default_flattened().clone());
        if self.surface.is_available() {
            for name in previous.names() {
                self.surface.remove_property(&css::property_name(name));
            }
        }
        self.current_brand.clear();
        tracing::info!("tokens reset to defaults");
    }

    /// The live value for `name`, falling back to the default value.
    ///
    /// Returns `None` only for names neither the live set nor the defaults know.
    pub fn token(&self, name: &str) -> Option<&str> {
        match self.applied.get(name) {
            Some(value) if !value.is_empty() => Some(value),
            _ => default_value(name),
        }
    }

    pub fn current_tokens(&self) -> &FlattenedTokens {
        &self.applied
    }

    /// The brand whose tokens are live; empty when the defaults are live.
    pub fn current_brand(&self) -> &str {
        &self.current_brand
    }

    /// True if `brand_id` is the brand currently applied.
    pub fn is_applied(&self, brand_id: &str) -> bool {
        self.current_brand == brand_id
    }

    /// Overlays `partial` on the default set; values from `partial` win.
    pub fn merge_with_defaults(&self, partial: &FlattenedTokens) -> FlattenedTokens {
        default_flattened().overlay(partial)
    }

    /// CSS declarations for the live tokens of one category.
    pub fn category_css(&self, category: TokenCategory) -> String {
        css::category_css(&self.applied, category)
    }

    /// CSS declarations for an arbitrary token set.
    pub fn generate_css(&self, tokens: &FlattenedTokens) -> String {
        css::generate_css(tokens)
    }

    /// Writes component-scoped properties (`--<component>-<name>`) without
    /// validation. The applied token state is not touched.
    ///
    /// Returns the number of properties written.
    pub fn apply_component_tokens<I, K, V>(&mut self, component: &str, tokens: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if !self.surface.is_available() {
            return 0;
        }
        let mut written = 0;
        for (name, value) in tokens {
            let property = css::component_property_name(component, name.as_ref());
            self.surface.set_property(&property, value.as_ref());
            written += 1;
        }
        tracing::debug!(component, properties = written, "component tokens applied");
        written
    }

    /// Reads a custom property (`--name`) back from the surface.
    pub fn css_variable(&self, property: &str) -> Option<&str> {
        self.surface.property(property)
    }
}

fn display_brand(brand_id: &str) -> &str {
    if brand_id.is_empty() {
        "default"
    } else {
        brand_id
    }
}
