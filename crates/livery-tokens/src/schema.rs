//! Token schema: the five token categories and the flattened projection.
//!
//! A [`TokenSchema`] groups design tokens by category. Token names are stored
//! in their final flat form (`color-primary`, `font-size-lg`), so flattening is
//! a structural un-nesting rather than a name-composition step:
//!
//! ```rust
//! use livery_tokens::{TokenCategory, TokenSchema};
//!
//! let mut schema = TokenSchema::default();
//! schema.colors.insert("color-primary".into(), "#7c3aed".into());
//! schema.spacing.insert("spacing-4".into(), "1rem".into());
//!
//! let flat = schema.flatten();
//! assert_eq!(flat.get("color-primary"), Some("#7c3aed"));
//! assert_eq!(flat.len(), 2);
//!
//! // Category membership survives flattening.
//! let colors = flat.in_category(TokenCategory::Colors);
//! assert_eq!(colors.len(), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token name → CSS value for a single category, in document order.
pub type CategoryTokens = IndexMap<String, String>;

/// The five token categories of a design-token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    Colors,
    Typography,
    Spacing,
    BorderRadius,
    Shadows,
}

impl TokenCategory {
    /// All categories in schema order.
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Colors,
        TokenCategory::Typography,
        TokenCategory::Spacing,
        TokenCategory::BorderRadius,
        TokenCategory::Shadows,
    ];

    /// The serialized category name (`borderRadius`, not `border-radius`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Typography => "typography",
            TokenCategory::Spacing => "spacing",
            TokenCategory::BorderRadius => "borderRadius",
            TokenCategory::Shadows => "shadows",
        }
    }

    /// Token-name prefixes owned by this category.
    pub fn prefixes(&self) -> &'static [&'static str] {
        match self {
            TokenCategory::Colors => &["color-"],
            TokenCategory::Typography => &["font-", "line-height-", "letter-spacing-"],
            TokenCategory::Spacing => &["spacing-"],
            TokenCategory::BorderRadius => &["radius-"],
            TokenCategory::Shadows => &["shadow-"],
        }
    }

    /// Returns true if `name` belongs to this category by prefix.
    pub fn owns(&self, name: &str) -> bool {
        self.prefixes().iter().any(|prefix| name.starts_with(prefix))
    }

    /// Finds the category a token name belongs to, if any.
    pub fn of(name: &str) -> Option<TokenCategory> {
        Self::ALL.into_iter().find(|category| category.owns(name))
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token category '{0}' (expected colors, typography, spacing, borderRadius or shadows)")]
pub struct UnknownCategory(pub String);

impl FromStr for TokenCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "colors" | "color" => Ok(TokenCategory::Colors),
            "typography" | "font" => Ok(TokenCategory::Typography),
            "spacing" => Ok(TokenCategory::Spacing),
            "borderRadius" | "border-radius" | "radius" => Ok(TokenCategory::BorderRadius),
            "shadows" | "shadow" => Ok(TokenCategory::Shadows),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A structured design-token set.
///
/// Missing categories deserialize as empty, so partial documents load fine;
/// completeness is the job of the default set, not of each brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSchema {
    #[serde(default)]
    pub colors: CategoryTokens,
    #[serde(default)]
    pub typography: CategoryTokens,
    #[serde(default)]
    pub spacing: CategoryTokens,
    #[serde(default)]
    pub border_radius: CategoryTokens,
    #[serde(default)]
    pub shadows: CategoryTokens,
}

impl TokenSchema {
    /// Returns the token map for one category.
    pub fn category(&self, category: TokenCategory) -> &CategoryTokens {
        match category {
            TokenCategory::Colors => &self.colors,
            TokenCategory::Typography => &self.typography,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::BorderRadius => &self.border_radius,
            TokenCategory::Shadows => &self.shadows,
        }
    }

    /// Mutable access to the token map for one category.
    pub fn category_mut(&mut self, category: TokenCategory) -> &mut CategoryTokens {
        match category {
            TokenCategory::Colors => &mut self.colors,
            TokenCategory::Typography => &mut self.typography,
            TokenCategory::Spacing => &mut self.spacing,
            TokenCategory::BorderRadius => &mut self.border_radius,
            TokenCategory::Shadows => &mut self.shadows,
        }
    }

    /// Iterates `(category, name, value)` across all categories in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &str, &str)> {
        TokenCategory::ALL.into_iter().flat_map(move |category| {
            self.category(category)
                .iter()
                .map(move |(name, value)| (category, name.as_str(), value.as_str()))
        })
    }

    /// Total number of tokens across all categories.
    pub fn len(&self) -> usize {
        TokenCategory::ALL
            .iter()
            .map(|category| self.category(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Un-nests every category into a single name → value mapping.
    ///
    /// When two categories carry the same token name, the later category in
    /// schema order wins.
    pub fn flatten(&self) -> FlattenedTokens {
        self.iter()
            .map(|(_, name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

/// A flat token name → value mapping, ready to become CSS custom properties.
///
/// Entries keep insertion order: flattening a schema yields category order,
/// then document order within each category. Overwriting a token keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlattenedTokens(IndexMap<String, String>);

impl FlattenedTokens {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Sets a token, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the subset of tokens owned by `category`.
    pub fn in_category(&self, category: TokenCategory) -> FlattenedTokens {
        self.iter()
            .filter(|(name, _)| category.owns(name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    /// Overlays `other` on a copy of `self`; values from `other` win per key.
    pub fn overlay(&self, other: &FlattenedTokens) -> FlattenedTokens {
        let mut merged = self.clone();
        merged.0.extend(other.0.clone());
        merged
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.0
    }

    pub fn into_map(self) -> IndexMap<String, String> {
        self.0
    }
}

impl From<IndexMap<String, String>> for FlattenedTokens {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlattenedTokens {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for FlattenedTokens {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlattenedTokens {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
