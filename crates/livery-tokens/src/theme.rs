//! Brand theme: layout, assets, and the token tree a brand ships.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::TokenSchema;

/// Page layout variant a brand renders with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    Modern,
    Minimal,
    Bold,
}

/// Named image and icon paths for a brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandAssets {
    pub logo: String,
    pub favicon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<BTreeMap<String, String>>,
}

/// A brand's visual theme.
///
/// `tokens` is optional: a theme without a token tree is legal and flattens to
/// an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandTheme {
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub assets: BrandAssets,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenSchema>,
}

impl BrandTheme {
    /// Creates a default-layout theme carrying `tokens`.
    pub fn with_tokens(tokens: TokenSchema) -> Self {
        Self {
            tokens: Some(tokens),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_yaml() {
        let theme: BrandTheme = serde_yaml::from_str(
            r##"
layout: modern
assets:
  logo: /brands/pmc/assets/logo.svg
  favicon: /brands/pmc/assets/favicon.ico
  hero: /brands/pmc/assets/hero.webp
tokens:
  colors:
    color-primary: "#7c3aed"
"##,
        )
        .unwrap();

        assert_eq!(theme.layout, Layout::Modern);
        assert_eq!(theme.assets.hero.as_deref(), Some("/brands/pmc/assets/hero.webp"));
        let tokens = theme.tokens.unwrap();
        assert_eq!(tokens.colors.get("color-primary").map(String::as_str), Some("#7c3aed"));
    }

    #[test]
    fn test_theme_without_tokens() {
        let theme: BrandTheme = serde_yaml::from_str("layout: bold\n").unwrap();
        assert_eq!(theme.layout, Layout::Bold);
        assert!(theme.tokens.is_none());
    }
}
