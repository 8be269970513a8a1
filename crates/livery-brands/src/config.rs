//! Brand configuration documents.

use livery_tokens::BrandTheme;
use serde::{Deserialize, Serialize};

use crate::id::BrandId;

/// A navigation entry in the brand's header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Call-to-action labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub primary: String,
    pub secondary: String,
}

/// Everything a brand declares in its `config.*` entry point.
///
/// Once loaded a config is treated as immutable; the registry hands out
/// shared references to its cached copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub theme: BrandTheme,
    #[serde(default)]
    pub navigation: Vec<NavLink>,
    #[serde(default)]
    pub cta: CallToAction,
}

impl BrandConfig {
    /// Summary used by brand pickers.
    pub fn info(&self) -> BrandInfo {
        BrandInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            logo: self
                .logo
                .clone()
                .unwrap_or_else(|| default_logo_path(self.id.as_str())),
        }
    }
}

/// Display summary of a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
}

/// Conventional logo location for brands that don't declare one.
pub fn default_logo_path(id: &str) -> String {
    format!("/brands/{}/assets/logo.svg", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use livery_tokens::Layout;

    const MINIMAL: &str = r##"
id: test-brand
name: Test Brand
theme:
  assets:
    logo: /brands/test-brand/assets/logo.svg
    favicon: /brands/test-brand/assets/favicon.ico
"##;

    #[test]
    fn test_minimal_config_defaults() {
        let config: BrandConfig = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(config.id.as_str(), "test-brand");
        assert_eq!(config.description, "");
        assert!(config.navigation.is_empty());
        assert_eq!(config.cta, CallToAction::default());
        assert_eq!(config.theme.layout, Layout::Default);
        assert!(config.theme.tokens.is_none());
    }

    #[test]
    fn test_info_falls_back_to_conventional_logo() {
        let config: BrandConfig = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(config.info().logo, "/brands/test-brand/assets/logo.svg");

        let mut with_logo = config;
        with_logo.logo = Some("/custom.svg".into());
        assert_eq!(with_logo.info().logo, "/custom.svg");
    }

    #[test]
    fn test_invalid_id_in_document_is_rejected() {
        let doc = MINIMAL.replace("id: test-brand", "id: ../escape");
        assert!(serde_yaml::from_str::<BrandConfig>(&doc).is_err());
    }
}
