//! Section configuration types and their document shapes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The kind of page section a configuration renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Features,
    Cta,
    Footer,
    Faq,
    About,
    Services,
    Testimonials,
    Highlights,
    Partners,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Features => "features",
            SectionKind::Cta => "cta",
            SectionKind::Footer => "footer",
            SectionKind::Faq => "faq",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Highlights => "highlights",
            SectionKind::Partners => "partners",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page section.
///
/// `content` is free-form and interpreted by whatever renders the section;
/// `styles` holds optional per-section style overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub visible: bool,
    pub order: i64,
    #[serde(default)]
    pub content: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<BTreeMap<String, String>>,
}

impl SectionConfig {
    pub fn new(id: impl Into<String>, kind: SectionKind, order: i64) -> Self {
        Self {
            id: id.into(),
            kind,
            visible: true,
            order,
            content: Map::new(),
            styles: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content.insert(key.into(), value.into());
        self
    }
}

/// The shared baseline document: `{ "defaultSections": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedSections {
    #[serde(rename = "defaultSections")]
    pub default_sections: Vec<SectionConfig>,
}

/// A brand's override document: `{ "overrides": { "<id>": {...} } }`.
///
/// Each override is a partial section kept as raw JSON so that only the
/// fields it names take part in the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandOverrides {
    #[serde(default)]
    pub overrides: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_uses_type_key() {
        let section: SectionConfig = serde_json::from_value(serde_json::json!({
            "id": "hero",
            "type": "hero",
            "visible": true,
            "order": 1,
            "content": { "title": "Welcome" }
        }))
        .unwrap();
        assert_eq!(section.kind, SectionKind::Hero);
        assert_eq!(section.content["title"], "Welcome");
        assert!(section.styles.is_none());

        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "hero");
        assert!(json.get("styles").is_none());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = serde_json::from_value::<SectionConfig>(serde_json::json!({
            "id": "x", "type": "carousel", "visible": true, "order": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_shared_document_shape() {
        let doc: SharedSections = serde_yaml::from_str(
            "defaultSections:\n  - id: faq\n    type: faq\n    visible: false\n    order: 3\n",
        )
        .unwrap();
        assert_eq!(doc.default_sections, vec![SectionConfig::new("faq", SectionKind::Faq, 3).hidden()]);
    }

    #[test]
    fn test_overrides_default_to_empty() {
        let doc: BrandOverrides = serde_yaml::from_str("{}").unwrap();
        assert!(doc.overrides.is_empty());
    }
}
