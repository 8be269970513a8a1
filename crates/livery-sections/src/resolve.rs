//! Resolving a brand's final section list.

use std::collections::HashSet;

use livery_brands::BrandId;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SectionError;
use crate::merge::{deep_merge, is_visible};
use crate::section::SectionConfig;
use crate::source::SectionSource;

/// Outcome of [`resolve`].
///
/// Failures never propagate to the caller as errors; they produce an empty
/// list that is still distinguishable from a brand that legitimately shows
/// no sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SectionResolution {
    Resolved(Vec<SectionConfig>),
    Failed { reason: String },
}

impl SectionResolution {
    /// The resolved sections; empty on failure.
    pub fn sections(&self) -> &[SectionConfig] {
        match self {
            SectionResolution::Resolved(sections) => sections,
            SectionResolution::Failed { .. } => &[],
        }
    }

    pub fn into_sections(self) -> Vec<SectionConfig> {
        match self {
            SectionResolution::Resolved(sections) => sections,
            SectionResolution::Failed { .. } => Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, SectionResolution::Resolved(_))
    }
}

/// Builds the ordered, visible section list for `brand`.
///
/// Every baseline section with an override is deep-merged with it, kept only
/// when both the baseline and the override mark it visible, then the result
/// is sorted by `order` (stable, so ties keep baseline order).
pub fn resolve<S: SectionSource + ?Sized>(source: &S, brand: &str) -> SectionResolution {
    match try_resolve(source, brand) {
        Ok(sections) => {
            tracing::debug!(
                "Final sections for brand \"{}\": {:?}",
                brand,
                sections.iter().map(|s| (&s.id, s.order)).collect::<Vec<_>>()
            );
            SectionResolution::Resolved(sections)
        }
        Err(e) => {
            tracing::error!("Failed to load sections configuration for brand \"{}\": {}", brand, e);
            SectionResolution::Failed {
                reason: e.to_string(),
            }
        }
    }
}

/// Like [`resolve`], but returns the underlying error.
pub fn try_resolve<S: SectionSource + ?Sized>(
    source: &S,
    brand: &str,
) -> Result<Vec<SectionConfig>, SectionError> {
    let brand = BrandId::parse(brand)?;
    let baseline = source.shared()?;
    let overrides = source.overrides(&brand)?;

    let mut seen = HashSet::new();
    for section in &baseline {
        if !seen.insert(section.id.as_str()) {
            return Err(SectionError::DuplicateId(section.id.clone()));
        }
    }
    for id in overrides.keys() {
        if !seen.contains(id.as_str()) {
            tracing::debug!("Ignoring override for unknown section \"{}\"", id);
        }
    }

    let mut resolved = Vec::new();
    for base in baseline {
        let Some(partial) = overrides.get(&base.id) else {
            continue;
        };
        let override_visible = override_visibility(&base.id, partial)?;
        if !is_visible(true, base.visible, override_visible) {
            continue;
        }
        resolved.push(apply_override(base, partial)?);
    }

    resolved.sort_by_key(|section| section.order);
    Ok(resolved)
}

fn override_visibility(id: &str, partial: &Value) -> Result<Option<bool>, SectionError> {
    let Value::Object(fields) = partial else {
        return Err(SectionError::InvalidOverride {
            id: id.to_string(),
            message: "override must be an object".to_string(),
        });
    };
    match fields.get("visible") {
        None => Ok(None),
        Some(Value::Bool(visible)) => Ok(Some(*visible)),
        Some(other) => Err(SectionError::InvalidOverride {
            id: id.to_string(),
            message: format!("visible must be a boolean, got {}", other),
        }),
    }
}

fn apply_override(base: SectionConfig, partial: &Value) -> Result<SectionConfig, SectionError> {
    let id = base.id.clone();
    let invalid = |e: serde_json::Error| SectionError::InvalidOverride {
        id: id.clone(),
        message: e.to_string(),
    };

    let mut merged = serde_json::to_value(base).map_err(invalid)?;
    deep_merge(&mut merged, partial);

    // An override of `content: null` clears the content.
    if let Some(content) = merged.get_mut("content") {
        if content.is_null() {
            *content = Value::Object(Map::new());
        }
    }
    serde_json::from_value(merged).map_err(invalid)
}
