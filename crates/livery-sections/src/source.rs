//! Where section documents come from.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use livery_brands::file_loader::{find_document, read_document};
use livery_brands::BrandId;
use serde_json::{Map, Value};

use crate::error::SectionError;
use crate::section::{BrandOverrides, SectionConfig, SharedSections};

/// File stem of a brand's override document.
pub const OVERRIDES_STEM: &str = "sections";

/// A provider of the shared baseline and per-brand overrides.
pub trait SectionSource {
    /// The shared baseline, in document order.
    fn shared(&self) -> Result<Vec<SectionConfig>, SectionError>;

    /// The brand's override map; empty when the brand has none.
    fn overrides(&self, brand: &BrandId) -> Result<Map<String, Value>, SectionError>;
}

/// Reads the baseline from one file and overrides from
/// `<brands_dir>/<id>/sections.{yaml,yml,json}`.
#[derive(Debug, Clone)]
pub struct DirectorySectionSource {
    shared_path: PathBuf,
    brands_dir: PathBuf,
}

impl DirectorySectionSource {
    pub fn new(shared_path: impl Into<PathBuf>, brands_dir: impl Into<PathBuf>) -> Self {
        Self {
            shared_path: shared_path.into(),
            brands_dir: brands_dir.into(),
        }
    }

    pub fn shared_path(&self) -> &Path {
        &self.shared_path
    }

    /// The baseline file to read. When the configured path does not exist, a
    /// sibling with the same stem and another recognized extension is used.
    fn locate_shared(&self) -> Option<PathBuf> {
        if self.shared_path.is_file() {
            return Some(self.shared_path.clone());
        }
        let dir = self.shared_path.parent().unwrap_or(Path::new("."));
        let stem = self.shared_path.file_stem()?.to_str()?;
        find_document(dir, stem)
    }
}

impl SectionSource for DirectorySectionSource {
    fn shared(&self) -> Result<Vec<SectionConfig>, SectionError> {
        let path = self
            .locate_shared()
            .ok_or_else(|| SectionError::MissingBaseline(self.shared_path.clone()))?;
        let doc: SharedSections = read_document(&path)?;
        Ok(doc.default_sections)
    }

    fn overrides(&self, brand: &BrandId) -> Result<Map<String, Value>, SectionError> {
        let dir = self.brands_dir.join(brand.as_str());
        match find_document(&dir, OVERRIDES_STEM) {
            Some(path) => {
                let doc: BrandOverrides = read_document(&path)?;
                Ok(doc.overrides)
            }
            None => {
                tracing::debug!("No sections overrides found for brand \"{}\"", brand);
                Ok(Map::new())
            }
        }
    }
}

/// Baseline and overrides held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSectionSource {
    shared: Vec<SectionConfig>,
    overrides: BTreeMap<BrandId, Map<String, Value>>,
}

impl StaticSectionSource {
    pub fn new(shared: Vec<SectionConfig>) -> Self {
        Self {
            shared,
            overrides: BTreeMap::new(),
        }
    }

    /// Adds one override object for `section` under `brand`.
    pub fn with_override(mut self, brand: BrandId, section: &str, partial: Value) -> Self {
        self.overrides
            .entry(brand)
            .or_default()
            .insert(section.to_string(), partial);
        self
    }
}

impl SectionSource for StaticSectionSource {
    fn shared(&self) -> Result<Vec<SectionConfig>, SectionError> {
        Ok(self.shared.clone())
    }

    fn overrides(&self, brand: &BrandId) -> Result<Map<String, Value>, SectionError> {
        Ok(self.overrides.get(brand).cloned().unwrap_or_default())
    }
}
