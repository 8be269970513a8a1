//! Where brand configurations come from.
//!
//! A [`BrandSource`] answers two questions: which brands exist, and what a
//! given brand's configuration is. Two sources ship with the crate:
//!
//! - [`DirectorySource`]: one subdirectory per brand, each holding a
//!   `config.yaml` / `config.yml` / `config.json` entry point
//! - [`StaticSource`]: an in-memory table built at startup
//!
//! Adding a brand never requires touching dispatch code; it is a new
//! directory or a new table entry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::BrandConfig;
use crate::error::BrandError;
use crate::file_loader::{self, find_document, DocumentFormat, LoadError};
use crate::id::BrandId;

/// File stem of a brand's configuration entry point.
pub const CONFIG_STEM: &str = "config";

/// Result of scanning for brands.
///
/// Discovery is fail-soft: callers always get a (possibly empty) brand list,
/// but the reason for an empty list stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discovery {
    /// Brand ids found, sorted alphabetically.
    Found(Vec<String>),
    /// The brands directory does not exist.
    MissingDirectory(PathBuf),
    /// The scan itself failed.
    Failed { path: PathBuf, message: String },
}

impl Discovery {
    /// The discovered ids; empty for either failure variant.
    pub fn brands(&self) -> &[String] {
        match self {
            Discovery::Found(brands) => brands,
            _ => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Discovery::Found(_))
    }

    /// Human-readable failure reason, if any.
    pub fn error(&self) -> Option<String> {
        match self {
            Discovery::Found(_) => None,
            Discovery::MissingDirectory(_) => Some("Brands directory not found".to_string()),
            Discovery::Failed { message, .. } => {
                Some(format!("Failed to discover brands: {}", message))
            }
        }
    }
}

/// A provider of brand configurations.
pub trait BrandSource {
    /// Loads one brand's configuration.
    fn load(&self, id: &BrandId) -> Result<BrandConfig, BrandError>;

    /// Lists the brands this source can load.
    fn discover(&self) -> Discovery;
}

/// Brands stored as `<root>/<id>/config.{yaml,yml,json}`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a brand's files.
    pub fn brand_dir(&self, id: &BrandId) -> PathBuf {
        self.root.join(id.as_str())
    }

    fn scan(&self) -> Result<Vec<String>, LoadError> {
        let io_error = |e: std::io::Error| LoadError::Io {
            path: self.root.clone(),
            message: e.to_string(),
        };

        let mut brands = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if BrandId::parse(name).is_err() {
                tracing::debug!("Skipping brand directory with invalid id: {}", name);
                continue;
            }
            if find_document(&path, CONFIG_STEM).is_some() {
                brands.push(name.to_string());
            }
        }
        brands.sort();
        Ok(brands)
    }
}

impl BrandSource for DirectorySource {
    fn load(&self, id: &BrandId) -> Result<BrandConfig, BrandError> {
        let path = find_document(&self.brand_dir(id), CONFIG_STEM)
            .ok_or_else(|| BrandError::NotFound(id.to_string()))?;
        let config: BrandConfig = file_loader::read_document(&path)?;
        if &config.id != id {
            tracing::warn!(
                "Brand config at {} declares id \"{}\" but was loaded as \"{}\"",
                path.display(),
                config.id,
                id
            );
        }
        Ok(config)
    }

    fn discover(&self) -> Discovery {
        if !self.root.is_dir() {
            tracing::warn!("Brands directory not found: {}", self.root.display());
            return Discovery::MissingDirectory(self.root.clone());
        }
        match self.scan() {
            Ok(brands) => {
                tracing::debug!("Discovered {} brands in {}", brands.len(), self.root.display());
                Discovery::Found(brands)
            }
            Err(e) => {
                tracing::error!("Error discovering brands: {}", e);
                Discovery::Failed {
                    path: self.root.clone(),
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Brands registered in memory.
///
/// ```rust
/// use livery_brands::{BrandSource, StaticSource};
///
/// let source = StaticSource::new()
///     .with_document("id: acme\nname: Acme\ntheme: {}\n", livery_brands::DocumentFormat::Yaml)
///     .unwrap();
/// assert_eq!(source.discover().brands(), ["acme".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    brands: BTreeMap<BrandId, BrandConfig>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a config under its own id, replacing any previous entry.
    pub fn add(&mut self, config: BrandConfig) {
        self.brands.insert(config.id.clone(), config);
    }

    pub fn with_brand(mut self, config: BrandConfig) -> Self {
        self.add(config);
        self
    }

    /// Parses a configuration document and registers it.
    pub fn add_document(&mut self, content: &str, format: DocumentFormat) -> Result<(), LoadError> {
        let config = file_loader::parse_document(content, format, Path::new("<static>"))?;
        self.add(config);
        Ok(())
    }

    pub fn with_document(mut self, content: &str, format: DocumentFormat) -> Result<Self, LoadError> {
        self.add_document(content, format)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

impl BrandSource for StaticSource {
    fn load(&self, id: &BrandId) -> Result<BrandConfig, BrandError> {
        self.brands
            .get(id)
            .cloned()
            .ok_or_else(|| BrandError::NotFound(id.to_string()))
    }

    fn discover(&self) -> Discovery {
        Discovery::Found(self.brands.keys().map(|id| id.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn brand_doc(id: &str) -> String {
        format!("id: {id}\nname: {id}\ntheme: {{}}\n")
    }

    #[test]
    fn test_discovery_accessors() {
        let found = Discovery::Found(vec!["a".into()]);
        assert_eq!(found.brands(), ["a".to_string()]);
        assert_eq!(found.error(), None);

        let missing = Discovery::MissingDirectory(PathBuf::from("brands"));
        assert!(missing.brands().is_empty());
        assert_eq!(missing.error().as_deref(), Some("Brands directory not found"));
    }

    #[test]
    fn test_directory_discovery_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for id in ["zeta", "alpha"] {
            fs::create_dir(dir.path().join(id)).unwrap();
            fs::write(dir.path().join(id).join("config.yaml"), brand_doc(id)).unwrap();
        }
        fs::create_dir(dir.path().join("no-config")).unwrap();
        fs::create_dir(dir.path().join("legacy")).unwrap();
        fs::write(dir.path().join("legacy").join("config.ts"), "export {}").unwrap();
        fs::write(dir.path().join("stray.yaml"), "a: b").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(
            source.discover(),
            Discovery::Found(vec!["alpha".into(), "zeta".into()])
        );
    }

    #[test]
    fn test_directory_discovery_missing_root() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path().join("nope"));
        assert!(matches!(source.discover(), Discovery::MissingDirectory(_)));
    }

    #[test]
    fn test_directory_load_not_found() {
        let dir = TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path());
        let id = BrandId::parse("ghost").unwrap();
        assert_eq!(source.load(&id), Err(BrandError::NotFound("ghost".into())));
    }

    #[test]
    fn test_directory_load_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("bad")).unwrap();
        fs::write(dir.path().join("bad").join("config.json"), "{ not json").unwrap();

        let source = DirectorySource::new(dir.path());
        let id = BrandId::parse("bad").unwrap();
        assert!(matches!(
            source.load(&id),
            Err(BrandError::Load(LoadError::Parse { .. }))
        ));
    }

    #[test]
    fn test_static_source() {
        let mut source = StaticSource::new();
        source
            .add_document(&brand_doc("acme"), DocumentFormat::Yaml)
            .unwrap();
        assert_eq!(source.len(), 1);

        let id = BrandId::parse("acme").unwrap();
        assert_eq!(source.load(&id).unwrap().name, "acme");
        assert!(source.load(&BrandId::parse("other").unwrap()).is_err());
    }
}
