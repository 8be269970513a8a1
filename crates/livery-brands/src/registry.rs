//! Cached access to brand configurations.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::{BrandConfig, BrandInfo};
use crate::error::BrandError;
use crate::id::BrandId;
use crate::source::{BrandSource, Discovery};

/// Caches loaded configurations and the discovery result for its lifetime.
///
/// Configurations are cached per id on first load and never re-read. The
/// discovery result (including a failed one) is cached until a caller asks
/// for a refresh.
///
/// ```rust
/// use livery_brands::{BrandRegistry, DocumentFormat, StaticSource};
///
/// let source = StaticSource::new()
///     .with_document("id: pmc\nname: PMC\ntheme: {}\n", DocumentFormat::Yaml)
///     .unwrap();
/// let mut registry = BrandRegistry::new(source);
///
/// assert!(registry.exists("pmc"));
/// assert_eq!(registry.load("pmc").unwrap().name, "PMC");
/// assert_eq!(registry.info("pmc").unwrap().logo, "/brands/pmc/assets/logo.svg");
/// ```
#[derive(Debug)]
pub struct BrandRegistry<S> {
    source: S,
    configs: HashMap<BrandId, BrandConfig>,
    discovery: Option<Discovery>,
}

impl<S: BrandSource> BrandRegistry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            configs: HashMap::new(),
            discovery: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs discovery, or returns the cached result.
    pub fn discover(&mut self, force_refresh: bool) -> &Discovery {
        if force_refresh {
            self.discovery = None;
        } else if self.discovery.is_some() {
            tracing::debug!("Using cached brand discovery");
        }
        self.discovery.get_or_insert_with(|| self.source.discover())
    }

    /// Available brand ids; empty when discovery failed.
    pub fn brands(&mut self, force_refresh: bool) -> &[String] {
        self.discover(force_refresh).brands()
    }

    /// Loads a brand, validating the id before touching the source.
    pub fn load(&mut self, id: &str) -> Result<&BrandConfig, BrandError> {
        let id = BrandId::parse(id)?;
        match self.configs.entry(id) {
            Entry::Occupied(entry) => {
                tracing::debug!("Brand \"{}\" served from cache", entry.key());
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let config = self.source.load(entry.key()).map_err(|e| {
                    tracing::error!(
                        "Failed to load brand configuration for \"{}\": {}",
                        entry.key(),
                        e
                    );
                    e
                })?;
                tracing::debug!("Loaded brand \"{}\"", entry.key());
                Ok(entry.insert(config))
            }
        }
    }

    /// Whether discovery lists `id`.
    pub fn exists(&mut self, id: &str) -> bool {
        self.brands(false).iter().any(|brand| brand == id)
    }

    /// Display summary for one brand.
    pub fn info(&mut self, id: &str) -> Result<BrandInfo, BrandError> {
        self.load(id).map(BrandConfig::info)
    }

    /// Display summaries for every discovered brand, in discovery order.
    ///
    /// Fails on the first brand that cannot be loaded.
    pub fn all_info(&mut self, force_refresh: bool) -> Result<Vec<BrandInfo>, BrandError> {
        let ids = self.brands(force_refresh).to_vec();
        ids.iter().map(|id| self.info(id)).collect()
    }

    /// A previously loaded config, without loading.
    pub fn cached(&self, id: &str) -> Option<&BrandConfig> {
        let id = BrandId::parse(id).ok()?;
        self.configs.get(&id)
    }

    /// Forgets loaded configs and the discovery result.
    pub fn clear_cache(&mut self) {
        self.configs.clear();
        self.discovery = None;
    }
}
