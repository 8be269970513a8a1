//! The operations behind each command, independent of argument parsing.

use anyhow::{bail, Context, Result};
use livery_brands::{BrandConfig, BrandRegistry, BrandsResponse, DirectorySource};
use livery_sections::{resolve, DirectorySectionSource, SectionResolution};
use livery_tokens::{
    css, ApplyOutcome, RootStyle, StyleSurface, TokenCategory, TokenEngine, ValidationReport,
};

use crate::config::AppConfig;

/// Brand registry and section source wired from one [`AppConfig`].
#[derive(Debug)]
pub struct Livery {
    brands: BrandRegistry<DirectorySource>,
    sections: DirectorySectionSource,
}

impl Livery {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            brands: BrandRegistry::new(DirectorySource::new(&config.paths.brands_dir)),
            sections: DirectorySectionSource::new(
                &config.paths.shared_sections,
                &config.paths.brands_dir,
            ),
        }
    }

    pub fn registry(&mut self) -> &mut BrandRegistry<DirectorySource> {
        &mut self.brands
    }

    /// Discovery result in its JSON response shape.
    pub fn brands(&mut self, refresh: bool) -> BrandsResponse {
        BrandsResponse::from(self.brands.discover(refresh))
    }

    /// The brand's tokens as a `:root` stylesheet, optionally one category.
    pub fn css(&mut self, brand: &str, category: Option<TokenCategory>) -> Result<String> {
        let mut engine = TokenEngine::with_surface(RootStyle::new());
        self.apply(&mut engine, brand)?;

        Ok(match category {
            Some(category) => css::root_block(&engine.current_tokens().in_category(category)),
            None => engine.surface().to_css(),
        })
    }

    /// Validates the brand's token tree without applying it.
    pub fn validate(&mut self, brand: &str) -> Result<ValidationReport> {
        let engine = TokenEngine::new();
        let config = self.load(brand)?;
        let tokens = engine.flatten_brand_tokens(&config.theme);
        Ok(engine.validator().validate(&tokens))
    }

    /// One live token value, after applying `brand` if given.
    pub fn token(&mut self, name: &str, brand: Option<&str>) -> Result<Option<String>> {
        let mut engine = TokenEngine::new();
        if let Some(brand) = brand {
            self.apply(&mut engine, brand)?;
        }
        Ok(engine.token(name).map(str::to_string))
    }

    /// The brand's resolved section list.
    pub fn sections(&self, brand: &str) -> SectionResolution {
        resolve(&self.sections, brand)
    }

    fn load(&mut self, brand: &str) -> Result<&BrandConfig> {
        self.brands
            .load(brand)
            .with_context(|| format!("failed to load brand \"{}\"", brand))
    }

    fn apply<S: StyleSurface>(
        &mut self,
        engine: &mut TokenEngine<S>,
        brand: &str,
    ) -> Result<()> {
        let config = self.load(brand)?;
        if let ApplyOutcome::Rejected(report) = engine.apply_tokens(&config.theme, brand) {
            bail!(
                "brand \"{}\" has invalid tokens: {}",
                brand,
                report.errors().join(", ")
            );
        }
        Ok(())
    }
}
