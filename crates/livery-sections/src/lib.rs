//! # Livery Sections - Per-Brand Page Layouts
//!
//! A site's page sections are defined once in a shared baseline
//! (`defaultSections`). Each brand opts sections in through an override map
//! (`overrides`) that can also change order, content, and styles.
//!
//! Resolution is deliberately strict: a section appears only when the
//! baseline *and* the brand's override both mark it visible. A brand cannot
//! revive a section the baseline hides, and a section the brand never
//! mentions is left out.
//!
//! ```rust
//! use livery_brands::BrandId;
//! use livery_sections::{resolve, SectionConfig, SectionKind, StaticSectionSource};
//! use serde_json::json;
//!
//! let pmc = BrandId::parse("pmc").unwrap();
//! let source = StaticSectionSource::new(vec![
//!     SectionConfig::new("hero", SectionKind::Hero, 1),
//!     SectionConfig::new("faq", SectionKind::Faq, 2),
//! ])
//! .with_override(pmc, "hero", json!({"visible": true, "content": {"title": "PMC"}}));
//!
//! let sections = resolve(&source, "pmc").into_sections();
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].content["title"], "PMC");
//! ```

mod error;
mod merge;
pub mod ops;
mod resolve;
mod section;
mod source;

pub use error::SectionError;
pub use merge::{deep_merge, is_visible};
pub use resolve::{resolve, try_resolve, SectionResolution};
pub use section::{BrandOverrides, SectionConfig, SectionKind, SharedSections};
pub use source::{DirectorySectionSource, SectionSource, StaticSectionSource, OVERRIDES_STEM};
