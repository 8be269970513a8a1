//! # Livery Brands - Brand Discovery and Loading
//!
//! Brands are plain data: a directory per brand holding a `config.yaml`
//! (or `.yml` / `.json`) that names the brand, its navigation, and its
//! [`BrandTheme`](livery_tokens::BrandTheme).
//!
//! - [`BrandId`]: validated identifier; path-like ids are rejected before I/O
//! - [`BrandSource`]: where configs come from ([`DirectorySource`],
//!   [`StaticSource`])
//! - [`BrandRegistry`]: per-id config cache plus a refreshable discovery cache
//! - [`Discovery`] / [`BrandsResponse`]: fail-soft brand listing and its JSON
//!   shape
//!
//! ```rust,no_run
//! use livery_brands::{BrandRegistry, DirectorySource};
//!
//! let mut registry = BrandRegistry::new(DirectorySource::new("brands"));
//! for id in registry.brands(false).to_vec() {
//!     let config = registry.load(&id)?;
//!     println!("{}: {}", id, config.name);
//! }
//! # Ok::<(), livery_brands::BrandError>(())
//! ```

mod config;
mod error;
pub mod file_loader;
mod id;
mod registry;
mod response;
mod source;

pub use config::{default_logo_path, BrandConfig, BrandInfo, CallToAction, NavLink};
pub use error::{BrandError, Result};
pub use file_loader::{DocumentFormat, LoadError};
pub use id::BrandId;
pub use registry::BrandRegistry;
pub use response::BrandsResponse;
pub use source::{BrandSource, Discovery, DirectorySource, StaticSource, CONFIG_STEM};
