//! # Livery - Multi-Brand Theming
//!
//! One site, many brands. Each brand ships a design-token tree and a set of
//! section overrides; Livery validates the tokens, projects them as CSS
//! custom properties, and resolves which page sections the brand shows.
//!
//! The work is split across three crates, re-exported here:
//!
//! - [`tokens`]: token schema, defaults, validator, and the [`TokenEngine`]
//! - [`brands`]: brand ids, discovery, loading, and caching
//! - [`sections`]: shared section baseline merged with brand overrides
//!
//! This crate adds the [`config`] and [`logging`] setup and the [`Livery`]
//! context the `livery` binary drives.

pub mod app;
pub mod config;
pub mod logging;

pub use livery_brands as brands;
pub use livery_sections as sections;
pub use livery_tokens as tokens;

pub use app::Livery;
pub use config::{AppConfig, ConfigError};
pub use livery_tokens::TokenEngine;
