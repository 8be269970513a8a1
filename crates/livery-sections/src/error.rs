//! Error types for section resolution.

use std::path::PathBuf;

use livery_brands::{BrandError, LoadError};
use thiserror::Error;

/// Errors raised while loading or merging section documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// A section document could not be read or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The shared baseline document does not exist.
    #[error("shared sections not found at \"{}\"", .0.display())]
    MissingBaseline(PathBuf),

    /// The brand id was rejected.
    #[error(transparent)]
    InvalidBrand(#[from] BrandError),

    /// Two baseline sections share an id.
    #[error("duplicate section id \"{0}\" in shared sections")]
    DuplicateId(String),

    /// An override did not produce a well-formed section.
    #[error("invalid override for section \"{id}\": {message}")]
    InvalidOverride { id: String, message: String },
}
