//! Error types for brand loading.

use thiserror::Error;

use crate::file_loader::LoadError;

/// Errors that can occur when resolving or loading a brand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrandError {
    /// The id is not a simple identifier. Raised before any I/O.
    #[error("invalid brand id \"{id}\": {reason}")]
    InvalidId { id: String, reason: &'static str },

    /// No configuration entry point exists for the brand.
    #[error("brand \"{0}\" not found")]
    NotFound(String),

    /// The configuration exists but could not be read or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Result type for brand operations.
pub type Result<T> = std::result::Result<T, BrandError>;
