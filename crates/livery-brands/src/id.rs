//! Validated brand identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrandError;

/// A brand identifier that is safe to use as a directory name.
///
/// Ids are simple slugs. Anything that looks like a path or a file name is
/// rejected up front, before a loader ever touches the filesystem:
///
/// ```rust
/// use livery_brands::BrandId;
///
/// assert!(BrandId::parse("pmc").is_ok());
/// assert!(BrandId::parse("test-brand").is_ok());
/// assert!(BrandId::parse("../etc").is_err());
/// assert!(BrandId::parse("logo.svg").is_err());
/// assert!(BrandId::parse("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandId(String);

impl BrandId {
    pub fn parse(id: &str) -> Result<Self, BrandError> {
        let reason = if id.trim().is_empty() {
            Some("brand id is empty")
        } else if id.trim() != id {
            Some("brand id must not have surrounding whitespace")
        } else if id.contains('/') || id.contains('\\') {
            Some("brand id must be a simple identifier, not a path")
        } else if id.contains('.') {
            Some("brand id must be a simple identifier, not a file name")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(BrandError::InvalidId {
                id: id.to_string(),
                reason,
            }),
            None => Ok(Self(id.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BrandId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BrandId {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BrandId {
    type Error = BrandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BrandId> for String {
    fn from(id: BrandId) -> Self {
        id.0
    }
}
