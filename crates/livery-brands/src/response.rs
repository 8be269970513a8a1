//! JSON body for brand discovery endpoints.

use serde::{Deserialize, Serialize};

use crate::source::Discovery;

/// `{"brands": [...], "count": n}`, plus `"error"` when discovery failed.
///
/// ```rust
/// use livery_brands::{BrandsResponse, Discovery};
///
/// let ok = BrandsResponse::from(&Discovery::Found(vec!["chitti".into(), "pmc".into()]));
/// assert_eq!(
///     serde_json::to_string(&ok).unwrap(),
///     r#"{"brands":["chitti","pmc"],"count":2}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandsResponse {
    pub brands: Vec<String>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Discovery> for BrandsResponse {
    fn from(discovery: &Discovery) -> Self {
        let brands = discovery.brands().to_vec();
        Self {
            count: brands.len(),
            brands,
            error: discovery.error(),
        }
    }
}
