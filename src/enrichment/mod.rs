mod dummyjson;
mod join;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::CatalogProduct;

pub use dummyjson::DummyJsonCatalog;
pub use join::{build_catalog_mapping, match_catalog, EnrichmentSummary};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// External product-catalog collaborator.
///
/// The pipeline only ever needs the full listing in one call; where it comes
/// from is the implementation's business. Failure is an expected outcome and
/// degrades to an empty mapping at the call site, so implementations do not
/// retry.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogProduct>, CatalogError>;
}
