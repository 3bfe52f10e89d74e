use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::enrichment::{CatalogError, CatalogSource};
use crate::models::{CatalogProduct, CatalogResponse};

const DEFAULT_URL: &str = "https://dummyjson.com/products?limit=100";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Product catalog backed by the dummyjson listing endpoint.
pub struct DummyJsonCatalog {
    client: Client,
    url: String,
}

impl DummyJsonCatalog {
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_url(DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self, CatalogError> {
        Ok(Self {
            client: Client::builder().timeout(FETCH_TIMEOUT).build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for DummyJsonCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let listing: CatalogResponse = serde_json::from_slice(&body)?;

        info!("Fetched {} products from {}", listing.products.len(), self.url);

        Ok(listing.products)
    }
}
