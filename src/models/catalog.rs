use std::collections::HashMap;

use serde::Deserialize;

use crate::types::ProductId;

/// One product from the external catalog.
///
/// Attributes are descriptive only and never participate in validation. The
/// id lives in the catalog's own namespace, which is not guaranteed to
/// overlap with the `P`-prefixed ids used by the sales export.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogProduct {
    pub id: u32,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub rating: f64,
}

/// Envelope of the catalog listing endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<CatalogProduct>,
}

/// Lookup from catalog id (rendered as a string) to its product entry.
pub type CatalogMapping = HashMap<ProductId, CatalogProduct>;
