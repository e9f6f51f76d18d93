use serde::{Deserialize, Serialize};

use crate::config::PricingTier;
use crate::models::domain::Grant;

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub grants: Vec<Grant>,
    pub matched: usize,
    #[serde(rename = "totalCatalog")]
    pub total_catalog: usize,
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub grants: Vec<Grant>,
    pub count: usize,
}

/// Response for the pricing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResponse {
    pub tiers: Vec<PricingTier>,
    pub contact: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
