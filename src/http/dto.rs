//! Data Transfer Objects for the HTTP API.
//!
//! The core value structures (Statistics, ColorScale, KreisStatistics,
//! EnrichedMunicipality) already derive Serialize/Deserialize and are
//! re-exported as-is; the types here wrap them into list responses and
//! endpoint-specific envelopes.

use serde::{Deserialize, Serialize};

// Re-export the core value structures used directly as response bodies.
pub use crate::services::{
    ColorScale, EnrichedMunicipality, KreisStatistics, RateBand, RateGroupStats, Statistics,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Information about the loaded dataset
    pub dataset: DatasetInfo,
}

/// Summary of the loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// SHA-256 fingerprint of the raw dataset content
    pub checksum: String,
    /// Number of municipality records
    pub municipalities: usize,
}

/// Enriched municipality list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MunicipalityListResponse {
    /// Enriched records in dataset order
    pub municipalities: Vec<EnrichedMunicipality>,
    /// Total count
    pub total: usize,
}

/// Kreis name list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KreisListResponse {
    /// Sorted Kreis names
    pub kreise: Vec<String>,
    /// Total count
    pub total: usize,
}

/// Municipalities of one Kreis, sorted ascending by rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KreisMunicipalitiesResponse {
    /// The Kreis these records belong to
    pub kreis_name: String,
    /// Enriched records in ascending rate order
    pub municipalities: Vec<EnrichedMunicipality>,
    /// Total count
    pub total: usize,
}

/// One entry of the map legend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    /// The severity band
    pub band: RateBand,
    /// German display label
    pub label: String,
    /// Display color hex code
    pub color: String,
    /// Upper bound of the band, absent for the open top band
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<f64>,
}

/// Map legend response: the five bands in ascending severity order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendResponse {
    pub entries: Vec<LegendEntry>,
}
