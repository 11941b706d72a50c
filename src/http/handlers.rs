//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for computation. The pipeline is pure and cheap, so the
//! derived structures are recomputed per request instead of cached.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    ColorScale, DatasetInfo, HealthResponse, KreisListResponse, KreisMunicipalitiesResponse,
    KreisStatistics, LegendEntry, LegendResponse, MunicipalityListResponse, Statistics,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{
    color_scale, compute_statistics, enrich_municipalities, enrich_municipality,
    kreis_municipalities_sorted, kreis_statistics, EnrichedMunicipality, RateBand,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the loaded dataset fingerprint.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset: DatasetInfo {
            checksum: state.store.checksum().to_string(),
            municipalities: state.store.len(),
        },
    }))
}

// =============================================================================
// Global Statistics
// =============================================================================

/// GET /v1/statistics
///
/// Global rate statistics over all municipalities.
pub async fn get_statistics(State(state): State<AppState>) -> HandlerResult<Statistics> {
    Ok(Json(compute_statistics(state.store.records())))
}

/// GET /v1/color-scale
///
/// Quartile-based color scale derived from the global statistics.
pub async fn get_color_scale(State(state): State<AppState>) -> HandlerResult<ColorScale> {
    let stats = compute_statistics(state.store.records());
    Ok(Json(color_scale(&stats)))
}

/// GET /v1/legend
///
/// The five severity bands with labels, colors, and upper bounds.
pub async fn get_legend(State(state): State<AppState>) -> HandlerResult<LegendResponse> {
    let stats = compute_statistics(state.store.records());
    let scale = color_scale(&stats);

    let entries = RateBand::ALL
        .iter()
        .map(|&band| LegendEntry {
            band,
            label: band.label().to_string(),
            color: band.hex().to_string(),
            max_rate: band.upper_bound(&scale),
        })
        .collect();

    Ok(Json(LegendResponse { entries }))
}

// =============================================================================
// Municipalities
// =============================================================================

/// GET /v1/municipalities
///
/// All municipalities enriched with display rate, comparison to average,
/// and assigned color.
pub async fn list_municipalities(
    State(state): State<AppState>,
) -> HandlerResult<MunicipalityListResponse> {
    let records = state.store.records();
    let stats = compute_statistics(records);
    let scale = color_scale(&stats);
    let municipalities = enrich_municipalities(records, &stats, &scale);
    let total = municipalities.len();

    Ok(Json(MunicipalityListResponse {
        municipalities,
        total,
    }))
}

/// GET /v1/municipalities/{ags}
///
/// One enriched municipality looked up by its AGS.
pub async fn get_municipality(
    State(state): State<AppState>,
    Path(ags): Path<String>,
) -> HandlerResult<EnrichedMunicipality> {
    let record = state
        .store
        .get(&ags)
        .ok_or_else(|| AppError::NotFound(format!("No municipality with AGS {}", ags)))?;

    let stats = compute_statistics(state.store.records());
    let scale = color_scale(&stats);
    Ok(Json(enrich_municipality(record, &stats, &scale)))
}

// =============================================================================
// Kreis Analysis
// =============================================================================

/// GET /v1/kreise
///
/// Sorted list of all Kreis names in the dataset.
pub async fn list_kreise(State(state): State<AppState>) -> HandlerResult<KreisListResponse> {
    let kreise = state.store.kreis_names();
    let total = kreise.len();

    Ok(Json(KreisListResponse { kreise, total }))
}

/// GET /v1/kreise/{name}/statistics
///
/// Per-Kreis statistics. An unknown Kreis yields the zero-valued result,
/// matching the core's "zero, not error" contract for empty aggregates.
pub async fn get_kreis_statistics(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<KreisStatistics> {
    Ok(Json(kreis_statistics(state.store.records(), &name)))
}

/// GET /v1/kreise/{name}/municipalities
///
/// Municipalities of one Kreis, enriched and sorted ascending by rate.
pub async fn get_kreis_municipalities(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<KreisMunicipalitiesResponse> {
    let records = state.store.records();
    let stats = compute_statistics(records);
    let scale = color_scale(&stats);

    let sorted = kreis_municipalities_sorted(records, &name);
    let municipalities = enrich_municipalities(&sorted, &stats, &scale);
    let total = municipalities.len();

    Ok(Json(KreisMunicipalitiesResponse {
        kreis_name: name,
        municipalities,
        total,
    }))
}
