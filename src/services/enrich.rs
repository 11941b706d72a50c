//! Enrichment of raw rate records into view-ready municipality data.

use serde::{Deserialize, Serialize};

use super::color_scale::{ColorScale, RateBand};
use super::stats::{display_rate, Statistics};
use crate::models::RateRecord;

/// A rate record extended with everything the map layer needs: the
/// normalized display rate, its offset from the global average, and the
/// assigned color band. Built per render cycle, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedMunicipality {
    #[serde(flatten)]
    pub record: RateRecord,
    /// Display rate for color coding (average if differentiated).
    pub display_rate: f64,
    /// Difference to the global average Hebesatz.
    pub comparison_to_average: f64,
    /// Severity band on the global color scale.
    pub band: RateBand,
    /// Color hex code for visualization.
    pub color: String,
}

/// Enrich one record with statistics and display information.
pub fn enrich_municipality(
    record: &RateRecord,
    stats: &Statistics,
    scale: &ColorScale,
) -> EnrichedMunicipality {
    let display_rate = display_rate(record);
    let band = RateBand::classify(display_rate, scale);

    EnrichedMunicipality {
        record: record.clone(),
        display_rate,
        comparison_to_average: display_rate - stats.average,
        band,
        color: band.hex().to_string(),
    }
}

/// Enrich a whole record collection, preserving input order.
pub fn enrich_municipalities(
    records: &[RateRecord],
    stats: &Statistics,
    scale: &ColorScale,
) -> Vec<EnrichedMunicipality> {
    records
        .iter()
        .map(|record| enrich_municipality(record, stats, scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::color_scale::color_scale;
    use crate::services::stats::compute_statistics;

    fn unified(ags: &str, rate: f64) -> RateRecord {
        RateRecord {
            ags: ags.to_string(),
            name: format!("Gemeinde {}", ags),
            kreis: None,
            is_differentiated: false,
            unified: Some(rate),
            residential: None,
            non_residential: None,
            year: 2025,
        }
    }

    fn differentiated(ags: &str, residential: f64, non_residential: f64) -> RateRecord {
        RateRecord {
            ags: ags.to_string(),
            name: format!("Gemeinde {}", ags),
            kreis: None,
            is_differentiated: true,
            unified: None,
            residential: Some(residential),
            non_residential: Some(non_residential),
            year: 2025,
        }
    }

    #[test]
    fn test_enrich_comparison_to_average() {
        // Both records normalize to 300, so both sit exactly on the average.
        let records = vec![unified("A", 300.0), differentiated("B", 200.0, 400.0)];
        let stats = compute_statistics(&records);
        let scale = color_scale(&stats);
        let enriched = enrich_municipalities(&records, &stats, &scale);

        assert_eq!(stats.average, 300.0);
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].comparison_to_average, 0.0);
        assert_eq!(enriched[1].comparison_to_average, 0.0);
    }

    #[test]
    fn test_enrich_assigns_band_and_color() {
        let records = vec![
            unified("1", 100.0),
            unified("2", 200.0),
            unified("3", 300.0),
            unified("4", 400.0),
            unified("5", 500.0),
        ];
        let stats = compute_statistics(&records);
        let scale = color_scale(&stats);
        let enriched = enrich_municipalities(&records, &stats, &scale);

        assert_eq!(enriched[0].band, RateBand::VeryLow);
        assert_eq!(enriched[0].color, "#22c55e");
        assert_eq!(enriched[4].band, RateBand::High);
        assert_eq!(enriched[4].color, "#f97316");
    }

    #[test]
    fn test_enrich_preserves_record_fields() {
        let records = vec![unified("05111000", 440.0)];
        let stats = compute_statistics(&records);
        let scale = color_scale(&stats);
        let enriched = enrich_municipality(&records[0], &stats, &scale);

        assert_eq!(enriched.record.ags, "05111000");
        assert_eq!(enriched.display_rate, 440.0);
    }

    #[test]
    fn test_enriched_serializes_flat() {
        let records = vec![unified("1", 300.0)];
        let stats = compute_statistics(&records);
        let scale = color_scale(&stats);
        let enriched = enrich_municipality(&records[0], &stats, &scale);
        let json = serde_json::to_value(&enriched).unwrap();

        // Record fields sit next to the derived ones, as the frontend expects.
        assert_eq!(json["ags"], "1");
        assert_eq!(json["displayRate"], 300.0);
        assert_eq!(json["comparisonToAverage"], 0.0);
        assert_eq!(json["color"], "#22c55e");
    }
}
