//! Per-Kreis (district) aggregation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::helpers::{mean, median};
use crate::models::RateRecord;

/// Four-number summary over one rate sub-distribution.
///
/// Values at this layer are unrounded; rounding is a presentation concern.
/// An empty sub-distribution yields the all-zero summary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateGroupStats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Statistics for one Kreis, split by rate regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KreisStatistics {
    pub kreis_name: String,
    pub total_municipalities: usize,
    pub differentiated_count: usize,
    pub unified_count: usize,
    /// Share of differentiated municipalities in percent, 0 when empty.
    pub differentiated_percentage: f64,
    /// Residential rates of differentiated municipalities.
    pub residential_rates: RateGroupStats,
    /// Non-residential rates of differentiated municipalities.
    pub non_residential_rates: RateGroupStats,
    /// Rates of unified municipalities.
    pub unified_rates: RateGroupStats,
    /// Mean over the combined normalized samples of all three groups.
    pub overall_average: f64,
}

fn group_stats(values: &[f64]) -> RateGroupStats {
    if values.is_empty() {
        return RateGroupStats::default();
    }
    RateGroupStats {
        mean: mean(values),
        median: median(values),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

/// Per-record comparison key for district ordering and the combined
/// overall-average sample: differentiated records contribute the mean of
/// their two sub-rates, unified records their rate, missing values as `0`.
fn sort_rate(record: &RateRecord) -> f64 {
    if record.is_differentiated {
        (record.residential.unwrap_or(0.0) + record.non_residential.unwrap_or(0.0)) / 2.0
    } else {
        record.unified.unwrap_or(0.0)
    }
}

/// Compute statistics for a specific Kreis.
///
/// Filters the full record collection down to the named Kreis and
/// partitions it by rate regime. Zero matching records yield a zero-valued
/// result, never an error.
pub fn kreis_statistics(records: &[RateRecord], kreis_name: &str) -> KreisStatistics {
    let members: Vec<&RateRecord> = records
        .iter()
        .filter(|r| r.kreis.as_deref() == Some(kreis_name))
        .collect();

    let total_municipalities = members.len();
    let differentiated: Vec<&RateRecord> = members
        .iter()
        .copied()
        .filter(|r| r.is_differentiated)
        .collect();
    let unified: Vec<&RateRecord> = members
        .iter()
        .copied()
        .filter(|r| !r.is_differentiated)
        .collect();

    let differentiated_count = differentiated.len();
    let unified_count = unified.len();
    let differentiated_percentage = if total_municipalities > 0 {
        differentiated_count as f64 / total_municipalities as f64 * 100.0
    } else {
        0.0
    };

    // Undefined entries are dropped before computing, so a Kreis where every
    // differentiated record is incomplete yields zeroed sub-statistics.
    let residential_values: Vec<f64> =
        differentiated.iter().filter_map(|r| r.residential).collect();
    let non_residential_values: Vec<f64> = differentiated
        .iter()
        .filter_map(|r| r.non_residential)
        .collect();
    let unified_values: Vec<f64> = unified.iter().filter_map(|r| r.unified).collect();

    // Combined sample list: one entry per record that has usable data.
    let mut all_rates: Vec<f64> = Vec::with_capacity(total_municipalities);
    for record in &differentiated {
        if let (Some(residential), Some(non_residential)) =
            (record.residential, record.non_residential)
        {
            all_rates.push((residential + non_residential) / 2.0);
        }
    }
    for record in &unified {
        if let Some(rate) = record.unified {
            all_rates.push(rate);
        }
    }

    KreisStatistics {
        kreis_name: kreis_name.to_string(),
        total_municipalities,
        differentiated_count,
        unified_count,
        differentiated_percentage,
        residential_rates: group_stats(&residential_values),
        non_residential_rates: group_stats(&non_residential_values),
        unified_rates: group_stats(&unified_values),
        overall_average: mean(&all_rates),
    }
}

/// All municipalities of a Kreis, stably sorted ascending by rate.
pub fn kreis_municipalities_sorted(records: &[RateRecord], kreis_name: &str) -> Vec<RateRecord> {
    let mut members: Vec<RateRecord> = records
        .iter()
        .filter(|r| r.kreis.as_deref() == Some(kreis_name))
        .cloned()
        .collect();

    members.sort_by(|a, b| {
        sort_rate(a)
            .partial_cmp(&sort_rate(b))
            .unwrap_or(Ordering::Equal)
    });
    members
}
