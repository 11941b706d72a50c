//! Display-rate normalization and the global statistics engine.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::helpers::{mean, median_sorted, percentile_sorted};
use crate::models::RateRecord;

/// Aggregate statistics over a collection of rate records.
///
/// `average`, `median` (for even-length input), `q1` and `q3` are rounded
/// to the nearest integer; `min` and `max` are the raw ends of the sorted
/// display-rate sequence. An empty input collection yields the all-zero
/// sentinel rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Total number of municipalities.
    pub total_municipalities: usize,
    /// Number using differentiated rates.
    pub differentiated_count: usize,
    /// Number using unified rates.
    pub unified_count: usize,
    /// Average Hebesatz across all municipalities, rounded.
    pub average: f64,
    /// Median Hebesatz.
    pub median: f64,
    /// Minimum Hebesatz.
    pub min: f64,
    /// Maximum Hebesatz.
    pub max: f64,
    /// 25th percentile.
    pub q1: f64,
    /// 75th percentile.
    pub q3: f64,
}

/// Reduce a rate record to one comparable display rate.
///
/// Differentiated records with both sub-rates present and non-zero yield
/// the arithmetic mean of the two; everything else falls back to the
/// unified rate, or `0` when that is absent too. Degenerate records never
/// produce an error.
pub fn display_rate(record: &RateRecord) -> f64 {
    if record.is_differentiated {
        if let (Some(residential), Some(non_residential)) =
            (record.residential, record.non_residential)
        {
            if residential != 0.0 && non_residential != 0.0 {
                return (residential + non_residential) / 2.0;
            }
        }
    }
    record.unified.unwrap_or(0.0)
}

/// Compute aggregate statistics over a collection of rate records.
///
/// Every order-dependent statistic is taken over the ascending-sorted
/// display rates. An empty collection yields [`Statistics::default`].
pub fn compute_statistics(records: &[RateRecord]) -> Statistics {
    if records.is_empty() {
        return Statistics::default();
    }

    let mut display_rates: Vec<f64> = records.iter().map(display_rate).collect();
    display_rates.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let differentiated_count = records.iter().filter(|r| r.is_differentiated).count();

    // Even-length medians are a synthetic midpoint and get rounded;
    // odd-length medians are observed values and pass through.
    let median = {
        let raw = median_sorted(&display_rates);
        if display_rates.len() % 2 == 0 {
            raw.round()
        } else {
            raw
        }
    };

    Statistics {
        total_municipalities: records.len(),
        differentiated_count,
        unified_count: records.len() - differentiated_count,
        average: mean(&display_rates).round(),
        median,
        min: display_rates[0],
        max: display_rates[display_rates.len() - 1],
        q1: percentile_sorted(&display_rates, 25.0).round(),
        q3: percentile_sorted(&display_rates, 75.0).round(),
    }
}
