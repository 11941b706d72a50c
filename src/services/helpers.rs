//! Shared numeric helpers for the statistics services.
//!
//! Both the global statistics engine and the Kreis aggregator go through
//! these functions so their mean/median semantics cannot drift apart. None
//! of them round: rounding is applied at the consumer's boundary where the
//! value is presented (the global engine rounds, Kreis sub-statistics do
//! not).

use std::cmp::Ordering;

/// Arithmetic mean. An empty slice yields `0.0`, not NaN.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an unsorted slice. An empty slice yields `0.0`.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    median_sorted(&sorted)
}

/// Median of an ascending-sorted slice.
///
/// Even-length input yields the unrounded midpoint of the two central
/// values; odd-length input yields the exact central value.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Percentile of an ascending-sorted slice via linear interpolation.
///
/// The fractional index is `percentile / 100 * (n - 1)`; when it falls
/// between two elements the result blends them by the fractional weight.
/// An empty slice yields `0.0`.
pub fn percentile_sorted(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = percentile / 100.0 * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = index - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn test_median_even_unrounded() {
        // Midpoint stays unrounded at this layer.
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_median_sorted_single() {
        assert_eq!(median_sorted(&[42.0]), 42.0);
    }

    #[test]
    fn test_percentile_empty() {
        assert_eq!(percentile_sorted(&[], 50.0), 0.0);
    }

    #[test]
    fn test_percentile_exact_index() {
        let sorted = [10.0, 20.0, 30.0, 40.0, 50.0];
        // index = 0.5 * 4 = 2 exactly
        assert_eq!(percentile_sorted(&sorted, 50.0), 30.0);
    }

    #[test]
    fn test_percentile_interpolated() {
        let sorted = [100.0, 200.0, 300.0, 400.0];
        // q1: index 0.75 between 100 and 200 -> 175
        assert_eq!(percentile_sorted(&sorted, 25.0), 175.0);
        // q3: index 2.25 between 300 and 400 -> 325
        assert_eq!(percentile_sorted(&sorted, 75.0), 325.0);
    }

    #[test]
    fn test_percentile_bounds() {
        let sorted = [100.0, 200.0, 300.0];
        assert_eq!(percentile_sorted(&sorted, 0.0), 100.0);
        assert_eq!(percentile_sorted(&sorted, 100.0), 300.0);
    }
}
