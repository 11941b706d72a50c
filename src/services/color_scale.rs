//! Color scale derivation and rate band classification for the map layer.

use serde::{Deserialize, Serialize};

use super::stats::Statistics;

/// Color scale breakpoints for map visualization.
///
/// A direct field copy of a [`Statistics`] snapshot; no recomputation and
/// no validation that the breakpoints are strictly increasing (a degenerate
/// distribution may tie them).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScale {
    /// Very low rates (min).
    pub very_low: f64,
    /// Low rates (q1).
    pub low: f64,
    /// Medium rates (median).
    pub medium: f64,
    /// High rates (q3).
    pub high: f64,
    /// Very high rates (max) - anything above this is off the scale.
    pub very_high: f64,
}

/// Generate color scale breakpoints from a statistics snapshot.
pub fn color_scale(stats: &Statistics) -> ColorScale {
    ColorScale {
        very_low: stats.min,
        low: stats.q1,
        medium: stats.median,
        high: stats.q3,
        very_high: stats.max,
    }
}

/// The five severity bands a rate can fall into.
///
/// Bands and colors are a closed enumeration; a rate exactly equal to a
/// breakpoint classifies into the lower band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RateBand {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RateBand {
    /// All bands in ascending severity order.
    pub const ALL: [RateBand; 5] = [
        RateBand::VeryLow,
        RateBand::Low,
        RateBand::Medium,
        RateBand::High,
        RateBand::VeryHigh,
    ];

    /// Classify a rate against a color scale.
    pub fn classify(rate: f64, scale: &ColorScale) -> Self {
        if rate <= scale.low {
            RateBand::VeryLow
        } else if rate <= scale.medium {
            RateBand::Low
        } else if rate <= scale.high {
            RateBand::Medium
        } else if rate <= scale.very_high {
            RateBand::High
        } else {
            RateBand::VeryHigh
        }
    }

    /// Fixed display color for the band.
    pub const fn hex(self) -> &'static str {
        match self {
            RateBand::VeryLow => "#22c55e",  // green-500
            RateBand::Low => "#84cc16",      // lime-500
            RateBand::Medium => "#eab308",   // yellow-500
            RateBand::High => "#f97316",     // orange-500
            RateBand::VeryHigh => "#ef4444", // red-500
        }
    }

    /// German legend label for the band.
    pub const fn label(self) -> &'static str {
        match self {
            RateBand::VeryLow => "Sehr niedrig",
            RateBand::Low => "Niedrig",
            RateBand::Medium => "Mittel",
            RateBand::High => "Hoch",
            RateBand::VeryHigh => "Sehr hoch",
        }
    }

    /// Upper bound of the band on the given scale, `None` for the open
    /// top band.
    pub fn upper_bound(self, scale: &ColorScale) -> Option<f64> {
        match self {
            RateBand::VeryLow => Some(scale.low),
            RateBand::Low => Some(scale.medium),
            RateBand::Medium => Some(scale.high),
            RateBand::High => Some(scale.very_high),
            RateBand::VeryHigh => None,
        }
    }
}
