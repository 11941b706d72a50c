//! Display formatting for Hebesatz values.

/// Format a rate for display, e.g. `350 v.H.`.
pub fn format_rate(rate: f64) -> String {
    format!("{} v.H.", rate)
}

/// Format a comparison to the global average.
///
/// Zero reads as "Durchschnitt", positive deltas carry an explicit sign.
pub fn format_comparison(comparison: f64) -> String {
    if comparison == 0.0 {
        return "Durchschnitt".to_string();
    }
    if comparison > 0.0 {
        format!("+{} v.H.", comparison)
    } else {
        format!("{} v.H.", comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate_integral() {
        assert_eq!(format_rate(350.0), "350 v.H.");
    }

    #[test]
    fn test_format_rate_fractional() {
        assert_eq!(format_rate(450.5), "450.5 v.H.");
    }

    #[test]
    fn test_format_comparison_average() {
        assert_eq!(format_comparison(0.0), "Durchschnitt");
    }

    #[test]
    fn test_format_comparison_signed() {
        assert_eq!(format_comparison(12.0), "+12 v.H.");
        assert_eq!(format_comparison(-7.0), "-7 v.H.");
    }
}
