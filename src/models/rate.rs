//! Domain types for the raw Grundsteuer B dataset.

use serde::{Deserialize, Serialize};

/// Grundsteuer B rate information for one municipality in a given year.
///
/// A municipality either sets a single unified Hebesatz or differentiated
/// rates for residential and non-residential property, selected by
/// `is_differentiated`. The source data is not always complete, so every
/// numeric rate is optional; arithmetic treats absent values as `0` rather
/// than failing (see [`crate::services::stats::display_rate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    /// Amtlicher Gemeindeschlüssel - official municipality ID.
    pub ags: String,
    /// Municipality name.
    pub name: String,
    /// District (Kreis) name. Absent for ungrouped municipalities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kreis: Option<String>,
    /// Whether the municipality uses differentiated rates.
    pub is_differentiated: bool,
    /// Unified Grundsteuer B rate (if not differentiated), in v.H.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unified: Option<f64>,
    /// Residential properties rate (Wohngrundstücke), in v.H.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential: Option<f64>,
    /// Non-residential properties rate (Nichtwohngrundstücke), in v.H.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_residential: Option<f64>,
    /// Tax year the rate applies to.
    pub year: i32,
}

/// Top-level shape of the dataset JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateDocument {
    /// Ordered sequence of per-municipality rate records.
    pub municipalities: Vec<RateRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unified_record() {
        let json = r#"{
            "ags": "05111000",
            "name": "Düsseldorf",
            "kreis": "Düsseldorf",
            "isDifferentiated": false,
            "unified": 440,
            "year": 2025
        }"#;
        let record: RateRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.ags, "05111000");
        assert_eq!(record.name, "Düsseldorf");
        assert_eq!(record.kreis.as_deref(), Some("Düsseldorf"));
        assert!(!record.is_differentiated);
        assert_eq!(record.unified, Some(440.0));
        assert_eq!(record.residential, None);
        assert_eq!(record.non_residential, None);
        assert_eq!(record.year, 2025);
    }

    #[test]
    fn test_parse_differentiated_record() {
        let json = r#"{
            "ags": "05362004",
            "name": "Bedburg",
            "isDifferentiated": true,
            "residential": 600,
            "nonResidential": 1100,
            "year": 2025
        }"#;
        let record: RateRecord = serde_json::from_str(json).unwrap();

        assert!(record.is_differentiated);
        assert_eq!(record.kreis, None);
        assert_eq!(record.unified, None);
        assert_eq!(record.residential, Some(600.0));
        assert_eq!(record.non_residential, Some(1100.0));
    }

    #[test]
    fn test_parse_degenerate_record_tolerated() {
        // Differentiated flag set but sub-rates missing - must still decode.
        let json = r#"{
            "ags": "05000000",
            "name": "Unvollständig",
            "isDifferentiated": true,
            "year": 2025
        }"#;
        let record: RateRecord = serde_json::from_str(json).unwrap();

        assert!(record.is_differentiated);
        assert_eq!(record.residential, None);
        assert_eq!(record.non_residential, None);
        assert_eq!(record.unified, None);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let record = RateRecord {
            ags: "05111000".to_string(),
            name: "Düsseldorf".to_string(),
            kreis: None,
            is_differentiated: false,
            unified: Some(440.0),
            residential: None,
            non_residential: None,
            year: 2025,
        };
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"isDifferentiated\":false"));
        assert!(json.contains("\"unified\":440"));
        assert!(!json.contains("residential"));
        assert!(!json.contains("kreis"));
    }

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "municipalities": [
                {"ags": "1", "name": "A", "isDifferentiated": false, "unified": 300, "year": 2025},
                {"ags": "2", "name": "B", "isDifferentiated": true, "residential": 200, "nonResidential": 400, "year": 2025}
            ]
        }"#;
        let doc: RateDocument = serde_json::from_str(json).unwrap();

        assert_eq!(doc.municipalities.len(), 2);
        assert_eq!(doc.municipalities[0].ags, "1");
        assert!(doc.municipalities[1].is_differentiated);
    }
}
