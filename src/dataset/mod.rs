//! Dataset store for the static municipality rate document.
//!
//! The dataset is a read-only JSON asset loaded once at startup. The store
//! keeps the records in input order (statistics depend on it for stable
//! tie-breaking), indexes them by AGS for the map's tooltip lookups, and
//! records a SHA-256 fingerprint of the raw content so clients can detect
//! dataset revisions.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::{RateDocument, RateRecord};

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The dataset content is not valid JSON of the expected shape.
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Calculate the SHA-256 fingerprint of the raw dataset content.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// In-memory store over the decoded dataset.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Vec<RateRecord>,
    by_ags: HashMap<String, usize>,
    checksum: String,
}

impl DatasetStore {
    /// Decode a dataset from its raw JSON content.
    ///
    /// Decoding is permissive: absent or null numeric fields become `None`
    /// and are handled downstream by the zero-fallback policy. Duplicate
    /// AGS keys keep the last record in the lookup index while the record
    /// list itself preserves input order.
    pub fn from_json_str(content: &str) -> Result<Self, DatasetError> {
        let document: RateDocument = serde_json::from_str(content)?;
        let checksum = calculate_checksum(content);

        let mut by_ags = HashMap::with_capacity(document.municipalities.len());
        for (index, record) in document.municipalities.iter().enumerate() {
            by_ags.insert(record.ags.clone(), index);
        }

        Ok(Self {
            records: document.municipalities,
            by_ags,
            checksum,
        })
    }

    /// Load a dataset from a JSON file on disk.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| DatasetError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// All records in input order.
    pub fn records(&self) -> &[RateRecord] {
        &self.records
    }

    /// Look up one record by its AGS.
    pub fn get(&self, ags: &str) -> Option<&RateRecord> {
        self.by_ags.get(ags).map(|&index| &self.records[index])
    }

    /// Sorted, deduplicated list of all Kreis names in the dataset.
    pub fn kreis_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| r.kreis.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// SHA-256 fingerprint of the raw dataset content.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}
