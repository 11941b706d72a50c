use std::io::Write;

use grundatlas::dataset::{DatasetError, DatasetStore};

const FIXTURE: &str = r#"{
    "municipalities": [
        {"ags": "05554004", "name": "Ahaus", "kreis": "Borken", "isDifferentiated": false, "unified": 415, "year": 2025},
        {"ags": "05554008", "name": "Bocholt", "kreis": "Borken", "isDifferentiated": true, "residential": 430, "nonResidential": 690, "year": 2025},
        {"ags": "05158004", "name": "Erkrath", "kreis": "Mettmann", "isDifferentiated": false, "unified": 720, "year": 2025}
    ]
}"#;

fn write_fixture() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_path() {
    let file = write_fixture();
    let store = DatasetStore::load_from_path(file.path()).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get("05554008").unwrap().name, "Bocholt");
    assert_eq!(store.kreis_names(), ["Borken", "Mettmann"]);
}

#[test]
fn test_checksum_stable_across_loads() {
    let file = write_fixture();
    let store1 = DatasetStore::load_from_path(file.path()).unwrap();
    let store2 = DatasetStore::load_from_path(file.path()).unwrap();

    assert_eq!(store1.checksum(), store2.checksum());
}

#[test]
fn test_load_missing_file() {
    let result = DatasetStore::load_from_path("/does/not/exist.json");
    assert!(matches!(result, Err(DatasetError::Io { .. })));
}

#[test]
fn test_load_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"municipalities\": [{]}").unwrap();

    let result = DatasetStore::load_from_path(file.path());
    assert!(matches!(result, Err(DatasetError::Parse(_))));
}

#[test]
fn test_records_preserve_input_order() {
    let file = write_fixture();
    let store = DatasetStore::load_from_path(file.path()).unwrap();

    let order: Vec<&str> = store.records().iter().map(|r| r.ags.as_str()).collect();
    assert_eq!(order, ["05554004", "05554008", "05158004"]);
}
