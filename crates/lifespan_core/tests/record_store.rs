use lifespan_core::{JsonFileStore, MemoryRecordStore, RawPersonRecord, RecordStore, StoreError};
use std::fs;

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn blank_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.json");
    fs::write(&path, "  \n").unwrap();
    assert!(JsonFileStore::new(&path).load().unwrap().is_empty());
}

#[test]
fn save_then_load_preserves_order_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("timeline_data.json"));
    let records = vec![
        RawPersonRecord::new("Isaac Newton", "1643-01-04", "1727-03-31"),
        RawPersonRecord::living("Jane Goodall", "1934-04-03"),
    ];

    store.save(&records).unwrap();
    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn saved_file_is_an_indented_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline_data.json");
    let store = JsonFileStore::new(&path);
    store
        .save(&[RawPersonRecord::new("Ada Lovelace", "1815-12-10", "1852-11-27")])
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("[\n  {\n    \"name\": \"Ada Lovelace\""));
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value[0]["death"], "1852-11-27");
}

#[test]
fn legacy_records_with_nulls_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"[{"name": "Someone", "birth": "1900-00-00", "death": null}, {"birth": "1800"}]"#,
    )
    .unwrap();

    let records = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].death, "");
    assert_eq!(records[1].name, "");
}

#[test]
fn non_text_dates_do_not_hide_other_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.json");
    fs::write(
        &path,
        r#"[
            {"name": "Good", "birth": "1900-01-01", "death": "present"},
            {"name": "Odd", "birth": 1879, "death": "1955-04-18"}
        ]"#,
    )
    .unwrap();

    let records = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], RawPersonRecord::new("Good", "1900-01-01", "present"));
    assert_eq!(records[1].birth, "1879 (not text)");
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    fs::write(&path, "{not json").unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
}

#[test]
fn memory_store_replaces_contents_on_save() {
    let store = MemoryRecordStore::with_records(vec![RawPersonRecord::living("Old", "1950")]);
    store
        .save(&[RawPersonRecord::living("New", "1960")])
        .unwrap();
    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "New");
}
