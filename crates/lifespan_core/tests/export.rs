use lifespan_core::{export_csv, export_json, export_records, ExportFormat, RawPersonRecord};

fn sample() -> Vec<RawPersonRecord> {
    vec![
        RawPersonRecord::new("Albert Einstein", "1879-03-14", "1955-04-18"),
        RawPersonRecord::living("Doe, Jane", "1970-00-00"),
    ]
}

#[test]
fn csv_has_header_and_one_row_per_record() {
    let csv = export_csv(&sample()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "name,birth,death",
            "Albert Einstein,1879-03-14,1955-04-18",
            "\"Doe, Jane\",1970-00-00,Present",
        ]
    );
}

#[test]
fn csv_of_no_records_is_just_the_header() {
    assert_eq!(export_csv(&[]).unwrap(), "name,birth,death\n");
}

#[test]
fn json_is_two_space_indented_array() {
    let json = export_json(&sample()).unwrap();
    assert!(json.starts_with("[\n  {\n    \"name\": \"Albert Einstein\","));

    let decoded: Vec<RawPersonRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, sample());
}

#[test]
fn export_records_dispatches_on_format() {
    let records = sample();
    assert_eq!(
        export_records(&records, ExportFormat::Csv).unwrap(),
        export_csv(&records).unwrap()
    );
    assert_eq!(
        export_records(&records, ExportFormat::Json).unwrap(),
        export_json(&records).unwrap()
    );
    assert_eq!(ExportFormat::Csv.file_name(), "timeline_data.csv");
    assert_eq!(ExportFormat::Json.mime_type(), "application/json");
}
