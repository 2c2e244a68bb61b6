use lifespan_core::{
    classify, filter_by_birth_year, parse_date_token, process, process_at, CalendarDate,
    Classification, EmptyBatch, LifeStatus, RawPersonRecord, SkipField, YearWindow,
};

fn date(token: &str) -> CalendarDate {
    parse_date_token(token).unwrap()
}

#[test]
fn classify_present_sentinel_is_alive_in_any_case() {
    for sentinel in ["present", "Present", "PRESENT", "  present  "] {
        let record = RawPersonRecord::new("Living", "1900-01-01", sentinel);
        match classify(&record) {
            Classification::Plottable(interval) => {
                assert_eq!(interval.status, LifeStatus::Alive);
                assert_eq!(interval.start, date("1900-01-01"));
                assert_eq!(interval.end, None);
            }
            other => panic!("expected alive interval for {sentinel:?}, got {other:?}"),
        }
    }
}

#[test]
fn classify_bad_birth_short_circuits_before_death() {
    let record = RawPersonRecord::new("Broken", "bad", "also bad");
    match classify(&record) {
        Classification::Skipped(reason) => {
            assert_eq!(reason.name, "Broken");
            assert_eq!(reason.field, SkipField::Birth);
            assert_eq!(reason.raw_value, "bad");
        }
        other => panic!("expected birth skip, got {other:?}"),
    }

    let record = RawPersonRecord::new("Broken", "bad", "1950-01-01");
    assert!(matches!(
        classify(&record),
        Classification::Skipped(reason) if reason.field == SkipField::Birth
    ));
}

#[test]
fn filter_keeps_births_inside_inclusive_range_in_order() {
    let records = vec![
        RawPersonRecord::new("A", "1700-01-01", "1750-01-01"),
        RawPersonRecord::new("B", "1600-01-01", "1650-01-01"),
        RawPersonRecord::new("C", "1800-01-01", "present"),
    ];
    let filtered = filter_by_birth_year(&records, 1678, 2025);
    assert_eq!(filtered.records, vec![records[0].clone(), records[2].clone()]);
    assert_eq!(filtered.unparsable_births, 0);
}

#[test]
fn filter_bounds_are_inclusive() {
    let records = vec![
        RawPersonRecord::new("Low", "1678-00-00", "1700-00-00"),
        RawPersonRecord::new("High", "2025-01-01", "present"),
    ];
    let filtered = filter_by_birth_year(&records, 1678, 2025);
    assert_eq!(filtered.records.len(), 2);
}

#[test]
fn filter_silently_drops_unreadable_births() {
    let records = vec![
        RawPersonRecord::new("Short", "187", "present"),
        RawPersonRecord::new("Word", "unknown", "present"),
        RawPersonRecord::new("Missing", "", "present"),
        RawPersonRecord::new("Fine", "1900-00-00", "present"),
    ];
    let filtered = YearWindow::full().apply(&records);
    assert_eq!(filtered.records.len(), 1);
    assert_eq!(filtered.records[0].name, "Fine");
    assert_eq!(filtered.unparsable_births, 3);
}

#[test]
fn batch_partitions_rows_and_skips_preserving_order() {
    let records = vec![
        RawPersonRecord::new("First", "1800-01-01", "1850-01-01"),
        RawPersonRecord::new("Bad", "1810-01-01", "sometime"),
        RawPersonRecord::new("Third", "1820-00-00", "present"),
    ];
    let today = date("2024-06-01");
    let batch = process_at(&records, today).unwrap();

    let names: Vec<_> = batch.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["First", "Third"]);
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].name, "Bad");
    assert_eq!(batch.skipped[0].field, SkipField::Death);
    assert_eq!(batch.rows[0].rendered_end, date("1850-01-01"));
    assert_eq!(batch.rows[1].rendered_end, today);
}

#[test]
fn empty_input_signals_no_plottable_data() {
    assert_eq!(process(&[]).unwrap_err(), EmptyBatch::NoPlottableData);
}

#[test]
fn all_invalid_input_signals_all_rows_skipped() {
    let records = vec![
        RawPersonRecord::new("X", "nope", "present"),
        RawPersonRecord::new("Y", "1900-01-01", "1999-02-30"),
    ];
    match process(&records).unwrap_err() {
        EmptyBatch::AllRowsSkipped { skipped } => {
            assert_eq!(skipped.len(), 2);
            assert_eq!(skipped[0].field, SkipField::Birth);
            assert_eq!(skipped[1].field, SkipField::Death);
        }
        other => panic!("expected AllRowsSkipped, got {other:?}"),
    }
}

#[test]
fn inverted_intervals_are_kept_as_rows() {
    let records = vec![RawPersonRecord::new("Backwards", "1900-01-01", "1850-01-01")];
    let batch = process(&records).unwrap();
    assert_eq!(batch.rows.len(), 1);
    assert!(batch.rows[0].is_inverted());
}

#[test]
fn living_people_render_until_today() {
    let records = vec![RawPersonRecord::living("Now", "1990-01-01")];
    let before = CalendarDate::today();
    let batch = process(&records).unwrap();
    let after = CalendarDate::today();
    let end = batch.rows[0].rendered_end;
    assert!(before <= end && end <= after);
    assert_eq!(batch.rows[0].status, LifeStatus::Alive);
}

#[test]
fn non_text_dates_skip_only_their_record() {
    let records: Vec<RawPersonRecord> = serde_json::from_str(
        r#"[
            {"name": "Good", "birth": "1900-01-01", "death": "present"},
            {"name": "Odd", "birth": 1879, "death": "1955-04-18"},
            {"name": "Flag", "birth": "1800-01-01", "death": true}
        ]"#,
    )
    .unwrap();

    let batch = process_at(&records, date("2024-01-01")).unwrap();
    assert_eq!(batch.rows.len(), 1);
    assert_eq!(batch.rows[0].name, "Good");

    assert_eq!(batch.skipped.len(), 2);
    assert_eq!(batch.skipped[0].name, "Odd");
    assert_eq!(batch.skipped[0].field, SkipField::Birth);
    assert_eq!(batch.skipped[0].raw_value, "1879 (not text)");
    assert_eq!(batch.skipped[1].field, SkipField::Death);
    assert_eq!(batch.skipped[1].raw_value, "true (not text)");
}
