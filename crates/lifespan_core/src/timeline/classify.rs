//! Per-record validation into a plottable interval or a skip reason.
//!
//! # Invariants
//! - Exactly one `Classification` per record.
//! - A birth failure short-circuits: death is never inspected.

use crate::model::date::parse_date_token;
use crate::model::interval::{PlottableInterval, SkipField, SkipReason};
use crate::model::person::{is_present_sentinel, RawPersonRecord};

/// Display name used when a record has no usable name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Outcome of validating one stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Plottable(PlottableInterval),
    Skipped(SkipReason),
}

/// Classifies one raw record.
pub fn classify(record: &RawPersonRecord) -> Classification {
    let name = display_name(record);

    let start = match parse_date_token(&record.birth) {
        Ok(date) => date,
        Err(_) => {
            return Classification::Skipped(SkipReason {
                name,
                field: SkipField::Birth,
                raw_value: record.birth.clone(),
            });
        }
    };

    if is_present_sentinel(&record.death) {
        return Classification::Plottable(PlottableInterval::alive(name, start));
    }

    match parse_date_token(&record.death) {
        Ok(end) => Classification::Plottable(PlottableInterval::deceased(name, start, end)),
        Err(_) => Classification::Skipped(SkipReason {
            name,
            field: SkipField::Death,
            raw_value: record.death.clone(),
        }),
    }
}

fn display_name(record: &RawPersonRecord) -> String {
    if record.name.trim().is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        record.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, Classification, UNKNOWN_NAME};
    use crate::model::interval::SkipField;
    use crate::model::person::{LifeStatus, RawPersonRecord};

    #[test]
    fn empty_name_falls_back_to_unknown() {
        let record = RawPersonRecord::new("  ", "1900-01-01", "present");
        match classify(&record) {
            Classification::Plottable(interval) => assert_eq!(interval.name, UNKNOWN_NAME),
            other => panic!("expected plottable interval, got {other:?}"),
        }
    }

    #[test]
    fn bad_death_is_reported_against_death_field() {
        let record = RawPersonRecord::new("Ada", "1815-12-10", "1852-13-27");
        match classify(&record) {
            Classification::Skipped(reason) => {
                assert_eq!(reason.field, SkipField::Death);
                assert_eq!(reason.raw_value, "1852-13-27");
            }
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[test]
    fn empty_death_is_not_treated_as_alive() {
        let record = RawPersonRecord::new("Ada", "1815-12-10", "");
        assert!(matches!(
            classify(&record),
            Classification::Skipped(reason) if reason.field == SkipField::Death
        ));
    }

    #[test]
    fn deceased_interval_keeps_end_date() {
        let record = RawPersonRecord::new("Ada", "1815-12-10", "1852-11-27");
        match classify(&record) {
            Classification::Plottable(interval) => {
                assert_eq!(interval.status, LifeStatus::Deceased);
                assert_eq!(interval.end.map(|d| d.to_string()).as_deref(), Some("1852-11-27"));
            }
            other => panic!("expected plottable interval, got {other:?}"),
        }
    }
}
