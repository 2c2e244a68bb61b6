//! Stored person record.
//!
//! # Responsibility
//! - Define the persisted/exported shape of one timeline entry.
//! - Tolerate missing or `null` fields written by older tooling.
//! - Non-text date values (numbers, bools, objects) load as a tagged token
//!   that never parses, so the record is skipped instead of failing the store.
//!
//! # Invariants
//! - `death` is either a date token or the sentinel `Present`
//!   (case-insensitive, surrounding whitespace ignored).
//! - Field values are kept verbatim; normalization happens in the pipeline.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sentinel stored in `death` for people who are still alive.
pub const PRESENT_SENTINEL: &str = "Present";

/// Raw record as written by the add-person flow.
///
/// Serialized field names (`name`, `birth`, `death`) are the on-disk and
/// export column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPersonRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "any_as_token")]
    pub birth: String,
    #[serde(default, deserialize_with = "any_as_token")]
    pub death: String,
}

impl RawPersonRecord {
    pub fn new(
        name: impl Into<String>,
        birth: impl Into<String>,
        death: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth: birth.into(),
            death: death.into(),
        }
    }

    /// Creates a record for a living person.
    pub fn living(name: impl Into<String>, birth: impl Into<String>) -> Self {
        Self::new(name, birth, PRESENT_SENTINEL)
    }

    /// Returns whether `death` holds the living sentinel.
    pub fn is_marked_present(&self) -> bool {
        is_present_sentinel(&self.death)
    }

    /// Case-insensitive name comparison used for duplicate detection.
    pub fn same_person_as(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Returns whether `value` is the living sentinel.
pub fn is_present_sentinel(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(PRESENT_SENTINEL)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Marks a date value that was not text in the stored file.
pub const NOT_TEXT_SUFFIX: &str = " (not text)";

fn any_as_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(token) => token,
        // `1879` as a number must not read as the year 1879.
        other => format!("{other}{NOT_TEXT_SUFFIX}"),
    })
}

/// Lifecycle classification of a plotted person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStatus {
    Alive,
    Deceased,
}

impl LifeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Deceased => "Deceased",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_present_sentinel, RawPersonRecord};

    #[test]
    fn sentinel_match_ignores_case_and_whitespace() {
        assert!(is_present_sentinel("present"));
        assert!(is_present_sentinel("  PRESENT "));
        assert!(!is_present_sentinel("presently"));
    }

    #[test]
    fn null_and_missing_fields_decode_to_empty_strings() {
        let record: RawPersonRecord =
            serde_json::from_str(r#"{"name": null, "birth": "1900-01-01"}"#).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.birth, "1900-01-01");
        assert_eq!(record.death, "");
    }

    #[test]
    fn non_text_dates_decode_to_their_json_text() {
        let record: RawPersonRecord = serde_json::from_str(
            r#"{"name": "Odd", "birth": 1879, "death": {"year": 1955}}"#,
        )
        .unwrap();
        assert_eq!(record.birth, "1879 (not text)");
        assert_eq!(record.death, r#"{"year":1955} (not text)"#);
    }
}
