//! CSV and JSON export of stored records.
//!
//! # Responsibility
//! - Serialize the raw record list for download/sharing.
//!
//! # Invariants
//! - Export operates on raw records, independent of the timeline pipeline.
//! - CSV always starts with the `name,birth,death` header, even when empty.
//! - JSON is an array indented by two spaces.

use crate::model::person::RawPersonRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Column order for CSV export.
pub const CSV_COLUMNS: [&str; 3] = ["name", "birth", "death"];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Suggested download file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Csv => "timeline_data.csv",
            Self::Json => "timeline_data.json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }
}

/// Export serialization error.
#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Json(serde_json::Error),
    Encoding(String),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "csv export failed: {err}"),
            Self::Json(err) => write!(f, "json export failed: {err}"),
            Self::Encoding(message) => write!(f, "export encoding failed: {message}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Encoding(_) => None,
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes `records` in the requested format.
pub fn export_records(
    records: &[RawPersonRecord],
    format: ExportFormat,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => export_csv(records),
        ExportFormat::Json => export_json(records),
    }
}

/// One CSV row per record, columns `name,birth,death`.
pub fn export_csv(records: &[RawPersonRecord]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Encoding(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Encoding(err.to_string()))
}

/// Pretty-printed JSON array of records.
pub fn export_json(records: &[RawPersonRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}
