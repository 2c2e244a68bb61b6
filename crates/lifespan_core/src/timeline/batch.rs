//! Batch classification of a full record set.
//!
//! # Responsibility
//! - Apply `classify` to every record in input order.
//! - Partition results into render rows and a skip report.
//! - Resolve the drawn end of living people to "today".
//!
//! # Invariants
//! - Both output sequences preserve input order.
//! - One bad record never aborts the batch.
//! - An empty row set is reported as `EmptyBatch`, never as a panic.

use crate::model::date::CalendarDate;
use crate::model::interval::{RenderRow, SkipReason};
use crate::model::person::RawPersonRecord;
use crate::timeline::classify::{classify, Classification};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Successful batch: at least one row to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineBatch {
    pub rows: Vec<RenderRow>,
    pub skipped: Vec<SkipReason>,
}

/// Terminal outcome of a batch that produced nothing to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyBatch {
    /// Input was empty.
    NoPlottableData,
    /// Input was present but every record failed classification.
    AllRowsSkipped { skipped: Vec<SkipReason> },
}

impl EmptyBatch {
    /// Skip report carried by the outcome (empty for `NoPlottableData`).
    pub fn skipped(&self) -> &[SkipReason] {
        match self {
            Self::NoPlottableData => &[],
            Self::AllRowsSkipped { skipped } => skipped,
        }
    }
}

impl Display for EmptyBatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPlottableData => write!(f, "no valid data to plot"),
            Self::AllRowsSkipped { skipped } => write!(
                f,
                "all {} entries failed date parsing",
                skipped.len()
            ),
        }
    }
}

impl Error for EmptyBatch {}

/// Processes `records` using the local date as "today".
pub fn process(records: &[RawPersonRecord]) -> Result<TimelineBatch, EmptyBatch> {
    process_at(records, CalendarDate::today())
}

/// Processes `records` with an explicit "today" for living people.
pub fn process_at(
    records: &[RawPersonRecord],
    today: CalendarDate,
) -> Result<TimelineBatch, EmptyBatch> {
    let mut rows = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for record in records {
        match classify(record) {
            Classification::Plottable(interval) => rows.push(interval.into_render_row(today)),
            Classification::Skipped(reason) => {
                debug!(
                    "event=record_skipped module=timeline field={} raw_value={:?}",
                    reason.field.as_str(),
                    reason.raw_value
                );
                skipped.push(reason);
            }
        }
    }

    info!(
        "event=timeline_batch module=timeline status={} input={} rows={} skipped={}",
        if rows.is_empty() { "empty" } else { "ok" },
        records.len(),
        rows.len(),
        skipped.len()
    );

    if rows.is_empty() {
        if skipped.is_empty() {
            return Err(EmptyBatch::NoPlottableData);
        }
        return Err(EmptyBatch::AllRowsSkipped { skipped });
    }

    Ok(TimelineBatch { rows, skipped })
}
