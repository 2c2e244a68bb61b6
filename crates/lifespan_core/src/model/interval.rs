//! Derived, per-run timeline shapes.
//!
//! Nothing in this module is persisted. Values are created by one batch run
//! and dropped once the chart has been rendered.

use crate::model::date::CalendarDate;
use crate::model::person::LifeStatus;
use std::fmt::{Display, Formatter};

/// Validated lifespan of one person.
///
/// `end` is `Some` exactly when `status == LifeStatus::Deceased`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlottableInterval {
    pub name: String,
    pub start: CalendarDate,
    pub end: Option<CalendarDate>,
    pub status: LifeStatus,
}

impl PlottableInterval {
    pub fn deceased(name: impl Into<String>, start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            name: name.into(),
            start,
            end: Some(end),
            status: LifeStatus::Deceased,
        }
    }

    pub fn alive(name: impl Into<String>, start: CalendarDate) -> Self {
        Self {
            name: name.into(),
            start,
            end: None,
            status: LifeStatus::Alive,
        }
    }

    /// Materializes the drawn end: stored end, or `today` for the living.
    pub fn into_render_row(self, today: CalendarDate) -> RenderRow {
        RenderRow {
            rendered_end: self.end.unwrap_or(today),
            name: self.name,
            start: self.start,
            status: self.status,
        }
    }
}

/// Record field that failed normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipField {
    Birth,
    Death,
}

impl SkipField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Birth => "birth",
            Self::Death => "death",
        }
    }
}

/// Why one record was left out of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipReason {
    pub name: String,
    pub field: SkipField,
    pub raw_value: String,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, `{}`)",
            self.name,
            self.field.as_str(),
            self.raw_value
        )
    }
}

/// Plot-ready row with the end date resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub name: String,
    pub start: CalendarDate,
    pub rendered_end: CalendarDate,
    pub status: LifeStatus,
}

impl RenderRow {
    /// Rows whose end precedes their start are drawn as-is and flagged.
    pub fn is_inverted(&self) -> bool {
        self.rendered_end < self.start
    }
}
