//! Timeline chart layout and user-facing diagnostics.
//!
//! # Responsibility
//! - Lay out one horizontal bar per render row.
//! - Assign stable per-name colors within one render call.
//! - Emit "nothing to plot" and skip-summary diagnostics.
//!
//! # Invariants
//! - Lane 0 (top) holds the first input row; lanes follow input order.
//! - Identical names get identical colors; identical input gives an
//!   identical chart.
//! - Inverted rows (end before start) are drawn as-is and flagged.

use crate::model::date::CalendarDate;
use crate::model::interval::{RenderRow, SkipReason};
use crate::model::person::LifeStatus;
use log::{info, warn};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Default chart title.
pub const DEFAULT_TITLE: &str = "Life Timeline of Famous People";

/// Qualitative palette, cycled in first-appearance order of names.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

const AXIS_STEPS: &[i32] = &[1, 2, 5, 10, 20, 25, 50, 100, 200, 250, 500, 1000];
const MAX_AXIS_TICKS: i32 = 12;

/// Severity of a user-visible diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
}

impl DiagnosticLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Message surfaced to the user alongside (or instead of) a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}

/// Receiver for diagnostics produced while rendering.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Inspection data exposed for one bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverInfo {
    pub name: String,
    pub start: CalendarDate,
    pub rendered_end: CalendarDate,
    pub status: LifeStatus,
}

impl Display for HoverInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}\nStart: {}\nEnd: {}\nStatus: {}",
            self.name,
            self.start,
            self.rendered_end,
            self.status.as_str()
        )
    }
}

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    /// Vertical slot, 0 = top.
    pub lane: usize,
    pub color: &'static str,
    pub inverted: bool,
    pub hover: HoverInfo,
}

impl ChartBar {
    pub fn label(&self) -> &str {
        &self.hover.name
    }

    /// Earlier of the two endpoints, whatever the row orientation.
    pub fn left(&self) -> CalendarDate {
        self.hover.start.min(self.hover.rendered_end)
    }

    /// Later of the two endpoints, whatever the row orientation.
    pub fn right(&self) -> CalendarDate {
        self.hover.start.max(self.hover.rendered_end)
    }
}

/// Year axis covering every bar, snapped to tick boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAxis {
    pub first_year: i32,
    pub last_year: i32,
    pub step: i32,
}

impl YearAxis {
    fn covering(min: CalendarDate, max: CalendarDate) -> Self {
        let low = min.year();
        let high = max.year() + 1;
        let span = (high - low).max(1);
        let step = AXIS_STEPS
            .iter()
            .copied()
            .find(|step| span / step <= MAX_AXIS_TICKS)
            .unwrap_or(span);
        Self {
            first_year: low.div_euclid(step) * step,
            last_year: (high + step - 1).div_euclid(step) * step,
            step,
        }
    }

    pub fn span_years(&self) -> f64 {
        f64::from((self.last_year - self.first_year).max(1))
    }

    /// Horizontal position of `date` in `[0, 1]`.
    pub fn position(&self, date: CalendarDate) -> f64 {
        ((date.fractional_year() - f64::from(self.first_year)) / self.span_years()).clamp(0.0, 1.0)
    }

    /// Horizontal position of January 1st of `year` in `[0, 1]`.
    pub fn position_of_year(&self, year: i32) -> f64 {
        (f64::from(year - self.first_year) / self.span_years()).clamp(0.0, 1.0)
    }

    pub fn ticks(&self) -> Vec<i32> {
        (self.first_year..=self.last_year)
            .step_by(usize::try_from(self.step).unwrap_or(1))
            .collect()
    }
}

/// Laid-out timeline ready for an output format.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineChart {
    pub title: String,
    pub bars: Vec<ChartBar>,
    pub axis: YearAxis,
}

impl TimelineChart {
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(ChartBar::label).collect()
    }
}

/// Chart builder; bars take colors from [`DEFAULT_PALETTE`].
#[derive(Debug, Clone)]
pub struct TimelineRenderer {
    title: String,
}

impl Default for TimelineRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl TimelineRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Lays out `rows` and reports `skipped` through `sink`.
    ///
    /// Returns `None` (after a warning diagnostic) when `rows` is empty.
    pub fn render(
        &self,
        rows: &[RenderRow],
        skipped: &[SkipReason],
        sink: &mut dyn DiagnosticSink,
    ) -> Option<TimelineChart> {
        if rows.is_empty() {
            warn!("event=timeline_render module=render status=empty");
            sink.emit(Diagnostic::warning("No valid data to plot."));
            return None;
        }

        let mut colors: HashMap<&str, &'static str> = HashMap::new();
        let mut bars = Vec::with_capacity(rows.len());
        for (lane, row) in rows.iter().enumerate() {
            let next_color = DEFAULT_PALETTE[colors.len() % DEFAULT_PALETTE.len()];
            let color = *colors.entry(row.name.as_str()).or_insert(next_color);
            if row.is_inverted() {
                warn!(
                    "event=inverted_interval module=render lane={} start={} end={}",
                    lane, row.start, row.rendered_end
                );
            }
            bars.push(ChartBar {
                lane,
                color,
                inverted: row.is_inverted(),
                hover: HoverInfo {
                    name: row.name.clone(),
                    start: row.start,
                    rendered_end: row.rendered_end,
                    status: row.status,
                },
            });
        }

        let min = bars.iter().map(ChartBar::left).min()?;
        let max = bars.iter().map(ChartBar::right).max()?;
        let chart = TimelineChart {
            title: self.title.clone(),
            bars,
            axis: YearAxis::covering(min, max),
        };

        info!(
            "event=timeline_render module=render status=ok bars={} skipped={} axis={}..{}",
            chart.bar_count(),
            skipped.len(),
            chart.axis.first_year,
            chart.axis.last_year
        );

        if !skipped.is_empty() {
            sink.emit(Diagnostic::info(skip_summary(skipped)));
        }

        Some(chart)
    }
}

/// Human-readable summary of a skip report.
pub fn skip_summary(skipped: &[SkipReason]) -> String {
    let entries = skipped
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Skipped {} entries due to invalid dates: [{}]",
        skipped.len(),
        entries
    )
}

#[cfg(test)]
mod tests {
    use super::YearAxis;
    use crate::model::date::parse_date_token;

    #[test]
    fn axis_snaps_to_step_boundaries() {
        let axis = YearAxis::covering(
            parse_date_token("1703-00-00").unwrap(),
            parse_date_token("1958-06-01").unwrap(),
        );
        assert_eq!(axis.step, 20);
        assert_eq!(axis.first_year, 1700);
        assert_eq!(axis.last_year, 1960);
        assert_eq!(axis.ticks().first(), Some(&1700));
        assert_eq!(axis.ticks().last(), Some(&1960));
    }

    #[test]
    fn single_year_axis_has_nonzero_span() {
        let date = parse_date_token("1900-01-01").unwrap();
        let axis = YearAxis::covering(date, date);
        assert!(axis.span_years() >= 1.0);
        assert!(axis.position(date) >= 0.0);
    }
}
