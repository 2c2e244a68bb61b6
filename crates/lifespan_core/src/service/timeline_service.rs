//! Timeline use-case service.
//!
//! # Responsibility
//! - Add a person: lookup dates, dedupe by name, persist.
//! - Build a chart: load, filter by year window, classify, render.
//! - Export the stored records.
//!
//! # Invariants
//! - Storage and lookup are injected; the pipeline never sees a failed add.
//! - Every timeline build is a full re-run with no cached state.
//! - Duplicate names (case-insensitive) are reported, not stored twice.

use crate::export::{export_records, ExportError, ExportFormat};
use crate::lookup::{display_name, normalize_title, LookupError, PersonLookup};
use crate::model::person::RawPersonRecord;
use crate::render::chart::{
    skip_summary, Diagnostic, DiagnosticSink, TimelineChart, TimelineRenderer,
};
use crate::repo::record_store::{RecordStore, StoreError, StoreResult};
use crate::timeline::batch::{process, EmptyBatch};
use crate::timeline::filter::YearWindow;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for timeline use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Add-person input was blank.
    EmptyTitle,
    Lookup(LookupError),
    Store(StoreError),
    Export(ExportError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "person title cannot be empty"),
            Self::Lookup(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::Lookup(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Export(err) => Some(err),
        }
    }
}

impl From<LookupError> for ServiceError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ExportError> for ServiceError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Result of an add-person request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPersonOutcome {
    Added(RawPersonRecord),
    /// A record with the same name (case-insensitive) is already stored.
    AlreadyExists(String),
}

/// Service facade over an injected record store and person lookup.
pub struct TimelineService<S: RecordStore, L: PersonLookup> {
    store: S,
    lookup: L,
    renderer: TimelineRenderer,
}

impl<S: RecordStore, L: PersonLookup> TimelineService<S, L> {
    pub fn new(store: S, lookup: L) -> Self {
        Self {
            store,
            lookup,
            renderer: TimelineRenderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: TimelineRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Looks up `input` and appends it to the store.
    ///
    /// # Contract
    /// - `input` is normalized to a page title before lookup.
    /// - Stored name is the title with underscores shown as spaces.
    /// - A missing death date is stored as the `Present` sentinel.
    pub fn add_person(&self, input: &str) -> Result<AddPersonOutcome, ServiceError> {
        let title = normalize_title(input);
        if title.is_empty() {
            return Err(ServiceError::EmptyTitle);
        }
        let name = display_name(&title);

        let mut records = self.store.load()?;
        if records.iter().any(|record| record.same_person_as(&name)) {
            info!("event=person_add module=service status=duplicate");
            return Ok(AddPersonOutcome::AlreadyExists(name));
        }

        let dates = self.lookup.lookup(&title)?;
        let record = RawPersonRecord::new(name, dates.birth, dates.death);
        records.push(record.clone());
        self.store.save(&records)?;

        info!(
            "event=person_add module=service status=ok living={} total={}",
            record.is_marked_present(),
            records.len()
        );
        Ok(AddPersonOutcome::Added(record))
    }

    /// Returns all stored records in insertion order.
    pub fn list_people(&self) -> StoreResult<Vec<RawPersonRecord>> {
        self.store.load()
    }

    /// Builds the chart for people born inside `window`.
    ///
    /// Returns `Ok(None)` when there is nothing to draw; the reason has then
    /// been reported through `sink`.
    pub fn build_timeline(
        &self,
        window: YearWindow,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<TimelineChart>, ServiceError> {
        let records = self.store.load()?;
        if records.is_empty() {
            sink.emit(Diagnostic::info(
                "Add a person to begin building your timeline.",
            ));
            return Ok(None);
        }

        let filtered = window.apply(&records);
        debug!(
            "event=year_filter module=service min_year={} max_year={} kept={} unparsable_births={}",
            window.min_year(),
            window.max_year(),
            filtered.records.len(),
            filtered.unparsable_births
        );

        match process(&filtered.records) {
            Ok(batch) => Ok(self.renderer.render(&batch.rows, &batch.skipped, sink)),
            Err(EmptyBatch::NoPlottableData) => Ok(self.renderer.render(&[], &[], sink)),
            Err(err @ EmptyBatch::AllRowsSkipped { .. }) => {
                warn!(
                    "event=timeline_build module=service status=all_skipped skipped={}",
                    err.skipped().len()
                );
                sink.emit(Diagnostic::error(format!("{}.", capitalize(&err.to_string()))));
                sink.emit(Diagnostic::info(skip_summary(err.skipped())));
                Ok(None)
            }
        }
    }

    /// Serializes every stored record (unfiltered) in `format`.
    pub fn export(&self, format: ExportFormat) -> Result<String, ServiceError> {
        let records = self.store.load()?;
        Ok(export_records(&records, format)?)
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
