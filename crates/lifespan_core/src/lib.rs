//! Core domain logic for the lifespan timeline.
//! This crate owns date normalization, the timeline pipeline and rendering.

pub mod config;
pub mod export;
pub mod logging;
pub mod lookup;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;
pub mod timeline;

pub use config::{AppConfig, ConfigError};
pub use export::{export_csv, export_json, export_records, ExportError, ExportFormat};
pub use logging::{default_log_level, init_logging, LoggingError};
pub use lookup::{LifeDates, LookupError, LookupResult, PersonLookup, WikidataLookup};
pub use model::date::{parse_date_token, CalendarDate, Unparsable};
pub use model::interval::{PlottableInterval, RenderRow, SkipField, SkipReason};
pub use model::person::{LifeStatus, RawPersonRecord, PRESENT_SENTINEL};
pub use render::chart::{
    ChartBar, Diagnostic, DiagnosticLevel, DiagnosticSink, HoverInfo, TimelineChart,
    TimelineRenderer,
};
pub use render::svg::to_svg;
pub use render::text::to_text;
pub use repo::record_store::{
    JsonFileStore, MemoryRecordStore, RecordStore, StoreError, StoreResult,
};
pub use service::timeline_service::{AddPersonOutcome, ServiceError, TimelineService};
pub use timeline::batch::{process, process_at, EmptyBatch, TimelineBatch};
pub use timeline::classify::{classify, Classification};
pub use timeline::filter::{
    filter_by_birth_year, BirthYearFilter, YearWindow, YearWindowError, MAX_TIMELINE_YEAR,
    MIN_TIMELINE_YEAR,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
