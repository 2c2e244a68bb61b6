//! Normalization pipeline from stored records to plot-ready rows.
//!
//! # Responsibility
//! - Narrow records by birth-year window (`filter`).
//! - Classify each record as plottable or skipped (`classify`).
//! - Partition a whole record set and resolve rendered ends (`batch`).
//!
//! # Invariants
//! - Pure in-memory transformations; no I/O and no shared state.
//! - Per-record failures are aggregated, never propagated as errors.

pub mod batch;
pub mod classify;
pub mod filter;
