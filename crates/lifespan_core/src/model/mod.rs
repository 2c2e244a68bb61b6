//! Domain model for the lifespan timeline.
//!
//! # Responsibility
//! - Define the stored record shape and the derived per-run shapes.
//! - Own date normalization, the only place a `CalendarDate` is built.
//!
//! # Invariants
//! - Stored records are kept verbatim; derived shapes are never persisted.

pub mod date;
pub mod interval;
pub mod person;
