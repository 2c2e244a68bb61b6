//! Record persistence.
//!
//! # Responsibility
//! - Define the load/save contract used by use-case services.
//! - Isolate file-format details from the timeline pipeline.
//!
//! # Invariants
//! - The pipeline never touches storage; services pass loaded records in.

pub mod record_store;
