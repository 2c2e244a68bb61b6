//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, lookup, pipeline and renderer into use-case APIs.
//! - Keep the CLI decoupled from storage and HTTP details.

pub mod timeline_service;
