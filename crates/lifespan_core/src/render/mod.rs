//! Timeline rendering.
//!
//! # Responsibility
//! - Lay out render rows as a chart model (`chart`).
//! - Serialize the chart model to SVG (`svg`) or terminal text (`text`).
//!
//! # Invariants
//! - Rendering never fails; empty input yields a diagnostic, not an error.

pub mod chart;
pub mod svg;
pub mod text;
