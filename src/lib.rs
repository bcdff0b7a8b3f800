//! Summarize and validate table references extracted from SQL statements.
#![warn(missing_docs)]

/// Set and grouping statistics over loaded references.
pub mod aggregate;
/// Known CTE names and the scenario catalog.
pub mod classifier;
/// Extractor output loading and table reference types.
pub mod input;
/// Plain-text report rendering.
pub mod output;
