//! Fetched-data layer
//!
//! This module holds the products of a run: the per-run report,
//! summary statistics, and CSV export.

pub mod exporter;
pub mod report;
pub mod stats;
