//! Chart rendering
//!
//! This module renders the fetched movie lists as SVG bar charts.

pub mod charts;
