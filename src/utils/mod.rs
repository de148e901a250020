//! Utility functions and helpers
//!
//! This module contains helper components used throughout the
//! application.

pub mod logging;
