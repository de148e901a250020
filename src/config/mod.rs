//! Configuration module
//!
//! This module contains the settings and credentials for the TMDB API,
//! fetch defaults, and chart output.

pub mod config;
