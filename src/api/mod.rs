//! TMDB API client and models
//!
//! This module handles communication with The Movie Database API
//! and defines the data models for the two listing endpoints.

pub mod client;
pub mod models;

pub use client::{collect_popular, PageSource, TmdbClient, TmdbError};
pub use models::{PopularMovie, RatedMovie};
