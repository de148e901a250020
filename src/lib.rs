pub mod api;
pub mod config;
pub mod data;
pub mod utils;
pub mod viz;
