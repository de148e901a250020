use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use chrono::Local;
use serde::Serialize;

use crate::api::models::{PopularMovie, RatedMovie};

/// Writes the popular list to a timestamped CSV file in `dir` and
/// returns a display message for the caller.
pub fn export_popular_csv(movies: &[PopularMovie], dir: &Path) -> Result<String> {
    write_csv(movies, dir, "popular_movies")
}

/// Writes the rated list to a timestamped CSV file in `dir`.
pub fn export_rated_csv(movies: &[RatedMovie], dir: &Path) -> Result<String> {
    write_csv(movies, dir, "rated_movies")
}

fn write_csv<T: Serialize>(rows: &[T], dir: &Path, stem: &str) -> Result<String> {
    if rows.is_empty() {
        return Err(anyhow!("No data to export"));
    }

    let path = timestamped(dir, stem);
    let mut writer = csv::Writer::from_path(&path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(format!("Exported {} rows to {}", rows.len(), path.display()))
}

fn timestamped(dir: &Path, stem: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{}.csv", stem, timestamp))
}
