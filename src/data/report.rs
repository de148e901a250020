use std::cell::OnceCell;

use crate::api::models::{PopularMovie, RatedMovie};
use crate::data::stats;

/// The products of one run: both fetched lists plus the lazily computed
/// average user rating.
///
/// The average is computed on first access and cached for the lifetime
/// of the report. Later accesses return the cached value even if the
/// lists are edited in between.
#[derive(Debug)]
pub struct MovieReport {
    pub popular: Vec<PopularMovie>,
    pub rated: Vec<RatedMovie>,
    average: OnceCell<Option<f64>>,
}

impl MovieReport {
    pub fn new(popular: Vec<PopularMovie>, rated: Vec<RatedMovie>) -> Self {
        Self {
            popular,
            rated,
            average: OnceCell::new(),
        }
    }

    /// Mean of the account's scores across the rated list, `None` when
    /// the list is empty.
    pub fn average_user_rating(&self) -> Option<f64> {
        *self
            .average
            .get_or_init(|| stats::average_user_rating(&self.rated))
    }
}
