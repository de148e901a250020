use crate::api::models::RatedMovie;

/// Arithmetic mean of the account's personal scores, or `None` when
/// nothing has been rated.
pub fn average_user_rating(movies: &[RatedMovie]) -> Option<f64> {
    if movies.is_empty() {
        return None;
    }
    let total: f64 = movies.iter().map(|movie| movie.user_rating).sum();
    Some(total / movies.len() as f64)
}
