use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::api::models::{PopularMovie, RatedMovie};

/// Default number of popular movies to collect, one nominal discover page.
pub const DEFAULT_QUANTITY: usize = 20;

const POPULAR_EMPTY: &str = "no more popular movies available";
const RATED_EMPTY: &str = "no rated movies found for this account";

/// Failures raised while talking to the TMDB API.
///
/// Transport and decode problems pass through from the underlying
/// libraries. The remaining variants classify the anomaly shapes the
/// remote is known to produce: it reports errors in the response body,
/// not through HTTP status codes.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The remote reported `success: false` and supplied a status message.
    #[error("TMDB error: {0}")]
    Remote(String),

    /// A `results` array was present but empty.
    #[error("{0}")]
    EmptyResults(&'static str),

    /// No `results` array and no usable `success`/`status_message` pair.
    /// The payload is kept whole for diagnosis.
    #[error("unexpected response payload: {0}")]
    UnexpectedPayload(Value),
}

/// A source of discover-listing pages, numbered from 1.
///
/// `TmdbClient` is the real implementation; tests substitute canned
/// payloads without touching the network.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> Result<Value, TmdbError>;
}

/// Accumulates popular movies from `source` until `quantity` records
/// have been collected, then discards the excess from the final page.
///
/// The page number advances once per fetched batch, whatever the batch
/// size. A page with zero results is an error, never a quiet stop.
pub fn collect_popular<S: PageSource>(
    source: &S,
    quantity: usize,
) -> Result<Vec<PopularMovie>, TmdbError> {
    let mut movies: Vec<PopularMovie> = Vec::with_capacity(quantity);
    let mut page: u32 = 1;

    while movies.len() < quantity {
        let payload = source.fetch_page(page)?;
        let batch: Vec<PopularMovie> = decode_listing(payload, POPULAR_EMPTY)?;
        debug!("page {} returned {} movies", page, batch.len());
        movies.extend(batch);
        page += 1;
    }

    movies.truncate(quantity);
    Ok(movies)
}

/// Client for the TMDB v3 API.
///
/// Holds the credentials and a reused blocking HTTP client. Fetches
/// return owned lists and leave no state behind on the client.
#[derive(Clone)]
pub struct TmdbClient {
    base_url: String,
    auth_token: String,
    account_id: String,
    client: Client,
}

impl TmdbClient {
    pub fn new(base_url: &str, auth_token: &str, account_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
            account_id: account_id.to_string(),
            client: Client::new(),
        }
    }

    /// Fetches exactly `quantity` movies ordered by descending popularity.
    pub fn popular_movies(&self, quantity: usize) -> Result<Vec<PopularMovie>, TmdbError> {
        let movies = collect_popular(self, quantity)?;
        info!("fetched {} popular movies", movies.len());
        Ok(movies)
    }

    /// Fetches every movie the account has rated. The endpoint takes no
    /// count parameter; a single request returns the whole list.
    pub fn rated_movies(&self) -> Result<Vec<RatedMovie>, TmdbError> {
        let url = format!("{}/account/{}/rated/movies", self.base_url, self.account_id);
        let movies = decode_listing(self.get_json(&url, &[])?, RATED_EMPTY)?;
        info!("fetched {} rated movies", movies.len());
        Ok(movies)
    }

    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, TmdbError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&self.auth_token)
            .header(ACCEPT, "application/json")
            .send()?;
        Ok(response.json()?)
    }
}

impl PageSource for TmdbClient {
    fn fetch_page(&self, page: u32) -> Result<Value, TmdbError> {
        let url = format!("{}/discover/movie", self.base_url);
        self.get_json(
            &url,
            &[
                ("page", page.to_string()),
                ("sort_by", "popularity.desc".to_string()),
            ],
        )
    }
}

fn decode_listing<T: DeserializeOwned>(
    payload: Value,
    empty_msg: &'static str,
) -> Result<Vec<T>, TmdbError> {
    let results = extract_results(payload, empty_msg)?;
    Ok(serde_json::from_value(Value::Array(results))?)
}

/// Pulls the `results` array out of a listing payload.
///
/// Both endpoints share one anomaly policy: a present, non-empty
/// `results` array wins over everything else in the body; an empty one
/// is an error; only when the array is missing is a `success: false`
/// flag (and its `status_message`) consulted; any stranger shape is
/// surfaced with the payload embedded.
fn extract_results(mut payload: Value, empty_msg: &'static str) -> Result<Vec<Value>, TmdbError> {
    match payload.get_mut("results").map(Value::take) {
        Some(Value::Array(items)) if items.is_empty() => Err(TmdbError::EmptyResults(empty_msg)),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => {
            payload["results"] = other;
            Err(anomaly(payload))
        }
        None => Err(anomaly(payload)),
    }
}

fn anomaly(payload: Value) -> TmdbError {
    if payload.get("success").and_then(Value::as_bool) == Some(false) {
        if let Some(message) = payload.get("status_message").and_then(Value::as_str) {
            return TmdbError::Remote(message.to_string());
        }
    }
    TmdbError::UnexpectedPayload(payload)
}
