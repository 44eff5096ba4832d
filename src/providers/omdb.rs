//! OMDb rating provider.
//!
//! Implements [`RatingsProvider`] against the OMDb API, which aggregates
//! IMDb, Rotten Tomatoes, and Metacritic scores per IMDb ID. Raw values go
//! through [`crate::ratings`] normalization before they leave this module.

use std::time::Duration;

use async_trait::async_trait;
use postermark_common::{ImdbScore, Ratings};
use serde::Deserialize;
use tracing::debug;

use super::{ProviderResult, RatingsProvider};
use crate::ratings::{normalize_score, normalize_votes};

const OMDB_BASE_URL: &str = "https://www.omdbapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// OMDb API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    imdb_votes: Option<String>,
    #[serde(rename = "Ratings", default)]
    ratings: Vec<OmdbRating>,
    #[serde(rename = "Metascore")]
    metascore: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbRating {
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Value")]
    value: String,
}

impl OmdbResponse {
    /// Convert the raw payload into normalized [`Ratings`].
    fn into_ratings(self) -> Ratings {
        let imdb = self
            .imdb_rating
            .as_deref()
            .and_then(normalize_score)
            .map(|value| ImdbScore {
                value,
                votes: self.imdb_votes.as_deref().and_then(normalize_votes),
            });

        let rotten_tomatoes = self
            .ratings
            .iter()
            .find(|r| r.source == "Rotten Tomatoes")
            .and_then(|r| normalize_score(&r.value));

        // Metascore appears both as a top-level field and in the Ratings
        // list as "74/100"; prefer the list entry, fall back to the field.
        let metacritic = self
            .ratings
            .iter()
            .find(|r| r.source == "Metacritic")
            .and_then(|r| normalize_score(&r.value))
            .or_else(|| self.metascore.as_deref().and_then(normalize_score));

        Ratings {
            imdb,
            rotten_tomatoes,
            metacritic,
        }
    }
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// OMDb rating client.
pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Create a new OMDb client with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OMDB_BASE_URL.to_string())
    }

    /// Create a client against a non-default base URL (used in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl RatingsProvider for OmdbClient {
    async fn ratings(&self, imdb_id: &str) -> ProviderResult<Ratings> {
        let response: OmdbResponse = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // OMDb reports lookup misses in-band; an unknown title is empty
        // ratings, not an error.
        if response.response.as_deref() == Some("False") {
            debug!("OMDb: no data for {imdb_id}");
            return Ok(Ratings::default());
        }

        Ok(response.into_ratings())
    }
}
