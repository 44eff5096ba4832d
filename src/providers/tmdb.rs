//! TMDB (The Movie Database) catalog provider.
//!
//! Implements [`CatalogProvider`] against the TMDB v3 REST API: title
//! search, record details with external IDs, and poster download.

use std::time::Duration;

use async_trait::async_trait;
use postermark_common::MediaKind;
use serde::Deserialize;
use tracing::debug;

use super::{CatalogMatch, CatalogProvider, CatalogQuery, ProviderError, ProviderResult};

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    results: Vec<TmdbSearchHit>,
}

#[derive(Debug, Deserialize)]
struct TmdbSearchHit {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct TmdbDetail {
    id: u64,
    poster_path: Option<String>,
    vote_average: Option<f32>,
    // Movies report the IMDb ID at the top level; TV records tuck it into
    // external_ids.
    imdb_id: Option<String>,
    external_ids: Option<TmdbExternalIds>,
}

#[derive(Debug, Deserialize)]
struct TmdbExternalIds {
    imdb_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// TMDB catalog client.
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, TMDB_BASE_URL.to_string())
    }

    /// Create a client against a non-default API base URL (used in tests).
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

    /// Search the appropriate index and return the first hit's ID.
    async fn search(&self, query: &CatalogQuery) -> ProviderResult<Option<u64>> {
        let (path, year_param) = match query.kind {
            MediaKind::Movie => ("search/movie", "year"),
            MediaKind::Series => ("search/tv", "first_air_date_year"),
        };

        let url = format!("{}/{}", self.base_url, path);
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("query", query.title.clone()),
        ];
        if let Some(year) = query.year {
            params.push((year_param, year.to_string()));
        }

        let response: TmdbSearchResponse = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.results.first().map(|hit| hit.id))
    }

    /// Fetch a record's details, including external IDs.
    async fn detail(&self, kind: MediaKind, id: u64) -> ProviderResult<TmdbDetail> {
        let path = match kind {
            MediaKind::Movie => "movie",
            MediaKind::Series => "tv",
        };
        let url = format!("{}/{}/{}", self.base_url, path, id);

        let detail: TmdbDetail = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("append_to_response", "external_ids"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(detail)
    }
}

#[async_trait]
impl CatalogProvider for TmdbClient {
    async fn find(&self, query: &CatalogQuery) -> ProviderResult<Option<CatalogMatch>> {
        let id = match query.tmdb_id {
            Some(id) => id,
            None => match self.search(query).await? {
                Some(id) => id,
                None => {
                    debug!("TMDB: no match for {:?} ({:?})", query.title, query.year);
                    return Ok(None);
                }
            },
        };

        let detail = self.detail(query.kind, id).await?;
        let imdb_id = detail
            .imdb_id
            .or_else(|| detail.external_ids.and_then(|ids| ids.imdb_id))
            .filter(|s| !s.is_empty());

        Ok(Some(CatalogMatch {
            tmdb_id: detail.id,
            imdb_id,
            poster_url: detail
                .poster_path
                .map(|path| format!("{TMDB_IMAGE_BASE}{path}")),
            score: detail.vote_average,
        }))
    }

    async fn poster(&self, url: &str) -> ProviderResult<Vec<u8>> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        if bytes.is_empty() {
            return Err(ProviderError::UnexpectedResponse(format!(
                "empty poster body from {url}"
            )));
        }

        Ok(bytes.to_vec())
    }
}
