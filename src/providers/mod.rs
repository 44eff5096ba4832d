//! Remote catalog and rating-source collaborators.
//!
//! The processing pipeline only sees the two narrow traits defined here;
//! the TMDB and OMDb clients are the production implementations. Requests
//! are single-shot with a timeout: retry/backoff policy is deliberately not
//! this tool's business.

pub mod omdb;
pub mod tmdb;

pub use omdb::OmdbClient;
pub use tmdb::TmdbClient;

use async_trait::async_trait;
use postermark_common::{MediaKind, Ratings};

/// Errors from remote provider lookups.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, timeout, non-2xx status).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered but the payload was not usable.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Result type alias for provider calls.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// A catalog lookup request.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    /// Title to search for.
    pub title: String,
    /// Release year, if known; tightens the search.
    pub year: Option<u16>,
    /// Movie or series; selects the catalog's search index.
    pub kind: MediaKind,
    /// Known catalog ID; when present the search is skipped entirely.
    pub tmdb_id: Option<u64>,
}

/// One matched catalog record.
#[derive(Debug, Clone)]
pub struct CatalogMatch {
    /// The catalog's numeric ID for the matched record.
    pub tmdb_id: u64,
    /// External rating-source identifier (IMDb ID), if the catalog knows it.
    pub imdb_id: Option<String>,
    /// Full URL of the primary poster image, if any.
    pub poster_url: Option<String>,
    /// The catalog's own community score (0.0 - 10.0), if any.
    pub score: Option<f32>,
}

/// Remote catalog: title matching and poster retrieval.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Find the best catalog record for a query, or `None` if nothing
    /// matches.
    async fn find(&self, query: &CatalogQuery) -> ProviderResult<Option<CatalogMatch>>;

    /// Download a poster image by URL.
    async fn poster(&self, url: &str) -> ProviderResult<Vec<u8>>;
}

/// Remote rating source, keyed by IMDb ID.
#[async_trait]
pub trait RatingsProvider: Send + Sync {
    /// Fetch normalized ratings for a title. A title unknown to the source
    /// yields empty ratings, not an error.
    async fn ratings(&self, imdb_id: &str) -> ProviderResult<Ratings>;
}
