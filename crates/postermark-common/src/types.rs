//! Core enums and records shared between the scanner, providers, and overlay.

use serde::{Deserialize, Serialize};

/// Classification of a media folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A single feature film.
    Movie,
    /// An episodic series.
    Series,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
        }
    }
}

/// A rating source that can contribute one badge to a poster overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingSource {
    /// IMDb community rating (0.0 - 10.0).
    Imdb,
    /// Rotten Tomatoes critic score (percentage).
    RottenTomatoes,
    /// Metacritic metascore (0 - 100).
    Metacritic,
    /// The catalog's own community score (TMDB vote average).
    Tmdb,
}

impl std::fmt::Display for RatingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Imdb => write!(f, "imdb"),
            Self::RottenTomatoes => write!(f, "rotten_tomatoes"),
            Self::Metacritic => write!(f, "metacritic"),
            Self::Tmdb => write!(f, "tmdb"),
        }
    }
}

/// Overlay layout style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    /// Badges stacked vertically in the top-left corner.
    Corner,
    /// A semi-opaque band across the bottom edge with centered badges.
    BottomBar,
    /// Small icon chips along the top edge.
    Minimal,
}

/// IMDb score with its vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImdbScore {
    /// Display value, e.g. `"8.5"`.
    pub value: String,
    /// Number of votes behind the rating, if reported.
    pub votes: Option<u64>,
}

/// Normalized ratings for one title.
///
/// Each entry is independently optional; a source simply may have no data
/// for a given title. Values are stored without unit suffixes (`%`, `/100`
/// and the like are stripped during normalization).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    /// IMDb community rating.
    pub imdb: Option<ImdbScore>,
    /// Rotten Tomatoes critic score as a bare number string, e.g. `"87"`.
    pub rotten_tomatoes: Option<String>,
    /// Metacritic metascore as a bare number string, e.g. `"74"`.
    pub metacritic: Option<String>,
}

impl Ratings {
    /// Returns true if no source has data for this title.
    pub fn is_empty(&self) -> bool {
        self.imdb.is_none() && self.rotten_tomatoes.is_none() && self.metacritic.is_none()
    }
}
