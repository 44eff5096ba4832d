use std::path::PathBuf;

use postermark_common::{LayoutStyle, RatingSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Root directories whose immediate subfolders are media items.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OverlayConfig {
    /// Overlay layout style.
    #[serde(default = "default_style")]
    pub style: LayoutStyle,

    /// Preferred source order; the first three data-bearing entries render.
    #[serde(default = "default_sources")]
    pub sources: Vec<RatingSource>,

    /// Re-render folders that already have a rendered poster.
    #[serde(default)]
    pub overwrite: bool,
}

fn default_style() -> LayoutStyle {
    LayoutStyle::BottomBar
}

fn default_sources() -> Vec<RatingSource> {
    vec![
        RatingSource::Imdb,
        RatingSource::RottenTomatoes,
        RatingSource::Metacritic,
    ]
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            sources: default_sources(),
            overwrite: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProvidersConfig {
    /// TMDB v3 API key used for catalog lookups and poster downloads.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// OMDb API key used for rating lookups.
    #[serde(default)]
    pub omdb_api_key: Option<String>,
}
