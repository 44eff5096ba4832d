//! # postermark-overlay
//!
//! Badge geometry and poster compositing.
//!
//! Given a set of normalized ratings and a base poster image, this crate
//! builds up to three rating badges, lays them out in one of three styles
//! (corner stack, bottom bar, minimal chips), rasterizes the resulting draw
//! instructions, and alpha-composites them onto the poster.
//!
//! Everything here is synchronous, stateless, and in-memory: the only input
//! is byte buffers and values, the only output is encoded image bytes. The
//! single fatal condition is a base image that cannot be decoded.
//!
//! ```no_run
//! use postermark_common::{LayoutStyle, RatingSource, Ratings, ImdbScore};
//! use postermark_overlay::{compose, ComposeOptions};
//!
//! let ratings = Ratings {
//!     imdb: Some(ImdbScore { value: "8.5".into(), votes: None }),
//!     ..Default::default()
//! };
//! let options = ComposeOptions {
//!     style: LayoutStyle::BottomBar,
//!     preferred_sources: vec![RatingSource::Imdb, RatingSource::RottenTomatoes],
//!     tmdb_score: None,
//! };
//! let poster = std::fs::read("poster.jpg").unwrap();
//! let marked = compose(&poster, &ratings, &options).unwrap();
//! ```

pub mod badge;
pub mod compose;
pub mod error;
pub mod geometry;

mod draw;

pub use badge::{build_badges, score_band_color, Badge};
pub use compose::{compose, ComposeOptions, JPEG_QUALITY};
pub use error::{OverlayError, Result};
pub use geometry::{layout, Anchor, DrawOp, Overlay};
