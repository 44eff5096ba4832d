//! Postermark-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across postermark:
//!
//! - **Core Types**: Enums for media kinds, rating sources, and overlay
//!   layout styles, plus the normalized [`Ratings`] record.
//! - **Path Utilities**: Functions to detect file types by extension.
//!
//! # Examples
//!
//! ```
//! use postermark_common::{MediaKind, RatingSource, Ratings};
//! use postermark_common::paths::is_video_file;
//! use std::path::Path;
//!
//! let kind = MediaKind::Movie;
//! assert!(is_video_file(Path::new("movie.mkv")));
//!
//! let ratings = Ratings::default();
//! assert!(ratings.is_empty());
//! ```

pub mod paths;
pub mod types;

pub use types::*;
