//! # postermark-parser
//!
//! Parsing for media library folder names and media-kind heuristics.
//!
//! This crate extracts a title, an optional release year, and optional
//! external catalog IDs (IMDb, TMDB, TVDB) from a raw folder name, and
//! classifies a folder's contents as a movie or a series. All functions are
//! pure: no I/O, no failure modes. Missing information is represented by
//! absent fields, never by errors.
//!
//! ## Quick Start
//!
//! ```
//! use postermark_parser::parse;
//!
//! let parsed = parse("Blade Runner (1982) [imdbid-tt0083658]");
//!
//! assert_eq!(parsed.title, "Blade Runner");
//! assert_eq!(parsed.year, Some(1982));
//! assert_eq!(parsed.imdb_id.as_deref(), Some("tt0083658"));
//! ```

pub mod detect;
pub mod model;

mod parser;

pub use detect::{classify_entries, FolderEntry};
pub use model::ParsedName;

/// Parse a folder name into its identity fields.
///
/// Total function: degenerate inputs yield an empty title and absent
/// optional fields rather than an error.
///
/// # Examples
///
/// ```
/// use postermark_parser::parse;
///
/// let parsed = parse("Movie Name (2020)");
/// assert_eq!(parsed.title, "Movie Name");
/// assert_eq!(parsed.year, Some(2020));
/// ```
pub fn parse(input: &str) -> ParsedName {
    parser::parse_name(input)
}
