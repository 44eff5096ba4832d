//! Output model for folder-name parsing.

/// Identity fields extracted from one folder name.
///
/// Produced by [`crate::parse`]; immutable once created. Every field except
/// `title` is optional, and `title` itself may legitimately be empty for a
/// degenerate input such as `"(2020)"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    /// Whitespace-normalized title with all bracket tokens removed.
    pub title: String,
    /// Four-digit release year in the 1900s or 2000s, if present.
    pub year: Option<u16>,
    /// IMDb ID (`tt` followed by digits), if tagged in the folder name.
    pub imdb_id: Option<String>,
    /// TMDB numeric ID, if tagged in the folder name.
    pub tmdb_id: Option<String>,
    /// TVDB numeric ID, if tagged in the folder name.
    pub tvdb_id: Option<String>,
}
