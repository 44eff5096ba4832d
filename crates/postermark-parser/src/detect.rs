//! Media-kind classification from one level of directory entries.
//!
//! Two independent heuristics, combined with OR:
//!
//! - **Season folders**: a subdirectory named `Season`, `Season 2`,
//!   `season.1`, or a bare `S3` token.
//! - **Episode files**: a video file whose name carries an `S01E02`-style or
//!   `1x02`-style token.
//!
//! Best-effort only. A series with none of these markers classifies as a
//! movie; that is acceptable and never an error. The filesystem read lives
//! in the application's scanner; this module only sees entry names.

use std::sync::LazyLock;

use postermark_common::paths::has_video_extension;
use postermark_common::MediaKind;
use regex::Regex;

/// Directory named `season` with an optional trailing number.
static SEASON_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^season[ ._-]?[0-9]*$").unwrap());

/// Bare `S<number>` directory, e.g. `S1` or `s03`.
static BARE_SEASON_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^s[0-9]{1,2}$").unwrap());

/// `SxxEyy` episode token inside a filename.
static SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bs[0-9]{1,2}e[0-9]{1,3}\b").unwrap());

/// `NxM` episode token inside a filename, e.g. `1x05`.
static CROSS_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[0-9]{1,2}x[0-9]{2,3}\b").unwrap());

/// One immediate entry of a media folder, as seen by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    /// Entry file name (no path components).
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl FolderEntry {
    /// Convenience constructor for a directory entry.
    pub fn dir<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Convenience constructor for a file entry.
    pub fn file<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Classify a folder from its immediate entries.
///
/// Returns [`MediaKind::Series`] if either heuristic fires, otherwise
/// [`MediaKind::Movie`].
///
/// # Examples
///
/// ```
/// use postermark_common::MediaKind;
/// use postermark_parser::{classify_entries, FolderEntry};
///
/// let entries = [FolderEntry::dir("Season 1")];
/// assert_eq!(classify_entries(&entries), MediaKind::Series);
///
/// let entries = [FolderEntry::file("Heat (1995).mkv")];
/// assert_eq!(classify_entries(&entries), MediaKind::Movie);
/// ```
pub fn classify_entries(entries: &[FolderEntry]) -> MediaKind {
    for entry in entries {
        if entry.is_dir {
            if is_season_dir(&entry.name) {
                return MediaKind::Series;
            }
        } else if has_video_extension(&entry.name) && has_episode_token(&entry.name) {
            return MediaKind::Series;
        }
    }
    MediaKind::Movie
}

/// Check whether a directory name looks like a season folder.
fn is_season_dir(name: &str) -> bool {
    SEASON_DIR.is_match(name) || BARE_SEASON_DIR.is_match(name)
}

/// Check whether a filename carries an episode-numbering token.
fn has_episode_token(name: &str) -> bool {
    SEASON_EPISODE.is_match(name) || CROSS_EPISODE.is_match(name)
}
