//! Media library scanner.
//!
//! Walks one level of a library root: every immediate subdirectory becomes a
//! [`MediaItem`] with its identity parsed from the folder name, its kind
//! detected from the folder contents, and a flag for an already-rendered
//! poster. Unreadable entries are logged and skipped; scanning is
//! best-effort and only fails if the library root itself cannot be read.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use postermark_common::MediaKind;
use postermark_parser::{classify_entries, parse, FolderEntry};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Filename of the rendered poster inside each media folder.
pub const POSTER_FILENAME: &str = "poster.jpg";

/// One media folder's identity, as discovered by a scan.
///
/// `folder_path` uniquely identifies the item for the lifetime of one scan;
/// `has_poster` reflects the filesystem at scan time and goes stale after
/// any later write.
#[derive(Debug, Clone)]
pub struct MediaItem {
    /// Absolute path of the media folder.
    pub folder_path: PathBuf,
    /// The folder's file name component.
    pub folder_name: String,
    /// Parsed title (may be empty for degenerate folder names).
    pub title: String,
    /// Parsed release year.
    pub year: Option<u16>,
    /// Movie or series, from the content heuristics.
    pub kind: MediaKind,
    /// IMDb ID tagged in the folder name.
    pub imdb_id: Option<String>,
    /// TMDB ID tagged in the folder name.
    pub tmdb_id: Option<String>,
    /// TVDB ID tagged in the folder name.
    pub tvdb_id: Option<String>,
    /// Whether a rendered poster already existed at scan time.
    pub has_poster: bool,
}

/// Scan a library root, producing one item per immediate subdirectory.
pub fn scan_library(root: &Path) -> Result<Vec<MediaItem>> {
    info!("Scanning library: {:?}", root);

    let mut items = Vec::new();
    let walker = WalkDir::new(root).min_depth(1).max_depth(1);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }

        match scan_folder(entry.path()) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping {:?}: {:#}", entry.path(), e),
        }
    }

    // Surface a missing/unreadable root as an error rather than an empty scan.
    if items.is_empty() {
        std::fs::read_dir(root)
            .with_context(|| format!("Failed to read library root: {:?}", root))?;
    }

    info!("Scan complete: {} items in {:?}", items.len(), root);
    Ok(items)
}

/// Build a [`MediaItem`] for one media folder.
pub fn scan_folder(folder: &Path) -> Result<MediaItem> {
    let folder_name = folder
        .file_name()
        .with_context(|| format!("Folder has no name: {:?}", folder))?
        .to_string_lossy()
        .to_string();
    let parsed = parse(&folder_name);
    let kind = detect_kind(folder);
    let has_poster = folder.join(POSTER_FILENAME).exists();

    debug!(
        "Found {:?}: title={:?} year={:?} kind={} poster={}",
        folder_name, parsed.title, parsed.year, kind, has_poster
    );

    Ok(MediaItem {
        folder_path: folder.to_path_buf(),
        folder_name,
        title: parsed.title,
        year: parsed.year,
        kind,
        imdb_id: parsed.imdb_id,
        tmdb_id: parsed.tmdb_id,
        tvdb_id: parsed.tvdb_id,
        has_poster,
    })
}

/// Classify a media folder by reading one level of its entries.
///
/// Filesystem wrapper around the pure [`classify_entries`]; read failures
/// degrade to [`MediaKind::Movie`] rather than erroring.
pub fn detect_kind(folder: &Path) -> MediaKind {
    let mut entries = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => entries.push(FolderEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: entry.file_type().is_dir(),
            }),
            Err(e) => {
                debug!("Unreadable entry while detecting {:?}: {}", folder, e);
            }
        }
    }

    classify_entries(&entries)
}
