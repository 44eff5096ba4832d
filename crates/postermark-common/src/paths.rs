//! Path utilities for detecting file types by extension.
//!
//! Used by the scanner to filter directory entries and by the media-kind
//! detector to decide which filenames are worth checking for episode tokens.

use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv",
];

/// List of supported image file extensions.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp"];

/// Check if a filename string ends in a video file extension.
///
/// # Examples
///
/// ```
/// use postermark_common::paths::has_video_extension;
///
/// assert!(has_video_extension("Pilot.S01E01.mkv"));
/// assert!(!has_video_extension("poster.jpg"));
/// ```
pub fn has_video_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use postermark_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("/path/to/movie.mp4")));
/// assert!(!is_video_file(Path::new("subtitle.srt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if a path has an image file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use postermark_common::paths::is_image_file;
///
/// assert!(is_image_file(Path::new("poster.jpg")));
/// assert!(!is_image_file(Path::new("video.mkv")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Get the list of video file extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_video_extension() {
        assert!(has_video_extension("movie.mkv"));
        assert!(has_video_extension("movie.MP4"));
        assert!(has_video_extension("show.s01e01.webm"));
        assert!(!has_video_extension("movie"));
        assert!(!has_video_extension("notes.txt"));
        assert!(!has_video_extension(""));
    }

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file(Path::new("movie.mkv")));
        assert!(is_video_file(Path::new("/path/to/movie.Mp4")));
        assert!(is_video_file(Path::new("movie.1080p.avi")));
        assert!(!is_video_file(Path::new("poster.jpg")));
        assert!(!is_video_file(Path::new("no_extension")));
        assert!(!is_video_file(Path::new("")));
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("poster.jpg")));
        assert!(is_image_file(Path::new("poster.JPEG")));
        assert!(is_image_file(Path::new("backdrop.png")));
        assert!(!is_image_file(Path::new("movie.mkv")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn test_video_extensions_list() {
        let exts = video_extensions();
        assert!(exts.contains(&"mkv"));
        assert!(exts.contains(&"mp4"));
    }
}
