//! Ordered extraction of identity fields from a folder name.
//!
//! Each step deletes the substring it matched from a working copy before the
//! next step runs, so later patterns cannot match inside an already-extracted
//! token (a `[tmdb-2020]` tag must not also produce a release year).

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ParsedName;

/// Bracketed or braced IMDb tag, e.g. `[imdb-tt0083658]` or `{imdbid=tt1}`.
static IMDB_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\[{]\s*imdb(?:id)?[-_ =:.]?\s*(tt[0-9]+)\s*[}\]]").unwrap()
});

/// Bracketed or braced TMDB tag, e.g. `[tmdbid-550]` or `{tmdb-550}`.
static TMDB_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\[{]\s*tmdb(?:id)?[-_ =:.]?\s*([0-9]+)\s*[}\]]").unwrap()
});

/// Bracketed or braced TVDB tag, e.g. `[tvdbid-73255]`.
static TVDB_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\[{]\s*tvdb(?:id)?[-_ =:.]?\s*([0-9]+)\s*[}\]]").unwrap()
});

/// Four-digit year in the 1900s or 2000s, optionally wrapped in one level of
/// brackets. Word boundaries keep it from firing inside longer digit runs.
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(\[{]?\b((?:19|20)[0-9]{2})\b[)\]}]?").unwrap());

/// Parse a raw folder name into a [`ParsedName`].
pub(crate) fn parse_name(input: &str) -> ParsedName {
    let mut working = input.to_string();

    let imdb_id = take_first(&IMDB_TAG, &mut working);
    let tmdb_id = take_first(&TMDB_TAG, &mut working);
    let tvdb_id = take_first(&TVDB_TAG, &mut working);
    let year = take_first(&YEAR, &mut working).and_then(|y| y.parse::<u16>().ok());

    ParsedName {
        title: clean_title(&working),
        year,
        imdb_id,
        tmdb_id,
        tvdb_id,
    }
}

/// Extract the first capture of `re` from `working`, deleting the whole
/// match (tag brackets included) from the string.
fn take_first(re: &Regex, working: &mut String) -> Option<String> {
    let caps = re.captures(working)?;
    let whole = caps.get(0)?;
    let value = caps.get(1)?.as_str().to_string();
    working.replace_range(whole.range(), "");
    Some(value)
}

/// Drop leftover bracket characters, collapse whitespace runs, trim ends.
fn clean_title(working: &str) -> String {
    let stripped: String = working
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '(' | ')' | '{' | '}'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
