//! Normalization of raw rating-source values.
//!
//! Rating APIs report values with unit suffixes (`"87%"`, `"74/100"`,
//! `"8.5/10"`) and use sentinel strings for missing data. Normalization
//! strips the suffixes and maps sentinels to absence so the overlay layer
//! only ever sees bare number strings.

/// Normalize one raw score string.
///
/// Strips a trailing `%`, `/100`, or `/10` and surrounding whitespace.
/// Empty strings and `N/A` sentinels normalize to `None`.
pub fn normalize_score(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
        return None;
    }

    let stripped = trimmed
        .strip_suffix('%')
        .or_else(|| trimmed.strip_suffix("/100"))
        .or_else(|| trimmed.strip_suffix("/10"))
        .unwrap_or(trimmed)
        .trim();

    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Parse a vote count that may carry thousands separators, e.g. `"1,234,567"`.
pub fn normalize_votes(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
