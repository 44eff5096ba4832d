//! Badge construction from normalized ratings.
//!
//! A [`Badge`] is one renderable rating unit: the source it came from, the
//! display string, and the brand color it renders with. Badges are built
//! fresh per compose call and never mutated.

use image::Rgba;
use postermark_common::{RatingSource, Ratings};

/// Maximum number of badges ever laid out on one poster.
pub const MAX_BADGES: usize = 3;

pub const IMDB_YELLOW: Rgba<u8> = Rgba([245, 197, 24, 255]);
pub const TOMATO_RED: Rgba<u8> = Rgba([250, 50, 10, 255]);
pub const LEAF_GREEN: Rgba<u8> = Rgba([0, 166, 61, 255]);
pub const TMDB_BLUE: Rgba<u8> = Rgba([1, 180, 228, 255]);

/// Metascore band colors. The numeric cutoffs (61 and 40) match the
/// upstream site's banding and must not change.
pub const METASCORE_GOOD: Rgba<u8> = Rgba([102, 204, 51, 255]);
pub const METASCORE_MIXED: Rgba<u8> = Rgba([255, 204, 51, 255]);
pub const METASCORE_POOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// One renderable rating unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Which rating source this badge represents.
    pub source: RatingSource,
    /// Display string, e.g. `"8.5"` or `"87%"`.
    pub value: String,
    /// Fill color for the badge's icon or chip.
    pub color: Rgba<u8>,
}

impl Badge {
    /// Create a badge for a source with its display value.
    ///
    /// The color is derived from the source's brand, except for Metacritic
    /// where the value itself selects a threshold band color.
    pub fn new(source: RatingSource, value: String) -> Self {
        let color = match source {
            RatingSource::Imdb => IMDB_YELLOW,
            RatingSource::RottenTomatoes => TOMATO_RED,
            RatingSource::Metacritic => score_band_color(&value),
            RatingSource::Tmdb => TMDB_BLUE,
        };
        Self {
            source,
            value,
            color,
        }
    }
}

/// Map a score string to its threshold band color.
///
/// The score is read as a leading integer: `>= 61` is good, `40..=60` is
/// mixed, below 40 is poor. An unparsable string reads as 0 and therefore
/// lands in the poor band; that fallback is preserved from the original
/// behavior.
pub fn score_band_color(value: &str) -> Rgba<u8> {
    let score = leading_int(value);
    if score >= 61 {
        METASCORE_GOOD
    } else if score >= 40 {
        METASCORE_MIXED
    } else {
        METASCORE_POOR
    }
}

/// Parse the leading digit run of a string as an integer, defaulting to 0.
fn leading_int(value: &str) -> u32 {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Build the badge list for one compose call.
///
/// Iterates the caller's preferred source order and appends a badge for each
/// source that has data, stopping once [`MAX_BADGES`] are collected. The
/// catalog-native source only contributes when a positive score was supplied.
pub fn build_badges(
    ratings: &Ratings,
    tmdb_score: Option<f32>,
    order: &[RatingSource],
) -> Vec<Badge> {
    let mut badges = Vec::new();
    for source in order {
        if badges.len() == MAX_BADGES {
            break;
        }
        match source {
            RatingSource::Imdb => {
                if let Some(score) = &ratings.imdb {
                    badges.push(Badge::new(RatingSource::Imdb, score.value.clone()));
                }
            }
            RatingSource::RottenTomatoes => {
                if let Some(value) = &ratings.rotten_tomatoes {
                    badges.push(Badge::new(RatingSource::RottenTomatoes, format!("{value}%")));
                }
            }
            RatingSource::Metacritic => {
                if let Some(value) = &ratings.metacritic {
                    badges.push(Badge::new(RatingSource::Metacritic, value.clone()));
                }
            }
            RatingSource::Tmdb => {
                if let Some(score) = tmdb_score {
                    if score > 0.0 {
                        badges.push(Badge::new(RatingSource::Tmdb, format!("{score:.1}")));
                    }
                }
            }
        }
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use postermark_common::ImdbScore;

    #[test]
    fn test_score_band_colors() {
        assert_eq!(score_band_color("75"), METASCORE_GOOD);
        assert_eq!(score_band_color("50"), METASCORE_MIXED);
        assert_eq!(score_band_color("20"), METASCORE_POOR);
        assert_eq!(score_band_color("abc"), METASCORE_POOR);
    }

    #[test]
    fn test_score_band_boundaries() {
        assert_eq!(score_band_color("61"), METASCORE_GOOD);
        assert_eq!(score_band_color("60"), METASCORE_MIXED);
        assert_eq!(score_band_color("40"), METASCORE_MIXED);
        assert_eq!(score_band_color("39"), METASCORE_POOR);
        assert_eq!(score_band_color(""), METASCORE_POOR);
    }

    #[test]
    fn test_leading_int_stops_at_non_digit() {
        assert_eq!(leading_int("74/100"), 74);
        assert_eq!(leading_int(" 88%"), 88);
        assert_eq!(leading_int("n/a"), 0);
    }

    fn full_ratings() -> Ratings {
        Ratings {
            imdb: Some(ImdbScore {
                value: "8.5".to_string(),
                votes: Some(1_200_000),
            }),
            rotten_tomatoes: Some("87".to_string()),
            metacritic: Some("74".to_string()),
        }
    }

    #[test]
    fn test_build_badges_follows_order() {
        let order = [
            RatingSource::Metacritic,
            RatingSource::Imdb,
            RatingSource::RottenTomatoes,
        ];
        let badges = build_badges(&full_ratings(), None, &order);
        assert_eq!(badges.len(), 3);
        assert_eq!(badges[0].source, RatingSource::Metacritic);
        assert_eq!(badges[1].source, RatingSource::Imdb);
        assert_eq!(badges[2].source, RatingSource::RottenTomatoes);
        assert_eq!(badges[2].value, "87%");
    }

    #[test]
    fn test_build_badges_skips_missing_sources() {
        let ratings = Ratings {
            metacritic: Some("74".to_string()),
            ..Default::default()
        };
        let order = [
            RatingSource::Imdb,
            RatingSource::RottenTomatoes,
            RatingSource::Metacritic,
        ];
        let badges = build_badges(&ratings, None, &order);
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].source, RatingSource::Metacritic);
    }

    #[test]
    fn test_build_badges_caps_at_three() {
        let order = [
            RatingSource::Imdb,
            RatingSource::RottenTomatoes,
            RatingSource::Metacritic,
            RatingSource::Tmdb,
        ];
        let badges = build_badges(&full_ratings(), Some(7.8), &order);
        assert_eq!(badges.len(), 3);
        assert!(badges.iter().all(|b| b.source != RatingSource::Tmdb));
    }

    #[test]
    fn test_build_badges_tmdb_requires_positive_score() {
        let order = [RatingSource::Tmdb];
        assert!(build_badges(&Ratings::default(), None, &order).is_empty());
        assert!(build_badges(&Ratings::default(), Some(0.0), &order).is_empty());

        let badges = build_badges(&Ratings::default(), Some(7.8), &order);
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].value, "7.8");
    }

    #[test]
    fn test_metacritic_badge_color_follows_value() {
        let badge = Badge::new(RatingSource::Metacritic, "30".to_string());
        assert_eq!(badge.color, METASCORE_POOR);
        let badge = Badge::new(RatingSource::Metacritic, "90".to_string());
        assert_eq!(badge.color, METASCORE_GOOD);
    }
}
