//! Badge layout engine.
//!
//! Turns a badge list plus a layout style into a flat list of draw
//! instructions with the overlay's own dimensions and anchor side. No
//! rasterization happens here; the output is consumed by the rasterizer in
//! one pass.
//!
//! Layout invariants:
//!
//! - At most [`MAX_BADGES`] badges are laid out; longer input is truncated
//!   (callers are expected to pre-truncate).
//! - `BottomBar` computes all badge widths first and only then places them,
//!   so the group is centered on the canvas for any badge count. Width
//!   estimation and placement share the same text-advance helper and cannot
//!   drift apart.
//! - An empty badge list yields a zero-dimension overlay that draws nothing.

use image::Rgba;
use postermark_common::{LayoutStyle, RatingSource};

use crate::badge::{Badge, LEAF_GREEN, MAX_BADGES};
use crate::draw::text_width;

/// Text color on light badge chips (IMDb yellow).
const TEXT_DARK: Rgba<u8> = Rgba([20, 20, 20, 255]);
/// Text color on dark chips and on the bottom bar.
const TEXT_LIGHT: Rgba<u8> = Rgba([245, 245, 245, 255]);
/// Semi-opaque background band for the bottom bar.
const BAR_BACKGROUND: Rgba<u8> = Rgba([10, 10, 10, 168]);

/// Corner style: fixed left/top inset and vertical pitch per badge row.
const CORNER_INSET: i64 = 24;
const CORNER_BADGE_HEIGHT: u32 = 64;
const CORNER_ROW_PITCH: i64 = 88;

/// Bottom bar style: fixed bar height, badge height, and inter-badge gap.
const BAR_HEIGHT: u32 = 96;
const BAR_BADGE_HEIGHT: u32 = 64;
const BAR_GAP: u32 = 48;

/// Minimal style: small chips at a fixed inset with a fixed gap.
const MINIMAL_INSET: i64 = 16;
const MINIMAL_BADGE_HEIGHT: u32 = 32;
const MINIMAL_GAP: u32 = 16;

/// A single drawing primitive, positioned in overlay coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Axis-aligned filled rectangle with rounded corners.
    RoundedRect {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        radius: u32,
        color: Rgba<u8>,
    },
    /// Filled ellipse centered at (`cx`, `cy`).
    Ellipse {
        cx: i64,
        cy: i64,
        rx: u32,
        ry: u32,
        color: Rgba<u8>,
    },
    /// A run of text; `px` is the glyph height in pixels.
    Text {
        x: i64,
        y: i64,
        px: u32,
        color: Rgba<u8>,
        text: String,
    },
}

/// Which edge of the canvas the overlay is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Overlay origin at the canvas origin.
    TopLeft,
    /// Overlay bottom edge flush with the canvas bottom edge.
    BottomLeft,
}

/// An ordered draw-instruction list with its pixel dimensions and anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Draw instructions in paint order.
    pub ops: Vec<DrawOp>,
    /// Overlay width in pixels.
    pub width: u32,
    /// Overlay height in pixels.
    pub height: u32,
    /// Canvas edge the overlay is placed against.
    pub anchor: Anchor,
}

impl Overlay {
    /// The no-op overlay: zero area, zero visual contribution.
    pub fn empty() -> Self {
        Self {
            ops: Vec::new(),
            width: 0,
            height: 0,
            anchor: Anchor::TopLeft,
        }
    }

    /// Returns true if rasterizing this overlay would draw nothing.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.ops.is_empty()
    }
}

/// Lay out badges for the given canvas and style.
///
/// Input beyond [`MAX_BADGES`] badges is truncated; an empty badge list
/// returns [`Overlay::empty`].
pub fn layout(badges: &[Badge], canvas_w: u32, canvas_h: u32, style: LayoutStyle) -> Overlay {
    let badges = &badges[..badges.len().min(MAX_BADGES)];
    if badges.is_empty() {
        return Overlay::empty();
    }

    match style {
        LayoutStyle::Corner => corner_layout(badges, canvas_h),
        LayoutStyle::BottomBar => bar_layout(badges, canvas_w, canvas_h),
        LayoutStyle::Minimal => minimal_layout(badges),
    }
}

/// Vertical stack at a fixed inset, anchored top-left. The overlay height
/// depends only on the badge count (clamped to the canvas).
fn corner_layout(badges: &[Badge], canvas_h: u32) -> Overlay {
    let mut ops = Vec::new();
    let mut max_width = 0u32;

    for (i, badge) in badges.iter().enumerate() {
        let y = CORNER_INSET + i as i64 * CORNER_ROW_PITCH;
        let w = emit_badge(&mut ops, badge, CORNER_INSET, y, CORNER_BADGE_HEIGHT);
        max_width = max_width.max(w);
    }

    let height = (CORNER_INSET as u32 + badges.len() as u32 * CORNER_ROW_PITCH as u32)
        .min(canvas_h.max(1));

    Overlay {
        ops,
        width: CORNER_INSET as u32 * 2 + max_width,
        height,
        anchor: Anchor::TopLeft,
    }
}

/// Full-width semi-opaque band at the bottom edge with the badge group
/// centered horizontally. Two passes: widths first, placement second.
fn bar_layout(badges: &[Badge], canvas_w: u32, canvas_h: u32) -> Overlay {
    let bar_height = BAR_HEIGHT.min(canvas_h.max(1));
    let (start_x, _total) = bar_group(badges, canvas_w);

    let mut ops = vec![DrawOp::RoundedRect {
        x: 0,
        y: 0,
        width: canvas_w,
        height: bar_height,
        radius: 0,
        color: BAR_BACKGROUND,
    }];

    let badge_y = ((bar_height as i64 - BAR_BADGE_HEIGHT as i64) / 2).max(0);
    let mut x = start_x;
    for badge in badges {
        let w = emit_badge(&mut ops, badge, x, badge_y, BAR_BADGE_HEIGHT);
        x += w as i64 + BAR_GAP as i64;
    }

    Overlay {
        ops,
        width: canvas_w,
        height: bar_height,
        anchor: Anchor::BottomLeft,
    }
}

/// Width pass for the bottom bar: total group width and the starting x that
/// centers the group. The group may overflow a narrow canvas; centering is
/// preserved regardless.
fn bar_group(badges: &[Badge], canvas_w: u32) -> (i64, u32) {
    let widths: Vec<u32> = badges
        .iter()
        .map(|b| badge_width(b, BAR_BADGE_HEIGHT))
        .collect();
    let total: u32 =
        widths.iter().sum::<u32>() + BAR_GAP * badges.len().saturating_sub(1) as u32;
    let start_x = (canvas_w as i64 - total as i64) / 2;
    (start_x, total)
}

/// Small chips left-to-right at a fixed inset, anchored top-left.
fn minimal_layout(badges: &[Badge]) -> Overlay {
    let mut ops = Vec::new();
    let mut x = MINIMAL_INSET;

    for badge in badges {
        let w = emit_badge(&mut ops, badge, x, MINIMAL_INSET, MINIMAL_BADGE_HEIGHT);
        x += w as i64 + MINIMAL_GAP as i64;
    }

    // Trailing gap replaced by the right inset.
    let width = (x - MINIMAL_GAP as i64 + MINIMAL_INSET) as u32;

    Overlay {
        ops,
        width,
        height: MINIMAL_INSET as u32 * 2 + MINIMAL_BADGE_HEIGHT,
        anchor: Anchor::TopLeft,
    }
}

/// Compute the width one badge occupies at height `h`.
///
/// Shared by the width-accumulation pass and [`emit_badge`]; every geometric
/// decision lives in exactly one of the two so the passes stay consistent.
fn badge_width(badge: &Badge, h: u32) -> u32 {
    let px = value_px(h);
    let pad = h / 4;
    match badge.source {
        // Rounded chip: pad, label, gap, value, pad.
        RatingSource::Imdb | RatingSource::Tmdb => {
            pad + text_width(label_for(badge.source), px) + pad + text_width(&badge.value, px) + pad
        }
        // Circular icon with the value alongside.
        RatingSource::RottenTomatoes => h + pad + text_width(&badge.value, px),
        // Square chip with the value inside.
        RatingSource::Metacritic => h.max(text_width(&badge.value, px) + pad),
    }
}

/// Append the draw instructions for one badge at (`x`, `y`) with height `h`.
/// Returns the width consumed, identical to [`badge_width`].
fn emit_badge(ops: &mut Vec<DrawOp>, badge: &Badge, x: i64, y: i64, h: u32) -> u32 {
    let px = value_px(h);
    let pad = h / 4;
    let text_y = y + (h as i64 - px as i64) / 2;
    let width = badge_width(badge, h);

    match badge.source {
        RatingSource::Imdb | RatingSource::Tmdb => {
            let label = label_for(badge.source);
            let text_color = if badge.source == RatingSource::Imdb {
                TEXT_DARK
            } else {
                TEXT_LIGHT
            };
            ops.push(DrawOp::RoundedRect {
                x,
                y,
                width,
                height: h,
                radius: h / 8,
                color: badge.color,
            });
            ops.push(DrawOp::Text {
                x: x + pad as i64,
                y: text_y,
                px,
                color: text_color,
                text: label.to_string(),
            });
            ops.push(DrawOp::Text {
                x: x + (pad + text_width(label, px) + pad) as i64,
                y: text_y,
                px,
                color: text_color,
                text: badge.value.clone(),
            });
        }
        RatingSource::RottenTomatoes => {
            // Tomato body plus a small leaf; no label text inside the icon.
            let r = h / 2;
            ops.push(DrawOp::Ellipse {
                cx: x + r as i64,
                cy: y + r as i64,
                rx: r,
                ry: r,
                color: badge.color,
            });
            ops.push(DrawOp::Ellipse {
                cx: x + r as i64 + (h / 8) as i64,
                cy: y + (h / 8) as i64,
                rx: h / 6,
                ry: h / 12,
                color: LEAF_GREEN,
            });
            ops.push(DrawOp::Text {
                x: x + (h + pad) as i64,
                y: text_y,
                px,
                color: TEXT_LIGHT,
                text: badge.value.clone(),
            });
        }
        RatingSource::Metacritic => {
            // The chip itself carries the threshold band color; the value is
            // drawn inside the icon, centered.
            ops.push(DrawOp::RoundedRect {
                x,
                y,
                width,
                height: h,
                radius: h / 8,
                color: badge.color,
            });
            let value_w = text_width(&badge.value, px);
            ops.push(DrawOp::Text {
                x: x + (width as i64 - value_w as i64) / 2,
                y: text_y,
                px,
                color: TEXT_LIGHT,
                text: badge.value.clone(),
            });
        }
    }

    width
}

/// Glyph height used for badge text at badge height `h`.
///
/// Kept at a multiple of 8 so the bitmap-font advance is exact and the width
/// estimate matches the draw pass.
fn value_px(h: u32) -> u32 {
    ((h / 2) / 8).max(1) * 8
}

/// Short label text for chip-style badges.
fn label_for(source: RatingSource) -> &'static str {
    match source {
        RatingSource::Imdb => "IMDb",
        RatingSource::Tmdb => "TMDB",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(source: RatingSource, value: &str) -> Badge {
        Badge::new(source, value.to_string())
    }

    fn sample_badges(n: usize) -> Vec<Badge> {
        let all = vec![
            badge(RatingSource::Imdb, "8.5"),
            badge(RatingSource::RottenTomatoes, "87%"),
            badge(RatingSource::Metacritic, "74"),
        ];
        all.into_iter().take(n).collect()
    }

    #[test]
    fn test_empty_badges_yield_noop_overlay() {
        for style in [
            LayoutStyle::Corner,
            LayoutStyle::BottomBar,
            LayoutStyle::Minimal,
        ] {
            let overlay = layout(&[], 780, 1170, style);
            assert!(overlay.is_empty());
            assert_eq!(overlay.width, 0);
            assert_eq!(overlay.height, 0);
            assert!(overlay.ops.is_empty());
        }
    }

    #[test]
    fn test_bar_group_is_centered_for_any_count() {
        for n in 1..=3 {
            let badges = sample_badges(n);
            let (start_x, total) = bar_group(&badges, 780);
            // Group center must equal canvas center, to integer rounding.
            let center_doubled = 2 * start_x + total as i64;
            assert!(
                (center_doubled - 780).abs() <= 1,
                "off-center group for {n} badges: start={start_x} total={total}"
            );
        }
    }

    #[test]
    fn test_bar_layout_spans_canvas_width() {
        let overlay = layout(&sample_badges(2), 780, 1170, LayoutStyle::BottomBar);
        assert_eq!(overlay.width, 780);
        assert_eq!(overlay.height, 96);
        assert_eq!(overlay.anchor, Anchor::BottomLeft);

        // First op is the background band covering the full width.
        match &overlay.ops[0] {
            DrawOp::RoundedRect { x, y, width, .. } => {
                assert_eq!((*x, *y), (0, 0));
                assert_eq!(*width, 780);
            }
            other => panic!("expected background band, got {other:?}"),
        }
    }

    #[test]
    fn test_bar_group_may_overflow_narrow_canvas() {
        // Centering holds even when the group is wider than the canvas.
        let badges = sample_badges(3);
        let (start_x, total) = bar_group(&badges, 100);
        assert!(total > 100);
        assert!(start_x < 0);
        assert!((2 * start_x + total as i64 - 100).abs() <= 1);
    }

    #[test]
    fn test_corner_layout_stacks_vertically() {
        let overlay = layout(&sample_badges(3), 780, 1170, LayoutStyle::Corner);
        assert_eq!(overlay.anchor, Anchor::TopLeft);
        assert_eq!(overlay.height, 24 + 3 * 88);

        // Chip rows sit at the fixed inset and advance by the fixed pitch:
        // the IMDb chip is row 0, the Metacritic chip row 2 (the tomato in
        // between is an ellipse, not a rect).
        let chip_ys: Vec<i64> = overlay
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::RoundedRect { x: 24, y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(chip_ys, vec![24, 24 + 2 * 88]);
    }

    #[test]
    fn test_corner_height_independent_of_canvas_height() {
        let tall = layout(&sample_badges(2), 780, 1170, LayoutStyle::Corner);
        let taller = layout(&sample_badges(2), 780, 4000, LayoutStyle::Corner);
        assert_eq!(tall.height, taller.height);
    }

    #[test]
    fn test_minimal_layout_dimensions() {
        let overlay = layout(&sample_badges(2), 780, 1170, LayoutStyle::Minimal);
        assert_eq!(overlay.anchor, Anchor::TopLeft);
        assert_eq!(overlay.height, 2 * 16 + 32);
        assert!(overlay.width > 0);
        assert!(!overlay.is_empty());
    }

    #[test]
    fn test_truncates_to_three_badges() {
        let mut badges = sample_badges(3);
        badges.push(badge(RatingSource::Tmdb, "7.8"));
        let overlay = layout(&badges, 780, 1170, LayoutStyle::Minimal);

        // Only three chips' worth of instructions: no TMDB label run.
        let has_tmdb_text = overlay.ops.iter().any(|op| {
            matches!(op, DrawOp::Text { text, .. } if text == "TMDB")
        });
        assert!(!has_tmdb_text);
    }

    #[test]
    fn test_emit_width_matches_badge_width() {
        for b in sample_badges(3) {
            for h in [32, 64] {
                let mut ops = Vec::new();
                let emitted = emit_badge(&mut ops, &b, 0, 0, h);
                assert_eq!(emitted, badge_width(&b, h));
                assert!(!ops.is_empty());
            }
        }
    }

    #[test]
    fn test_value_px_is_multiple_of_eight() {
        for h in [16, 32, 48, 64, 96] {
            assert_eq!(value_px(h) % 8, 0);
        }
        assert_eq!(value_px(64), 32);
        assert_eq!(value_px(32), 16);
    }
}
