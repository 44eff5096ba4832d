//! Poster compositing: base image + ratings in, encoded JPEG out.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use postermark_common::{LayoutStyle, RatingSource, Ratings};

use crate::badge::build_badges;
use crate::draw::rasterize;
use crate::error::{OverlayError, Result};
use crate::geometry::{layout, Anchor};

/// JPEG quality for re-encoded posters.
pub const JPEG_QUALITY: u8 = 90;

/// Options for one compose call.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Overlay layout style.
    pub style: LayoutStyle,
    /// Source preference order; the first three data-bearing entries become
    /// badges.
    pub preferred_sources: Vec<RatingSource>,
    /// Catalog-native community score (TMDB vote average), if available.
    pub tmdb_score: Option<f32>,
}

/// Composite a ratings overlay onto a poster image.
///
/// Decodes the base image, builds badges from `ratings` in the caller's
/// preferred order, lays them out, and alpha-composites the rasterized
/// overlay at its anchor before re-encoding as JPEG.
///
/// When no badge has data the input bytes are returned unchanged: titles
/// without ratings are not degraded by a lossy re-encode they don't need.
/// The decode still happens first, so a malformed poster is always reported
/// as [`OverlayError::Decode`].
pub fn compose(base: &[u8], ratings: &Ratings, options: &ComposeOptions) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory(base).map_err(OverlayError::Decode)?;

    let badges = build_badges(ratings, options.tmdb_score, &options.preferred_sources);
    if badges.is_empty() {
        return Ok(base.to_vec());
    }

    let (canvas_w, canvas_h) = (decoded.width(), decoded.height());
    let overlay = layout(&badges, canvas_w, canvas_h, options.style);

    let mut canvas = decoded.into_rgba8();
    if !overlay.is_empty() {
        let rendered = rasterize(&overlay);
        let y = match overlay.anchor {
            Anchor::TopLeft => 0,
            Anchor::BottomLeft => canvas_h.saturating_sub(overlay.height) as i64,
        };
        image::imageops::overlay(&mut canvas, &rendered, 0, y);
    }

    encode_jpeg(canvas)
}

/// Encode an RGBA canvas as JPEG at the fixed quality.
fn encode_jpeg(canvas: image::RgbaImage) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();
    let mut buf = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder.encode_image(&rgb).map_err(OverlayError::Encode)?;
    Ok(buf.into_inner())
}
