//! Rasterizer for overlay draw instructions.
//!
//! Paints [`DrawOp`]s into a transparent RGBA buffer with src-over blending.
//! Text uses the 8x8 bitmap font scaled by an integer factor, which makes
//! every glyph advance exact: the layout engine's width estimates are
//! computed with the same [`text_width`] helper used here.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Pixel, Rgba, RgbaImage};

use crate::geometry::{DrawOp, Overlay};

/// Integer scale factor for glyphs at height `px`.
fn glyph_scale(px: u32) -> u32 {
    (px / 8).max(1)
}

/// Horizontal advance of one glyph at height `px`.
fn glyph_advance(px: u32) -> u32 {
    glyph_scale(px) * 8
}

/// Exact rendered width of a text run at height `px`.
pub(crate) fn text_width(text: &str, px: u32) -> u32 {
    text.chars().count() as u32 * glyph_advance(px)
}

/// Rasterize an overlay into a fresh transparent buffer.
pub(crate) fn rasterize(overlay: &Overlay) -> RgbaImage {
    let mut img = RgbaImage::new(overlay.width, overlay.height);

    for op in &overlay.ops {
        match op {
            DrawOp::RoundedRect {
                x,
                y,
                width,
                height,
                radius,
                color,
            } => fill_rounded_rect(&mut img, *x, *y, *width, *height, *radius, *color),
            DrawOp::Ellipse {
                cx,
                cy,
                rx,
                ry,
                color,
            } => fill_ellipse(&mut img, *cx, *cy, *rx, *ry, *color),
            DrawOp::Text {
                x,
                y,
                px,
                color,
                text,
            } => draw_text(&mut img, *x, *y, *px, *color, text),
        }
    }

    img
}

/// Blend one pixel src-over, ignoring out-of-bounds coordinates.
fn blend_at(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    img.get_pixel_mut(x as u32, y as u32).blend(&color);
}

/// Fill an axis-aligned rectangle with circular corner cutouts.
fn fill_rounded_rect(
    img: &mut RgbaImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgba<u8>,
) {
    let r = radius.min(width / 2).min(height / 2) as f32;

    for py in 0..height as i64 {
        for px in 0..width as i64 {
            if inside_rounded(px, py, width, height, r) {
                blend_at(img, x + px, y + py, color);
            }
        }
    }
}

/// Pixel-center inclusion test for a rounded rectangle in local coordinates.
fn inside_rounded(px: i64, py: i64, width: u32, height: u32, r: f32) -> bool {
    if r <= 0.0 {
        return true;
    }
    let fx = px as f32 + 0.5;
    let fy = py as f32 + 0.5;
    let w = width as f32;
    let h = height as f32;

    // Nearest corner circle center, if the pixel lies in a corner square.
    let cx = if fx < r {
        r
    } else if fx > w - r {
        w - r
    } else {
        return true;
    };
    let cy = if fy < r {
        r
    } else if fy > h - r {
        h - r
    } else {
        return true;
    };

    let dx = fx - cx;
    let dy = fy - cy;
    dx * dx + dy * dy <= r * r
}

/// Fill an ellipse centered at (`cx`, `cy`) with radii `rx`, `ry`.
fn fill_ellipse(img: &mut RgbaImage, cx: i64, cy: i64, rx: u32, ry: u32, color: Rgba<u8>) {
    if rx == 0 || ry == 0 {
        return;
    }
    let rxf = rx as f32;
    let ryf = ry as f32;

    for py in -(ry as i64)..=(ry as i64) {
        for px in -(rx as i64)..=(rx as i64) {
            let nx = px as f32 / rxf;
            let ny = py as f32 / ryf;
            if nx * nx + ny * ny <= 1.0 {
                blend_at(img, cx + px, cy + py, color);
            }
        }
    }
}

/// Draw a text run with the scaled bitmap font. Glyphs outside the basic
/// set advance the pen without painting.
fn draw_text(img: &mut RgbaImage, x: i64, y: i64, px: u32, color: Rgba<u8>, text: &str) {
    let scale = glyph_scale(px) as i64;
    let advance = glyph_advance(px) as i64;
    let mut pen_x = x;

    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..8u32 {
                    if bits & (1u8 << col) == 0 {
                        continue;
                    }
                    for dy in 0..scale {
                        for dx in 0..scale {
                            blend_at(
                                img,
                                pen_x + col as i64 * scale + dx,
                                y + row as i64 * scale + dy,
                                color,
                            );
                        }
                    }
                }
            }
        }
        pen_x += advance;
    }
}
