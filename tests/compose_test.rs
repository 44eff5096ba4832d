//! End-to-end compositing tests over the public overlay API.

use std::io::Cursor;

use postermark_common::{ImdbScore, LayoutStyle, RatingSource, Ratings};
use postermark_overlay::{compose, ComposeOptions, OverlayError};

/// Build an in-memory JPEG of a solid color.
fn test_jpeg(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Jpeg)
        .unwrap();
    buf.into_inner()
}

fn bottom_bar_options() -> ComposeOptions {
    ComposeOptions {
        style: LayoutStyle::BottomBar,
        preferred_sources: vec![
            RatingSource::Imdb,
            RatingSource::RottenTomatoes,
            RatingSource::Metacritic,
        ],
        tmdb_score: None,
    }
}

#[test]
fn bottom_bar_single_badge_end_to_end() {
    // 780x1170 poster, a single IMDb score, bottom bar style.
    let base = test_jpeg(780, 1170, [250, 250, 250]);
    let ratings = Ratings {
        imdb: Some(ImdbScore {
            value: "8.5".to_string(),
            votes: None,
        }),
        ..Default::default()
    };

    let out = compose(&base, &ratings, &bottom_bar_options()).unwrap();
    assert_ne!(out, base);

    let decoded = image::load_from_memory(&out).unwrap().into_rgb8();

    // Dimensions unchanged.
    assert_eq!(decoded.width(), 780);
    assert_eq!(decoded.height(), 1170);

    // The bottom band is darkened by the semi-opaque bar.
    let band = decoded.get_pixel(50, 1120);
    assert!(band[0] < 130, "band not darkened: {:?}", band);

    // The single IMDb chip sits centered in the band: a yellow pixel just
    // inside its left edge.
    let chip = decoded.get_pixel(260, 1120);
    assert!(
        chip[0] > 180 && chip[2] < 130,
        "expected yellow chip pixel at band center, got {:?}",
        chip
    );

    // Above the band the poster is untouched apart from JPEG noise.
    let above = decoded.get_pixel(390, 500);
    assert!(above[0] > 220, "poster body changed: {:?}", above);
}

#[test]
fn zero_ratings_are_a_byte_identical_passthrough() {
    let base = test_jpeg(780, 1170, [250, 250, 250]);
    let out = compose(&base, &Ratings::default(), &bottom_bar_options()).unwrap();
    assert_eq!(out, base);
}

#[test]
fn undecodable_poster_is_a_decode_error() {
    let ratings = Ratings {
        imdb: Some(ImdbScore {
            value: "8.5".to_string(),
            votes: None,
        }),
        ..Default::default()
    };
    let err = compose(b"\xff\xd8not really a jpeg", &ratings, &bottom_bar_options()).unwrap_err();
    assert!(matches!(err, OverlayError::Decode(_)));
}

#[test]
fn all_styles_preserve_dimensions() {
    let base = test_jpeg(600, 900, [128, 128, 128]);
    let ratings = Ratings {
        rotten_tomatoes: Some("87".to_string()),
        metacritic: Some("74".to_string()),
        ..Default::default()
    };

    for style in [
        LayoutStyle::Corner,
        LayoutStyle::BottomBar,
        LayoutStyle::Minimal,
    ] {
        let options = ComposeOptions {
            style,
            ..bottom_bar_options()
        };
        let out = compose(&base, &ratings, &options).unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!(decoded.width(), 600, "width changed for {style:?}");
        assert_eq!(decoded.height(), 900, "height changed for {style:?}");
    }
}
