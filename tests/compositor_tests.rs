// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the adjustment compositor

use image::RgbaImage;
use photobooth::compositor::{AdjustmentParams, compose, compose_with_rng};
use photobooth::errors::AppError;
use photobooth::filters;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

#[test]
fn test_neutral_params_are_identity() {
    // With neutral parameters and no filter, the output equals the input
    let source = solid(8, 8, [37, 142, 201]);
    let output = compose(&source, &AdjustmentParams::default(), None).expect("compose");
    assert_eq!(output, source);
}

#[test]
fn test_brightness_scales_channels() {
    // 128 at 120% brightness rounds to 154
    let source = solid(4, 4, [128, 128, 128]);
    let params = AdjustmentParams::default().with_brightness(120.0);
    let output = compose(&source, &params, None).expect("compose");
    assert_eq!(output.get_pixel(0, 0).0, [154, 154, 154, 255]);
}

#[test]
fn test_brightness_zero_is_black() {
    // 0% brightness drives every channel to zero, alpha untouched
    let source = solid(4, 4, [200, 100, 50]);
    let params = AdjustmentParams::default().with_brightness(0.0);
    let output = compose(&source, &params, None).expect("compose");
    assert_eq!(output.get_pixel(2, 2).0, [0, 0, 0, 255]);
}

#[test]
fn test_out_of_range_params_clamp() {
    // 500% brightness behaves like the 200% maximum
    let source = solid(4, 4, [60, 60, 60]);
    let wild = AdjustmentParams::default().with_brightness(500.0);
    let max = AdjustmentParams::default().with_brightness(200.0);
    let a = compose(&source, &wild, None).expect("compose");
    let b = compose(&source, &max, None).expect("compose");
    assert_eq!(a, b);
}

#[test]
fn test_empty_image_is_rejected() {
    // A zero-dimension source is invalid input
    let source = RgbaImage::new(0, 0);
    let err = compose(&source, &AdjustmentParams::default(), None).unwrap_err();
    assert!(matches!(err, AppError::Compose(_)));
}

#[test]
fn test_source_is_not_mutated() {
    // Compositing works on a copy; the source survives unchanged
    let source = solid(6, 6, [10, 20, 30]);
    let original = source.clone();
    let params = AdjustmentParams::default()
        .with_brightness(150.0)
        .with_vignette(80.0);
    let _ = compose(&source, &params, None).expect("compose");
    assert_eq!(source, original);
}

#[test]
fn test_grain_stays_within_strength_bound() {
    // Each channel deviates from the base value by at most the strength
    let base = 128u8;
    let strength = 40.0;
    let source = solid(32, 32, [base, base, base]);
    let params = AdjustmentParams::default().with_grain(strength);
    let mut rng = StdRng::seed_from_u64(7);
    let output = compose_with_rng(&source, &params, None, &mut rng).expect("compose");

    for pixel in output.pixels() {
        for channel in &pixel.0[..3] {
            let delta = (*channel as f32 - base as f32).abs();
            assert!(delta <= strength.ceil(), "grain exceeded bound: {delta}");
        }
        // Alpha is never touched
        assert_eq!(pixel.0[3], 255);
    }
}

#[test]
fn test_grain_is_deterministic_with_seeded_rng() {
    // The same seed yields the same noise field
    let source = solid(16, 16, [90, 90, 90]);
    let params = AdjustmentParams::default().with_grain(25.0);
    let a = compose_with_rng(&source, &params, None, &mut StdRng::seed_from_u64(42))
        .expect("compose");
    let b = compose_with_rng(&source, &params, None, &mut StdRng::seed_from_u64(42))
        .expect("compose");
    assert_eq!(a, b);
}

#[test]
fn test_fade_lifts_shadows_more_than_highlights() {
    // Fade is a screen blend with white: dark pixels rise the most and no
    // pixel gets darker
    let source = solid(2, 2, [0, 128, 255]);
    let params = AdjustmentParams::default().with_fade(60.0);
    let output = compose(&source, &params, None).expect("compose");

    let [r, g, b, _] = output.get_pixel(0, 0).0;
    assert!(r > 0, "black should lift");
    assert!(g > 128, "midtone should lift");
    assert_eq!(b, 255, "white stays white");
    let lift_dark = r as i32;
    let lift_mid = g as i32 - 128;
    assert!(lift_dark > lift_mid, "shadows lift more than midtones");
}

#[test]
fn test_vignette_darkens_corners_not_center() {
    // The center sits inside the unity radius; corners fall on the ramp
    let source = solid(64, 64, [180, 180, 180]);
    let params = AdjustmentParams::default().with_vignette(70.0);
    let output = compose(&source, &params, None).expect("compose");

    let center = output.get_pixel(32, 32).0;
    let corner = output.get_pixel(0, 0).0;
    assert_eq!(center, [180, 180, 180, 255], "center is unaffected");
    assert!(corner[0] < 180, "corner is darkened");
}

#[test]
fn test_filter_catalog_lookup() {
    // Every catalog entry resolves through find() by its own id
    for effect in filters::catalog() {
        let found = filters::find(effect.id).expect("catalog id resolves");
        assert_eq!(found.id, effect.id);
    }
    assert!(filters::find("does-not-exist").is_none());
}

#[test]
fn test_mono_filter_produces_grayscale() {
    // Full desaturation collapses channels to a single luma value
    let source = solid(4, 4, [200, 50, 90]);
    let mono = filters::find("mono").expect("mono filter exists");
    let output = compose(&source, &AdjustmentParams::default(), Some(mono)).expect("compose");

    let [r, g, b, _] = output.get_pixel(1, 1).0;
    assert_eq!(r, g);
    assert_eq!(g, b);
}
