// SPDX-License-Identifier: GPL-3.0-only

//! Stochastic and spatial effect passes: grain, fade, vignette
//!
//! These run after the colorimetric pass, in this order. All three work
//! in f32 and store with round-to-nearest; alpha is never touched.

use image::RgbaImage;
use rand::Rng;

/// Add uniform per-channel noise in `[-strength, +strength]`.
///
/// Each channel of each pixel gets an independent offset, so the output
/// is not reproducible across runs unless the caller seeds the RNG.
pub fn apply_grain<R: Rng + ?Sized>(image: &mut RgbaImage, strength: f32, rng: &mut R) {
    if strength <= 0.0 {
        return;
    }
    for pixel in image.pixels_mut() {
        for c in 0..3 {
            let offset: f32 = rng.random_range(-strength..=strength);
            pixel[c] = (pixel[c] as f32 + offset).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Screen-blend a uniform white overlay at intensity `strength / 200`.
///
/// Screening a channel `c` with white at level `w` gives
/// `c + w * (255 - c) / 255`; with `w = 255 * a` this reduces to
/// `c + a * (255 - c)`, so `strength = 100` lifts every channel halfway
/// to white.
pub fn apply_fade(image: &mut RgbaImage, strength: f32) {
    if strength <= 0.0 {
        return;
    }
    let alpha = strength / 200.0;
    for pixel in image.pixels_mut() {
        for c in 0..3 {
            let v = pixel[c] as f32;
            pixel[c] = (v + alpha * (255.0 - v)).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Multiply by a radial edge-darkening mask.
///
/// The mask is 1.0 from the center out to 70% of the center-to-corner
/// distance, then ramps linearly toward `1 - strength / 100` at the
/// corner. Center pixels are never affected.
pub fn apply_vignette(image: &mut RgbaImage, strength: f32) {
    if strength <= 0.0 {
        return;
    }
    let (width, height) = image.dimensions();
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt().max(1.0);
    let darkening = strength / 100.0;

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let d = (dx * dx + dy * dy).sqrt() / max_dist;
        if d <= 0.7 {
            continue;
        }
        let ramp = ((d - 0.7) / 0.3).min(1.0);
        let mask = 1.0 - ramp * darkening;
        for c in 0..3 {
            pixel[c] = (pixel[c] as f32 * mask).round().clamp(0.0, 255.0) as u8;
        }
    }
}
