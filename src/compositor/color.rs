// SPDX-License-Identifier: GPL-3.0-only

//! Per-pixel colorimetric operations
//!
//! Each operation maps an (r, g, b) triple in 0.0..=255.0 to a new triple,
//! clamping after every step so later operations see in-range values.
//! Luma weights match the Rec. 601 coefficients used elsewhere in the
//! pipeline (0.299 / 0.587 / 0.114).

use crate::filters::FilterOp;

/// Apply a sequence of per-pixel operations to one RGB triple.
///
/// Blur operations are spatial and are skipped here; the compositor
/// applies them as a separate pass.
pub fn apply_ops(ops: &[FilterOp], r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let mut rgb = (r, g, b);
    for op in ops {
        rgb = match *op {
            FilterOp::Brightness(pct) => scale(rgb, pct / 100.0),
            FilterOp::Contrast(pct) => contrast(rgb, pct / 100.0),
            FilterOp::Saturate(pct) => saturate(rgb, pct / 100.0),
            FilterOp::HueRotate(deg) => hue_rotate(rgb, deg),
            FilterOp::Sepia(amount) => sepia(rgb, amount / 100.0),
            FilterOp::Blur(_) => rgb,
        };
    }
    rgb
}

fn clamp3((r, g, b): (f32, f32, f32)) -> (f32, f32, f32) {
    (
        r.clamp(0.0, 255.0),
        g.clamp(0.0, 255.0),
        b.clamp(0.0, 255.0),
    )
}

fn scale((r, g, b): (f32, f32, f32), factor: f32) -> (f32, f32, f32) {
    clamp3((r * factor, g * factor, b * factor))
}

fn contrast((r, g, b): (f32, f32, f32), factor: f32) -> (f32, f32, f32) {
    clamp3((
        (r - 128.0) * factor + 128.0,
        (g - 128.0) * factor + 128.0,
        (b - 128.0) * factor + 128.0,
    ))
}

fn saturate((r, g, b): (f32, f32, f32), factor: f32) -> (f32, f32, f32) {
    let gray = 0.299 * r + 0.587 * g + 0.114 * b;
    clamp3((
        gray + (r - gray) * factor,
        gray + (g - gray) * factor,
        gray + (b - gray) * factor,
    ))
}

/// Hue rotation via the luma-preserving rotation matrix used by CSS
/// `hue-rotate()`.
fn hue_rotate((r, g, b): (f32, f32, f32), degrees: f32) -> (f32, f32, f32) {
    let rad = degrees.to_radians();
    let cos = rad.cos();
    let sin = rad.sin();

    let nr = (0.213 + cos * 0.787 - sin * 0.213) * r
        + (0.715 - cos * 0.715 - sin * 0.715) * g
        + (0.072 - cos * 0.072 + sin * 0.928) * b;
    let ng = (0.213 - cos * 0.213 + sin * 0.143) * r
        + (0.715 + cos * 0.285 + sin * 0.140) * g
        + (0.072 - cos * 0.072 - sin * 0.283) * b;
    let nb = (0.213 - cos * 0.213 - sin * 0.787) * r
        + (0.715 - cos * 0.715 + sin * 0.715) * g
        + (0.072 + cos * 0.928 + sin * 0.072) * b;

    clamp3((nr, ng, nb))
}

/// Blend toward the sepia tone matrix by `amount` (0.0 = unchanged,
/// 1.0 = full sepia).
fn sepia((r, g, b): (f32, f32, f32), amount: f32) -> (f32, f32, f32) {
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    clamp3((
        r + (sr - r) * amount,
        g + (sg - g) * amount,
        b + (sb - b) * amount,
    ))
}
