// SPDX-License-Identifier: GPL-3.0-only

//! Static catalog of named filter effects
//!
//! Each filter is an ordered list of primitive adjustment operations that
//! the compositor appends after the manual adjustments. The catalog is
//! built once at startup and is read-only thereafter; consumers select
//! entries by id.

use std::sync::OnceLock;

/// Primitive adjustment operation
///
/// Percent-valued operations use 100 as the neutral value; amount-valued
/// operations (sepia) use 0..=100; hue rotation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp {
    /// Rotate hue by the given angle in degrees
    HueRotate(f32),
    /// Scale saturation (percent, 100 = unchanged, 0 = grayscale)
    Saturate(f32),
    /// Scale contrast around mid-gray (percent, 100 = unchanged)
    Contrast(f32),
    /// Scale brightness (percent, 100 = unchanged)
    Brightness(f32),
    /// Blend toward the sepia tone matrix (amount, 0 = off, 100 = full)
    Sepia(f32),
    /// Gaussian blur with the given sigma
    Blur(f32),
}

/// A named, immutable filter effect
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEffect {
    /// Unique id used for selection and persistence
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Ordered operations applied after the manual adjustments
    pub expression: Vec<FilterOp>,
    /// Short description shown in pickers
    pub description: &'static str,
}

static CATALOG: OnceLock<Vec<FilterEffect>> = OnceLock::new();

/// The built-in filter catalog.
pub fn catalog() -> &'static [FilterEffect] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a filter by id.
pub fn find(id: &str) -> Option<&'static FilterEffect> {
    catalog().iter().find(|f| f.id == id)
}

fn build_catalog() -> Vec<FilterEffect> {
    vec![
        FilterEffect {
            id: "mono",
            name: "Mono",
            expression: vec![FilterOp::Saturate(0.0)],
            description: "Black & white",
        },
        FilterEffect {
            id: "sepia",
            name: "Sepia",
            expression: vec![FilterOp::Sepia(80.0), FilterOp::Contrast(95.0)],
            description: "Warm brownish tint",
        },
        FilterEffect {
            id: "noir",
            name: "Noir",
            expression: vec![
                FilterOp::Saturate(0.0),
                FilterOp::Contrast(130.0),
                FilterOp::Brightness(95.0),
            ],
            description: "High contrast black & white",
        },
        FilterEffect {
            id: "vivid",
            name: "Vivid",
            expression: vec![FilterOp::Saturate(140.0), FilterOp::Contrast(110.0)],
            description: "Boosted saturation and contrast",
        },
        FilterEffect {
            id: "cool",
            name: "Cool",
            expression: vec![FilterOp::HueRotate(-15.0), FilterOp::Saturate(110.0)],
            description: "Blue temperature shift",
        },
        FilterEffect {
            id: "warm",
            name: "Warm",
            expression: vec![
                FilterOp::HueRotate(15.0),
                FilterOp::Sepia(25.0),
                FilterOp::Brightness(105.0),
            ],
            description: "Orange and amber tones",
        },
        FilterEffect {
            id: "fade",
            name: "Fade",
            expression: vec![
                FilterOp::Saturate(70.0),
                FilterOp::Contrast(85.0),
                FilterOp::Brightness(110.0),
            ],
            description: "Lifted blacks with muted colors",
        },
        FilterEffect {
            id: "dreamy",
            name: "Dreamy",
            expression: vec![
                FilterOp::Brightness(108.0),
                FilterOp::Saturate(85.0),
                FilterOp::Blur(1.2),
            ],
            description: "Soft focus glow",
        },
    ]
}
