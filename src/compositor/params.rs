// SPDX-License-Identifier: GPL-3.0-only

//! Adjustment parameter set
//!
//! All fields are clamped to their documented ranges on construction and
//! on mutation, so downstream code never sees out-of-range values.

use crate::constants::adjustment_bounds as bounds;

/// Manual adjustment parameters for a compose pass.
///
/// Brightness, contrast and saturation are percentages (100 = neutral).
/// Temperature is a signed shift (0 = neutral) mapped to a hue rotation.
/// Grain, fade and vignette are effect strengths (0 = off).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentParams {
    brightness: f32,
    contrast: f32,
    saturation: f32,
    temperature: f32,
    grain: f32,
    fade: f32,
    vignette: f32,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            brightness: bounds::PERCENT_NEUTRAL,
            contrast: bounds::PERCENT_NEUTRAL,
            saturation: bounds::PERCENT_NEUTRAL,
            temperature: 0.0,
            grain: 0.0,
            fade: 0.0,
            vignette: 0.0,
        }
    }
}

impl AdjustmentParams {
    /// Create a parameter set, clamping every field to its valid range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brightness: f32,
        contrast: f32,
        saturation: f32,
        temperature: f32,
        grain: f32,
        fade: f32,
        vignette: f32,
    ) -> Self {
        Self {
            brightness: brightness.clamp(bounds::PERCENT_MIN, bounds::PERCENT_MAX),
            contrast: contrast.clamp(bounds::PERCENT_MIN, bounds::PERCENT_MAX),
            saturation: saturation.clamp(bounds::PERCENT_MIN, bounds::PERCENT_MAX),
            temperature: temperature.clamp(bounds::TEMPERATURE_MIN, bounds::TEMPERATURE_MAX),
            grain: grain.clamp(bounds::STRENGTH_MIN, bounds::STRENGTH_MAX),
            fade: fade.clamp(bounds::STRENGTH_MIN, bounds::STRENGTH_MAX),
            vignette: vignette.clamp(bounds::STRENGTH_MIN, bounds::STRENGTH_MAX),
        }
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn grain(&self) -> f32 {
        self.grain
    }

    pub fn fade(&self) -> f32 {
        self.fade
    }

    pub fn vignette(&self) -> f32 {
        self.vignette
    }

    /// Builder-style setters, each clamping its field.
    pub fn with_brightness(mut self, value: f32) -> Self {
        self.brightness = value.clamp(bounds::PERCENT_MIN, bounds::PERCENT_MAX);
        self
    }

    pub fn with_contrast(mut self, value: f32) -> Self {
        self.contrast = value.clamp(bounds::PERCENT_MIN, bounds::PERCENT_MAX);
        self
    }

    pub fn with_saturation(mut self, value: f32) -> Self {
        self.saturation = value.clamp(bounds::PERCENT_MIN, bounds::PERCENT_MAX);
        self
    }

    pub fn with_temperature(mut self, value: f32) -> Self {
        self.temperature = value.clamp(bounds::TEMPERATURE_MIN, bounds::TEMPERATURE_MAX);
        self
    }

    pub fn with_grain(mut self, value: f32) -> Self {
        self.grain = value.clamp(bounds::STRENGTH_MIN, bounds::STRENGTH_MAX);
        self
    }

    pub fn with_fade(mut self, value: f32) -> Self {
        self.fade = value.clamp(bounds::STRENGTH_MIN, bounds::STRENGTH_MAX);
        self
    }

    pub fn with_vignette(mut self, value: f32) -> Self {
        self.vignette = value.clamp(bounds::STRENGTH_MIN, bounds::STRENGTH_MAX);
        self
    }

    /// Whether every field is at its neutral value.
    ///
    /// Neutral parameters make the compositor's linear pass a no-op.
    pub fn is_neutral(&self) -> bool {
        self.brightness == bounds::PERCENT_NEUTRAL
            && self.contrast == bounds::PERCENT_NEUTRAL
            && self.saturation == bounds::PERCENT_NEUTRAL
            && self.temperature == 0.0
            && self.grain == 0.0
            && self.fade == 0.0
            && self.vignette == 0.0
    }
}
