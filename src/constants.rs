// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use serde::{Deserialize, Serialize};

/// Adjustment parameter bounds.
///
/// Brightness, contrast and saturation are percentages with 100 as the
/// neutral value. Temperature is a signed shift around 0. Grain, fade and
/// vignette are effect strengths from 0 (off) to 100 (full).
pub mod adjustment_bounds {
    /// Minimum percentage for brightness/contrast/saturation.
    pub const PERCENT_MIN: f32 = 0.0;
    /// Maximum percentage for brightness/contrast/saturation.
    pub const PERCENT_MAX: f32 = 200.0;
    /// Neutral percentage (no adjustment).
    pub const PERCENT_NEUTRAL: f32 = 100.0;
    /// Minimum temperature shift.
    pub const TEMPERATURE_MIN: f32 = -100.0;
    /// Maximum temperature shift.
    pub const TEMPERATURE_MAX: f32 = 100.0;
    /// Minimum effect strength (grain/fade/vignette).
    pub const STRENGTH_MIN: f32 = 0.0;
    /// Maximum effect strength (grain/fade/vignette).
    pub const STRENGTH_MAX: f32 = 100.0;
}

/// Hue rotation applied per unit of temperature, in degrees.
///
/// A temperature of +100 maps to a 180 degree hue rotation.
pub const TEMPERATURE_HUE_DEGREES: f32 = 1.8;

/// Photobooth session limits
pub mod booth_limits {
    /// Minimum number of shots in a session.
    pub const SHOTS_MIN: u32 = 1;
    /// Maximum number of shots in a session.
    pub const SHOTS_MAX: u32 = 5;
    /// Default number of shots.
    pub const SHOTS_DEFAULT: u32 = 4;
}

/// Countdown timer presets for the photobooth
///
/// Each shot in a session is preceded by this many one-second ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimerSetting {
    /// 3 second countdown (default)
    #[default]
    Short,
    /// 5 second countdown
    Medium,
    /// 10 second countdown
    Long,
}

impl TimerSetting {
    /// Get all preset variants for UI iteration
    pub const ALL: [TimerSetting; 3] = [
        TimerSetting::Short,
        TimerSetting::Medium,
        TimerSetting::Long,
    ];

    /// Get display name for the preset
    pub fn display_name(&self) -> &'static str {
        match self {
            TimerSetting::Short => "3s",
            TimerSetting::Medium => "5s",
            TimerSetting::Long => "10s",
        }
    }

    /// Countdown length in seconds
    pub fn seconds(&self) -> u32 {
        match self {
            TimerSetting::Short => 3,
            TimerSetting::Medium => 5,
            TimerSetting::Long => 10,
        }
    }

    /// Cycle to the next preset: Short -> Medium -> Long -> Short
    pub fn next(self) -> Self {
        match self {
            TimerSetting::Short => TimerSetting::Medium,
            TimerSetting::Medium => TimerSetting::Long,
            TimerSetting::Long => TimerSetting::Short,
        }
    }
}

/// Strip layout geometry
///
/// The strip has a fixed width. Photos stack vertically between a header
/// band (caption and date) and a footer band (studio label), with
/// perforation marks along both edges. Cells are 4:3; sources are scaled
/// to cover the cell and center-cropped.
pub mod strip_layout {
    /// Total strip width in pixels.
    pub const STRIP_WIDTH: u32 = 480;
    /// Side margin reserved for the border and perforations.
    pub const SIDE_MARGIN: u32 = 40;
    /// Photo cell width (strip width minus both margins).
    pub const PHOTO_WIDTH: u32 = STRIP_WIDTH - 2 * SIDE_MARGIN;
    /// Photo cell height (4:3 aspect).
    pub const PHOTO_HEIGHT: u32 = PHOTO_WIDTH * 3 / 4;
    /// Vertical spacing below each photo cell.
    pub const PHOTO_SPACING: u32 = 16;
    /// Header band height.
    pub const HEADER_HEIGHT: u32 = 72;
    /// Footer band height.
    pub const FOOTER_HEIGHT: u32 = 56;
    /// Number of perforation marks along each edge.
    pub const PERFORATION_COUNT: u32 = 12;
    /// Perforation mark radius in pixels.
    pub const PERFORATION_RADIUS: u32 = 6;
    /// Horizontal inset of perforation centers from the strip edge.
    pub const PERFORATION_INSET: u32 = 18;

    /// Total strip height for a given shot count.
    pub const fn strip_height(shot_count: u32) -> u32 {
        HEADER_HEIGHT + shot_count * (PHOTO_HEIGHT + PHOTO_SPACING) + FOOTER_HEIGHT
    }
}
