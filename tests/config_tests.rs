// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use photobooth::Config;
use photobooth::constants::booth_limits;
use photobooth::media::EncodingFormat;

#[test]
fn test_config_default() {
    // Test that default config can be created
    let config = Config::default();

    // Check sensible defaults
    assert_eq!(
        config.output_format,
        EncodingFormat::Jpeg,
        "Photos should default to JPEG"
    );
    assert_eq!(config.shot_count, booth_limits::SHOTS_DEFAULT);
    assert!(config.default_filter.is_none());
}

#[test]
fn test_config_strip_labels() {
    // Test that strip labels are set
    let config = Config::default();
    assert!(
        !config.strip_caption.is_empty(),
        "Strip caption should not be empty"
    );
    assert!(
        !config.studio_label.is_empty(),
        "Studio label should not be empty"
    );
}

#[test]
fn test_config_clamps_shot_count() {
    // An out-of-range shot count is clamped, not rejected
    let mut config = Config::default();
    config.shot_count = 99;
    assert_eq!(config.clamped_shot_count(), booth_limits::SHOTS_MAX);

    config.shot_count = 0;
    assert_eq!(config.clamped_shot_count(), booth_limits::SHOTS_MIN);
}

#[test]
fn test_config_json_round_trip() {
    // A serialized config deserializes to the same values
    let mut config = Config::default();
    config.default_filter = Some("sepia".to_string());
    config.shot_count = 3;

    let json = serde_json::to_string(&config).expect("serialize");
    let restored: Config = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}
