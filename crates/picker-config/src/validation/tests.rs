//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = PickerConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_malformed_initial_color() {
    let mut config = PickerConfig::default();
    config.color.initial = "#FFF".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("color.initial"));
}

#[test]
fn catches_initial_color_without_hash() {
    let mut config = PickerConfig::default();
    config.color.initial = "00FF00FF".into();
    assert!(validate(&config).is_err());
}

#[test]
fn catches_empty_title() {
    let mut config = PickerConfig::default();
    config.brightness.title = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("brightness.title"));
}

#[test]
fn catches_maximum_value_out_of_range() {
    let mut config = PickerConfig::default();
    config.brightness.maximum_value = 2.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("brightness.maximum_value"));

    config.brightness.maximum_value = 0.0;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_precision_too_large() {
    let mut config = PickerConfig::default();
    config.brightness.precision = 9;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("brightness.precision"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PickerConfig::default();
    config.color.initial = "red".into();
    config.brightness.precision = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("color.initial"));
    assert!(err.contains("brightness.precision"));
    assert!(err.contains("; "));
}

#[test]
fn hex_color_accepts_either_case() {
    assert!(validate_hex_color("#ff8000cc"));
    assert!(validate_hex_color("#FF8000CC"));
    assert!(!validate_hex_color("#ff8000"));
    assert!(!validate_hex_color("#ff8000ccX"));
}

#[test]
fn nan_maximum_value_is_out_of_range() {
    let mut config = PickerConfig::default();
    config.brightness.maximum_value = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("brightness.maximum_value = NaN"));
}
