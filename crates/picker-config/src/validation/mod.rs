//! Full configuration validation.
//!
//! Collects every problem into a single `ConfigError` instead of stopping
//! at the first one.

#[cfg(test)]
mod tests;

use crate::schema::PickerConfig;
use picker_common::ConfigError;
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

/// `#RRGGBBAA`, either case.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{8}$").expect("hex color regex is valid"));

/// Whether `s` is a well-formed `#RRGGBBAA` string.
pub fn validate_hex_color(s: &str) -> bool {
    HEX_RE.is_match(s)
}

/// Record `name` as out of range unless `min <= value <= max`.
fn check_range<T: PartialOrd + Display>(
    errors: &mut Vec<String>,
    name: &str,
    value: T,
    min: T,
    max: T,
) {
    if !(min <= value && value <= max) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PickerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if !validate_hex_color(&config.color.initial) {
        errors.push(format!(
            "color.initial = {:?} is not a #RRGGBBAA color",
            config.color.initial
        ));
    }

    if config.brightness.title.trim().is_empty() {
        errors.push("brightness.title must not be empty".into());
    }
    check_range(
        &mut errors,
        "brightness.maximum_value",
        config.brightness.maximum_value,
        0.01,
        1.0,
    );
    check_range(&mut errors, "brightness.precision", config.brightness.precision, 0, 6);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
