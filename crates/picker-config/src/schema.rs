//! Configuration types for the picker.
//!
//! Every section uses `#[serde(default)]`, so a partial file (or an empty
//! one) deserializes into a complete config.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub color: ColorConfig,
    pub brightness: BrightnessConfig,
    pub logging: LoggingConfig,
}

/// Initial color of a freshly created model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// `#RRGGBBAA`.
    pub initial: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            initial: "#FFFFFFFF".into(),
        }
    }
}

/// Brightness slider presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessConfig {
    pub title: String,
    pub maximum_value: f64,
    /// Digits after the decimal point when the value is shown as text.
    pub precision: u32,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            title: "Brightness".into(),
            maximum_value: 1.0,
            precision: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The matching `tracing` filter level.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
