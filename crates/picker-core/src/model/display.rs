//! Display snapshots handed to the UI widgets.
//!
//! These are plain data. Refreshing one never calls back into the model.

use serde::Serialize;

use picker_common::types::{Hsb, PlatformColor, Rgb, HSB_COMPONENT_MAX};

use crate::color_space::{hex_string_from_color, hsb_to_rgb};

/// Two-stop gradient drawn behind the brightness slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    /// Black to the current hue and saturation at full brightness.
    pub fn for_brightness(components: Hsb) -> Self {
        Self {
            start: Rgb::BLACK,
            end: hsb_to_rgb(Hsb::new(components.hue, components.saturation, 1.0, 1.0)),
        }
    }
}

/// What the hue/saturation wheel shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelDisplay {
    pub hue: f64,
    pub saturation: f64,
    pub revision: u64,
}

impl WheelDisplay {
    pub(crate) fn new(components: Hsb) -> Self {
        Self {
            hue: components.hue,
            saturation: components.saturation,
            revision: 0,
        }
    }

    pub(crate) fn reload(&mut self, components: Hsb) {
        self.hue = components.hue;
        self.saturation = components.saturation;
        self.revision += 1;
    }
}

/// What the brightness slider shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrightnessSliderDisplay {
    pub title: String,
    pub value: f64,
    pub maximum_value: f64,
    pub precision: usize,
    pub gradient: Gradient,
    pub revision: u64,
}

impl BrightnessSliderDisplay {
    pub(crate) fn new(components: Hsb) -> Self {
        Self {
            title: "Brightness".into(),
            value: components.brightness,
            maximum_value: HSB_COMPONENT_MAX,
            precision: 2,
            gradient: Gradient::for_brightness(components),
            revision: 0,
        }
    }

    pub(crate) fn reload(&mut self, components: Hsb) {
        self.value = components.brightness;
        self.gradient = Gradient::for_brightness(components);
        self.revision += 1;
    }

    /// Slider value as text, e.g. `"0.50"`.
    pub fn formatted_value(&self) -> String {
        format!("{:.*}", self.precision, self.value)
    }
}

/// The swatch showing the resolved color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSampleDisplay {
    pub color: Rgb,
    pub hex: Option<String>,
    pub revision: u64,
}

impl ColorSampleDisplay {
    pub(crate) fn new(color: Rgb) -> Self {
        Self {
            color,
            hex: hex_string_from_color(&PlatformColor::from(color)),
            revision: 0,
        }
    }

    pub(crate) fn reload(&mut self, color: Rgb) {
        self.color = color;
        self.hex = hex_string_from_color(&PlatformColor::from(color));
        self.revision += 1;
    }
}
