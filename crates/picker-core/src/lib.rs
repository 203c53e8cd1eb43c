//! Color conversion and value synchronization for an HSB color picker.
//!
//! [`color_space`] holds the pure conversions between RGB, HSB and the
//! `#RRGGBBAA` text form. [`model`] owns the canonical color and merges
//! partial edits from the hue/saturation wheel and the brightness slider.

pub mod color_space;
pub mod model;

pub use color_space::{
    extract_components, from_hex_string, hex_string_from_color, hsb_to_rgb, parse_hex_string,
    rgb_to_hsb, to_hex_string,
};
pub use model::{
    BrightnessSliderDisplay, ColorModel, ColorSampleDisplay, ColorViewDelegate, EventBusDelegate,
    Gradient, PartialUpdate, WheelDisplay,
};
