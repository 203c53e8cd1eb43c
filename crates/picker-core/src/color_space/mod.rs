//! Conversions between RGB, HSB, platform colors and hex strings.
//!
//! All functions are pure. Inputs outside `[0, 1]` are not validated.

mod components;
mod convert;
mod hex;


pub use components::{extract_components, hex_string_from_color};
pub use convert::{hsb_to_rgb, rgb_to_hsb};
pub use hex::{from_hex_string, parse_hex_string, to_hex_string};

use picker_common::types::{Hsb, Rgb};

/// Method-style access to the RGB conversions.
pub trait RgbExt {
    fn to_hsb(&self) -> Hsb;
    fn to_hex_string(&self) -> String;
}

/// Method-style access to the HSB conversions.
pub trait HsbExt {
    fn to_rgb(&self) -> Rgb;
}

impl RgbExt for Rgb {
    fn to_hsb(&self) -> Hsb {
        rgb_to_hsb(*self)
    }

    fn to_hex_string(&self) -> String {
        to_hex_string(*self)
    }
}

impl HsbExt for Hsb {
    fn to_rgb(&self) -> Rgb {
        hsb_to_rgb(*self)
    }
}
