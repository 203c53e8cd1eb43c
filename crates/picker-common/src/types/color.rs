use serde::{Deserialize, Serialize};

/// The maximum value of an 8-bit RGB color component.
pub const RGB_COMPONENT_MAX: f64 = 255.0;

/// The maximum value of the HSB color components.
pub const HSB_COMPONENT_MAX: f64 = 1.0;

/// A color in the red-green-blue-alpha space, every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build from 8-bit channels, dividing each by 255.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            red: f64::from(r) / RGB_COMPONENT_MAX,
            green: f64::from(g) / RGB_COMPONENT_MAX,
            blue: f64::from(b) / RGB_COMPONENT_MAX,
            alpha: f64::from(a) / RGB_COMPONENT_MAX,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A color in the hue-saturation-brightness space, every field in `[0, 1]`.
///
/// Hue is circular: `0.0` and `1.0` name the same angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Hsb {
    pub const WHITE: Hsb = Hsb::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }
}

impl Default for Hsb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Color space model of a platform color, mirroring CoreGraphics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpaceModel {
    Monochrome,
    Rgb,
    Cmyk,
    Lab,
    DeviceN,
    Indexed,
    Pattern,
    Xyz,
    Unknown,
}

/// An opaque color value as handed over by the UI toolkit.
///
/// Either half may be missing; consumers decide how to treat that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformColor {
    pub space: Option<ColorSpaceModel>,
    pub components: Option<Vec<f64>>,
}

impl PlatformColor {
    pub fn new(space: Option<ColorSpaceModel>, components: Option<Vec<f64>>) -> Self {
        Self { space, components }
    }

    pub fn rgb(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            space: Some(ColorSpaceModel::Rgb),
            components: Some(vec![red, green, blue, alpha]),
        }
    }

    pub fn monochrome(white: f64, alpha: f64) -> Self {
        Self {
            space: Some(ColorSpaceModel::Monochrome),
            components: Some(vec![white, alpha]),
        }
    }
}

impl From<Rgb> for PlatformColor {
    fn from(c: Rgb) -> Self {
        Self::rgb(c.red, c.green, c.blue, c.alpha)
    }
}
