//! Normalizing platform colors to RGB.

use picker_common::types::{ColorSpaceModel, PlatformColor, Rgb};
use tracing::debug;

use super::hex::to_hex_string;

/// Read RGB channels out of a monochrome or RGB platform color.
///
/// Monochrome colors replicate their white level into all three channels
/// and take the second component as alpha. Returns `None` for any other
/// space, a missing space or component list, or too few components.
fn rgb_components(color: &PlatformColor) -> Option<Rgb> {
    let space = color.space?;
    let components = color.components.as_deref()?;

    match (space, components) {
        (ColorSpaceModel::Monochrome, [white, alpha, ..]) => {
            Some(Rgb::new(*white, *white, *white, *alpha))
        }
        (ColorSpaceModel::Rgb, [red, green, blue, alpha, ..]) => {
            Some(Rgb::new(*red, *green, *blue, *alpha))
        }
        _ => None,
    }
}

/// Normalize a platform color to RGB.
///
/// Unsupported color spaces fall back to opaque white instead of failing.
pub fn extract_components(color: &PlatformColor) -> Rgb {
    rgb_components(color).unwrap_or_else(|| {
        debug!(
            space = ?color.space,
            "unsupported platform color, falling back to white"
        );
        Rgb::WHITE
    })
}

/// Hex string of a platform color, or `None` for unsupported color spaces.
pub fn hex_string_from_color(color: &PlatformColor) -> Option<String> {
    rgb_components(color).map(to_hex_string)
}
