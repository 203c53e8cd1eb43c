//! `#RRGGBBAA` hex encoding.

use picker_common::types::{Rgb, RGB_COMPONENT_MAX};
use picker_common::ColorError;

/// Number of hex digits after the `#`.
const HEX_DIGITS: usize = 8;

/// Truncate a `[0, 1]` channel to a byte. `as` saturates out-of-range input.
fn channel_byte(c: f64) -> u8 {
    (c * RGB_COMPONENT_MAX) as u8
}

/// Format a color as `#RRGGBBAA` with uppercase digits.
///
/// Channels are truncated, not rounded, so `0.999` becomes `FE`.
pub fn to_hex_string(rgb: Rgb) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        channel_byte(rgb.red),
        channel_byte(rgb.green),
        channel_byte(rgb.blue),
        channel_byte(rgb.alpha)
    )
}

/// Parse a `#RRGGBBAA` string, case-insensitive.
///
/// Either the whole string parses or an error is returned; there is no
/// partially parsed color.
pub fn parse_hex_string(s: &str) -> Result<Rgb, ColorError> {
    let digits = s.strip_prefix('#').ok_or(ColorError::MissingPrefix)?;

    if digits.len() != HEX_DIGITS {
        return Err(ColorError::InvalidLength(digits.len()));
    }
    // from_str_radix would accept a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigits(digits.to_string()));
    }

    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorError::InvalidDigits(digits.to_string()))?;
    let [r, g, b, a] = value.to_be_bytes();

    Ok(Rgb::from_rgba8(r, g, b, a))
}

/// Parse a `#RRGGBBAA` string, returning `None` on any malformed input.
pub fn from_hex_string(s: &str) -> Option<Rgb> {
    parse_hex_string(s).ok()
}
