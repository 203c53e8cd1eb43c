//! RGB <-> HSB conversion.

use picker_common::types::{Hsb, Rgb};

/// Convert an RGB color to HSB.
///
/// Achromatic colors (gray, black, white) get hue `0`. Black gets
/// saturation `0` rather than dividing by zero.
pub fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let hue = if max == min {
        0.0
    } else {
        let sector = if max == r {
            // keep the red sector non-negative across the wrap point
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        sector / 6.0
    };

    Hsb {
        hue,
        saturation,
        brightness: max,
        alpha: rgb.alpha,
    }
}

/// Convert an HSB color to RGB.
///
/// `hue == 1.0` lands in sector 0, the same as `hue == 0.0`.
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let Hsb {
        hue,
        saturation: s,
        brightness: v,
        alpha,
    } = hsb;

    let scaled = hue * 6.0;
    let whole = scaled.floor();
    let fraction = scaled - whole;

    let p = v * (1.0 - s);
    let q = v * (1.0 - fraction * s);
    let t = v * (1.0 - (1.0 - fraction) * s);

    let (red, green, blue) = match (whole as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        red,
        green,
        blue,
        alpha,
    }
}
