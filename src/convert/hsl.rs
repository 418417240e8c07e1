//! RGB <-> HSL.

use super::{hue_with_min_max, normalized};
use crate::types::{Colour, Hsl};

/// Convert from RGB notation to HSL notation.
pub fn rgb_to_hsl(colour: Colour) -> Hsl {
    let (red, green, blue) = normalized(colour);
    let (hue, min, max) = hue_with_min_max(red, green, blue);

    let lightness = (max + min) / 2.0;
    let delta = max - min;

    let saturation = if max == min {
        0.0
    } else if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl::new(hue, saturation, lightness)
}

/// Convert from HSL notation to RGB notation.
pub fn hsl_to_rgb(hsl: Hsl) -> Colour {
    let Hsl {
        h: hue,
        s: saturation,
        l: lightness,
    } = hsl;

    if saturation == 0.0 {
        let gray = lightness * 255.0;
        return Colour::rgb(gray, gray, gray);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Colour::rgb(
        hue_to_channel(p, q, hue + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, hue) * 255.0,
        hue_to_channel(p, q, hue - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
