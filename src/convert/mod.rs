//! Conversions between RGB and the other colour models.
//!
//! Every function here is pure. RGB channels are in `0.0..=255.0`, HSL and
//! HSV components in `0.0..=1.0`. Inverse conversions are exact only up to
//! floating-point rounding.
//!
//! ```rust
//! use swatch::convert::{rgb_to_hsl, hsl_to_rgb};
//! use swatch::Colour;
//!
//! let orange = Colour::rgb(210.0, 105.0, 30.0);
//! let back = hsl_to_rgb(rgb_to_hsl(orange));
//! assert!((back.r - orange.r).abs() < 1e-9);
//! ```

mod contrast;
mod hsl;
mod hsv;
mod lab;

pub use contrast::{text_colour, TextColour};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use lab::{lab_to_rgb, rgb_to_lab};

use crate::types::Colour;

/// Channels scaled down to `0.0..=1.0`.
fn normalized(colour: Colour) -> (f64, f64, f64) {
    (colour.r / 255.0, colour.g / 255.0, colour.b / 255.0)
}

/// Hue shared by HSL and HSV, as a fraction of a turn, along with the
/// smallest and largest normalized channel. Achromatic colours get hue 0.
fn hue_with_min_max(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let hue = if max == min {
        0.0
    } else if max == red {
        (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };

    (hue / 6.0, min, max)
}
