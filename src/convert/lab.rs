//! sRGB <-> CIE L*a*b* through CIE-XYZ with a D65 white point.

use crate::types::{Colour, Lab};

/// D65 reference white.
const WHITE_POINT: (f64, f64, f64) = (0.95047, 1.00000, 1.08883);

/// Below this, the Lab companding function is linear.
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment.
const KAPPA: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

/// Convert gamma-encoded sRGB to CIE L*a*b*.
///
/// Accepts any real channel values; nothing is clamped.
pub fn rgb_to_lab(colour: Colour) -> Lab {
    let red = to_linear_light(colour.r / 255.0);
    let green = to_linear_light(colour.g / 255.0);
    let blue = to_linear_light(colour.b / 255.0);

    let x = (red * 0.4124 + green * 0.3576 + blue * 0.1805) / WHITE_POINT.0;
    let y = (red * 0.2126 + green * 0.7152 + blue * 0.0722) / WHITE_POINT.1;
    let z = (red * 0.0193 + green * 0.1192 + blue * 0.9505) / WHITE_POINT.2;

    let (fx, fy, fz) = (compand(x), compand(y), compand(z));

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert CIE L*a*b* to gamma-encoded sRGB.
///
/// Out-of-gamut results are clipped to `0.0..=255.0` per channel.
pub fn lab_to_rgb(lab: Lab) -> Colour {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = WHITE_POINT.0 * decompand(fx);
    let y = WHITE_POINT.1 * decompand(fy);
    let z = WHITE_POINT.2 * decompand(fz);

    let red = x * 3.2406 + y * -1.5372 + z * -0.4986;
    let green = x * -0.9689 + y * 1.8758 + z * 0.0415;
    let blue = x * 0.0557 + y * -0.2040 + z * 1.0570;

    Colour::rgb(
        to_gamma_encoded(red).clamp(0.0, 1.0) * 255.0,
        to_gamma_encoded(green).clamp(0.0, 1.0) * 255.0,
        to_gamma_encoded(blue).clamp(0.0, 1.0) * 255.0,
    )
}

fn to_linear_light(value: f64) -> f64 {
    if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

fn to_gamma_encoded(value: f64) -> f64 {
    if value > 0.0031308 {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * value
    }
}

fn compand(value: f64) -> f64 {
    if value > EPSILON {
        value.cbrt()
    } else {
        KAPPA * value + OFFSET
    }
}

fn decompand(value: f64) -> f64 {
    let cubed = value * value * value;
    if cubed > EPSILON {
        cubed
    } else {
        (value - OFFSET) / KAPPA
    }
}
