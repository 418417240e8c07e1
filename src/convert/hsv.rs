//! RGB <-> HSV.

use super::{hue_with_min_max, normalized};
use crate::types::{Colour, Hsv};

/// Convert from RGB notation to HSV notation.
pub fn rgb_to_hsv(colour: Colour) -> Hsv {
    let (red, green, blue) = normalized(colour);
    let (hue, min, max) = hue_with_min_max(red, green, blue);

    let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

    Hsv::new(hue, saturation, max)
}

/// Convert from HSV notation to RGB notation.
pub fn hsv_to_rgb(hsv: Hsv) -> Colour {
    let Hsv {
        h: hue,
        s: saturation,
        v: value,
    } = hsv;

    let sector = (hue * 6.0).floor();
    let f = hue * 6.0 - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (red, green, blue) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Colour::rgb(red * 255.0, green * 255.0, blue * 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use palette::{IntoColor, Srgb};

    fn assert_colour_eq(actual: Colour, expected: Colour) {
        assert_abs_diff_eq!(actual.r, expected.r, epsilon = 1e-6);
        assert_abs_diff_eq!(actual.g, expected.g, epsilon = 1e-6);
        assert_abs_diff_eq!(actual.b, expected.b, epsilon = 1e-6);
    }

    #[test]
    fn test_black_has_zero_saturation() {
        assert_eq!(rgb_to_hsv(Colour::BLACK), Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_value_is_max_channel() {
        let hsv = rgb_to_hsv(Colour::rgb(51.0, 102.0, 204.0));
        assert_abs_diff_eq!(hsv.v, 0.8, epsilon = 1e-9);
        assert_abs_diff_eq!(hsv.s, 0.75, epsilon = 1e-9);
        assert_abs_diff_eq!(hsv.h, 220.0 / 360.0, epsilon = 1e-9);
    }

    #[test]
    fn test_every_sector_maps_back() {
        // One hue in the middle of each sixth of the wheel.
        for sector in 0..6 {
            let h = (sector as f64 + 0.5) / 6.0;
            let c = hsv_to_rgb(Hsv::new(h, 1.0, 1.0));
            assert_abs_diff_eq!(rgb_to_hsv(c).h, h, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_full_turn_is_red() {
        assert_colour_eq(
            hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)),
            Colour::rgb(255.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_round_trip_is_within_epsilon() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let c = Colour::rgb(r as f64, g as f64, b as f64);
                    assert_colour_eq(hsv_to_rgb(rgb_to_hsv(c)), c);
                }
            }
        }
    }

    #[test]
    fn test_agrees_with_palette_crate() {
        for (r, g, b) in [(210, 105, 30), (18, 200, 97), (240, 16, 180), (3, 4, 250)] {
            let ours = rgb_to_hsv(Colour::rgb(r as f64, g as f64, b as f64));
            let theirs: palette::Hsv<palette::encoding::Srgb, f64> =
                Srgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0).into_color();

            assert_abs_diff_eq!(
                ours.h * 360.0,
                theirs.hue.into_positive_degrees(),
                epsilon = 1e-6
            );
            assert_abs_diff_eq!(ours.s, theirs.saturation, epsilon = 1e-6);
            assert_abs_diff_eq!(ours.v, theirs.value, epsilon = 1e-6);
        }
    }
}
