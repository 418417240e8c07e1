//! Perceptual distance between two L*a*b* colours.

use crate::types::Lab;

/// CIE94-style colour difference (ΔE) from `reference` to `sample`.
///
/// The chroma weighting factors are taken from `reference` only, so the
/// result is not symmetric: `delta_e(a, b)` and `delta_e(b, a)` generally
/// differ. Match tolerances are tuned against this exact form.
pub fn delta_e(reference: Lab, sample: Lab) -> f64 {
    let delta_l = reference.l - sample.l;
    let delta_a = reference.a - sample.a;
    let delta_b = reference.b - sample.b;

    let c1 = reference.chroma();
    let c2 = sample.chroma();
    let delta_c = c1 - c2;

    // Rounding can push this slightly below zero for near-identical hues.
    let delta_h_squared = delta_a * delta_a + delta_b * delta_b - delta_c * delta_c;
    let delta_h = if delta_h_squared < 0.0 {
        0.0
    } else {
        delta_h_squared.sqrt()
    };

    let sl = 1.0;
    let sc = 1.0 + 0.045 * c1;
    let sh = 1.0 + 0.015 * c1;

    let l_term = delta_l / sl;
    let c_term = delta_c / sc;
    let h_term = delta_h / sh;

    let sum = l_term * l_term + c_term * c_term + h_term * h_term;
    if sum < 0.0 {
        0.0
    } else {
        sum.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::rgb_to_lab;
    use crate::types::Colour;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identical_colours_have_zero_distance() {
        for lab in [
            Lab::new(0.0, 0.0, 0.0),
            Lab::new(53.2, 80.1, 67.2),
            Lab::new(32.3, 79.2, -107.9),
        ] {
            assert_eq!(delta_e(lab, lab), 0.0);
        }

        let black = rgb_to_lab(Colour::BLACK);
        assert_eq!(delta_e(black, black), 0.0);
    }

    #[test]
    fn test_black_and_white_are_far_apart() {
        let d = delta_e(rgb_to_lab(Colour::BLACK), rgb_to_lab(Colour::WHITE));
        assert!(d > 50.0);
        assert_abs_diff_eq!(d, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_lightness_is_unweighted() {
        let d = delta_e(Lab::new(60.0, 0.0, 0.0), Lab::new(40.0, 0.0, 0.0));
        assert_eq!(d, 20.0);
    }

    #[test]
    fn test_chroma_is_scaled_by_reference() {
        // Pure chroma difference along one axis: ΔH = 0, ΔC = 10.
        let d = delta_e(Lab::new(50.0, 20.0, 0.0), Lab::new(50.0, 10.0, 0.0));
        assert_abs_diff_eq!(d, 10.0 / (1.0 + 0.045 * 20.0), epsilon = 1e-12);
    }

    #[test]
    fn test_hue_difference_uses_hue_scale() {
        // Same chroma, opposite hue: ΔC = 0, ΔH = 20.
        let d = delta_e(Lab::new(50.0, 10.0, 0.0), Lab::new(50.0, -10.0, 0.0));
        assert_abs_diff_eq!(d, 20.0 / (1.0 + 0.015 * 10.0), epsilon = 1e-12);
    }

    #[test]
    fn test_is_not_symmetric() {
        let red = rgb_to_lab(Colour::rgb(255.0, 0.0, 0.0));
        let blue = rgb_to_lab(Colour::rgb(0.0, 0.0, 255.0));

        let forward = delta_e(red, blue);
        let backward = delta_e(blue, red);

        assert_abs_diff_eq!(forward, 70.576, epsilon = 1e-2);
        assert_abs_diff_eq!(backward, 61.242, epsilon = 1e-2);
    }

    #[test]
    fn test_nearby_colours_are_close() {
        let a = rgb_to_lab(Colour::rgb(255.0, 128.0, 128.0));
        let b = rgb_to_lab(Colour::rgb(255.0, 127.0, 128.0));
        let d = delta_e(a, b);
        assert!(d > 0.0 && d < 1.0);
    }
}
