//! Generating colours to match.

use rand::Rng;

use crate::types::Colour;

/// A target with each channel drawn independently and uniformly from
/// `0..=255`.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    let r: u8 = rng.random();
    let g: u8 = rng.random();
    let b: u8 = rng.random();
    Colour::rgb(r as f64, g as f64, b as f64)
}
