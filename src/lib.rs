//! swatch - colour conversion, perceptual distance and paint-style mixing
//!
//! Converts between RGB, HSL, HSV and CIE L*a*b*, mixes picked colours by
//! quantity and scores a mix against a target with a CIE94-style ΔE.

pub mod cli;
pub mod config;
pub mod convert;
pub mod distance;
pub mod error;
pub mod logging;
pub mod matching;
pub mod mixer;
pub mod output;
pub mod target;
pub mod types;

pub use config::Config;
pub use convert::{
    hsl_to_rgb, hsv_to_rgb, lab_to_rgb, rgb_to_hsl, rgb_to_hsv, rgb_to_lab, text_colour,
    TextColour,
};
pub use distance::delta_e;
pub use error::{Result, SwatchError};
pub use matching::{evaluate, MatchResult, MATCH_TOLERANCE, MAX_DIFFERENCE};
pub use mixer::{add_picked_colour, calculate_colour, remove_picked_colour};
pub use target::random_target;
pub use types::{
    hex_to_rgb, rgb_to_hex, Colour, ColourKey, Hsl, Hsv, Lab, Palette, PaletteBuilder,
    PaletteEntry, PickedColours,
};
