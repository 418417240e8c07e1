//! Core domain types for swatch.
//!
//! This module contains the value types used throughout the engine:
//! - `Colour` - RGB colour values and their hex encoding
//! - `Hsl`, `Hsv`, `Lab` - the same colour in other coordinate systems
//! - `Palette` - Ordered named swatches
//! - `PickedColours` - Quantities of each swatch in the current mix

mod colour;
mod models;
mod palette;
mod picked;

pub use colour::{hex_to_rgb, rgb_to_hex, Colour, ColourKey};
pub use models::{Hsl, Hsv, Lab};
pub use palette::{Palette, PaletteBuilder, PaletteEntry};
pub use picked::PickedColours;
