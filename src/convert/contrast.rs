//! Text colour that stays readable on top of a swatch.

use std::fmt;

use serde::Serialize;

use super::rgb_to_hsl;
use crate::types::Colour;

/// HSL lightness above which a background counts as light.
const LIGHT_BACKGROUND: f64 = 0.40;

/// Which text colour contrasts with a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColour {
    /// Dark text, for light backgrounds.
    Dark,
    /// Light text, for dark backgrounds.
    Light,
}

impl TextColour {
    /// Translucent overlay used when drawing the text.
    pub fn css(self) -> &'static str {
        match self {
            TextColour::Dark => "rgba(0,0,0,0.5)",
            TextColour::Light => "rgba(255,255,255,0.5)",
        }
    }
}

impl fmt::Display for TextColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColour::Dark => write!(f, "dark"),
            TextColour::Light => write!(f, "light"),
        }
    }
}

/// Pick the text colour for a swatch of `background`.
pub fn text_colour(background: Colour) -> TextColour {
    if rgb_to_hsl(background).l > LIGHT_BACKGROUND {
        TextColour::Dark
    } else {
        TextColour::Light
    }
}
