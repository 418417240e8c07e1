//! Colour type and hex encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// An RGB colour value.
///
/// Channels are nominally in `0.0..=255.0` but nothing here enforces it;
/// conversions may produce out-of-range or fractional channels and callers
/// clamp before display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    /// Create a new colour from RGB channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White. Also the mix of an empty selection.
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);

    /// Parse a hex colour string.
    ///
    /// Accepts exactly six hex digits with an optional leading `#`, in any
    /// case. Anything else, including surrounding whitespace, is rejected
    /// with [`SwatchError::InvalidFormat`].
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SwatchError::InvalidFormat {
                input: s.to_string(),
            });
        }

        let r = parse_hex_byte(&hex[0..2], s)?;
        let g = parse_hex_byte(&hex[2..4], s)?;
        let b = parse_hex_byte(&hex[4..6], s)?;
        Ok(Self::rgb(r as f64, g as f64, b as f64))
    }

    /// Format as lowercase `#rrggbb`.
    ///
    /// Channels are expected to be integral already. Fractional or
    /// out-of-range channels are rounded and clamped to `0..=255`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// The 8-bit channels of this colour, rounded and clamped.
    pub fn to_bytes(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Round every channel half away from zero.
    pub fn round(self) -> Self {
        Self::rgb(self.r.round(), self.g.round(), self.b.round())
    }

    /// The canonical key used to group this colour in a selection.
    pub fn key(self) -> ColourKey {
        ColourKey(self.to_bytes())
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parse a `#rrggbb` string into a colour.
pub fn hex_to_rgb(hex: &str) -> Result<Colour> {
    Colour::from_hex(hex)
}

/// Format a colour as `#rrggbb`. See [`Colour::to_hex`].
pub fn rgb_to_hex(colour: Colour) -> String {
    colour.to_hex()
}

/// An 8-bit RGB triple identifying a colour by value.
///
/// Serialized as its `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColourKey([u8; 3]);

impl ColourKey {
    /// The colour this key stands for.
    pub fn colour(self) -> Colour {
        let [r, g, b] = self.0;
        Colour::rgb(r as f64, g as f64, b as f64)
    }
}

impl From<Colour> for ColourKey {
    fn from(colour: Colour) -> Self {
        colour.key()
    }
}

impl TryFrom<String> for ColourKey {
    type Error = SwatchError;

    fn try_from(value: String) -> Result<Self> {
        Colour::from_hex(&value).map(Colour::key)
    }
}

impl From<ColourKey> for String {
    fn from(key: ColourKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for ColourKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

fn to_byte(channel: f64) -> u8 {
    channel.round().clamp(0.0, 255.0) as u8
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str, input: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::InvalidFormat {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_hash() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255.0, 0.0, 0.0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(26.0, 26.0, 46.0));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("0047ab").unwrap();
        assert_eq!(c, Colour::rgb(0.0, 71.0, 171.0));
    }

    #[test]
    fn test_from_hex_mixed_case() {
        assert_eq!(
            Colour::from_hex("#FfEd00").unwrap(),
            Colour::from_hex("#ffed00").unwrap()
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        for input in [
            "", "#", "#F00", "#12345", "#1234567", "#GG0000", "##ff0000", " #ff0000", "#ff0000 ",
            "+1ff00", "#ff 000",
        ] {
            match Colour::from_hex(input) {
                Err(SwatchError::InvalidFormat { input: got }) => assert_eq!(got, input),
                other => panic!("expected InvalidFormat for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_from_hex_rejects_multibyte() {
        // Six bytes long but not six ASCII digits.
        assert!(Colour::from_hex("ééé").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase_and_padded() {
        assert_eq!(Colour::rgb(255.0, 0.0, 171.0).to_hex(), "#ff00ab");
        assert_eq!(Colour::rgb(1.0, 2.0, 3.0).to_hex(), "#010203");
        assert_eq!(format!("{}", Colour::WHITE), "#ffffff");
    }

    #[test]
    fn test_to_hex_rounds_and_clamps() {
        assert_eq!(Colour::rgb(127.5, 0.4, -3.0).to_hex(), "#800000");
        assert_eq!(Colour::rgb(300.0, 255.2, 254.6).to_hex(), "#ffffff");
    }

    #[test]
    fn test_hex_round_trip_every_byte() {
        for v in 0..=255u8 {
            for (r, g, b) in [(v, 0, 0), (0, v, 0), (0, 0, v), (v, 255 - v, v / 2)] {
                let c = Colour::rgb(r as f64, g as f64, b as f64);
                assert_eq!(hex_to_rgb(&rgb_to_hex(c)).unwrap(), c);
            }
        }
    }

    #[test]
    fn test_key_round_trip() {
        let c = Colour::rgb(0.0, 237.0, 255.0);
        assert_eq!(c.key().colour(), c);
        assert_eq!(c.key().to_string(), "#00edff");
        assert_eq!(ColourKey::try_from("#00EDFF".to_string()).unwrap(), c.key());
        assert!(ColourKey::try_from("cyan".to_string()).is_err());
    }

    #[test]
    fn test_key_serializes_as_hex() {
        let key = Colour::rgb(255.0, 0.0, 0.0).key();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"#ff0000\"");
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK.to_hex(), "#000000");
        assert_eq!(Colour::WHITE.to_hex(), "#ffffff");
    }
}
