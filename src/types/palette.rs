//! Palette type for named swatch collections.

use serde::Serialize;

use crate::error::{Result, SwatchError};

use super::Colour;

/// One selectable swatch. The name is only a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub colour: Colour,
    pub name: String,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, colour: Colour) -> Self {
        Self {
            colour,
            name: name.into(),
        }
    }
}

/// An ordered collection of swatches.
///
/// Order only matters for display; mixing treats the palette as a set of
/// inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The builtin eight-colour palette.
    pub fn basic() -> Self {
        const BASIC: [(&str, Colour); 8] = [
            ("yellow", Colour::rgb(255.0, 237.0, 0.0)),
            ("red", Colour::rgb(255.0, 0.0, 0.0)),
            ("magenta", Colour::rgb(255.0, 0.0, 171.0)),
            ("blue", Colour::rgb(0.0, 71.0, 171.0)),
            ("cyan", Colour::rgb(0.0, 237.0, 255.0)),
            ("green", Colour::rgb(0.0, 181.0, 0.0)),
            ("white", Colour::WHITE),
            ("black", Colour::BLACK),
        ];

        Self {
            entries: BASIC
                .iter()
                .map(|&(name, colour)| PaletteEntry::new(name, colour))
                .collect(),
        }
    }

    /// Get a colour by name (case-insensitive). First match wins.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.colour)
    }

    /// Iterate over the entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Get all colour names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Get the number of swatches.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: PaletteEntry) {
        self.entries.push(entry);
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::basic()
    }
}

/// Builder for constructing palettes from hex definitions.
#[derive(Debug, Default)]
pub struct PaletteBuilder {
    definitions: Vec<(String, String)>,
}

impl PaletteBuilder {
    /// Create a new palette builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a swatch definition.
    pub fn define(&mut self, name: impl Into<String>, hex: impl Into<String>) {
        self.definitions.push((name.into(), hex.into()));
    }

    /// Build the palette, parsing every hex value.
    pub fn build(self) -> Result<Palette> {
        let mut palette = Palette::new();

        for (name, hex) in self.definitions {
            if name.trim().is_empty() {
                return Err(SwatchError::Parse {
                    message: format!("Palette entry {} has no name", hex),
                    help: Some("Give every palette entry a non-empty name".to_string()),
                });
            }
            if palette.get(&name).is_some() {
                return Err(SwatchError::Parse {
                    message: format!("Duplicate palette entry: {}", name),
                    help: None,
                });
            }

            let colour = Colour::from_hex(&hex)?;
            palette.push(PaletteEntry::new(name, colour));
        }

        Ok(palette)
    }
}
