//! Project configuration (swatch.yaml) parsing.
//!
//! The config file is optional. It can replace the builtin palette and set a
//! default log level.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::types::{Palette, PaletteBuilder};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "swatch.yaml";

/// One palette entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwatchDef {
    pub name: String,
    /// Hex colour, `#rrggbb`.
    pub color: String,
}

/// Configuration loaded from swatch.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Custom palette. Replaces the builtin palette when non-empty.
    pub palette: Vec<SwatchDef>,

    /// Default log filter (e.g. "info", "swatch=debug").
    pub log_level: Option<String>,

    /// File this config was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        config.source = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            swatches = config.palette.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, empty config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `swatch.yaml` from `dir` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!(dir = %dir.display(), "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Path of the config file in `dir`, if there is one.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILENAME);
        path.is_file().then_some(path)
    }

    /// The palette to pick from.
    pub fn palette(&self) -> Result<Palette> {
        if self.palette.is_empty() {
            return Ok(Palette::basic());
        }

        let mut builder = PaletteBuilder::new();
        for def in &self.palette {
            builder.define(def.name.clone(), def.color.clone());
        }
        builder.build()
    }
}
