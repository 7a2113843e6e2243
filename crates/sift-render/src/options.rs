//! Renderer options and the TOML file they load from.
//!
//! ```toml
//! base = "dark256"
//! monochrome = false
//! force_black = false
//! mouse = true
//!
//! [colors]
//! hl = 108
//! fg = "default"
//! bg = "#1d1f21"
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;
use sift_theme::ThemeConfig;

use crate::error::ConfigError;

/// Everything a renderer needs to know before `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RendererOptions {
    /// Theme settings. Their keys sit at the top level of the file.
    #[serde(flatten)]
    pub theme: ThemeConfig,
    /// Deliver mouse events to the application.
    pub mouse: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            mouse: true,
        }
    }
}

/// Top-level keys an options file may use.
const KNOWN_KEYS: [&str; 5] = ["base", "monochrome", "force_black", "colors", "mouse"];

impl RendererOptions {
    /// Parse options from TOML text. Missing keys take their defaults;
    /// unknown keys are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = text.parse()?;
        if let Some(key) = table.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(ConfigError::UnknownKey { key: key.clone() });
        }
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Read and parse an options file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&text)?;
        debug!("loaded renderer options from {}", path.display());
        Ok(options)
    }
}
