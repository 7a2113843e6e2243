//! Renderer and configuration errors.

use std::path::PathBuf;

/// Errors a renderer can report. Drawing itself never fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("renderer is closed")]
    Closed,

    #[error("screen has no drawable area ({cols}x{rows})")]
    EmptyScreen { cols: u16, rows: u16 },
}

/// Errors loading [`RendererOptions`](crate::options::RendererOptions).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown config key {key:?}")]
    UnknownKey { key: String },
}
