// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible edges (color parsing, surfaces, export, config).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color spec `{0}`")]
    InvalidColor(String),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid chart config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
