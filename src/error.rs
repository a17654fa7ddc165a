//! Error types for the drawing engine

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for drawing and encoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while drawing or saving a canvas
#[derive(Error, Debug)]
pub enum Error {
    /// A fill was requested with no colors to apply
    #[error("drawing requires at least one color")]
    EmptyColors,

    /// The destination file could not be created
    #[error("failed to create {}: {source}", path.display())]
    CreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding to an in-memory buffer failed
    #[error("encoding failed: {0}")]
    EncodeError(#[from] image::ImageError),

    /// Encoding into a created file failed; the partial file has been removed
    #[error("failed to encode {}: {source}", path.display())]
    SaveError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A color literal could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Invalid scene or logo configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Scene JSON could not be parsed
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
