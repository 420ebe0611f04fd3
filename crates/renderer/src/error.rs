//! Error types for rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while building colormaps or producing images.
#[derive(Debug, Error)]
pub enum RenderError {
    // === Colormap Errors ===
    #[error("Unknown colormap '{name}'; available: {}", available.join(", "))]
    UnknownColormap { name: String, available: Vec<String> },

    #[error("Invalid colormap '{name}': {message}")]
    InvalidColormap { name: String, message: String },

    // === Output Errors ===
    #[error("Cannot infer an image format from {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid colormap file: {0}")]
    Json(#[from] serde_json::Error),
}
