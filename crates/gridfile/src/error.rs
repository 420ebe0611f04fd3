//! Error types for grid file I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised while reading, writing or constructing a grid.
#[derive(Debug, Error)]
pub enum GridError {
    // === File Errors ===
    #[error("Grid file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to access grid file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    #[error("Truncated header: expected 8 bytes, found {len}")]
    TruncatedHeader { len: usize },

    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error(
        "Size mismatch for {width}x{height} grid: expected {expected} value bytes, found {actual}"
    )]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

impl GridError {
    /// Wrap an I/O error for `path`, mapping a missing file to [`GridError::NotFound`].
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            GridError::NotFound { path }
        } else {
            GridError::Io { path, source }
        }
    }

    /// True for errors caused by the file contents rather than by file access.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            GridError::TruncatedHeader { .. }
                | GridError::InvalidDimensions { .. }
                | GridError::SizeMismatch { .. }
        )
    }
}
