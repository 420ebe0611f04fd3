//! Decoding grid files.

use std::path::Path;

use bytes::Buf;
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::grid::Grid;

/// Header size: two little-endian `i32` dimensions.
pub const HEADER_LEN: usize = 8;

/// Size of one encoded value (`f64`).
pub const VALUE_LEN: usize = 8;

/// Read and decode the grid file at `path`.
///
/// The whole file is read and the handle released before decoding starts.
pub fn load(path: impl AsRef<Path>) -> GridResult<Grid> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| GridError::from_io(path, e))?;

    debug!(path = %path.display(), bytes = data.len(), "Read grid file");

    let grid = parse(&data)?;

    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Decoded grid"
    );

    Ok(grid)
}

/// Decode a grid from an in-memory buffer.
///
/// The payload after the header must hold exactly `width * height` values;
/// anything shorter or longer is a [`GridError::SizeMismatch`].
pub fn parse(data: &[u8]) -> GridResult<Grid> {
    if data.len() < HEADER_LEN {
        return Err(GridError::TruncatedHeader { len: data.len() });
    }

    let mut buf = data;
    let raw_width = buf.get_i32_le();
    let raw_height = buf.get_i32_le();

    let invalid = || GridError::InvalidDimensions {
        width: raw_width as i64,
        height: raw_height as i64,
    };

    if raw_width <= 0 || raw_height <= 0 {
        return Err(invalid());
    }
    let width = raw_width as usize;
    let height = raw_height as usize;

    let expected = width
        .checked_mul(height)
        .and_then(|cells| cells.checked_mul(VALUE_LEN))
        .ok_or_else(invalid)?;

    if buf.remaining() != expected {
        return Err(GridError::SizeMismatch {
            width,
            height,
            expected,
            actual: buf.remaining(),
        });
    }

    let mut values = Vec::with_capacity(width * height);
    while buf.has_remaining() {
        values.push(buf.get_f64_le());
    }

    Grid::new(width, height, values)
}
