//! Encoding grid files.

use std::path::Path;

use bytes::BufMut;
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::grid::Grid;
use crate::reader::{HEADER_LEN, VALUE_LEN};

/// Encode `grid` in the grid file layout.
///
/// Dimensions beyond `i32::MAX` cannot be represented in the header and are
/// rejected.
pub fn encode(grid: &Grid) -> GridResult<Vec<u8>> {
    let invalid = || GridError::InvalidDimensions {
        width: grid.width() as i64,
        height: grid.height() as i64,
    };
    let width = i32::try_from(grid.width()).map_err(|_| invalid())?;
    let height = i32::try_from(grid.height()).map_err(|_| invalid())?;

    let mut out = Vec::with_capacity(HEADER_LEN + grid.len() * VALUE_LEN);
    out.put_i32_le(width);
    out.put_i32_le(height);
    for &value in grid.values() {
        out.put_f64_le(value);
    }
    Ok(out)
}

/// Write `grid` to `path`, replacing any existing file.
pub fn save(grid: &Grid, path: impl AsRef<Path>) -> GridResult<()> {
    let path = path.as_ref();
    let data = encode(grid)?;
    std::fs::write(path, &data).map_err(|e| GridError::from_io(path, e))?;

    debug!(path = %path.display(), bytes = data.len(), "Wrote grid file");
    Ok(())
}
