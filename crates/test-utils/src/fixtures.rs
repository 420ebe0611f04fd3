//! Grid file fixtures.
//!
//! Helpers that put grid files on disk inside a temporary directory. The
//! directory is removed when the [`GridFixture`] is dropped.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Encode a grid file by hand: `i32` width, `i32` height, then `f64` values,
/// all little-endian. No shape checking, so malformed files can be built too.
pub fn encode_grid_bytes(width: i32, height: i32, values: &[f64]) -> Vec<u8> {
    let mut data = Vec::with_capacity(8 + values.len() * 8);
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    for value in values {
        data.extend_from_slice(&value.to_le_bytes());
    }
    data
}

/// The documented 2x1 example: `2 | 1 | 1.0 | 2.0`.
pub fn single_row_bytes() -> Vec<u8> {
    encode_grid_bytes(2, 1, &[1.0, 2.0])
}

/// A 2x2 header followed by only three values.
pub fn short_payload_bytes() -> Vec<u8> {
    encode_grid_bytes(2, 2, &[1.0, 2.0, 3.0])
}

/// A temporary directory holding one grid file.
pub struct GridFixture {
    dir: TempDir,
    path: PathBuf,
}

impl GridFixture {
    /// Write `bytes` to `name` inside a fresh temporary directory.
    pub fn from_bytes(name: &str, bytes: &[u8]) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(name);
        fs::write(&path, bytes)?;
        Ok(Self { dir, path })
    }

    /// Write a well-formed grid file.
    pub fn grid(width: i32, height: i32, values: &[f64]) -> std::io::Result<Self> {
        Self::from_bytes("grid.bin", &encode_grid_bytes(width, height, values))
    }

    /// Path of the grid file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The temporary directory, for placing output files next to the input.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// A path inside the fixture directory (not created).
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_grid_bytes_layout() {
        let data = single_row_bytes();
        assert_eq!(data.len(), 24);
        assert_eq!(&data[0..4], &[2, 0, 0, 0]);
        assert_eq!(&data[4..8], &[1, 0, 0, 0]);
        assert_eq!(&data[8..16], &1.0f64.to_le_bytes());
    }

    #[test]
    fn test_short_payload_is_three_values() {
        assert_eq!(short_payload_bytes().len(), 8 + 3 * 8);
    }

    #[test]
    fn test_fixture_writes_file() {
        let fixture = GridFixture::grid(1, 1, &[3.5]).unwrap();
        let data = fs::read(fixture.path()).unwrap();
        assert_eq!(data.len(), 16);
        assert!(fixture.output_path("out.png").starts_with(fixture.dir()));
    }
}
