//! The in-memory grid model.

use crate::error::{GridError, GridResult};
use crate::reader::VALUE_LEN;

/// A dense row-major grid of `f64` values.
///
/// The shape invariant `values.len() == width * height` (with both dimensions
/// positive) holds for every `Grid`; the fields are private so it can't be
/// broken after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Create a grid, checking that `values` fills exactly `width * height` cells.
    pub fn new(width: usize, height: usize, values: Vec<f64>) -> GridResult<Self> {
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells > 0)
            .ok_or(GridError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            })?;

        if values.len() != cells {
            return Err(GridError::SizeMismatch {
                width,
                height,
                expected: cells * VALUE_LEN,
                actual: values.len() * VALUE_LEN,
            });
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; grids have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the grid, returning its row-major values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Value at (`row`, `col`), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.values.get(row * self.width + col).copied()
    }

    /// One row of values.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.values[start..start + self.width])
    }

    /// Iterate rows from top (row 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.width)
    }

    /// Minimum and maximum over the finite values, skipping NaN and infinities.
    ///
    /// Returns `None` when no value is finite.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    /// Build a new grid of the same shape by applying `f` to every value.
    pub fn map<F>(&self, f: F) -> Grid
    where
        F: Fn(f64) -> f64,
    {
        Grid {
            width: self.width,
            height: self.height,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}
