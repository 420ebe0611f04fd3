//! Value transforms applied before color mapping.

use std::borrow::Cow;

use gridfile::Grid;

/// Natural log of every value.
///
/// Zero becomes `-inf` and negative values become NaN; both are later
/// treated as missing data.
pub fn log_transform(grid: &Grid) -> Grid {
    grid.map(f64::ln)
}

/// The values that get shaded: the grid itself, or its log when `use_log` is set.
pub fn prepare(grid: &Grid, use_log: bool) -> Cow<'_, Grid> {
    if use_log {
        Cow::Owned(log_transform(grid))
    } else {
        Cow::Borrowed(grid)
    }
}

/// Linear mapping of `[vmin, vmax]` onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// Scale over the finite values of `grid`; `[0, 1]` if none are finite.
    pub fn from_grid(grid: &Grid) -> Self {
        match grid.finite_range() {
            Some((vmin, vmax)) => Self { vmin, vmax },
            None => Self { vmin: 0.0, vmax: 1.0 },
        }
    }

    /// Map a value into `[0, 1]` (unclamped). NaN stays NaN.
    ///
    /// A degenerate range maps everything to 0.
    pub fn apply(&self, value: f64) -> f64 {
        if value.is_nan() {
            return f64::NAN;
        }
        let range = self.vmax - self.vmin;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.vmin) / range
    }

    /// Inverse of [`Normalize::apply`].
    pub fn value_at(&self, t: f64) -> f64 {
        self.vmin + t * (self.vmax - self.vmin)
    }
}
