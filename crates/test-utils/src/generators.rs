//! Test data generators for creating synthetic grids.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite. All return row-major `Vec<f64>`.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a grid that increases linearly from left (`min`) to right (`max`).
///
/// Every row is identical, so the vertical gradient is zero everywhere.
pub fn create_ramp_grid(width: usize, height: usize, min: f64, max: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    let span = (width.max(2) - 1) as f64;
    for _row in 0..height {
        for col in 0..width {
            data.push(min + (max - min) * col as f64 / span);
        }
    }
    data
}

/// Creates a grid with every cell set to `value`.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a single Gaussian bump of height `peak` centered in the grid.
///
/// Values are strictly positive, which makes this usable with log scaling.
pub fn create_gaussian_bump(width: usize, height: usize, peak: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let sigma = (width.min(height) as f64 / 4.0).max(1.0);

    for row in 0..height {
        for col in 0..width {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            let r2 = dx * dx + dy * dy;
            data.push(1.0 + peak * (-r2 / (2.0 * sigma * sigma)).exp());
        }
    }
    data
}

/// Creates smooth Mandelbrot escape-time values over `[-2, 1] x [-1.5, 1.5]`.
///
/// Points inside the set get `max_iter`; everything is at least 1.0, so the
/// result is safe for log scaling. This is the kind of data grid files
/// typically carry.
pub fn create_escape_time_grid(width: usize, height: usize, max_iter: u32) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    let w = (width.max(2) - 1) as f64;
    let h = (height.max(2) - 1) as f64;

    for row in 0..height {
        for col in 0..width {
            let cr = -2.0 + 3.0 * col as f64 / w;
            let ci = 1.5 - 3.0 * row as f64 / h;
            let (mut zr, mut zi) = (0.0f64, 0.0f64);
            let mut iter = 0;
            while iter < max_iter && zr * zr + zi * zi <= 4.0 {
                let t = zr * zr - zi * zi + cr;
                zi = 2.0 * zr * zi + ci;
                zr = t;
                iter += 1;
            }
            let value = if iter < max_iter {
                // Smooth coloring: fractional escape count
                let modulus = (zr * zr + zi * zi).sqrt().max(1.0 + f64::EPSILON);
                (iter as f64 + 1.0 - modulus.ln().ln() / std::f64::consts::LN_2).max(1.0)
            } else {
                max_iter as f64
            };
            data.push(value);
        }
    }
    data
}

/// Creates a test grid with NaN values at specific positions.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `nan_positions` - List of (col, row) positions to set as NaN
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f64> {
    let mut data = create_test_grid(width, height);
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f64::NAN;
        }
    }
    data
}
