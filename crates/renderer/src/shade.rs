//! Relief shading with a directional light source.
//!
//! The grid is treated as a height field. Surface normals come from the
//! gradient of the values, the light direction from an azimuth/elevation
//! pair, and the resulting intensity is blended into the colormapped image
//! with an overlay blend.

use gridfile::Grid;
use image::{Rgba, RgbaImage};

use crate::colormap::Colormap;
use crate::scale::Normalize;

/// Intensity that leaves a color unchanged under the overlay blend.
pub const NEUTRAL_INTENSITY: f64 = 0.5;

/// A distant light illuminating the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    /// Compass direction the light comes from, degrees clockwise from north.
    pub azimuth_deg: f64,
    /// Angle above the horizon in degrees.
    pub elevation_deg: f64,
    /// Vertical exaggeration applied to values before taking the gradient.
    pub vert_exag: f64,
    /// Cell spacing along columns.
    pub dx: f64,
    /// Cell spacing along rows.
    pub dy: f64,
    /// Contrast multiplier applied to the raw intensity.
    pub fraction: f64,
}

impl Default for LightSource {
    fn default() -> Self {
        Self {
            azimuth_deg: 315.0,
            elevation_deg: 45.0,
            vert_exag: 1.0,
            dx: 1.0,
            dy: 1.0,
            fraction: 1.0,
        }
    }
}

impl LightSource {
    pub fn new(azimuth_deg: f64, elevation_deg: f64) -> Self {
        Self {
            azimuth_deg,
            elevation_deg,
            ..Self::default()
        }
    }

    /// Unit vector pointing towards the light (x east, y north, z up).
    pub fn direction(&self) -> [f64; 3] {
        let az = (90.0 - self.azimuth_deg).to_radians();
        let alt = self.elevation_deg.to_radians();
        [az.cos() * alt.cos(), az.sin() * alt.cos(), alt.sin()]
    }

    /// Illumination in `[0, 1]` for every cell, row-major.
    ///
    /// Raw intensities are stretched over their own range when it exceeds
    /// `1e-6`, then clipped. Cells whose intensity can't be computed (NaN or
    /// infinite neighbors) get [`NEUTRAL_INTENSITY`].
    pub fn hillshade(&self, grid: &Grid) -> Vec<f64> {
        let width = grid.width();
        let height = grid.height();
        let values = grid.values();
        let light = self.direction();

        let elevation = |row: usize, col: usize| self.vert_exag * values[row * width + col];

        let mut intensity = Vec::with_capacity(values.len());
        for row in 0..height {
            for col in 0..width {
                let e_dx = axis_gradient(col, width, self.dx, |c| elevation(row, c));
                // Rows run north to south, so the row spacing is negative
                let e_dy = axis_gradient(row, height, -self.dy, |r| elevation(r, col));

                let norm = (e_dx * e_dx + e_dy * e_dy + 1.0).sqrt();
                let normal = [-e_dx / norm, -e_dy / norm, 1.0 / norm];
                intensity.push(
                    normal[0] * light[0] + normal[1] * light[1] + normal[2] * light[2],
                );
            }
        }

        self.stretch(&mut intensity);
        intensity
    }

    fn stretch(&self, intensity: &mut [f64]) {
        let (imin, imax) = intensity
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let range = imax - imin;

        for value in intensity.iter_mut() {
            if !value.is_finite() {
                *value = NEUTRAL_INTENSITY;
                continue;
            }
            let mut v = *value * self.fraction;
            if range > 1e-6 {
                v = (v - imin) / range;
            }
            *value = v.clamp(0.0, 1.0);
        }
    }

    /// Colormap `grid` and blend in the hillshade.
    ///
    /// Produces one pixel per cell with row 0 at the top. Non-finite cells
    /// take the colormap's bad color.
    pub fn shade(&self, grid: &Grid, cmap: &Colormap, norm: &Normalize) -> RgbaImage {
        let intensity = self.hillshade(grid);
        let bad = to_rgba8(cmap.bad_color());

        let mut img = RgbaImage::new(grid.width() as u32, grid.height() as u32);
        for (idx, (&value, &light)) in grid.values().iter().zip(intensity.iter()).enumerate() {
            let x = (idx % grid.width()) as u32;
            let y = (idx / grid.width()) as u32;

            if !value.is_finite() {
                img.put_pixel(x, y, bad);
                continue;
            }

            let pixel = match cmap.sample(norm.apply(value)) {
                Some([r, g, b]) => Rgba([
                    unit_to_u8(blend_overlay(r as f64, light)),
                    unit_to_u8(blend_overlay(g as f64, light)),
                    unit_to_u8(blend_overlay(b as f64, light)),
                    255,
                ]),
                None => bad,
            };
            img.put_pixel(x, y, pixel);
        }
        img
    }
}

/// Derivative along one axis: central differences inside, one-sided at the
/// edges, zero when the axis has a single cell.
fn axis_gradient<F>(i: usize, len: usize, spacing: f64, at: F) -> f64
where
    F: Fn(usize) -> f64,
{
    if len < 2 {
        return 0.0;
    }
    if i == 0 {
        (at(1) - at(0)) / spacing
    } else if i == len - 1 {
        (at(len - 1) - at(len - 2)) / spacing
    } else {
        (at(i + 1) - at(i - 1)) / (2.0 * spacing)
    }
}

/// Overlay blend of a color channel with an intensity, both in `[0, 1]`.
pub fn blend_overlay(channel: f64, intensity: f64) -> f64 {
    if channel <= 0.5 {
        2.0 * intensity * channel
    } else {
        1.0 - 2.0 * (1.0 - intensity) * (1.0 - channel)
    }
}

pub(crate) fn unit_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn to_rgba8(color: [f32; 4]) -> Rgba<u8> {
    Rgba([
        unit_to_u8(color[0] as f64),
        unit_to_u8(color[1] as f64),
        unit_to_u8(color[2] as f64),
        unit_to_u8(color[3] as f64),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::ColormapRegistry;

    #[test]
    fn test_default_direction() {
        let [x, y, z] = LightSource::default().direction();
        // Light from the north-west, 45 degrees up
        assert!((x + 0.5).abs() < 1e-12);
        assert!((y - 0.5).abs() < 1e-12);
        assert!((z - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_axis_gradient() {
        let data = [0.0, 1.0, 4.0, 9.0];
        let at = |i: usize| data[i];
        assert_eq!(axis_gradient(0, 4, 1.0, at), 1.0);
        assert_eq!(axis_gradient(1, 4, 1.0, at), 2.0);
        assert_eq!(axis_gradient(3, 4, 1.0, at), 5.0);
        assert_eq!(axis_gradient(0, 4, -1.0, at), -1.0);
        assert_eq!(axis_gradient(0, 1, 1.0, at), 0.0);
    }

    #[test]
    fn test_flat_grid_has_uniform_intensity() {
        let grid = Grid::new(4, 3, vec![2.0; 12]).unwrap();
        let intensity = LightSource::default().hillshade(&grid);
        for v in intensity {
            assert!((v - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        }
    }

    #[test]
    fn test_slope_facing_light_is_brighter() {
        // Values rise to the east: the slope faces west, towards the light
        let ramp = Grid::new(3, 1, vec![0.0, 1.0, 2.0]).unwrap();
        let flat = Grid::new(3, 1, vec![0.0; 3]).unwrap();

        let lit = LightSource::default().hillshade(&ramp);
        let level = LightSource::default().hillshade(&flat);

        // Uniform slope: every cell equal, and brighter than flat ground
        assert!(lit.iter().all(|&v| (v - lit[0]).abs() < 1e-12));
        assert!(lit[0] > level[0]);
    }

    #[test]
    fn test_overlay_blend() {
        assert_eq!(blend_overlay(0.25, 0.5), 0.25);
        assert_eq!(blend_overlay(0.75, 0.5), 0.75);
        assert_eq!(blend_overlay(0.25, 0.0), 0.0);
        assert_eq!(blend_overlay(0.75, 1.0), 1.0);
    }

    #[test]
    fn test_non_finite_cells_are_transparent() {
        let grid = Grid::new(3, 1, vec![1.0, f64::NAN, 3.0]).unwrap();
        let cmap = ColormapRegistry::with_defaults().get("jet").unwrap();
        let norm = Normalize::from_grid(&grid);
        let img = LightSource::default().shade(&grid, &cmap, &norm);

        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(0, 0).0[3], 255);
        assert_eq!(img.get_pixel(2, 0).0[3], 255);
    }
}
