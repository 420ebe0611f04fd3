//! The shading pipeline: optional log transform, normalization, colormap and light.

use gridfile::Grid;
use image::RgbaImage;
use tracing::debug;

use crate::colormap::Colormap;
use crate::scale::{prepare, Normalize};
use crate::shade::LightSource;

/// A shaded image together with the value range its colors represent.
#[derive(Debug, Clone)]
pub struct ShadedRender {
    pub image: RgbaImage,
    pub norm: Normalize,
}

/// Shade `grid` with `cmap` under the default light source.
///
/// With `use_log` set, the natural log of the values is shaded and the
/// returned range is in log units.
pub fn render_shaded(grid: &Grid, cmap: &Colormap, use_log: bool) -> ShadedRender {
    render_shaded_with(grid, cmap, use_log, &LightSource::default())
}

pub fn render_shaded_with(
    grid: &Grid,
    cmap: &Colormap,
    use_log: bool,
    light: &LightSource,
) -> ShadedRender {
    let data = prepare(grid, use_log);
    let norm = Normalize::from_grid(&data);
    debug!(
        width = grid.width(),
        height = grid.height(),
        cmap = cmap.name(),
        use_log,
        vmin = norm.vmin,
        vmax = norm.vmax,
        "Shading grid"
    );

    ShadedRender {
        image: light.shade(&data, cmap, &norm),
        norm,
    }
}
