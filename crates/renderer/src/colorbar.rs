//! Colorbar strip and its tick positions.

use image::{Rgba, RgbaImage};

use crate::colormap::Colormap;
use crate::scale::Normalize;
use crate::shade::unit_to_u8;
use crate::ticks::{format_tick, nice_step, nice_ticks};

/// Render a vertical colorbar, high values at the top.
///
/// Colors come straight from the colormap with no shading applied.
pub fn render_colorbar(cmap: &Colormap, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let t = 1.0 - (y as f64 + 0.5) / height as f64;
        let [r, g, b] = cmap.sample(t).unwrap_or([0.0, 0.0, 0.0]);
        let pixel = Rgba([
            unit_to_u8(r as f64),
            unit_to_u8(g as f64),
            unit_to_u8(b as f64),
            255,
        ]);
        for x in 0..width {
            img.put_pixel(x, y, pixel);
        }
    }
    img
}

/// A labelled tick on the colorbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorbarTick {
    /// Row offset from the top of the bar, in pixels.
    pub offset: u32,
    pub value: f64,
    pub label: String,
}

/// Tick values for `norm` placed along a bar `height` pixels tall.
pub fn colorbar_ticks(norm: &Normalize, height: u32, max_ticks: usize) -> Vec<ColorbarTick> {
    if height == 0 {
        return Vec::new();
    }
    let range = norm.vmax - norm.vmin;
    let step = if range > 0.0 {
        nice_step(range, max_ticks)
    } else {
        1.0
    };
    let span = (height - 1) as f64;

    nice_ticks(norm.vmin, norm.vmax, max_ticks)
        .into_iter()
        .map(|value| {
            let t = if range > 0.0 { norm.apply(value) } else { 0.5 };
            let offset = ((1.0 - t.clamp(0.0, 1.0)) * span).round() as u32;
            ColorbarTick {
                offset,
                value,
                label: format_tick(value, step),
            }
        })
        .collect()
}
