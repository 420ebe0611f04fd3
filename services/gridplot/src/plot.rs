//! The plotting pipeline: load, shade, save, compose and display.

use std::path::PathBuf;

use anyhow::{Context, Result};
use image::RgbaImage;
use renderer::text::load_font;
use renderer::{compose_figure, render_shaded, save_image, Normalize};
use tracing::info;

use crate::config::{load_registry, PlotConfig};
use crate::display;

/// What a run produced.
#[derive(Debug)]
pub struct PlotOutcome {
    pub width: usize,
    pub height: usize,
    pub norm: Normalize,
    pub shaded: RgbaImage,
    pub saved_image: Option<PathBuf>,
    pub figure: Option<RgbaImage>,
}

/// Run the pipeline for `config`.
pub fn run(config: &PlotConfig) -> Result<PlotOutcome> {
    let registry = load_registry(config.cmap_file.as_deref())?;
    let cmap = registry
        .get(&config.cmap)
        .with_context(|| format!("Cannot use colormap '{}'", config.cmap))?;

    let grid = gridfile::load(&config.input)
        .with_context(|| format!("Failed to load grid from {}", config.input.display()))?;
    info!(
        path = %config.input.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded grid"
    );

    let render = render_shaded(&grid, &cmap, config.use_log);
    info!(
        cmap = cmap.name(),
        log = config.use_log,
        vmin = render.norm.vmin,
        vmax = render.norm.vmax,
        "Shaded grid"
    );

    if let Some(path) = &config.save_img {
        let format = save_image(&render.image, path)
            .with_context(|| format!("Failed to save image to {}", path.display()))?;
        info!(path = %path.display(), ?format, "Saved shaded image");
    }

    let figure = if config.needs_figure() {
        let font = load_font(config.font.as_deref());
        let figure = compose_figure(
            &render.image,
            &cmap,
            &render.norm,
            &config.figure,
            font.as_ref(),
        )
        .context("Failed to compose figure")?;

        if let Some(path) = &config.figure_path {
            save_image(&figure, path)
                .with_context(|| format!("Failed to save figure to {}", path.display()))?;
            info!(path = %path.display(), "Saved figure");
        }
        if config.show {
            display::show(&figure, &config.figure.title)?;
        }
        Some(figure)
    } else {
        None
    };

    Ok(PlotOutcome {
        width: grid.width(),
        height: grid.height(),
        norm: render.norm,
        shaded: render.image,
        saved_image: config.save_img.clone(),
        figure,
    })
}
