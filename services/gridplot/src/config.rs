//! Plot configuration resolved from command-line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use renderer::{ColormapRegistry, FigureOptions};
use tracing::info;

use crate::cli::Args;

/// Everything the plotting pipeline needs, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub input: PathBuf,
    pub cmap: String,
    pub use_log: bool,
    /// Where to write the shaded image, if anywhere.
    pub save_img: Option<PathBuf>,
    /// Where to write the composed figure, if anywhere.
    pub figure_path: Option<PathBuf>,
    pub show: bool,
    pub figure: FigureOptions,
    pub cmap_file: Option<PathBuf>,
    pub font: Option<PathBuf>,
}

impl PlotConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// An empty `--save_img` means no image is saved.
    pub fn from_args(args: &Args) -> Result<Self> {
        let input = args
            .fname
            .clone()
            .context("No input file given")?;

        Ok(Self {
            input,
            cmap: args.cmap.clone(),
            use_log: args.log,
            save_img: args
                .save_img
                .as_deref()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            figure_path: args.figure.clone(),
            show: !args.no_show,
            figure: FigureOptions {
                width: args.fig_width,
                height: args.fig_height,
                title: args.title.clone(),
            },
            cmap_file: args.cmap_file.clone(),
            font: args.font.clone(),
        })
    }

    /// True when the figure has to be composed at all.
    pub fn needs_figure(&self) -> bool {
        self.show || self.figure_path.is_some()
    }
}

/// Built-in colormaps plus any from `cmap_file`.
pub fn load_registry(cmap_file: Option<&std::path::Path>) -> Result<ColormapRegistry> {
    let mut registry = ColormapRegistry::with_defaults();
    if let Some(path) = cmap_file {
        let count = registry
            .load_file(path)
            .with_context(|| format!("Failed to load colormaps from {}", path.display()))?;
        info!(path = %path.display(), count, "Loaded colormap file");
    }
    Ok(registry)
}
