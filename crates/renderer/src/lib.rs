//! Rendering of `f64` grids as colormapped, relief-shaded images.
//!
//! The pipeline:
//! - optional natural-log transform of the values
//! - linear normalization over the finite range
//! - lookup in a named 256-entry colormap
//! - hillshade from a light source, blended in with an overlay blend
//!
//! The result can be written to any raster format the `image` crate
//! encodes, or composed into a figure with a colorbar and a title.

pub mod colorbar;
pub mod colormap;
pub mod error;
pub mod export;
pub mod figure;
pub mod render;
pub mod resample;
pub mod scale;
pub mod shade;
pub mod text;
pub mod ticks;

pub use colormap::{Colormap, ColormapRegistry};
pub use error::{RenderError, RenderResult};
pub use export::{output_format, save_image};
pub use figure::{compose_figure, FigureOptions};
pub use render::{render_shaded, ShadedRender};
pub use scale::Normalize;
pub use shade::LightSource;
