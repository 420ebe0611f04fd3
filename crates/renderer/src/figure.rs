//! Figure composition: image axes, colorbar and title on one canvas.
//!
//! ```text
//! +------------------------------------------------+
//! |                     title                      |
//! |     +------------------------+  +--+           |
//! |  0 -|                        |  |  |- 40       |
//! |     |     shaded image       |  |  |- 20       |
//! |  5 -|                        |  |  |- 0        |
//! |     +------------------------+  +--+           |
//! |       0     5     10                           |
//! +------------------------------------------------+
//! ```

use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use rusttype::Font;
use tracing::debug;

use crate::colorbar::{colorbar_ticks, render_colorbar};
use crate::colormap::Colormap;
use crate::error::{RenderError, RenderResult};
use crate::resample::resample_bilinear;
use crate::scale::Normalize;
use crate::text::{draw_label, Align};
use crate::ticks::nice_ticks;

const MARGIN_LEFT: u32 = 70;
const MARGIN_TOP: u32 = 50;
const MARGIN_BOTTOM: u32 = 40;
const MARGIN_RIGHT: u32 = 10;
const COLORBAR_GAP: u32 = 30;
const COLORBAR_WIDTH: u32 = 20;
const COLORBAR_LABEL_SPACE: u32 = 80;

const TICK_LENGTH: f32 = 5.0;
const LABEL_SIZE: f32 = 14.0;
const TITLE_SIZE: f32 = 20.0;
const MAX_TICKS: usize = 8;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FOREGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Size and title of a composed figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 600,
            title: "Fractal".to_string(),
        }
    }
}

/// Pixel rectangles of the figure elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureLayout {
    pub axes_x: u32,
    pub axes_y: u32,
    pub axes_width: u32,
    pub axes_height: u32,
    pub colorbar_x: u32,
    pub colorbar_width: u32,
}

impl FigureLayout {
    /// Fit an `image_width` x `image_height` image into the figure,
    /// keeping its aspect ratio, with the colorbar to its right.
    pub fn compute(
        figure_width: u32,
        figure_height: u32,
        image_width: u32,
        image_height: u32,
    ) -> RenderResult<Self> {
        let avail_w = figure_width.saturating_sub(
            MARGIN_LEFT + COLORBAR_GAP + COLORBAR_WIDTH + COLORBAR_LABEL_SPACE + MARGIN_RIGHT,
        );
        let avail_h = figure_height.saturating_sub(MARGIN_TOP + MARGIN_BOTTOM);
        if avail_w == 0 || avail_h == 0 {
            return Err(RenderError::EmptyImage {
                width: figure_width,
                height: figure_height,
            });
        }
        if image_width == 0 || image_height == 0 {
            return Err(RenderError::EmptyImage {
                width: image_width,
                height: image_height,
            });
        }

        let scale = (avail_w as f64 / image_width as f64).min(avail_h as f64 / image_height as f64);
        let axes_width = ((image_width as f64 * scale).round() as u32).clamp(1, avail_w);
        let axes_height = ((image_height as f64 * scale).round() as u32).clamp(1, avail_h);

        let axes_x = MARGIN_LEFT + (avail_w - axes_width) / 2;
        let axes_y = MARGIN_TOP + (avail_h - axes_height) / 2;

        Ok(Self {
            axes_x,
            axes_y,
            axes_width,
            axes_height,
            colorbar_x: axes_x + axes_width + COLORBAR_GAP,
            colorbar_width: COLORBAR_WIDTH,
        })
    }
}

/// Compose the shaded image, a colorbar for `cmap` over `norm`, and the title.
///
/// Without a font the ticks are still drawn but labels and title are left out.
pub fn compose_figure(
    shaded: &RgbaImage,
    cmap: &Colormap,
    norm: &Normalize,
    options: &FigureOptions,
    font: Option<&Font<'_>>,
) -> RenderResult<RgbaImage> {
    let (image_width, image_height) = shaded.dimensions();
    let layout = FigureLayout::compute(options.width, options.height, image_width, image_height)?;
    debug!(?layout, "Composing figure");

    let mut canvas = RgbaImage::from_pixel(options.width, options.height, BACKGROUND);

    // Axes
    let axes = resample_bilinear(shaded, layout.axes_width, layout.axes_height);
    imageops::overlay(&mut canvas, &axes, layout.axes_x as i64, layout.axes_y as i64);
    draw_frame(
        &mut canvas,
        layout.axes_x,
        layout.axes_y,
        layout.axes_width,
        layout.axes_height,
    );
    draw_index_ticks(&mut canvas, &layout, image_width, image_height, font);

    // Colorbar
    let bar = render_colorbar(cmap, layout.colorbar_width, layout.axes_height);
    imageops::overlay(&mut canvas, &bar, layout.colorbar_x as i64, layout.axes_y as i64);
    draw_frame(
        &mut canvas,
        layout.colorbar_x,
        layout.axes_y,
        layout.colorbar_width,
        layout.axes_height,
    );
    let bar_right = (layout.colorbar_x + layout.colorbar_width) as f32;
    for tick in colorbar_ticks(norm, layout.axes_height, MAX_TICKS) {
        let y = (layout.axes_y + tick.offset) as f32;
        draw_line_segment_mut(&mut canvas, (bar_right, y), (bar_right + TICK_LENGTH, y), FOREGROUND);
        if let Some(font) = font {
            draw_label(
                &mut canvas,
                font,
                LABEL_SIZE,
                FOREGROUND,
                (bar_right + TICK_LENGTH) as i32 + 3,
                y as i32,
                Align::Left,
                &tick.label,
            );
        }
    }

    // Title
    if let Some(font) = font.filter(|_| !options.title.is_empty()) {
        draw_label(
            &mut canvas,
            font,
            TITLE_SIZE,
            FOREGROUND,
            (layout.axes_x + layout.axes_width / 2) as i32,
            layout.axes_y as i32 - 20,
            Align::Center,
            &options.title,
        );
    }

    Ok(canvas)
}

fn draw_frame(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32) {
    // One pixel outside the content so the frame never covers data
    let rect = Rect::at(x as i32 - 1, y as i32 - 1).of_size(width + 2, height + 2);
    draw_hollow_rect_mut(canvas, rect, FOREGROUND);
}

/// Column ticks under the axes and row ticks to their left, at cell centers.
fn draw_index_ticks(
    canvas: &mut RgbaImage,
    layout: &FigureLayout,
    columns: u32,
    rows: u32,
    font: Option<&Font<'_>>,
) {
    let bottom = (layout.axes_y + layout.axes_height) as f32;
    let cell_w = layout.axes_width as f32 / columns as f32;
    for col in index_ticks(columns) {
        let x = layout.axes_x as f32 + (col as f32 + 0.5) * cell_w;
        draw_line_segment_mut(canvas, (x, bottom), (x, bottom + TICK_LENGTH), FOREGROUND);
        if let Some(font) = font {
            draw_label(
                canvas,
                font,
                LABEL_SIZE,
                FOREGROUND,
                x as i32,
                (bottom + TICK_LENGTH) as i32 + 10,
                Align::Center,
                &col.to_string(),
            );
        }
    }

    let left = layout.axes_x as f32 - 1.0;
    let cell_h = layout.axes_height as f32 / rows as f32;
    for row in index_ticks(rows) {
        let y = layout.axes_y as f32 + (row as f32 + 0.5) * cell_h;
        draw_line_segment_mut(canvas, (left - TICK_LENGTH, y), (left, y), FOREGROUND);
        if let Some(font) = font {
            draw_label(
                canvas,
                font,
                LABEL_SIZE,
                FOREGROUND,
                (left - TICK_LENGTH) as i32 - 3,
                y as i32,
                Align::Right,
                &row.to_string(),
            );
        }
    }
}

/// Whole-number tick positions for an axis of `count` cells.
pub fn index_ticks(count: u32) -> Vec<u32> {
    if count == 0 {
        return Vec::new();
    }
    nice_ticks(0.0, (count - 1) as f64, MAX_TICKS)
        .into_iter()
        .filter(|t| (t - t.round()).abs() < 1e-9 && *t >= 0.0)
        .map(|t| t.round() as u32)
        .collect()
}
