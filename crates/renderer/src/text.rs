//! Font loading and label drawing.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use rusttype::{Font, Scale};
use tracing::{debug, warn};

/// Fonts tried, in order, when no font path is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Horizontal placement of a label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Load a TrueType font.
///
/// An explicit `path` is used as given; otherwise common system locations
/// are searched. Returns `None` (with a warning) if nothing usable is found,
/// in which case figures are drawn without text.
pub fn load_font(path: Option<&Path>) -> Option<Font<'static>> {
    let candidates: Vec<PathBuf> = match path {
        Some(p) => vec![p.to_path_buf()],
        None => SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
    };

    for candidate in &candidates {
        let Ok(bytes) = std::fs::read(candidate) else {
            continue;
        };
        match Font::try_from_vec(bytes) {
            Some(font) => {
                debug!(path = %candidate.display(), "Loaded font");
                return Some(font);
            }
            None => warn!(path = %candidate.display(), "Not a usable TrueType font"),
        }
    }

    match path {
        Some(p) => warn!(path = %p.display(), "Failed to load font; labels will be omitted"),
        None => warn!("No system font found; labels will be omitted"),
    }
    None
}

/// Pixel width and height of `text` at `size`.
pub fn measure(font: &Font<'_>, size: f32, text: &str) -> (i32, i32) {
    text_size(Scale::uniform(size), font, text)
}

/// Draw `text` with its vertical middle at `y` and horizontal position
/// given by `align` relative to `x`.
pub fn draw_label(
    img: &mut RgbaImage,
    font: &Font<'_>,
    size: f32,
    color: Rgba<u8>,
    x: i32,
    y: i32,
    align: Align,
    text: &str,
) {
    let (w, h) = measure(font, size, text);
    let left = match align {
        Align::Left => x,
        Align::Center => x - w / 2,
        Align::Right => x - w,
    };
    draw_text_mut(img, color, left, y - h / 2, Scale::uniform(size), font, text);
}
