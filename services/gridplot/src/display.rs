//! Interactive figure window.

use anyhow::{Context, Result};
use image::RgbaImage;
use minifb::{Key, Window, WindowOptions};
use tracing::info;

/// Pack RGBA pixels into minifb's `0RGB` words, compositing over white.
pub fn to_framebuffer(img: &RgbaImage) -> Vec<u32> {
    img.pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            let over_white = |c: u8| -> u32 {
                let alpha = a as u32;
                (c as u32 * alpha + 255 * (255 - alpha) + 127) / 255
            };
            (over_white(r) << 16) | (over_white(g) << 8) | over_white(b)
        })
        .collect()
}

/// Show `figure` in a window until it is closed or Escape is pressed.
pub fn show(figure: &RgbaImage, title: &str) -> Result<()> {
    let (width, height) = figure.dimensions();
    let (width, height) = (width as usize, height as usize);
    let buffer = to_framebuffer(figure);

    let mut window = Window::new(
        title,
        width,
        height,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )
    .context("Failed to open display window")?;
    window.set_target_fps(30);
    info!(width, height, "Showing figure; close the window or press Escape to exit");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&buffer, width, height)
            .context("Failed to update display window")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_opaque_pixels_packed() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0x12, 0x34, 0x56, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        assert_eq!(to_framebuffer(&img), vec![0x123456, 0xFF0000]);
    }

    #[test]
    fn test_transparent_pixels_show_white() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        assert_eq!(to_framebuffer(&img), vec![0xFFFFFF]);
    }
}
