//! Bilinear resampling of rendered images.

use image::{Rgba, RgbaImage};

/// Resample an image to a different resolution using bilinear interpolation.
///
/// Pixel centers are aligned, so a 1-pixel-wide source stretches to a
/// uniform band and upscaling keeps edge pixels at full weight.
///
/// # Arguments
/// - `src`: Source image
/// - `dst_width`: Destination width
/// - `dst_height`: Destination height
///
/// # Returns
/// Resampled image at the requested resolution
pub fn resample_bilinear(src: &RgbaImage, dst_width: u32, dst_height: u32) -> RgbaImage {
    let (src_width, src_height) = src.dimensions();
    if src_width == dst_width && src_height == dst_height {
        // No resampling needed
        return src.clone();
    }

    let mut output = RgbaImage::new(dst_width, dst_height);
    if src_width == 0 || src_height == 0 {
        return output;
    }

    let x_ratio = src_width as f32 / dst_width.max(1) as f32;
    let y_ratio = src_height as f32 / dst_height.max(1) as f32;
    let max_x = (src_width - 1) as f32;
    let max_y = (src_height - 1) as f32;

    for y in 0..dst_height {
        let src_y = ((y as f32 + 0.5) * y_ratio - 0.5).clamp(0.0, max_y);
        let y1 = src_y.floor() as u32;
        let y2 = (y1 + 1).min(src_height - 1);
        let dy = src_y - y1 as f32;

        for x in 0..dst_width {
            let src_x = ((x as f32 + 0.5) * x_ratio - 0.5).clamp(0.0, max_x);
            let x1 = src_x.floor() as u32;
            let x2 = (x1 + 1).min(src_width - 1);
            let dx = src_x - x1 as f32;

            // Get the four surrounding pixels
            let p11 = src.get_pixel(x1, y1).0;
            let p21 = src.get_pixel(x2, y1).0;
            let p12 = src.get_pixel(x1, y2).0;
            let p22 = src.get_pixel(x2, y2).0;

            let mut out = [0u8; 4];
            for c in 0..4 {
                let v1 = p11[c] as f32 * (1.0 - dx) + p21[c] as f32 * dx;
                let v2 = p12[c] as f32 * (1.0 - dx) + p22[c] as f32 * dx;
                out[c] = (v1 * (1.0 - dy) + v2 * dy).round().clamp(0.0, 255.0) as u8;
            }
            output.put_pixel(x, y, Rgba(out));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_size_is_copy() {
        let src = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4]));
        assert_eq!(resample_bilinear(&src, 3, 2), src);
    }

    #[test]
    fn test_single_pixel_fills_output() {
        let src = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 255]));
        let out = resample_bilinear(&src, 5, 4);
        assert_eq!(out.dimensions(), (5, 4));
        assert!(out.pixels().all(|p| p.0 == [10, 20, 30, 255]));
    }

    #[test]
    fn test_upscale_interpolates_between_pixels() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        src.put_pixel(1, 0, Rgba([200, 0, 0, 255]));

        let out = resample_bilinear(&src, 4, 1);
        let reds: Vec<u8> = out.pixels().map(|p| p.0[0]).collect();

        // Edges keep the source colors, the middle blends monotonically
        assert_eq!(reds[0], 0);
        assert_eq!(reds[3], 200);
        assert!(reds[1] > 0 && reds[1] < reds[2] && reds[2] < 200);
    }

    #[test]
    fn test_downscale_dimensions() {
        let src = RgbaImage::from_pixel(100, 50, Rgba([7, 7, 7, 255]));
        let out = resample_bilinear(&src, 10, 5);
        assert_eq!(out.dimensions(), (10, 5));
        assert!(out.pixels().all(|p| p.0 == [7, 7, 7, 255]));
    }
}
