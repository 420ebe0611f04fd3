//! Writing rendered images to disk.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Output format for `path`, chosen by its extension.
///
/// A path without an extension is written as PNG.
pub fn output_format(path: &Path) -> RenderResult<ImageFormat> {
    if path.extension().is_none() {
        return Ok(ImageFormat::Png);
    }
    ImageFormat::from_path(path).map_err(|_| RenderError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}

/// Save `img` to `path` in the format its extension names.
///
/// Formats that can't carry alpha receive the RGB channels only.
pub fn save_image(img: &RgbaImage, path: &Path) -> RenderResult<ImageFormat> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyImage { width, height });
    }

    let format = output_format(path)?;
    let dynamic = DynamicImage::ImageRgba8(img.clone());
    let encodable = match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => DynamicImage::ImageRgb8(dynamic.to_rgb8()),
        ImageFormat::Farbfeld => DynamicImage::ImageRgba16(dynamic.to_rgba16()),
        ImageFormat::OpenExr => DynamicImage::ImageRgba32F(dynamic.to_rgba32f()),
        _ => dynamic,
    };

    encodable.save_with_format(path, format)?;
    debug!(path = %path.display(), ?format, width, height, "Saved image");
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(output_format(Path::new("out.png")).unwrap(), ImageFormat::Png);
        assert_eq!(output_format(Path::new("out.JPG")).unwrap(), ImageFormat::Jpeg);
        assert_eq!(output_format(Path::new("a/b.tiff")).unwrap(), ImageFormat::Tiff);
        assert_eq!(output_format(Path::new("out.bmp")).unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_output_format_without_extension() {
        assert_eq!(output_format(Path::new("out")).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_output_format_unknown_extension() {
        let err = output_format(Path::new("out.xyz")).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_save_empty_image() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_image(&RgbaImage::new(0, 3), &dir.path().join("e.png")).unwrap_err();
        assert!(matches!(err, RenderError::EmptyImage { width: 0, height: 3 }));
    }

    #[test]
    fn test_save_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.jpg");
        let img = RgbaImage::from_pixel(4, 2, Rgba([200, 100, 50, 128]));

        assert_eq!(save_image(&img, &path).unwrap(), ImageFormat::Jpeg);
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 2));
        assert!(!decoded.color().has_alpha());
    }
}
