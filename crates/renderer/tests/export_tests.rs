//! Tests for writing shaded images and composed figures.

use gridfile::Grid;
use image::ImageFormat;
use renderer::figure::FigureLayout;
use renderer::{
    compose_figure, render_shaded, save_image, ColormapRegistry, FigureOptions, RenderError,
};
use test_utils::create_gaussian_bump;

fn shaded_bump() -> renderer::ShadedRender {
    let grid = Grid::new(40, 20, create_gaussian_bump(40, 20, 5.0)).unwrap();
    let cmap = ColormapRegistry::with_defaults().get("viridis").unwrap();
    render_shaded(&grid, &cmap, false)
}

#[test]
fn test_save_common_formats() {
    let dir = tempfile::tempdir().unwrap();
    let render = shaded_bump();

    for (name, format) in [
        ("a.png", ImageFormat::Png),
        ("a.bmp", ImageFormat::Bmp),
        ("a.tiff", ImageFormat::Tiff),
        ("a.jpeg", ImageFormat::Jpeg),
        ("a.tga", ImageFormat::Tga),
    ] {
        let path = dir.path().join(name);
        assert_eq!(save_image(&render.image, &path).unwrap(), format);

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 20), "{name}");
    }
}

#[test]
fn test_save_without_extension_is_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shaded");
    save_image(&shaded_bump().image, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_save_unknown_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shaded.unknownfmt");
    let err = save_image(&shaded_bump().image, &path).unwrap_err();

    assert!(matches!(err, RenderError::UnsupportedFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.png");
    assert!(save_image(&shaded_bump().image, &path).is_err());
}

#[test]
fn test_figure_written_at_requested_size() {
    let dir = tempfile::tempdir().unwrap();
    let render = shaded_bump();
    let cmap = ColormapRegistry::with_defaults().get("viridis").unwrap();
    let options = FigureOptions {
        width: 800,
        height: 400,
        title: "Bump".to_string(),
    };

    let figure = compose_figure(&render.image, &cmap, &render.norm, &options, None).unwrap();
    let path = dir.path().join("figure.png");
    save_image(&figure, &path).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (800, 400));
}

#[test]
fn test_figure_axes_keep_aspect_ratio() {
    let layout = FigureLayout::compute(1400, 600, 40, 20).unwrap();
    let image_ratio = 40.0 / 20.0;
    let axes_ratio = layout.axes_width as f64 / layout.axes_height as f64;
    assert!((axes_ratio - image_ratio).abs() < 0.01);
}
