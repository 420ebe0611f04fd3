//! Headless end-to-end runs of the plotting pipeline.

use image::GenericImageView;
use clap::Parser;
use gridplot::{run, split_known_args, Args, PlotConfig};
use test_utils::{create_escape_time_grid, single_row_bytes, GridFixture};

fn config_for(argv: &[&str]) -> PlotConfig {
    let (known, _unknown) = split_known_args(argv.iter().copied());
    PlotConfig::from_args(&Args::try_parse_from(known).unwrap()).unwrap()
}

#[test]
fn test_single_row_saved_image() {
    let fixture = GridFixture::from_bytes("row.bin", &single_row_bytes()).unwrap();
    let out = fixture.output_path("out.png");
    let input = fixture.path().to_str().unwrap().to_string();
    let save = out.to_str().unwrap().to_string();

    let config = config_for(&[
        "gridplot", &input, "--cmap", "jet", "--save_img", &save, "--no-show",
    ]);
    let outcome = run(&config).unwrap();

    assert_eq!((outcome.width, outcome.height), (2, 1));
    assert_eq!(outcome.shaded.dimensions(), (2, 1));
    assert!(outcome.figure.is_none());
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
    assert_eq!(image::open(&out).unwrap().to_rgba8().dimensions(), (2, 1));
}

#[test]
fn test_unknown_arguments_do_not_abort() {
    let fixture = GridFixture::from_bytes("row.bin", &single_row_bytes()).unwrap();
    let input = fixture.path().to_str().unwrap().to_string();

    let argv = ["gridplot", input.as_str(), "--foo", "bar", "--no-show", "--cmap", "hot"];
    let (known, unknown) = split_known_args(argv);
    assert_eq!(unknown, ["--foo", "bar"]);

    let config = PlotConfig::from_args(&Args::try_parse_from(known).unwrap()).unwrap();
    assert_eq!(config.cmap, "hot");
    assert!(run(&config).is_ok());
}

#[test]
fn test_log_scaling_range() {
    let values = create_escape_time_grid(24, 16, 50);
    let fixture = GridFixture::grid(24, 16, &values).unwrap();
    let input = fixture.path().to_str().unwrap().to_string();

    let outcome = run(&config_for(&["gridplot", &input, "--log", "--no-show"])).unwrap();

    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(outcome.norm.vmin, lo.ln());
    assert_eq!(outcome.norm.vmax, hi.ln());
}

#[test]
fn test_figure_written_headless() {
    let fixture = GridFixture::grid(30, 10, &create_escape_time_grid(30, 10, 40)).unwrap();
    let input = fixture.path().to_str().unwrap().to_string();
    let figure_path = fixture.output_path("figure.png");
    let figure_arg = figure_path.to_str().unwrap().to_string();

    let outcome = run(&config_for(&[
        "gridplot",
        &input,
        "--no-show",
        "--figure",
        &figure_arg,
        "--fig-width",
        "700",
        "--fig-height",
        "300",
        "--font",
        "/nonexistent/font.ttf",
    ]))
    .unwrap();

    assert_eq!(outcome.figure.unwrap().dimensions(), (700, 300));
    assert_eq!(image::open(&figure_path).unwrap().dimensions(), (700, 300));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");
    let input = missing.to_str().unwrap().to_string();

    let err = run(&config_for(&["gridplot", &input, "--no-show"])).unwrap_err();

    assert!(err.to_string().contains("missing.bin"));
    let root = err.downcast_ref::<gridfile::GridError>().unwrap();
    assert!(matches!(root, gridfile::GridError::NotFound { .. }));
}

#[test]
fn test_unknown_colormap_fails() {
    let fixture = GridFixture::from_bytes("row.bin", &single_row_bytes()).unwrap();
    let input = fixture.path().to_str().unwrap().to_string();

    let err = run(&config_for(&["gridplot", &input, "--cmap", "nope", "--no-show"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<renderer::RenderError>(),
        Some(renderer::RenderError::UnknownColormap { .. })
    ));
}

#[test]
fn test_size_mismatch_is_malformed() {
    let fixture =
        GridFixture::from_bytes("short.bin", &test_utils::short_payload_bytes()).unwrap();
    let input = fixture.path().to_str().unwrap().to_string();

    let err = run(&config_for(&["gridplot", &input, "--no-show"])).unwrap_err();
    let root = err.downcast_ref::<gridfile::GridError>().unwrap();
    assert!(root.is_malformed());
}
