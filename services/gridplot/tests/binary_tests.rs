//! Runs of the compiled `gridplot` binary.

use std::process::{Command, Output};

use test_utils::{single_row_bytes, GridFixture};

fn run_gridplot(fixture: &GridFixture, args: &[&str], rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gridplot"))
        .arg(fixture.path())
        .args(args)
        .current_dir(fixture.dir())
        .env("RUST_LOG", rust_log)
        .env_remove("GRIDPLOT_CMAP")
        .env_remove("GRIDPLOT_CMAP_FILE")
        .env_remove("GRIDPLOT_FONT")
        .output()
        .unwrap()
}

#[test]
fn test_unknown_arguments_warn_and_continue() {
    let fixture = GridFixture::from_bytes("row.bin", &single_row_bytes()).unwrap();
    let output = run_gridplot(&fixture, &["--foo", "bar", "--no-show"], "info");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"Warning: unknown arguments ["--foo", "bar"]"#), "{stdout}");
}

#[test]
fn test_unknown_arguments_warn_at_error_level() {
    let fixture = GridFixture::from_bytes("row.bin", &single_row_bytes()).unwrap();
    let output = run_gridplot(&fixture, &["--foo", "--no-show", "--log-level", "error"], "error");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"Warning: unknown arguments ["--foo"]"#), "{stdout}");
}

#[test]
fn test_saves_image_and_exits_zero() {
    let fixture = GridFixture::from_bytes("row.bin", &single_row_bytes()).unwrap();
    let output = run_gridplot(&fixture, &["--save_img", "out.png", "--no-show"], "error");

    assert!(output.status.success());
    let saved = image::open(fixture.output_path("out.png")).unwrap();
    assert_eq!((saved.width(), saved.height()), (2, 1));
}

#[test]
fn test_missing_file_exits_one() {
    let fixture = GridFixture::from_bytes("row.bin", &single_row_bytes()).unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gridplot"))
        .arg(fixture.output_path("missing.bin"))
        .arg("--no-show")
        .env("RUST_LOG", "error")
        .env_remove("GRIDPLOT_CMAP")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
