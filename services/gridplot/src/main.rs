//! gridplot binary.
//!
//! Loads a binary grid file, shades it with a colormap and a light source,
//! optionally saves the result, and shows it with a colorbar.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use gridplot::cli::report_unknown;
use gridplot::config::load_registry;
use gridplot::{split_known_args, Args, LogFormat, PlotConfig};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let (known, unknown) = split_known_args(argv);
    let args = Args::parse_from(known);

    init_tracing(&args);

    report_unknown(&mut std::io::stdout().lock(), &unknown)?;

    if args.list_cmaps {
        let registry = load_registry(args.cmap_file.as_deref())?;
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let config = PlotConfig::from_args(&args)?;
    info!(input = %config.input.display(), cmap = %config.cmap, "Starting gridplot");

    let outcome = gridplot::run(&config)?;
    info!(
        width = outcome.width,
        height = outcome.height,
        "Done"
    );
    Ok(())
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let builder = fmt().with_env_filter(filter).with_target(false);
    match args.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
