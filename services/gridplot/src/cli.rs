//! Command-line arguments.
//!
//! Unrecognized arguments are not an error: [`split_known_args`] separates
//! them from the ones the command declares so they can be reported and
//! skipped before clap parses the rest.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Arg, CommandFactory, Parser, ValueEnum};
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "gridplot")]
#[command(version, about = "Render a binary grid file as a shaded, colormapped image")]
pub struct Args {
    /// Binary grid file (i32 width, i32 height, then width*height f64 values)
    #[arg(required_unless_present = "list_cmaps")]
    pub fname: Option<PathBuf>,

    /// Colormap name; append `_r` for the reversed map
    #[arg(long, default_value = "jet", env = "GRIDPLOT_CMAP")]
    pub cmap: String,

    /// Shade the natural log of the values
    #[arg(long)]
    pub log: bool,

    /// Save the shaded image here; the extension picks the format
    #[arg(long = "save_img", visible_alias = "save-img")]
    pub save_img: Option<String>,

    /// Figure title
    #[arg(long, default_value = "Fractal")]
    pub title: String,

    /// JSON file with additional colormaps
    #[arg(long, env = "GRIDPLOT_CMAP_FILE")]
    pub cmap_file: Option<PathBuf>,

    /// Save the composed figure (image, colorbar and title) here
    #[arg(long)]
    pub figure: Option<PathBuf>,

    /// Don't open the interactive window
    #[arg(long)]
    pub no_show: bool,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1400)]
    pub fig_width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 600)]
    pub fig_height: u32,

    /// TrueType font for figure text
    #[arg(long, env = "GRIDPLOT_FONT")]
    pub font: Option<PathBuf>,

    /// Print the available colormaps and exit
    #[arg(long)]
    pub list_cmaps: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Split raw arguments into those [`Args`] declares and the rest.
///
/// The first element is the program name and always lands in the known list.
/// Unknown options never consume the following token, so in
/// `data.bin --foo bar` both `--foo` and `bar` are unknown: `bar` is a
/// surplus positional once `fname` is taken. A value-taking option consumes
/// the next token whatever it looks like.
pub fn split_known_args<I, T>(argv: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut command = Args::command();
    command.build();

    let options: Vec<&Arg> = command.get_arguments().filter(|a| !a.is_positional()).collect();
    let mut free_positionals = command.get_positionals().count();

    let mut known = Vec::new();
    let mut unknown = Vec::new();

    let mut tokens = argv.into_iter().map(Into::into);
    if let Some(program) = tokens.next() {
        known.push(program);
    }

    let mut after_separator = false;
    while let Some(token) = tokens.next() {
        if after_separator || !looks_like_option(&token) {
            if token == "--" {
                after_separator = true;
                continue;
            }
            if free_positionals > 0 {
                free_positionals -= 1;
                if after_separator && token.starts_with('-') {
                    known.push("--".to_string());
                }
                known.push(token);
            } else {
                unknown.push(token);
            }
            continue;
        }

        match find_option(&options, &token) {
            Some(arg) => {
                let inline_value = token.starts_with("--") && token.contains('=')
                    || !token.starts_with("--") && token.len() > 2;
                let takes_value = arg.get_action().takes_values();
                known.push(token);
                if takes_value && !inline_value {
                    if let Some(value) = tokens.next() {
                        known.push(value);
                    }
                }
            }
            None => unknown.push(token),
        }
    }

    (known, unknown)
}

/// Write the unknown-arguments warning to `out`, if there are any.
///
/// This goes straight to the writer rather than through the log filter so
/// it is printed at every log level. Returns whether anything was written.
pub fn report_unknown<W: Write>(out: &mut W, unknown: &[String]) -> io::Result<bool> {
    if unknown.is_empty() {
        return Ok(false);
    }
    writeln!(out, "Warning: unknown arguments {:?}", unknown)?;
    debug!(?unknown, "Ignoring unknown arguments");
    Ok(true)
}

/// `--x`, `--x=y` and `-x` are options; `-`, `-5` and `-.5` are values.
fn looks_like_option(token: &str) -> bool {
    if token == "--" {
        return false;
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some('-'), Some(c)) => !(c.is_ascii_digit() || c == '.'),
        _ => false,
    }
}

fn find_option<'a>(options: &[&'a Arg], token: &str) -> Option<&'a Arg> {
    if let Some(long) = token.strip_prefix("--") {
        let name = long.split_once('=').map_or(long, |(name, _)| name);
        return options.iter().copied().find(|arg| {
            arg.get_long_and_visible_aliases()
                .is_some_and(|names| names.contains(&name))
        });
    }

    let short = token.chars().nth(1)?;
    options
        .iter()
        .copied()
        .find(|arg| arg.get_short() == Some(short))
}
