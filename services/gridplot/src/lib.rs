//! gridplot: render binary `f64` grid files as relief-shaded images.
//!
//! The binary wires these modules together; they are exposed as a library
//! so the pipeline can be driven headless from tests.

pub mod cli;
pub mod config;
pub mod display;
pub mod plot;

pub use cli::{report_unknown, split_known_args, Args, LogFormat};
pub use config::PlotConfig;
pub use plot::{run, PlotOutcome};
