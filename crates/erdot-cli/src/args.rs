//! Command-line argument definitions for the erdot CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the erdot diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input file
    #[arg(short, long, default_value = "in.txt")]
    pub input: String,

    /// Path to the output file; the extension selects the format
    /// (png, svg, jpg/jpeg, dot/gv)
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
