//! CLI logic for the erdot diagram tool.
//!
//! This module contains the core CLI logic: it reads the input notation,
//! converts it, and writes the result in the format selected by the output
//! file's extension.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::{info, warn};

use erdot::{DiagramBuilder, ErdotError, OutputFormat, Parsed};

use error_adapter::{DiagnosticAdapter, render_report};

/// Run the erdot CLI application
///
/// # Errors
///
/// Returns `ErdotError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ErdotError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input).map_err(|err| {
        io::Error::new(err.kind(), format!("failed to read {}: {err}", args.input))
    })?;

    let builder = DiagramBuilder::new(app_config);
    let parsed = builder.parse(&source)?;
    report_warnings(&parsed, &source);

    let format = OutputFormat::from_path(&args.output);
    let output = builder.render(parsed.document(), format)?;

    // Write output file
    fs::write(&args.output, output)?;

    info!(output_file = args.output, format:% = format; "Diagram exported successfully");

    Ok(())
}

/// Log every parser warning as a rendered report.
fn report_warnings(parsed: &Parsed, source: &str) {
    for diagnostic in parsed.diagnostics() {
        let report = render_report(&DiagnosticAdapter::new(diagnostic, source));
        warn!("{report}");
    }
}
