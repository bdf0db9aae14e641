//! Rendering DOT text with the Graphviz `dot` executable.

use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec_dot,
};
use log::debug;

use crate::{ErdotError, export::OutputFormat};

/// Render `dot` into image bytes of the given format.
///
/// # Errors
///
/// Returns [`ErdotError::Render`] when `dot` cannot be executed or rejects
/// the input.
pub(crate) fn render(dot: String, format: OutputFormat) -> Result<Vec<u8>, ErdotError> {
    let graphviz_format = match format {
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Jpeg => Format::Jpeg,
        OutputFormat::Dot => return Ok(dot.into_bytes()),
    };

    debug!(format:% = format; "Invoking Graphviz");
    exec_dot(dot, vec![CommandArg::Format(graphviz_format)])
        .map_err(|err| ErdotError::Render(format!("graphviz failed to render {format}: {err}")))
}
