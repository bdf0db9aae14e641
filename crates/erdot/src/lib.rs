//! erdot - Entity-relationship diagrams from plain text.
//!
//! Parsing of the erdot notation and emission of Graphviz DOT text, with
//! optional rendering to images through Graphviz (`graphviz` feature).

pub mod config;

mod error;
mod export;

pub use erdot_core::{color, document, entity, relation};
pub use erdot_parser::{
    Parsed,
    error::{Diagnostic, DiagnosticCode, LabelRole},
};

pub use error::ErdotError;
pub use export::OutputFormat;

use log::{debug, info, trace};

use erdot_parser::{Parser, ParserConfig};

use config::AppConfig;
use document::Document;
use export::dot::{DotStyle, DotWriter};

/// Builder for parsing and rendering erdot diagrams.
///
/// # Examples
///
/// ```rust
/// use erdot::{DiagramBuilder, OutputFormat, config::AppConfig};
///
/// let source = "[User]\n*id\n\nUser 1--* Order";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse source to the document model
/// let parsed = builder.parse(source).expect("Failed to parse");
///
/// // Emit DOT text
/// let dot = builder.render_dot(parsed.document()).expect("Failed to render");
/// assert!(dot.starts_with("digraph G {"));
///
/// // Or produce the bytes for an output format
/// let bytes = builder
///     .render(parsed.document(), OutputFormat::Dot)
///     .expect("Failed to render");
/// assert_eq!(bytes, dot.into_bytes());
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a document.
    ///
    /// Unrecognized input does not fail the parse; it is reported in
    /// [`Parsed::diagnostics`].
    ///
    /// # Errors
    ///
    /// Returns [`ErdotError::Config`] if the configured default entity color
    /// is invalid.
    pub fn parse(&self, source: &str) -> Result<Parsed, ErdotError> {
        info!("Parsing diagram");

        let default_color = self
            .config
            .style()
            .entity_color()
            .map_err(ErdotError::Config)?;

        let parsed = Parser::new(ParserConfig::new(default_color.as_str())).parse(source);

        debug!(
            entities = parsed.document().entities().len(),
            relations = parsed.document().relations().len(),
            warnings = parsed.diagnostics().len();
            "Diagram parsed"
        );
        trace!(document:? = parsed.document(); "Parsed document");

        Ok(parsed)
    }

    /// Emit a document as Graphviz DOT text.
    ///
    /// # Errors
    ///
    /// Returns [`ErdotError::Config`] if a configured style color is invalid.
    pub fn render_dot(&self, document: &Document) -> Result<String, ErdotError> {
        let style = DotStyle::from_config(self.config.style()).map_err(ErdotError::Config)?;

        let dot = DotWriter::new(&style)
            .write_document(document)
            .map_err(|err| ErdotError::Render(format!("failed to write DOT text: {err}")))?;

        debug!(bytes = dot.len(); "DOT emitted");
        Ok(dot)
    }

    /// Produce the output bytes for a document in the given format.
    ///
    /// [`OutputFormat::Dot`] returns the DOT text itself. Image formats are
    /// rendered by Graphviz and require the `graphviz` feature.
    ///
    /// # Errors
    ///
    /// Returns [`ErdotError::Render`] if rendering fails or is unavailable,
    /// and [`ErdotError::Config`] for invalid style configuration.
    pub fn render(&self, document: &Document, format: OutputFormat) -> Result<Vec<u8>, ErdotError> {
        let dot = self.render_dot(document)?;
        info!(format:% = format; "Rendering diagram");

        if !format.needs_renderer() {
            return Ok(dot.into_bytes());
        }

        render_image(dot, format)
    }
}

#[cfg(feature = "graphviz")]
fn render_image(dot: String, format: OutputFormat) -> Result<Vec<u8>, ErdotError> {
    export::graphviz::render(dot, format)
}

#[cfg(not(feature = "graphviz"))]
fn render_image(_dot: String, format: OutputFormat) -> Result<Vec<u8>, ErdotError> {
    Err(ErdotError::Render(format!(
        "rendering {format} requires the `graphviz` feature; use a `.dot` output instead"
    )))
}
