//! Adapters for rendering erdot errors and warnings with miette.
//!
//! This module provides the bridge between the library's error and
//! diagnostic types and miette's rich formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity, SourceSpan};

use erdot::{Diagnostic, ErdotError, LabelRole};

/// Adapter for a single parser warning.
///
/// Wraps a [`Diagnostic`] together with the source it refers to so the
/// offending line can be shown.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Warning)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        // Warnings without their own help fall back to what the code means.
        self.diag
            .help()
            .or_else(|| self.diag.code().map(|code| code.description()))
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            match label.role() {
                LabelRole::Primary => LabeledSpan::new_primary_with_span(message, span),
                LabelRole::Context => LabeledSpan::new_with_span(message, span),
            }
        })))
    }
}

/// Adapter for [`ErdotError`].
///
/// These errors carry no source location; only a code and message are shown.
pub struct ErrorAdapter<'a>(pub &'a ErdotError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ErdotError::Io(_) => "erdot::io",
            ErdotError::Config(_) => "erdot::config",
            ErdotError::Render(_) => "erdot::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ErdotError::Render(_) => Some(Box::new(
                "make sure Graphviz is installed and `dot` is on PATH, or write a `.dot` file",
            )),
            _ => None,
        }
    }
}

/// Render any miette diagnostic into a string.
///
/// Falls back to the plain message if the graphical handler fails.
pub fn render_report(diagnostic: &dyn MietteDiagnostic) -> String {
    let mut writer = String::new();
    match GraphicalReportHandler::new().render_report(&mut writer, diagnostic) {
        Ok(()) => writer,
        Err(_) => diagnostic.to_string(),
    }
}
