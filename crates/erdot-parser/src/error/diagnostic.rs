//! The core diagnostic type for the erdot parser.
//!
//! A [`Diagnostic`] is a single warning with an optional code, labeled
//! source spans, and help text.

use std::fmt;

use crate::{
    error::{
        diagnostic_code::DiagnosticCode,
        label::{Label, LabelRole},
    },
    span::Span,
};

/// A warning about input that was skipped or only partly understood.
///
/// # Example
///
/// ```text
/// warning[W002]: malformed options for entity `User`
///   --> in.txt:1:8
///    |
///  1 | [User] {"color": "#fff"
///    |        ^^^^^^^^^^^^^^^^ expected `}`
///    |
///    = help: options are a JSON object such as `{"color": "#ffffff"}`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<DiagnosticCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the diagnostic code, if any.
    pub fn code(&self) -> Option<DiagnosticCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the span of the first primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Mark the text this warning is about.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(LabelRole::Primary, span, message));
        self
    }

    /// Point at related text, such as the enclosing block or entity header.
    pub fn with_context(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(LabelRole::Context, span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "warning[W001]: message" or "warning: message"
        write!(f, "warning")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
