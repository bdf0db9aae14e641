//! Codes for parser warnings.

use std::fmt;

/// Codes for categorizing parser diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Unrecognized line.
    ///
    /// The line is neither a title, a relation, an entity header nor a
    /// comment, and it is not inside an entity block.
    W001,

    /// Malformed entity options.
    ///
    /// The text after an entity header is not a valid option object. The
    /// entity keeps the default color.
    W002,

    /// Empty title.
    ///
    /// A `Title:` line has no text after the colon.
    W003,

    /// Comment outside of an entity.
    ///
    /// A `#` comment appears in a block that declares no entity.
    W004,

    /// Unrecognized color value.
    ///
    /// The `color` option is not a known color name or hex value. It is
    /// still passed through to the renderer.
    W005,
}

impl DiagnosticCode {
    /// Returns the code as a string (e.g., "W001").
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::W001 => "W001",
            DiagnosticCode::W002 => "W002",
            DiagnosticCode::W003 => "W003",
            DiagnosticCode::W004 => "W004",
            DiagnosticCode::W005 => "W005",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticCode::W001 => "unrecognized line",
            DiagnosticCode::W002 => "malformed entity options",
            DiagnosticCode::W003 => "empty title",
            DiagnosticCode::W004 => "comment outside of an entity",
            DiagnosticCode::W005 => "unrecognized color",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
