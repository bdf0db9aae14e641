//! Diagnostics for the erdot parser.
//!
//! Parsing never fails: lines that fit no known shape are dropped and
//! reported as warnings instead. Each warning is a [`Diagnostic`] with a
//! [`DiagnosticCode`], a primary [`Label`] pointing at the offending line,
//! optional context labels, and optional help text.
//!
//! # Example
//!
//! ```
//! # use erdot_parser::error::{Diagnostic, DiagnosticCode};
//! # use erdot_parser::Span;
//!
//! let diag = Diagnostic::warning("unrecognized line")
//!     .with_code(DiagnosticCode::W001)
//!     .with_label(Span::new(0..12), "ignored")
//!     .with_help("relations are written as `User 1--* Order`");
//!
//! assert_eq!(diag.to_string(), "warning[W001]: unrecognized line");
//! ```

mod diagnostic;
mod diagnostic_code;
mod label;

pub use diagnostic::Diagnostic;
pub use diagnostic_code::DiagnosticCode;
pub use label::{Label, LabelRole};
