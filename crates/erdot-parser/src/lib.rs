//! # erdot Parser
//!
//! Parser for the erdot entity-relationship notation. The input is split
//! into blank-line separated blocks, each block is scanned line by line, and
//! the results are collected into a [`Document`].
//!
//! The parser is permissive: it never fails. Lines that fit no known shape
//! and option objects that cannot be read are reported as warnings in
//! [`Parsed::diagnostics`] and otherwise skipped.
//!
//! ## Usage
//!
//! ```
//! use erdot_parser::{Parser, ParserConfig};
//!
//! let source = "\
//! Title: Shop
//!
//! [User] {\"color\": \"#ffffff\"}
//! *id
//! name
//!
//! User 1--* Order
//! ";
//!
//! let parsed = Parser::new(ParserConfig::default()).parse(source);
//! let document = parsed.document();
//!
//! assert_eq!(document.title(), Some("Shop"));
//! assert_eq!(document.entities()[0].name(), "User");
//! assert_eq!(document.relations()[0].from_cardinality().label(), "0..N");
//! assert!(parsed.diagnostics().is_empty());
//! ```

pub mod error;

mod attribute;
mod options;
mod partition;
#[cfg(test)]
mod parser_tests;
mod scanner;
mod span;
mod syntax;

pub use attribute::annotate_attribute;
pub use partition::{Block, Line, partition};
pub use span::Span;

use log::{debug, info};

use erdot_core::{color::DEFAULT_ENTITY_COLOR, document::Document};

use error::Diagnostic;
use scanner::Scanner;

/// Settings that influence how documents are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    default_color: String,
}

impl ParserConfig {
    /// Create a parser configuration.
    ///
    /// # Arguments
    ///
    /// * `default_color` - Header color for entities without a usable `color` option
    pub fn new(default_color: impl Into<String>) -> Self {
        Self {
            default_color: default_color.into(),
        }
    }

    /// Header color used when an entity sets none.
    pub fn default_color(&self) -> &str {
        &self.default_color
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENTITY_COLOR)
    }
}

/// The result of parsing one input.
#[derive(Debug, Clone)]
pub struct Parsed {
    document: Document,
    diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Warnings for input that was skipped or only partly understood.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Document, Vec<Diagnostic>) {
        (self.document, self.diagnostics)
    }
}

/// Parser for the erdot notation.
///
/// A parser holds only its configuration; every call to [`Parser::parse`]
/// starts from an empty document.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a document.
    ///
    /// Blocks are visited once, in source order. Entities and relations are
    /// appended in the order their lines appear; when several title lines
    /// exist the last one wins.
    pub fn parse(&self, source: &str) -> Parsed {
        let blocks = partition(source);
        info!(blocks = blocks.len(); "Parsing document");

        let mut scanner = Scanner::new(&self.config);
        for block in &blocks {
            scanner.scan_block(block);
        }

        let (document, diagnostics) = scanner.finish();
        debug!(warnings = diagnostics.len(); "Parsing finished");

        Parsed {
            document,
            diagnostics,
        }
    }
}
