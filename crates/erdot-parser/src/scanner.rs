//! Block scanner that turns partitioned lines into document items.
//!
//! Each block is scanned line by line with an explicit state:
//!
//! - [`ScanState::ExpectingHeader`]: no entity is open. Relation lines become
//!   relations and comments are held back for the next header.
//! - [`ScanState::InAttributes`]: an entity is open and the last line was a
//!   header or attribute.
//! - [`ScanState::InComments`]: an entity is open and the last line was a
//!   comment.
//!
//! Title and comment lines are recognized in every state. Any line that fits
//! no shape is dropped and reported as a warning.

use log::{debug, trace};

use erdot_core::{
    color::Color,
    document::{Document, DocumentBuilder},
    entity::{Attribute, Entity},
    relation::{Cardinality, Relation},
};

use crate::{
    ParserConfig,
    attribute::annotate_attribute,
    error::{Diagnostic, DiagnosticCode},
    options::EntityOptions,
    partition::{Block, Line},
    span::Span,
    syntax::{self, RawHeader, RawRelation},
};

/// An entity whose block is still being scanned.
#[derive(Debug)]
struct PendingEntity<'src> {
    header: Line<'src>,
    name: String,
    color: String,
    attributes: Vec<Attribute>,
    comments: Vec<String>,
}

#[derive(Debug)]
enum ScanState<'src> {
    ExpectingHeader,
    InAttributes(PendingEntity<'src>),
    InComments(PendingEntity<'src>),
}

impl<'src> ScanState<'src> {
    fn into_entity(self) -> Option<PendingEntity<'src>> {
        match self {
            ScanState::ExpectingHeader => None,
            ScanState::InAttributes(entity) | ScanState::InComments(entity) => Some(entity),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ScanState::ExpectingHeader => "expecting-header",
            ScanState::InAttributes(_) => "in-attributes",
            ScanState::InComments(_) => "in-comments",
        }
    }
}

/// Accumulates the document and warnings over all blocks of one input.
pub(crate) struct Scanner<'cfg> {
    config: &'cfg ParserConfig,
    document: DocumentBuilder,
    diagnostics: Vec<Diagnostic>,
}

impl<'cfg> Scanner<'cfg> {
    pub fn new(config: &'cfg ParserConfig) -> Self {
        Self {
            config,
            document: DocumentBuilder::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan one block, appending whatever it declares.
    pub fn scan_block(&mut self, block: &Block<'_>) {
        trace!(block = block.text(); "Scanning block");

        let mut state = ScanState::ExpectingHeader;
        let mut leading_comments = Vec::new();

        for line in block.lines() {
            state = self.step(state, *line, &mut leading_comments);
            trace!(line = line.text(), state = state.name(); "Scanned line");
        }

        if let Some(entity) = state.into_entity() {
            self.finish_entity(entity);
        }

        for (line, _) in leading_comments {
            self.warn(
                Diagnostic::warning("comment is not attached to any entity")
                    .with_code(DiagnosticCode::W004)
                    .with_label(line.span(), "ignored")
                    .with_context(block.span(), "this block declares no entity")
                    .with_help("place comments in the same block as an `[Entity]` header"),
            );
        }
    }

    /// Finish scanning and return the document with all warnings.
    pub fn finish(self) -> (Document, Vec<Diagnostic>) {
        (self.document.build(), self.diagnostics)
    }

    fn step<'src>(
        &mut self,
        state: ScanState<'src>,
        line: Line<'src>,
        leading_comments: &mut Vec<(Line<'src>, &'src str)>,
    ) -> ScanState<'src> {
        let text = line.text();

        if let Some(comment) = syntax::comment(text) {
            return match state {
                ScanState::ExpectingHeader => {
                    leading_comments.push((line, comment));
                    ScanState::ExpectingHeader
                }
                ScanState::InAttributes(mut entity) | ScanState::InComments(mut entity) => {
                    entity.comments.push(comment.to_string());
                    ScanState::InComments(entity)
                }
            };
        }

        if let Some(title) = syntax::title(text) {
            self.title(title, line);
            return state;
        }

        if let Some(header) = syntax::header(text) {
            if let Some(entity) = state.into_entity() {
                self.finish_entity(entity);
            }

            let mut entity = self.start_entity(header, line);
            entity.comments.extend(
                leading_comments
                    .drain(..)
                    .map(|(_, comment)| comment.to_string()),
            );
            return ScanState::InAttributes(entity);
        }

        match state {
            ScanState::InAttributes(mut entity) | ScanState::InComments(mut entity) => {
                entity.attributes.push(annotate_attribute(text));
                ScanState::InAttributes(entity)
            }
            ScanState::ExpectingHeader => {
                match syntax::relation(text) {
                    Some(relation) => self.add_relation(relation),
                    None => self.warn(
                        Diagnostic::warning("unrecognized line")
                            .with_code(DiagnosticCode::W001)
                            .with_label(line.span(), "ignored")
                            .with_help(
                                "expected `Title: ...`, an `[Entity]` header, or a relation such as `User 1--* Order`",
                            ),
                    ),
                }
                ScanState::ExpectingHeader
            }
        }
    }

    fn title(&mut self, title: &str, line: Line<'_>) {
        if title.is_empty() {
            self.warn(
                Diagnostic::warning("title is empty")
                    .with_code(DiagnosticCode::W003)
                    .with_label(line.span(), "ignored"),
            );
            return;
        }

        debug!(title; "Found title");
        self.document.set_title(title);
    }

    fn start_entity<'src>(&mut self, header: RawHeader<'src>, line: Line<'src>) -> PendingEntity<'src> {
        let color = match header.options {
            Some(raw) => self.entity_color(header.name, raw, line),
            None => self.config.default_color().to_string(),
        };

        PendingEntity {
            header: line,
            name: header.name.to_string(),
            color,
            attributes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Resolve the header color from the option text, falling back to the
    /// configured default.
    fn entity_color(&mut self, name: &str, raw: &str, line: Line<'_>) -> String {
        // Options run to the end of the trimmed header line.
        let end = line.span().end();
        let span = Span::new(end - raw.len()..end);

        let options = match EntityOptions::parse(raw) {
            Ok(options) => options,
            Err(err) => {
                self.warn(
                    Diagnostic::warning(format!("malformed options for entity `{name}`"))
                        .with_code(DiagnosticCode::W002)
                        .with_label(span, err)
                        .with_context(header_span(line), "entity declared here")
                        .with_help(r##"options are a JSON object such as `{"color": "#ffffff"}`"##),
                );
                return self.config.default_color().to_string();
            }
        };

        match options.color.as_deref().map(str::trim) {
            Some(color) if !color.is_empty() => {
                if let Err(err) = Color::new(color) {
                    self.warn(
                        Diagnostic::warning(format!("unrecognized color for entity `{name}`"))
                            .with_code(DiagnosticCode::W005)
                            .with_label(span, err)
                            .with_context(header_span(line), "entity declared here")
                            .with_help("use a color name such as `white` or a hex value such as `#ffffff`"),
                    );
                }
                color.to_string()
            }
            _ => self.config.default_color().to_string(),
        }
    }

    fn finish_entity(&mut self, entity: PendingEntity<'_>) {
        debug!(
            name = entity.name,
            attributes = entity.attributes.len(),
            comments = entity.comments.len();
            "Found entity"
        );
        trace!(header = entity.header.text(); "Entity header");

        self.document.add_entity(Entity::new(
            entity.name,
            entity.color,
            entity.attributes,
            entity.comments,
        ));
    }

    fn add_relation(&mut self, raw: RawRelation<'_>) {
        // The label at each end comes from the symbol written next to the
        // opposite entity.
        let relation = Relation::new(
            raw.left_name,
            raw.right_name,
            Cardinality::from_symbol(raw.right_symbol),
            Cardinality::from_symbol(raw.left_symbol),
        );

        debug!(
            from = relation.from_entity(),
            to = relation.to_entity();
            "Found relation"
        );
        self.document.add_relation(relation);
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        debug!(diagnostic:% = diagnostic, span:? = diagnostic.primary_span(); "Skipped input");
        self.diagnostics.push(diagnostic);
    }
}

/// Span of the `[Name]` part of a header line.
fn header_span(line: Line<'_>) -> Span {
    let text = line.text();
    let len = text.find(']').map_or(text.len(), |close| close + 1);
    let start = line.span().start();
    Span::new(start..start + len)
}

