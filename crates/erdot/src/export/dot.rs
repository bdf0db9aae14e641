//! Graphviz DOT emitter.
//!
//! The emitted graph has a fixed shape:
//!
//! 1. `digraph G {` followed by the global graph, node and edge directives,
//!    and the title when the document has one.
//! 2. One node per entity, labeled with an HTML-like table: the entity name
//!    in a colored header cell, then one cell per attribute. Primary
//!    attributes are underlined, foreign attributes italic. A commented
//!    entity is followed by a note node and an edge from the note to it.
//! 3. One edge per relation carrying both cardinality labels.
//!
//! Names are written as quoted DOT strings with `\` and `"` escaped; text
//! inside table cells is HTML-escaped.

use std::fmt::{self, Write as _};

use html_escape::{encode_double_quoted_attribute, encode_text};

use erdot_core::{
    color::Color,
    document::Document,
    entity::{Attribute, Entity},
    relation::Relation,
};

use crate::config::{RankDir, StyleConfig};

const INDENT: &str = "    ";

/// Validated style values used while emitting.
#[derive(Debug, Clone)]
pub(crate) struct DotStyle {
    comment_color: Color,
    edge_color: Color,
    font_size: u32,
    rank_dir: RankDir,
}

impl DotStyle {
    /// Validate a [`StyleConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if any configured color cannot be parsed.
    pub fn from_config(style: &StyleConfig) -> Result<Self, String> {
        Ok(Self {
            comment_color: style.comment_color()?,
            edge_color: style.edge_color()?,
            font_size: style.font_size(),
            rank_dir: style.rank_dir(),
        })
    }
}

/// Writes one [`Document`] as DOT text.
pub(crate) struct DotWriter<'a> {
    style: &'a DotStyle,
    out: String,
}

impl<'a> DotWriter<'a> {
    pub fn new(style: &'a DotStyle) -> Self {
        Self {
            style,
            out: String::new(),
        }
    }

    /// Emit the whole document.
    pub fn write_document(mut self, document: &Document) -> Result<String, fmt::Error> {
        writeln!(self.out, "digraph G {{")?;
        self.preamble(document.title())?;

        for entity in document.entities() {
            self.entity(entity)?;
            if entity.has_comments() {
                self.comments(entity)?;
            }
        }

        for relation in document.relations() {
            self.relation(relation)?;
        }

        writeln!(self.out, "}}")?;
        Ok(self.out)
    }

    fn preamble(&mut self, title: Option<&str>) -> fmt::Result {
        let style = self.style;
        writeln!(self.out, "{INDENT}pencolor=black;")?;
        writeln!(self.out, "{INDENT}fontsize={};", style.font_size)?;
        if let Some(title) = title {
            writeln!(self.out, "{INDENT}labelloc=t;")?;
            writeln!(self.out, "{INDENT}label={};", quote(title))?;
        }
        writeln!(self.out, "{INDENT}rankdir={};", style.rank_dir)?;
        writeln!(
            self.out,
            r#"{INDENT}graph [pad="0.5", nodesep="1", ranksep="2"];"#
        )?;
        writeln!(self.out, "{INDENT}node [shape=none, margin=0];")?;
        writeln!(
            self.out,
            "{INDENT}edge [arrowhead=none, arrowtail=none, dir=both, style=dashed, color={}];",
            quote(style.edge_color.as_str())
        )
    }

    fn entity(&mut self, entity: &Entity) -> fmt::Result {
        writeln!(self.out, "{INDENT}{} [label=<", quote(entity.name()))?;
        writeln!(
            self.out,
            r#"{INDENT}{INDENT}<table border="0" cellborder="1" cellspacing="0" cellpadding="4">"#
        )?;
        writeln!(
            self.out,
            r#"{INDENT}{INDENT}{INDENT}<tr><td bgcolor="{}" align="left">{}</td></tr>"#,
            encode_double_quoted_attribute(entity.color()),
            encode_text(entity.name())
        )?;
        for attribute in entity.attributes() {
            writeln!(
                self.out,
                r#"{INDENT}{INDENT}{INDENT}<tr><td align="left">{}</td></tr>"#,
                attribute_cell(attribute)
            )?;
        }
        writeln!(self.out, "{INDENT}{INDENT}</table>")?;
        writeln!(self.out, "{INDENT}>];")
    }

    fn comments(&mut self, entity: &Entity) -> fmt::Result {
        let note = quote(&note_id(entity.name()));
        let label = entity
            .comments()
            .iter()
            .map(|comment| escape(comment))
            .collect::<Vec<_>>()
            .join("\\n");

        writeln!(
            self.out,
            r#"{INDENT}{note} [label="{label}", shape=note, constraint=true, style=filled, fillcolor={}];"#,
            quote(self.style.comment_color.as_str())
        )?;
        writeln!(self.out, "{INDENT}{note} -> {};", quote(entity.name()))
    }

    fn relation(&mut self, relation: &Relation) -> fmt::Result {
        writeln!(
            self.out,
            "{INDENT}{} -> {} [taillabel={}, headlabel={}];",
            quote(relation.from_entity()),
            quote(relation.to_entity()),
            quote(relation.from_cardinality().label()),
            quote(relation.to_cardinality().label())
        )
    }
}

/// Escape text for use inside a quoted DOT string.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quote text as a DOT string.
fn quote(text: &str) -> String {
    format!("\"{}\"", escape(text))
}

/// Node ID of the comment note for `entity_name`.
///
/// Entity names never contain `]`, so no entity can share this ID.
fn note_id(entity_name: &str) -> String {
    format!("{entity_name}[comments]")
}

/// Table cell content for an attribute: underlined when primary, italic
/// when foreign.
fn attribute_cell(attribute: &Attribute) -> String {
    let mut cell = encode_text(attribute.display_name()).into_owned();
    if attribute.is_primary() {
        cell = format!("<U>{cell}</U>");
    }
    if attribute.is_foreign() {
        cell = format!("<I>{cell}</I>");
    }
    cell
}
