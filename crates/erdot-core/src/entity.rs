//! Entities and their attributes.
//!
//! An [`Entity`] is a named table in the diagram with an ordered list of
//! [`Attribute`]s, an ordered list of free-form comments and a header color.

/// A single field of an entity.
///
/// The primary/foreign flags are decided once when the attribute line is
/// annotated; the display name never carries the marker characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    display_name: String,
    is_primary: bool,
    is_foreign: bool,
}

impl Attribute {
    /// Create a new attribute.
    ///
    /// The display name is trimmed of surrounding whitespace.
    pub fn new(display_name: impl AsRef<str>, is_primary: bool, is_foreign: bool) -> Self {
        Self {
            display_name: display_name.as_ref().trim().to_string(),
            is_primary,
            is_foreign,
        }
    }

    /// Create an attribute that is neither primary nor foreign.
    pub fn plain(display_name: impl AsRef<str>) -> Self {
        Self::new(display_name, false, false)
    }

    /// The attribute text without markers.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether the attribute is part of the primary key.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Whether the attribute references another entity.
    pub fn is_foreign(&self) -> bool {
        self.is_foreign
    }
}

/// A named schema object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    attributes: Vec<Attribute>,
    comments: Vec<String>,
    color: String,
}

impl Entity {
    /// Create a new entity.
    ///
    /// # Arguments
    ///
    /// * `name` - Entity name, trimmed of surrounding whitespace
    /// * `color` - Header background color, emitted verbatim
    /// * `attributes` - Attributes in source order
    /// * `comments` - Comment lines in source order, without the `#` marker
    pub fn new(
        name: impl AsRef<str>,
        color: impl Into<String>,
        attributes: Vec<Attribute>,
        comments: Vec<String>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            attributes,
            comments,
            color: color.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
