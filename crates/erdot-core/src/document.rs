//! The parsed document and its builder.
//!
//! A [`Document`] is produced once per conversion by a [`DocumentBuilder`]
//! and is read-only afterwards. Entities and relations keep the order in
//! which they were added.

use log::debug;

use crate::{entity::Entity, relation::Relation};

/// The complete parsed representation of one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: Option<String>,
    entities: Vec<Entity>,
    relations: Vec<Relation>,
}

impl Document {
    /// The document title, if any title line was found.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Entities in source order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Relations in source order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }
}

/// Accumulates parse results into a [`Document`].
///
/// Items are append-only: nothing added to the builder is removed or
/// reordered. Setting the title again replaces the previous one.
///
/// # Example
///
/// ```
/// use erdot_core::{
///     document::DocumentBuilder,
///     entity::Entity,
///     relation::{Cardinality, Relation},
/// };
///
/// let mut builder = DocumentBuilder::new();
/// builder.set_title("Shop");
/// builder.add_entity(Entity::new("User", "#eeeeee", Vec::new(), Vec::new()));
/// builder.add_relation(Relation::new(
///     "User",
///     "Order",
///     Cardinality::ZeroOrMany,
///     Cardinality::One,
/// ));
///
/// let document = builder.build();
/// assert_eq!(document.title(), Some("Shop"));
/// assert_eq!(document.entities().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    entities: Vec<Entity>,
    relations: Vec<Relation>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title, replacing any earlier one.
    pub fn set_title(&mut self, title: impl AsRef<str>) {
        self.title = Some(title.as_ref().trim().to_string());
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Finishes the document.
    pub fn build(self) -> Document {
        debug!(
            has_title = self.title.is_some(),
            entities = self.entities.len(),
            relations = self.relations.len();
            "Document built"
        );

        Document {
            title: self.title,
            entities: self.entities,
            relations: self.relations,
        }
    }
}
