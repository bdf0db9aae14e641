//! Relations between entities and their cardinality labels.

use std::fmt;

/// Multiplicity shown at one end of a relation edge.
///
/// Cardinalities are written in the source as single symbols and rendered
/// as human-readable labels:
///
/// | symbol | label  |
/// |--------|--------|
/// | `1`    | `1`    |
/// | `?`    | `0..1` |
/// | `+`    | `1..N` |
/// | `*`    | `0..N` |
///
/// Any other symbol becomes [`Cardinality::Unspecified`], which renders as an
/// empty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly one (`1`).
    One,
    /// Zero or one (`?`).
    ZeroOrOne,
    /// One or more (`+`).
    OneOrMany,
    /// Zero or more (`*`).
    ZeroOrMany,
    /// An unknown symbol.
    Unspecified,
}

impl Cardinality {
    /// Symbols accepted by the relation grammar.
    pub const SYMBOLS: [char; 4] = ['1', '?', '+', '*'];

    /// Map a cardinality symbol to its cardinality.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '1' => Self::One,
            '?' => Self::ZeroOrOne,
            '+' => Self::OneOrMany,
            '*' => Self::ZeroOrMany,
            _ => Self::Unspecified,
        }
    }

    /// Returns the multiplicity label for this cardinality.
    pub fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::ZeroOrOne => "0..1",
            Self::OneOrMany => "1..N",
            Self::ZeroOrMany => "0..N",
            Self::Unspecified => "",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A connection between two entities.
///
/// Names are kept as written; they are not required to match a declared
/// entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    from_entity: String,
    to_entity: String,
    from_cardinality: Cardinality,
    to_cardinality: Cardinality,
}

impl Relation {
    /// Create a new relation. Entity names are trimmed.
    pub fn new(
        from_entity: impl AsRef<str>,
        to_entity: impl AsRef<str>,
        from_cardinality: Cardinality,
        to_cardinality: Cardinality,
    ) -> Self {
        Self {
            from_entity: from_entity.as_ref().trim().to_string(),
            to_entity: to_entity.as_ref().trim().to_string(),
            from_cardinality,
            to_cardinality,
        }
    }

    pub fn from_entity(&self) -> &str {
        &self.from_entity
    }

    pub fn to_entity(&self) -> &str {
        &self.to_entity
    }

    /// Label shown at the `from` end of the edge.
    pub fn from_cardinality(&self) -> Cardinality {
        self.from_cardinality
    }

    /// Label shown at the `to` end of the edge.
    pub fn to_cardinality(&self) -> Cardinality {
        self.to_cardinality
    }
}
