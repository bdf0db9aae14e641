//! Source spans annotated with a short message.

use crate::span::Span;

/// What a [`Label`] marks in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// The text the warning is about.
    Primary,
    /// Surrounding text that explains the warning, such as the entity header
    /// an option object belongs to.
    Context,
}

/// A span in the source with the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    role: LabelRole,
    span: Span,
    message: String,
}

impl Label {
    pub fn new(role: LabelRole, span: Span, message: impl Into<String>) -> Self {
        Self {
            role,
            span,
            message: message.into(),
        }
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.role == LabelRole::Primary
    }
}
