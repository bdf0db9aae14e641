//! erdot Core Types and Definitions
//!
//! This crate provides the document model shared by the erdot parser and
//! emitter. It includes:
//!
//! - **Colors**: CSS color validation for entity header colors ([`color::Color`])
//! - **Entities**: Entities and their annotated attributes ([`entity`] module)
//! - **Relations**: Relations and cardinality labels ([`relation`] module)
//! - **Document**: The ordered, immutable parse result ([`document`] module)

pub mod color;
pub mod document;
pub mod entity;
pub mod relation;
