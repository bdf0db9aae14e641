//! Error types for erdot operations.
//!
//! This module provides the main error type [`ErdotError`]. Parsing itself
//! never fails; errors come from I/O, configuration, and rendering.

use std::io;

use thiserror::Error;

/// The main error type for erdot operations.
#[derive(Debug, Error)]
pub enum ErdotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}
