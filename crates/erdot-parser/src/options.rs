//! The inline option object of an entity header.
//!
//! Options are a JSON object written after the entity name:
//!
//! ```text
//! [User] {"color": "#ffffff"}
//! ```
//!
//! Only `color` is recognized; other keys are ignored.

use serde::Deserialize;

/// Options accepted after an entity header.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct EntityOptions {
    #[serde(default)]
    pub color: Option<String>,
}

impl EntityOptions {
    /// Parse the option text of a header.
    ///
    /// # Errors
    ///
    /// Returns the JSON error message when `raw` is not an object, is
    /// truncated, or `color` is not a string.
    pub fn parse(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|err| err.to_string())
    }
}
