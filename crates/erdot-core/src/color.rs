//! Color handling for erdot diagrams
//!
//! This module provides the [`Color`] type, a color string checked against
//! the CSS color syntax of the color crate. Entity colors are emitted into the
//! DOT output exactly as written, so [`Color`] keeps only the spelling; the
//! parse tells recognizable colors from typos.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Fallback header color for entities that do not specify one.
pub const DEFAULT_ENTITY_COLOR: &str = "#eeeeee";

/// A color string known to parse as a CSS color.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Color {
    raw: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use erdot_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let white = Color::new("white").unwrap();
    /// assert_eq!(white.as_str(), "white");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let trimmed = color_str.trim();
        DynamicColor::from_str(trimmed)
            .map(|_| Self {
                raw: trimmed.to_string(),
            })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Returns the color as it was written in the source.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_keeps_spelling() {
        let color = Color::new("  #FFFFFF ").unwrap();
        assert_eq!(color.as_str(), "#FFFFFF");
        assert_eq!(color.to_string(), "#FFFFFF");
    }

    #[test]
    fn test_default_entity_color_is_valid() {
        let color = Color::new(DEFAULT_ENTITY_COLOR).unwrap();
        assert_eq!(color.as_str(), DEFAULT_ENTITY_COLOR);
    }

    #[test]
    fn test_color_named() {
        let white = Color::new("white").unwrap();
        assert_eq!(white.as_str(), "white");
        assert!(Color::new("blurple").is_err());
    }
}
