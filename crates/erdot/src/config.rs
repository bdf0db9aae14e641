//! Configuration types for erdot diagram output.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Colors and layout directives written into the DOT output.
//! - [`RankDir`] - Direction in which Graphviz lays out the diagram.
//!
//! # Example
//!
//! ```
//! # use erdot::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.style().entity_color().unwrap().as_str(), "#eeeeee");
//! ```

use std::fmt;

use serde::Deserialize;

use erdot_core::color::{Color, DEFAULT_ENTITY_COLOR};

/// Default fill color of comment notes.
pub const DEFAULT_COMMENT_COLOR: &str = "#ffffcc";

/// Default color of relation edges.
pub const DEFAULT_EDGE_COLOR: &str = "#888888";

/// Default font size of the diagram title.
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Direction in which ranks of the diagram are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum RankDir {
    /// Left to right.
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    /// Right to left.
    #[serde(rename = "RL")]
    RightLeft,
    /// Top to bottom.
    #[serde(rename = "TB")]
    TopBottom,
    /// Bottom to top.
    #[serde(rename = "BT")]
    BottomTop,
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RankDir::LeftRight => "LR",
            RankDir::RightLeft => "RL",
            RankDir::TopBottom => "TB",
            RankDir::BottomTop => "BT",
        };
        f.write_str(value)
    }
}

/// Visual styling configuration for emitted diagrams.
///
/// Fields that are not set fall back to the defaults above. Color fields
/// are stored as written and validated when accessed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Header color for entities without a usable `color` option.
    entity_color: String,

    /// Fill color of comment notes.
    comment_color: String,

    /// Color of relation edges.
    edge_color: String,

    /// Font size of the title.
    font_size: u32,

    /// Layout direction.
    rank_dir: RankDir,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            entity_color: DEFAULT_ENTITY_COLOR.to_string(),
            comment_color: DEFAULT_COMMENT_COLOR.to_string(),
            edge_color: DEFAULT_EDGE_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            rank_dir: RankDir::default(),
        }
    }
}

impl StyleConfig {
    /// Returns a copy with a different default entity color.
    pub fn with_entity_color(mut self, color: impl Into<String>) -> Self {
        self.entity_color = color.into();
        self
    }

    /// Returns a copy with a different layout direction.
    pub fn with_rank_dir(mut self, rank_dir: RankDir) -> Self {
        self.rank_dir = rank_dir;
        self
    }

    /// Returns the default entity [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn entity_color(&self) -> Result<Color, String> {
        Self::parse_color("entity_color", &self.entity_color)
    }

    /// Returns the comment note fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn comment_color(&self) -> Result<Color, String> {
        Self::parse_color("comment_color", &self.comment_color)
    }

    /// Returns the relation edge [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn edge_color(&self) -> Result<Color, String> {
        Self::parse_color("edge_color", &self.edge_color)
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn rank_dir(&self) -> RankDir {
        self.rank_dir
    }

    fn parse_color(key: &str, value: &str) -> Result<Color, String> {
        Color::new(value).map_err(|err| format!("Invalid {key} in config: {err}"))
    }
}
