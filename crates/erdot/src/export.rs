//! Output of parsed documents.
//!
//! Documents are always emitted as DOT text first. Image formats are
//! produced from that text by the Graphviz `dot` executable when the
//! `graphviz` feature is enabled.

pub(crate) mod dot;
#[cfg(feature = "graphviz")]
pub(crate) mod graphviz;

use std::{fmt, path::Path};

/// Output formats selectable by file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// PNG raster image.
    #[default]
    Png,
    /// SVG vector image.
    Svg,
    /// JPEG raster image.
    Jpeg,
    /// The DOT text itself.
    Dot,
}

impl OutputFormat {
    /// Select a format from the extension of `path`.
    ///
    /// `svg` selects SVG, `jpg`/`jpeg` JPEG, and `dot`/`gv` raw DOT text.
    /// Any other extension, or none, selects PNG. Matching ignores case.
    ///
    /// # Examples
    ///
    /// ```
    /// use erdot::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.svg"), OutputFormat::Svg);
    /// assert_eq!(OutputFormat::from_path("diagrams/er.JPG"), OutputFormat::Jpeg);
    /// assert_eq!(OutputFormat::from_path("out"), OutputFormat::Png);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => OutputFormat::Svg,
            Some("jpg" | "jpeg") => OutputFormat::Jpeg,
            Some("dot" | "gv") => OutputFormat::Dot,
            _ => OutputFormat::Png,
        }
    }

    /// Whether producing this format needs Graphviz.
    pub fn needs_renderer(self) -> bool {
        self != OutputFormat::Dot
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Dot => "dot",
        };
        f.write_str(name)
    }
}
