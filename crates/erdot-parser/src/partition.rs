//! Splitting source text into blank-line separated blocks.
//!
//! Every construct of the notation lives inside a block: an entity with its
//! attributes, a run of relation lines, or a title. [`partition`] trims each
//! line, drops blank lines, and groups the rest into [`Block`]s while keeping
//! the byte span of every line for diagnostics.

use crate::span::Span;

/// A trimmed, non-blank source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'src> {
    text: &'src str,
    span: Span,
}

impl<'src> Line<'src> {
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Byte range of the trimmed text in the source.
    pub fn span(&self) -> Span {
        self.span
    }
}

/// A maximal run of non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'src> {
    lines: Vec<Line<'src>>,
}

impl<'src> Block<'src> {
    pub fn lines(&self) -> &[Line<'src>] {
        &self.lines
    }

    /// The block's lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Span from the first line's start to the last line's end.
    pub fn span(&self) -> Span {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) => first.span.union(last.span),
            _ => Span::default(),
        }
    }
}

/// Split `source` into blocks.
///
/// A blank line closes the current block only when it already holds a line,
/// so runs of blank lines never produce empty blocks. A block still open at
/// the end of input is emitted.
///
/// # Example
///
/// ```
/// use erdot_parser::partition;
///
/// let blocks = partition("[User]\n*id\n\n\n  User 1--* Order  \n");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].text(), "[User]\n*id");
/// assert_eq!(blocks[1].text(), "User 1--* Order");
/// ```
pub fn partition(source: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut current: Vec<Line<'_>> = Vec::new();
    let mut offset = 0;

    for raw in source.split_inclusive('\n') {
        let line_start = offset;
        offset += raw.len();

        let content = raw.trim_end_matches(['\n', '\r']);
        let text = content.trim();
        if text.is_empty() {
            if !current.is_empty() {
                blocks.push(Block {
                    lines: std::mem::take(&mut current),
                });
            }
            continue;
        }

        let start = line_start + (content.len() - content.trim_start().len());
        current.push(Line {
            text,
            span: Span::new(start..start + text.len()),
        });
    }

    if !current.is_empty() {
        blocks.push(Block { lines: current });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        partition(source).iter().map(Block::text).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(partition("").is_empty());
        assert!(partition("\n\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_single_block_without_trailing_newline() {
        assert_eq!(texts("[User]\n*id"), ["[User]\n*id"]);
    }

    #[test]
    fn test_consecutive_blank_lines() {
        assert_eq!(texts("a\n\n\n\nb\n  \nc\n"), ["a", "b", "c"]);
    }

    #[test]
    fn test_leading_blank_lines() {
        assert_eq!(texts("\n\n  x  \n y"), ["x\ny"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(texts("a\r\nb\r\n\r\nc\r\n"), ["a\nb", "c"]);
    }

    #[test]
    fn test_line_spans_point_at_trimmed_text() {
        let source = "[User]\n   *id  \n";
        let blocks = partition(source);
        let line = blocks[0].lines()[1];

        assert_eq!(line.text(), "*id");
        assert_eq!(&source[line.span().start()..line.span().end()], "*id");
    }

    #[test]
    fn test_block_span() {
        let source = "x\n\n  first\nsecond  \n";
        let blocks = partition(source);
        let span = blocks[1].span();

        assert_eq!(&source[span.start()..span.end()], "first\nsecond");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Lines of visible text, blank lines, or whitespace-only lines.
    fn line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-zA-Z0-9*+#?\\[\\]{}:\" -]{1,20}",
            Just(String::new()),
            "[ \t]{1,4}",
        ]
    }

    proptest! {
        #[test]
        fn partition_is_stable(lines in prop::collection::vec(line_strategy(), 0..40)) {
            let source = lines.join("\n");
            let first: Vec<String> = partition(&source).iter().map(Block::text).collect();

            let rejoined = first.join("\n\n");
            let second: Vec<String> = partition(&rejoined).iter().map(Block::text).collect();

            prop_assert_eq!(first, second);
        }

        #[test]
        fn blocks_are_never_empty(lines in prop::collection::vec(line_strategy(), 0..40)) {
            let source = lines.join("\n");
            for block in partition(&source) {
                prop_assert!(!block.lines().is_empty());
                for line in block.lines() {
                    prop_assert!(!line.text().is_empty());
                    prop_assert_eq!(line.text(), line.text().trim());
                }
            }
        }
    }
}
