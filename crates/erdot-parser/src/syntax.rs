//! Line grammar for the erdot notation.
//!
//! Each function here recognizes exactly one line shape and returns `None`
//! when the line does not have that shape. Deciding what a line means inside
//! a block is left to the [`scanner`](crate::scanner).

use winnow::{
    Parser as _,
    combinator::{eof, preceded, terminated},
    error::{ContextError, ErrMode},
    token::{one_of, rest, take_till, take_until, take_while},
};

use erdot_core::relation::Cardinality;

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// An entity header: `[Name]` with optional trailing option text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawHeader<'src> {
    pub name: &'src str,
    /// Trimmed text after the closing bracket, if not empty.
    pub options: Option<&'src str>,
}

/// A relation line split into its four parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawRelation<'src> {
    pub left_name: &'src str,
    pub left_symbol: char,
    pub right_symbol: char,
    pub right_name: &'src str,
}

/// Characters allowed in relation entity names.
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ' '
}

/// Parse `Title:<text>` and return the raw text after the colon.
fn title_line<'src>(input: &mut &'src str) -> IResult<&'src str> {
    preceded("Title:", rest).parse_next(input)
}

/// Parse `[name]<rest>`. The name ends at the first `]`.
fn header_line<'src>(input: &mut &'src str) -> IResult<(&'src str, &'src str)> {
    (
        preceded('[', terminated(take_till(1.., ']'), ']')),
        rest,
    )
        .parse_next(input)
}

/// Parse `<left>--<symbol><name>` where `<left>` still carries its symbol.
fn relation_line<'src>(input: &mut &'src str) -> IResult<(&'src str, char, &'src str)> {
    (
        terminated(take_until(2.., "--"), "--"),
        one_of(Cardinality::SYMBOLS),
        terminated(take_while(1.., is_name_char), eof),
    )
        .parse_next(input)
}

/// Recognize a title line, returning the trimmed title text.
///
/// The text may be empty; callers decide what an empty title means.
pub(crate) fn title(line: &str) -> Option<&str> {
    let mut input = line;
    title_line.parse_next(&mut input).ok().map(str::trim)
}

/// Recognize a comment line, returning the trimmed text after `#`.
pub(crate) fn comment(line: &str) -> Option<&str> {
    line.strip_prefix('#').map(str::trim)
}

/// Recognize an entity header line.
pub(crate) fn header(line: &str) -> Option<RawHeader<'_>> {
    let mut input = line;
    let (name, options) = header_line.parse_next(&mut input).ok()?;

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let options = options.trim();
    Some(RawHeader {
        name,
        options: (!options.is_empty()).then_some(options),
    })
}

/// Recognize a relation line such as `User 1--* Order`.
///
/// Both names must be non-empty after trimming and consist of word
/// characters and spaces.
pub(crate) fn relation(line: &str) -> Option<RawRelation<'_>> {
    let mut input = line;
    let (left, right_symbol, right_name) = relation_line.parse_next(&mut input).ok()?;

    // The left symbol is the last character before `--`; names may end in
    // digits, so this split cannot be done greedily by the combinators.
    let (symbol_start, left_symbol) = left.char_indices().last()?;
    if !Cardinality::SYMBOLS.contains(&left_symbol) {
        return None;
    }

    let left_name = &left[..symbol_start];
    if !left_name.chars().all(is_name_char) {
        return None;
    }

    let left_name = left_name.trim();
    let right_name = right_name.trim();
    if left_name.is_empty() || right_name.is_empty() {
        return None;
    }

    Some(RawRelation {
        left_name,
        left_symbol,
        right_symbol,
        right_name,
    })
}
