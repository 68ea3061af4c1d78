//! Scanner errors.
//!
//! Every error is fatal for the session that produced it: the scanner keeps
//! the first error it records and returns it from every later
//! [`Scanner::token`](crate::Scanner::token) call until the next
//! [`Scanner::input`](crate::Scanner::input).

use thiserror::Error;

/// A lexical or grammar violation, with the byte offset where it was found.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} (at byte {pos})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: u32,
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    // === Lexical violations (reported one call late) ===
    #[error("playlist MUST NOT contain a BOM")]
    ByteOrderMark,
    #[error("playlist MUST NOT contain control characters (found {found:?})")]
    ForbiddenControlCharacter { found: char },
    #[error(
        "lines are terminated with a single line feed, or a carriage return followed by a line feed"
    )]
    MalformedLineTerminator,

    // === Grammar violations ===
    #[error("unexpected character {found:?} at start of line")]
    UnexpectedCharacter { found: char },
    #[error("unsupported tag `{name}`")]
    UnsupportedTag { name: String },
    #[error("malformed attribute list")]
    MalformedAttribute,
    #[error("quoted string is not terminated before the end of the line")]
    UnterminatedQuotedString,
    #[error("expected a decimal number")]
    MalformedNumber,
    #[error("expected a URI line after the tag")]
    MissingUri,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, pos: u32) -> Self {
        Self { kind, pos }
    }

    /// 1-based (line, column) of the error in `source`.
    ///
    /// `source` must be the buffer the error was produced from. The column
    /// counts characters, not bytes. A lone `\r` does not start a new line.
    pub fn line_col(&self, source: &str) -> (u32, u32) {
        offset_to_line_col(source, self.pos)
    }
}

/// Compute 1-based (line, column) from a byte offset.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = &source.as_bytes()[..offset];
    let line_start = memchr::memrchr(b'\n', before).map_or(0, |i| i + 1);
    let line = memchr::memchr_iter(b'\n', before).count() + 1;

    let col = source
        .get(line_start..offset)
        .map_or(offset - line_start, |s| s.chars().count())
        + 1;

    (
        u32::try_from(line).unwrap_or(u32::MAX),
        u32::try_from(col).unwrap_or(u32::MAX),
    )
}
