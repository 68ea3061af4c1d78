//! Pull-based playlist scanner.
//!
//! [`Scanner::token`] skips blank lines and comments, then lexes one line
//! (two for tags whose value is followed by a URI line) into a [`Token`].
//!
//! # Errors
//!
//! Lexical violations (BOM, control characters, bad line starts) are found
//! while skipping and are *recorded*; the token being produced is still
//! returned and the error surfaces on the next call. Grammar violations
//! inside a tag value fail the current call. In both cases the first error
//! is kept and returned by every later call until [`Scanner::input`].
//!
//! # Line terminators
//!
//! A terminator is one newline (`\n`, `\r` or `\r\n`) optionally followed
//! by a second one, so `\n\n` and `\r\n\r\n` both count as a single
//! terminator. The line after a terminator must start with `#`, a newline,
//! an ASCII letter or an ASCII digit.

use tracing::{debug, trace};

use crate::classify::{
    has_bom, is_alpha, is_attribute_name, is_control, is_digit, is_newline,
    is_valid_line_start, is_whitespace,
};
use crate::config::{LexerConfig, TagGrammar, UnknownTagPolicy};
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::token::{AttributeMap, Token, DURATION, URI, VALUE};

/// Every tag starts with this prefix; other `#` lines are comments.
const TAG_PREFIX: &[u8] = b"#EXT";

/// Stateful scanner over one playlist buffer at a time.
///
/// Reuse across buffers by calling [`input`](Self::input) again; each call
/// starts a fresh session with no error.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// First error of the session. Once set, `token()` only returns it.
    error: Option<ParseError>,
    config: LexerConfig,
    /// Set once the iterator has yielded end of input or an error.
    exhausted: bool,
}

impl Default for Scanner<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Scanner<'a> {
    /// A scanner with [`LexerConfig::default`] and an empty buffer.
    pub fn new() -> Self {
        Self::with_config(LexerConfig::default())
    }

    pub fn with_config(config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(""),
            error: None,
            config,
            exhausted: false,
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Start a new session over `buffer`.
    ///
    /// Resets the cursor and any error from the previous session. A leading
    /// byte order mark is recorded as an error for the first `token()` call.
    #[tracing::instrument(level = "trace", skip_all, fields(len = buffer.len()))]
    pub fn input(&mut self, buffer: &'a str) {
        self.cursor = Cursor::new(buffer);
        self.error = None;
        self.exhausted = false;
        if has_bom(buffer.as_bytes()) {
            self.record(ParseErrorKind::ByteOrderMark, 0);
        }
    }

    /// Byte offset of the cursor.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// The error of this session, if one has been recorded.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` at end of input. Once an error has been returned,
    /// every later call returns the same error.
    pub fn token(&mut self) -> Result<Option<Token<'a>>, ParseError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.cursor.is_eof() {
            return Ok(None);
        }

        self.skip_to_tag();

        if self.cursor.is_eof() {
            // Nothing left to pair a recorded error with; report it now.
            return match &self.error {
                Some(err) => Err(err.clone()),
                None => Ok(None),
            };
        }

        let token = self.dispatch()?;
        trace!(?token, "token");
        Ok(Some(token))
    }

    // ─── Errors ──────────────────────────────────────────────────────

    /// Record `kind` unless an earlier error exists; return the session error.
    fn record(&mut self, kind: ParseErrorKind, pos: u32) -> ParseError {
        self.error
            .get_or_insert_with(|| {
                debug!(%kind, pos, "scanner error");
                ParseError::new(kind, pos)
            })
            .clone()
    }

    /// Record a forbidden control character if `text` contains one.
    ///
    /// `start` is the byte offset of `text` in the buffer.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "i < text.len() and text lies within a u32-sized buffer"
    )]
    fn check_controls(&mut self, text: &str, start: u32) {
        if let Some((i, found)) = text.char_indices().find(|&(_, c)| is_control(c)) {
            self.record(
                ParseErrorKind::ForbiddenControlCharacter { found },
                start + i as u32,
            );
        }
    }

    /// Record a grammar error at `pos` after checking the rest of the line.
    ///
    /// A control character on the same line takes precedence, so a tab that
    /// ends a value is reported as itself rather than as what follows it.
    fn fail(&mut self, kind: ParseErrorKind, pos: u32) -> ParseError {
        self.eat_line();
        self.record(kind, pos)
    }

    // ─── Line Skipping ───────────────────────────────────────────────

    /// Consume the rest of the current line, checking it for control characters.
    ///
    /// Stops at the line terminator (not consumed) or end of buffer.
    fn eat_line(&mut self) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.eat_until_newline_or_eof();
        let line = self.cursor.slice_from(start);
        self.check_controls(line, start);
        line
    }

    /// Consume one `\n`, `\r` or `\r\n` at the cursor.
    fn skip_newline(&mut self) -> bool {
        match self.cursor.current() {
            b'\r' => {
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
                true
            }
            b'\n' => {
                self.cursor.advance();
                true
            }
            _ => false,
        }
    }

    /// Consume one line terminator at the cursor and check the next line start.
    ///
    /// Returns `false` (after recording an error) if the next line starts
    /// with a byte that no line may start with.
    fn skip_line_terminator(&mut self) -> bool {
        if self.skip_newline() {
            self.skip_newline();
        }
        if self.cursor.is_eof() || is_valid_line_start(self.cursor.current()) {
            return true;
        }
        self.record(ParseErrorKind::MalformedLineTerminator, self.cursor.pos());
        false
    }

    /// Move to the start of the next well-formed line, or end of buffer.
    ///
    /// Malformed lines are skipped after their error has been recorded.
    fn advance(&mut self) {
        loop {
            self.eat_line();
            if self.cursor.is_eof() || self.skip_line_terminator() {
                return;
            }
        }
    }

    /// Skip blank lines, comments and badly started lines.
    ///
    /// Stops at a `#EXT` line, a URI line (when emitted), a comment (when
    /// emitted), or end of buffer.
    fn skip_to_tag(&mut self) {
        while !self.cursor.is_eof() {
            let b = self.cursor.current();
            let stop = if b == b'#' {
                self.cursor.starts_with(TAG_PREFIX) || self.config.emit_comments
            } else if is_alpha(b) || is_digit(b) {
                self.config.emit_uri_lines
            } else {
                false
            };
            if stop {
                return;
            }
            self.advance();
        }
    }

    // ─── Dispatch ────────────────────────────────────────────────────

    fn dispatch(&mut self) -> Result<Token<'a>, ParseError> {
        let pos = self.cursor.pos();
        match self.cursor.current() {
            b'#' if self.cursor.starts_with(TAG_PREFIX) => self.tag(pos),
            b'#' if self.config.emit_comments => {
                let text = self.eat_line();
                self.advance();
                Ok(Token::Comment { text, pos })
            }
            b if is_alpha(b) || is_digit(b) => {
                let value = self.eat_line();
                self.advance();
                Ok(Token::Uri { value, pos })
            }
            _ => {
                let found = self.cursor.current_char().unwrap_or('\0');
                Err(self.record(ParseErrorKind::UnexpectedCharacter { found }, pos))
            }
        }
    }

    // ─── Tags ────────────────────────────────────────────────────────

    fn tag(&mut self, pos: u32) -> Result<Token<'a>, ParseError> {
        self.cursor.eat_while(|b| b != b':' && !is_newline(b));
        let name = self.cursor.slice_from(pos);
        self.check_controls(name, pos);

        if self.cursor.current() != b':' {
            self.advance();
            return Ok(Token::Tag { name, pos });
        }
        self.cursor.advance(); // ':'

        match self.config.registry.grammar(name) {
            Some(TagGrammar::Duration) => self.duration(name, pos),
            Some(TagGrammar::AttributeList) => {
                let attributes = self.attribute_list()?;
                self.advance();
                Ok(Token::TagWithAttributes {
                    name,
                    pos,
                    attributes,
                })
            }
            Some(TagGrammar::AttributeListWithUri) => self.attribute_list_with_uri(name, pos),
            Some(TagGrammar::Raw) => {
                let value = self.eat_line();
                self.advance();
                let mut attributes = AttributeMap::default();
                attributes.insert(VALUE, value);
                Ok(Token::TagWithAttributes {
                    name,
                    pos,
                    attributes,
                })
            }
            None => match self.config.unknown_tags {
                UnknownTagPolicy::EmitBare => {
                    self.advance();
                    Ok(Token::Tag { name, pos })
                }
                UnknownTagPolicy::Reject => Err(self.record(
                    ParseErrorKind::UnsupportedTag {
                        name: name.to_owned(),
                    },
                    pos,
                )),
            },
        }
    }

    /// `#EXTINF:<duration>[,<title>]`; the title is discarded.
    fn duration(&mut self, name: &'a str, pos: u32) -> Result<Token<'a>, ParseError> {
        let duration = self.number()?;
        match self.cursor.current() {
            b',' => self.cursor.advance(),
            b if is_newline(b) || self.cursor.is_eof() => {}
            _ => {
                return Err(self.fail(ParseErrorKind::MalformedNumber, self.cursor.pos()));
            }
        }
        self.advance();

        let mut attributes = AttributeMap::default();
        attributes.insert(DURATION, duration);
        Ok(Token::TagWithAttributes {
            name,
            pos,
            attributes,
        })
    }

    /// Attribute list, then the next line verbatim as `URI`.
    fn attribute_list_with_uri(
        &mut self,
        name: &'a str,
        pos: u32,
    ) -> Result<Token<'a>, ParseError> {
        let mut attributes = self.attribute_list()?;

        if !self.cursor.is_eof() {
            self.skip_line_terminator();
        }
        let uri_pos = self.cursor.pos();
        let uri = self.eat_line();
        if uri.is_empty() {
            return Err(self.record(ParseErrorKind::MissingUri, uri_pos));
        }
        self.advance();

        attributes.insert(URI, uri);
        Ok(Token::TagWithAttributes {
            name,
            pos,
            attributes,
        })
    }

    // ─── Values ──────────────────────────────────────────────────────

    /// Digits with at most one `.`; no sign or exponent.
    fn number(&mut self) -> Result<&'a str, ParseError> {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_digit);
        let int_digits = self.cursor.pos() - start;
        let mut frac_digits = 0;
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            let frac_start = self.cursor.pos();
            self.cursor.eat_while(is_digit);
            frac_digits = self.cursor.pos() - frac_start;
        }
        if int_digits + frac_digits == 0 {
            return Err(self.fail(ParseErrorKind::MalformedNumber, start));
        }
        Ok(self.cursor.slice_from(start))
    }

    /// `NAME=VALUE` pairs separated by commas, up to the end of the line.
    ///
    /// Leaves the cursor on the line terminator (or at end of buffer).
    fn attribute_list(&mut self) -> Result<AttributeMap<'a>, ParseError> {
        let mut attributes = AttributeMap::default();
        while !self.cursor.is_eof() && !is_newline(self.cursor.current()) {
            let (name, value) = self.attribute()?;
            attributes.insert(name, value);

            match self.cursor.current() {
                b',' => self.cursor.advance(),
                b if is_newline(b) || self.cursor.is_eof() => {}
                _ => {
                    return Err(self.fail(ParseErrorKind::MalformedAttribute, self.cursor.pos()));
                }
            }
        }
        Ok(attributes)
    }

    fn attribute(&mut self) -> Result<(&'a str, &'a str), ParseError> {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_attribute_name);
        let name = self.cursor.slice_from(start);
        if name.is_empty() || self.cursor.current() != b'=' {
            return Err(self.fail(ParseErrorKind::MalformedAttribute, self.cursor.pos()));
        }
        self.cursor.advance(); // '='

        let value = if self.cursor.current() == b'"' {
            self.quoted_string()?
        } else {
            let value_start = self.cursor.pos();
            self.cursor.eat_while(|b| b != b',' && !is_whitespace(b));
            let value = self.cursor.slice_from(value_start);
            self.check_controls(value, value_start);
            value
        };
        Ok((name, value))
    }

    /// `"..."` without escapes; returns the text between the quotes.
    fn quoted_string(&mut self) -> Result<&'a str, ParseError> {
        let open = self.cursor.pos();
        self.cursor.advance(); // opening '"'
        let start = self.cursor.pos();
        if self.cursor.skip_to_quote_delim() != b'"' {
            return Err(self.record(ParseErrorKind::UnterminatedQuotedString, open));
        }
        let value = self.cursor.slice_from(start);
        self.check_controls(value, start);
        self.cursor.advance(); // closing '"'
        Ok(value)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, ParseError>;

    /// Yields tokens until end of input, or the session error once.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.exhausted = true;
                None
            }
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}
