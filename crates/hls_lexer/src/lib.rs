//! Pull-based lexer for HTTP Live Streaming (`.m3u8`) playlists.
//!
//! The [`Scanner`] walks an in-memory playlist and yields [`Token`]s for
//! `#EXT` tags, their attribute lists and media URI lines, while enforcing
//! the lexical rules of the format: no byte order mark, no control
//! characters, and well-formed line terminators.
//!
//! ```
//! use hls_lexer::{Scanner, Token};
//!
//! let playlist = "#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=246440\nlow/index.m3u8\n";
//! let mut scanner = Scanner::new();
//! scanner.input(playlist);
//!
//! assert_eq!(scanner.token(), Ok(Some(Token::Tag { name: "#EXTM3U", pos: 0 })));
//! let variant = scanner.token().ok().flatten();
//! let variant = variant.as_ref();
//! assert_eq!(variant.and_then(|t| t.attribute("BANDWIDTH")), Some("246440"));
//! assert_eq!(variant.and_then(|t| t.attribute("URI")), Some("low/index.m3u8"));
//! assert_eq!(scanner.token(), Ok(None));
//! ```
//!
//! Converting attribute text into typed values (bandwidth, resolution,
//! codecs) is left to the caller.

pub mod classify;
mod config;
mod cursor;
mod error;
mod scanner;
mod token;

#[cfg(test)]
mod test_helpers;

pub use config::{LexerConfig, TagGrammar, TagRegistry, UnknownTagPolicy};
pub use error::{offset_to_line_col, ParseError, ParseErrorKind};
pub use scanner::Scanner;
pub use token::{AttributeMap, Token, DURATION, URI, VALUE};

/// Lex all of `buffer` with the default configuration.
///
/// Stops at the first error.
pub fn tokenize(buffer: &str) -> Result<Vec<Token<'_>>, ParseError> {
    tokenize_with(LexerConfig::default(), buffer)
}

/// Lex all of `buffer` with `config`.
pub fn tokenize_with(config: LexerConfig, buffer: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut scanner = Scanner::with_config(config);
    scanner.input(buffer);
    scanner.collect()
}
