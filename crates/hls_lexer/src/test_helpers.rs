//! Shared helpers for scanner unit tests.

use std::sync::Once;

use crate::{LexerConfig, ParseError, ParseErrorKind, Scanner, Token};

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber for test output.
///
/// Only active when `RUST_LOG` is set, e.g. `RUST_LOG=hls_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}

/// Lex `source` with the default config, collecting tokens until end or error.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    lex_with(LexerConfig::default(), source)
}

pub fn lex_with(config: LexerConfig, source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    init_tracing();
    let mut scanner = Scanner::with_config(config);
    scanner.input(source);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Lex `source`, expecting it to fail; returns the error kind.
pub fn lex_err(source: &str) -> ParseErrorKind {
    match lex(source) {
        Ok(tokens) => panic!("expected an error for {source:?}, got {tokens:?}"),
        Err(err) => err.kind,
    }
}

/// Tag names, URI lines and comment texts in token order.
pub fn names<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens
        .iter()
        .map(|t| match t {
            Token::Tag { name, .. } | Token::TagWithAttributes { name, .. } => *name,
            Token::Uri { value, .. } => *value,
            Token::Comment { text, .. } => *text,
        })
        .collect()
}
