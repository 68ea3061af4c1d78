//! Tokens produced by the [`Scanner`](crate::Scanner).
//!
//! Tokens borrow their text from the input buffer and hold no reference to
//! the scanner that produced them.

use rustc_hash::FxHashMap;

/// Attribute name to value, both borrowed from the input buffer.
///
/// Keys are unique; a repeated name keeps the value of its last occurrence.
pub type AttributeMap<'a> = FxHashMap<&'a str, &'a str>;

/// Key under which `#EXTINF` stores its duration.
pub const DURATION: &str = "duration";

/// Key under which an attribute-list-with-URI tag stores the URI line.
pub const URI: &str = "URI";

/// Key under which a raw-valued tag stores its value text.
pub const VALUE: &str = "value";

/// One lexical unit of a playlist.
///
/// `pos` is the byte offset of the first character of the line (the `#`
/// for tags and comments).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A directive without a value, e.g. `#EXTM3U`.
    Tag { name: &'a str, pos: u32 },
    /// A directive with a value, e.g. `#EXTINF:10.0,` or `#EXT-X-STREAM-INF:...`.
    TagWithAttributes {
        name: &'a str,
        pos: u32,
        attributes: AttributeMap<'a>,
    },
    /// A URI line not consumed by a preceding tag (media segment lines).
    Uri { value: &'a str, pos: u32 },
    /// A `#` line that is not a tag. Only produced when comments are enabled.
    Comment { text: &'a str, pos: u32 },
}

impl<'a> Token<'a> {
    /// Tag name including the leading `#`, or `None` for URI and comment lines.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Token::Tag { name, .. } | Token::TagWithAttributes { name, .. } => Some(name),
            Token::Uri { .. } | Token::Comment { .. } => None,
        }
    }

    /// Byte offset where the token's line starts.
    pub fn pos(&self) -> u32 {
        match self {
            Token::Tag { pos, .. }
            | Token::TagWithAttributes { pos, .. }
            | Token::Uri { pos, .. }
            | Token::Comment { pos, .. } => *pos,
        }
    }

    /// Attribute map of a [`Token::TagWithAttributes`].
    pub fn attributes(&self) -> Option<&AttributeMap<'a>> {
        match self {
            Token::TagWithAttributes { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    /// Look up one attribute of a [`Token::TagWithAttributes`].
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.attributes().and_then(|attrs| attrs.get(key).copied())
    }
}

#[cfg(test)]
mod tests;
