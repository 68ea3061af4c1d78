//! Scanner configuration.
//!
//! [`LexerConfig::default`] reproduces the stock behavior: `#EXTINF` and
//! `#EXT-X-STREAM-INF` values are parsed, other `#EXT` tags surface as bare
//! [`Token::Tag`](crate::Token::Tag)s, URI lines surface as
//! [`Token::Uri`](crate::Token::Uri) and comments are dropped.

use rustc_hash::FxHashMap;

/// How the value after a tag's `:` is lexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagGrammar {
    /// A decimal number stored under `duration`, then an optional `,title`
    /// that is discarded (`#EXTINF`).
    Duration,
    /// A comma-separated attribute list.
    AttributeList,
    /// An attribute list followed by a URI line stored under `URI`
    /// (`#EXT-X-STREAM-INF`).
    AttributeListWithUri,
    /// The rest of the line verbatim, stored under `value`.
    Raw,
}

/// Behavior for `#EXT` tags with a value that the registry does not know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownTagPolicy {
    /// Emit a bare [`Token::Tag`](crate::Token::Tag) and skip the value.
    #[default]
    EmitBare,
    /// Fail with [`ParseErrorKind::UnsupportedTag`](crate::ParseErrorKind::UnsupportedTag).
    Reject,
}

/// Tag name to value grammar.
///
/// Names include the leading `#`, e.g. `#EXT-X-MEDIA`.
#[derive(Clone, Debug)]
pub struct TagRegistry {
    grammars: FxHashMap<String, TagGrammar>,
}

impl TagRegistry {
    /// An empty registry: every tag value is unknown.
    pub fn empty() -> Self {
        Self {
            grammars: FxHashMap::default(),
        }
    }

    /// Register (or replace) the grammar of `name`.
    pub fn register(&mut self, name: impl Into<String>, grammar: TagGrammar) -> &mut Self {
        self.grammars.insert(name.into(), grammar);
        self
    }

    /// Grammar for `name`, if registered.
    pub fn grammar(&self, name: &str) -> Option<TagGrammar> {
        self.grammars.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("#EXTINF", TagGrammar::Duration)
            .register("#EXT-X-STREAM-INF", TagGrammar::AttributeListWithUri);
        registry
    }
}

/// Scanner configuration.
#[derive(Clone, Debug)]
pub struct LexerConfig {
    pub registry: TagRegistry,
    pub unknown_tags: UnknownTagPolicy,
    /// Emit [`Token::Uri`](crate::Token::Uri) for URI lines not consumed by a tag.
    pub emit_uri_lines: bool,
    /// Emit [`Token::Comment`](crate::Token::Comment) for non-tag `#` lines.
    pub emit_comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            registry: TagRegistry::default(),
            unknown_tags: UnknownTagPolicy::default(),
            emit_uri_lines: true,
            emit_comments: false,
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_registry(mut self, registry: TagRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, name: impl Into<String>, grammar: TagGrammar) -> Self {
        self.registry.register(name, grammar);
        self
    }

    #[must_use]
    pub fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }

    #[must_use]
    pub fn with_uri_lines(mut self, emit: bool) -> Self {
        self.emit_uri_lines = emit;
        self
    }

    #[must_use]
    pub fn with_comments(mut self, emit: bool) -> Self {
        self.emit_comments = emit;
        self
    }
}
