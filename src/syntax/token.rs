//! Token model for syntax highlighting
//!
//! This module defines the closed set of semantic token kinds and the
//! token value itself: a kind paired with the exact source substring it
//! covers. Tokens never synthesize characters; concatenating the texts of
//! a scan in order reproduces the input byte for byte.

/// Semantic token kinds
///
/// The set is closed: languages express nuance by choosing among these ten
/// kinds, never by adding new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain text: whitespace, markup body text, unclaimed characters
    Text,
    /// Language keywords (if, else, fn, SELECT, ...)
    Keyword,
    /// Built-in and shape-recognized type names (i32, String, ...)
    Type,
    /// String and character literals, including unterminated ones
    String,
    /// Line and block comments
    Comment,
    /// Numeric literals (integers, floats, radix-prefixed forms)
    Number,
    /// Operators (+, -, ==, =>, ...)
    Operator,
    /// Single-character punctuation (brackets, separators)
    Punctuation,
    /// Identifiers that match no keyword/type table
    Identifier,
    /// Preprocessor and directive lines (#include, <!DOCTYPE ...>)
    Preprocessor,
}

/// All kinds, in a fixed order (used by theme loading and tests)
pub const ALL_KINDS: [TokenKind; 10] = [
    TokenKind::Text,
    TokenKind::Keyword,
    TokenKind::Type,
    TokenKind::String,
    TokenKind::Comment,
    TokenKind::Number,
    TokenKind::Operator,
    TokenKind::Punctuation,
    TokenKind::Identifier,
    TokenKind::Preprocessor,
];

impl TokenKind {
    /// Get a human-readable name for this token kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Keyword => "Keyword",
            TokenKind::Type => "Type",
            TokenKind::String => "String",
            TokenKind::Comment => "Comment",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Identifier => "Identifier",
            TokenKind::Preprocessor => "Preprocessor",
        }
    }

    /// Parse a token kind from a name (for theme/config loading)
    ///
    /// Names are matched case-insensitively so theme files can use
    /// lowercase keys.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

/// A single lexical token: a kind plus the exact source substring
///
/// The text is a borrowed slice of the scanned source, so tokenizing
/// allocates only the output vector, never per-token copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}
