//! Tokens produced by the lexer.
//!
//! A [`Token`] borrows its text from the script buffer. Equality and hashing
//! look only at the kind and the text, so two tokens lexed from different
//! places (or different buffers) compare equal when they spell the same
//! thing. Position is carried for diagnostics only.

mod kind;

pub use kind::TokenKind;

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Span;

/// A 1-based line/column location.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TokenPosition {
    pub line: u32,
    pub column: u32,
}

impl TokenPosition {
    /// First character of a script.
    pub const START: TokenPosition = TokenPosition { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        TokenPosition { line, column }
    }
}

impl Default for TokenPosition {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token with a zero-copy view of its text.
#[derive(Copy, Clone)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Slice of the buffer the token was lexed from.
    pub text: &'src str,
    /// Byte range of `text` within that buffer.
    pub span: Span,
    /// Line and column of the first character.
    pub position: TokenPosition,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span, position: TokenPosition) -> Self {
        Token {
            kind,
            text,
            span,
            position,
        }
    }

    /// Build a token that did not come from a lexer pass.
    ///
    /// Used by hosts and tests that feed the parser a hand-built stream.
    /// The span covers `text` as if it started at offset 0.
    pub fn synthetic(kind: TokenKind, text: &'src str) -> Self {
        Token {
            kind,
            text,
            span: Span::from_range_saturating(0..text.len()),
            position: TokenPosition::START,
        }
    }

    /// Byte offset of the token in its source buffer.
    #[inline]
    pub fn source_offset(&self) -> u32 {
        self.span.start
    }

    /// Length of the token in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token<'_> {}

// Must agree with `PartialEq`: position and buffer identity stay out.
impl Hash for Token<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
    }
}

/// Diagnostic description, e.g. `Keyword("define") at line 1:2`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_text() {
            write!(
                f,
                "{}(\"{}\") at line {}",
                self.kind, self.text, self.position
            )
        } else {
            write!(f, "{} at line {}", self.kind, self.position)
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenPosition};
    crate::static_assert_size!(TokenPosition, 8);
    // &str (16) + Span (8) + TokenPosition (8) + kind (1, padded to 8)
    crate::static_assert_size!(Token<'static>, 40);
}
