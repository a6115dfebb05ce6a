//! Lexer error types.
//!
//! A lexical error stops the token stream; there is no recovery. The error
//! carries the offending character and where it was found so the CLI can
//! render a snippet.

use anim_diagnostic::{Diagnostic, ErrorCode};
use anim_ir::{Span, TokenPosition};
use thiserror::Error;

/// What kind of lexer error occurred.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    InvalidCharacter,
    /// `-` not directly followed by a digit.
    DanglingMinus,
}

/// A lexer error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{}", self.message())]
pub struct LexError {
    pub kind: LexErrorKind,
    /// The character the lexer stopped on.
    pub found: char,
    pub position: TokenPosition,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, found: char, position: TokenPosition, span: Span) -> Self {
        LexError {
            kind,
            found,
            position,
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidCharacter => ErrorCode::E0001,
            LexErrorKind::DanglingMinus => ErrorCode::E0002,
        }
    }

    fn message(&self) -> String {
        match self.kind {
            LexErrorKind::InvalidCharacter => format!(
                "Invalid character '{}' at line {}",
                self.found.escape_default(),
                self.position
            ),
            LexErrorKind::DanglingMinus => {
                format!("Expected a digit after '-' at line {}", self.position)
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            LexErrorKind::InvalidCharacter => diag
                .with_label(
                    self.span,
                    format!("invalid character '{}'", self.found.escape_default()),
                )
                .with_note("scripts contain only parentheses, words, numbers and whitespace"),
            LexErrorKind::DanglingMinus => diag
                .with_label(self.span, "expected a digit after '-'")
                .with_note("write the sign directly in front of the number, e.g. `-5`"),
        }
    }
}
