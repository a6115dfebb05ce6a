//! Parse error types.
//!
//! Syntax errors describe the token the parser was looking at, in the form
//! `Expected ')'. Current token: Number("5") at line 2:14`. They own their
//! text so they outlive the script buffer.

use anim_diagnostic::{Diagnostic, ErrorCode};
use anim_ir::{Span, Token};
use anim_lexer::LexError;
use thiserror::Error;

/// A fatal parse error. There is no recovery and no partial tree.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseError {
    /// The token stream itself failed.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A required token was missing.
    #[error("{expected}. Current token: {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// The token stream ended inside a statement.
    #[error("Unexpected end of input{}", current_suffix(.found.as_deref()))]
    UnexpectedEnd {
        /// The last token pulled before the stream ran dry.
        found: Option<String>,
        span: Span,
    },

    /// A number token that does not convert to the value needed.
    #[error("{reason}. Current token: {found}")]
    InvalidNumber {
        reason: &'static str,
        found: String,
        span: Span,
    },

    /// An identifier token with no text.
    #[error("Name of an object can not be empty. Current token: {found}")]
    EmptyName { found: String, span: Span },
}

fn current_suffix(found: Option<&str>) -> String {
    found.map_or_else(String::new, |found| format!(". Current token: {found}"))
}

impl ParseError {
    pub(crate) fn unexpected(expected: &'static str, token: &Token<'_>) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: token.to_string(),
            span: token.span,
        }
    }

    pub(crate) fn invalid_number(reason: &'static str, token: &Token<'_>) -> Self {
        ParseError::InvalidNumber {
            reason,
            found: token.to_string(),
            span: token.span,
        }
    }

    pub(crate) fn empty_name(token: &Token<'_>) -> Self {
        ParseError::EmptyName {
            found: token.to_string(),
            span: token.span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::UnexpectedEnd { .. } => ErrorCode::E1002,
            ParseError::InvalidNumber { .. } => ErrorCode::E1003,
            ParseError::EmptyName { .. } => ErrorCode::E1004,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEnd { span, .. }
            | ParseError::InvalidNumber { span, .. }
            | ParseError::EmptyName { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::UnexpectedToken { expected, .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span(), expected.to_lowercase()),
            ParseError::UnexpectedEnd { .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span(), "script ends here")
                .with_note("every `(` needs a matching `)`"),
            ParseError::InvalidNumber { reason, .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span(), reason.to_lowercase()),
            ParseError::EmptyName { .. } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(self.span(), "empty name"),
        }
    }
}
