//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner output before keyword
//! classification and position tracking.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    // Keyword or identifier; split by `keywords::is_reserved`. Any Unicode
    // letter starts a word; letters, decimal digits and `_` continue it.
    #[regex(r"\p{L}[\p{L}\p{Nd}_]*")]
    Word,

    #[regex(r"-?[0-9]+")]
    Integer,
    #[regex(r"-?[0-9]+\.[0-9]+")]
    Decimal,
}
