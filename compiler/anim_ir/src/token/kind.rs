use std::fmt;

/// Token classification.
///
/// Keywords are not split into per-word variants: the parser matches on the
/// borrowed text, so the lexer only needs to know that a word is reserved.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    /// One of the reserved words (`define`, `loop`, `up`, ...).
    Keyword,
    Identifier,
    /// Integer or signed decimal literal, sign included in the text.
    Number,
    /// Terminates every token stream exactly once.
    EndOfSource,
}

impl TokenKind {
    /// Whether tokens of this kind carry meaningful text.
    #[inline]
    pub const fn has_text(self) -> bool {
        matches!(
            self,
            TokenKind::Keyword | TokenKind::Identifier | TokenKind::Number
        )
    }

    /// Name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::EndOfSource => "EndOfSource",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
