//! Lexer for the animation script language, built on logos.
//!
//! Produces a lazy stream of [`Token`]s that borrow their text from the
//! script. The stream ends with exactly one `EndOfSource` token, or stops at
//! the first lexical error.
//!
//! ```text
//! (define cross ((line (0 0) (50 50))))
//! LeftParen Keyword("define") Identifier("cross") LeftParen LeftParen ...
//! ```

mod keywords;
mod lex_error;
mod position;
mod raw_token;

use std::iter::FusedIterator;

use anim_ir::{Span, Token, TokenKind, TokenPosition};
use logos::Logos;

pub use keywords::{is_reserved, RESERVED};
pub use lex_error::{LexError, LexErrorKind};

use position::PositionTracker;
use raw_token::RawToken;

/// Lazy tokenizer over a single script buffer.
///
/// Consumed once: a second pass needs a new `Lexer` over the same source.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    tracker: PositionTracker<'src>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            tracker: PositionTracker::new(source),
            finished: false,
        }
    }

    /// The buffer being tokenized.
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn end_of_source(&mut self) -> Token<'src> {
        let end = self.source.len();
        let position = self.tracker.advance_to(end);
        let span = Span::from_range_saturating(end..end);
        Token::new(TokenKind::EndOfSource, "", span, position)
    }

    fn error(text: &str, position: TokenPosition, span: Span) -> LexError {
        let found = text.chars().next().unwrap_or('\0');
        let kind = if found == '-' {
            LexErrorKind::DanglingMinus
        } else {
            LexErrorKind::InvalidCharacter
        };
        LexError::new(kind, found, position, span)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(result) = self.raw.next() else {
                self.finished = true;
                let token = self.end_of_source();
                tracing::trace!(position = %token.position, "end of source");
                return Some(Ok(token));
            };

            let range = self.raw.span();
            let text = self.raw.slice();
            let position = self.tracker.advance_to(range.start);
            self.tracker.advance_to(range.end);
            let span = Span::from_range_saturating(range);

            let kind = match result {
                Ok(RawToken::Newline) => continue,
                Ok(RawToken::LeftParen) => TokenKind::LeftParen,
                Ok(RawToken::RightParen) => TokenKind::RightParen,
                Ok(RawToken::Word) if keywords::is_reserved(text) => TokenKind::Keyword,
                Ok(RawToken::Word) => TokenKind::Identifier,
                Ok(RawToken::Integer | RawToken::Decimal) => TokenKind::Number,
                Err(()) => {
                    self.finished = true;
                    let err = Self::error(text, position, span);
                    tracing::debug!(%err, "lexing stopped");
                    return Some(Err(err));
                }
            };

            let token = Token::new(kind, text, span, position);
            tracing::trace!(kind = %token.kind, text = token.text, position = %token.position, "token");
            return Some(Ok(token));
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize the whole script eagerly, stopping at the first error.
///
/// The returned vector ends with the `EndOfSource` token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests;
