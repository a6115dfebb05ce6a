//! Token pulling and expectation checks.

use anim_ir::{Name, Span, Token, TokenKind};
use anim_lexer::LexError;

use crate::{ParseError, Parser};

impl<'src, I> Parser<'src, I>
where
    I: Iterator<Item = Result<Token<'src>, LexError>>,
{
    /// Pull the next token, if the stream has one.
    pub(crate) fn advance(&mut self) -> Result<Option<Token<'src>>, ParseError> {
        match self.tokens.next() {
            Some(Ok(token)) => {
                self.current = Some(token);
                Ok(Some(token))
            }
            Some(Err(err)) => Err(ParseError::Lex(err)),
            None => Ok(None),
        }
    }

    /// Pull the next token, failing if the stream is exhausted.
    ///
    /// Tests use this to step over an opening `(` before invoking a
    /// fragment such as [`Parser::visit_command`].
    pub fn advance_expecting_some(&mut self) -> Result<Token<'src>, ParseError> {
        match self.advance()? {
            Some(token) => Ok(token),
            None => Err(ParseError::UnexpectedEnd {
                found: self.current.map(|token| token.to_string()),
                span: self.end_span(),
            }),
        }
    }

    /// Pull the next token and require it to be of `kind`.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token<'src>, ParseError> {
        let token = self.advance_expecting_some()?;
        if token.is(kind) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(expected, &token))
        }
    }

    pub(crate) fn expect_left_paren(&mut self) -> Result<Token<'src>, ParseError> {
        self.expect(TokenKind::LeftParen, "Expected '('")
    }

    pub(crate) fn expect_right_paren(&mut self) -> Result<Token<'src>, ParseError> {
        self.expect(TokenKind::RightParen, "Expected ')'")
    }

    /// Pull an object name: a non-empty identifier.
    pub(crate) fn expect_name(&mut self) -> Result<Name, ParseError> {
        let token = self.expect(TokenKind::Identifier, "Expected identifier")?;
        if token.is_empty() {
            return Err(ParseError::empty_name(&token));
        }
        Ok(Name::from(token.text))
    }

    /// Zero-width span just past the last token seen.
    fn end_span(&self) -> Span {
        self.current
            .map_or(Span::DUMMY, |token| Span::point(token.span.end))
    }
}
