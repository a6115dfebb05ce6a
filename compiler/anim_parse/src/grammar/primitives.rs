//! Numbers, vectors and directions.

use anim_ir::{Direction, Token, TokenKind, Vec2};
use anim_lexer::LexError;

use crate::{ParseError, Parser};

impl<'src, I> Parser<'src, I>
where
    I: Iterator<Item = Result<Token<'src>, LexError>>,
{
    /// `NUMBER` as a coordinate or radius.
    pub fn visit_number(&mut self) -> Result<f32, ParseError> {
        let token = self.expect(TokenKind::Number, "Expected number")?;
        token
            .text
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::invalid_number("Expected a finite number", &token))
    }

    /// `NUMBER` as a loop count. Decimals are rejected.
    pub fn visit_count(&mut self) -> Result<i64, ParseError> {
        let token = self.expect(TokenKind::Number, "Expected number")?;
        token
            .text
            .parse::<i64>()
            .map_err(|_| ParseError::invalid_number("Loop count must be an integer", &token))
    }

    /// `'(' NUMBER NUMBER ')'`
    pub fn visit_vector(&mut self) -> Result<Vec2, ParseError> {
        self.expect_left_paren()?;
        let x = self.visit_number()?;
        let y = self.visit_number()?;
        self.expect_right_paren()?;
        Ok(Vec2::new(x, y))
    }

    /// `'up' | 'down' | 'left' | 'right'`
    pub fn visit_direction(&mut self) -> Result<Direction, ParseError> {
        let token = self.advance_expecting_some()?;
        if token.is(TokenKind::Keyword) {
            if let Some(direction) = Direction::from_keyword(token.text) {
                return Ok(direction);
            }
        }
        Err(ParseError::unexpected("Expected a direction", &token))
    }
}
