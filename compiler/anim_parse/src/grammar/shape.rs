//! Draw lists and shape commands.

use anim_ir::{AnimationObject, Shape, Token, TokenKind};
use anim_lexer::LexError;

use crate::{ParseError, Parser};

impl<'src, I> Parser<'src, I>
where
    I: Iterator<Item = Result<Token<'src>, LexError>>,
{
    /// `'(' shapecmd* ')'`, producing an object at the origin.
    pub fn visit_draw_list(&mut self) -> Result<AnimationObject, ParseError> {
        self.expect_left_paren()?;
        let mut shapes = Vec::new();
        loop {
            let token = self.advance_expecting_some()?;
            match token.kind {
                TokenKind::RightParen => return Ok(AnimationObject::new(shapes)),
                TokenKind::LeftParen => shapes.push(self.visit_shape()?),
                _ => return Err(ParseError::unexpected("Expected '(' or ')'", &token)),
            }
        }
    }

    /// `(circle | line) ')'`, entered with the shape's `(` already consumed.
    pub fn visit_shape(&mut self) -> Result<Shape, ParseError> {
        let token = self.expect(TokenKind::Keyword, "Expected a shape")?;
        let shape = match token.text {
            "circle" => Shape::Circle {
                center: self.visit_vector()?,
                radius: self.visit_number()?,
            },
            "line" => Shape::Line {
                start: self.visit_vector()?,
                end: self.visit_vector()?,
            },
            _ => return Err(ParseError::unexpected("Expected a shape", &token)),
        };
        self.expect_right_paren()?;
        Ok(shape)
    }
}
