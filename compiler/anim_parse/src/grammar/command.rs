//! Statements.

use std::sync::Arc;

use anim_ir::{Command, Token, TokenKind};
use anim_lexer::LexError;
use anim_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl<'src, I> Parser<'src, I>
where
    I: Iterator<Item = Result<Token<'src>, LexError>>,
{
    /// `command ')'`, entered with the statement's `(` already consumed.
    ///
    /// Loop bodies recurse through here, so the stack grows on demand.
    pub fn visit_command(&mut self) -> Result<Command, ParseError> {
        ensure_sufficient_stack(|| self.visit_command_inner())
    }

    fn visit_command_inner(&mut self) -> Result<Command, ParseError> {
        let token = self.expect(TokenKind::Keyword, "Expected command keyword")?;
        let command = match token.text {
            "define" => {
                let name = self.expect_name()?;
                let object = self.visit_draw_list()?;
                Command::Define { name, object }
            }
            "place" => {
                let name = self.expect_name()?;
                let position = self.visit_vector()?;
                Command::Place { name, position }
            }
            "shift" => {
                let name = self.expect_name()?;
                let direction = self.visit_direction()?;
                Command::Shift { name, direction }
            }
            "erase" => Command::Erase {
                name: self.expect_name()?,
            },
            "loop" => self.visit_loop()?,
            _ => return Err(ParseError::unexpected("Expected command keyword", &token)),
        };
        self.expect_right_paren()?;
        Ok(command)
    }

    /// `NUMBER '(' statement* ')'`; the closing `)` of the loop statement
    /// itself is left to the caller.
    fn visit_loop(&mut self) -> Result<Command, ParseError> {
        let count = self.visit_count()?;
        self.expect_left_paren()?;
        let mut body = Vec::new();
        loop {
            let token = self.advance_expecting_some()?;
            match token.kind {
                TokenKind::RightParen => break,
                TokenKind::LeftParen => body.push(self.visit_command()?),
                _ => return Err(ParseError::unexpected("Expected '(' or ')'", &token)),
            }
        }
        Ok(Command::Loop {
            count,
            body: Arc::from(body),
        })
    }
}
