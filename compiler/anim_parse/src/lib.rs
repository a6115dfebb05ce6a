//! Recursive descent parser for the animation script language.
//!
//! The parser pulls one token at a time ("advance, then inspect current")
//! and yields top-level [`Command`]s lazily. Each grammar production is a
//! public `visit_*` method so hosts and tests can parse fragments.
//!
//! ```text
//! program    := statement* EndOfSource
//! statement  := '(' command ')'
//! command    := define | place | shift | erase | loop
//! define     := 'define' IDENT drawlist
//! drawlist   := '(' shapecmd* ')'
//! shapecmd   := '(' (circle | line) ')'
//! circle     := 'circle' vector NUMBER
//! line       := 'line' vector vector
//! vector     := '(' NUMBER NUMBER ')'
//! place      := 'place' IDENT vector
//! shift      := 'shift' IDENT direction
//! direction  := 'up' | 'down' | 'left' | 'right'
//! erase      := 'erase' IDENT
//! loop       := 'loop' NUMBER '(' statement* ')'
//! ```

mod cursor;
mod error;
mod grammar;

use std::iter::FusedIterator;

use anim_ir::{Command, Token, TokenKind};
use anim_lexer::{LexError, Lexer};

pub use error::ParseError;

/// Token stream built from an already-lexed list.
pub type TokenList<'src> = std::iter::Map<
    std::vec::IntoIter<Token<'src>>,
    fn(Token<'src>) -> Result<Token<'src>, LexError>,
>;

/// Pull parser over any stream of lexer results.
pub struct Parser<'src, I> {
    tokens: I,
    current: Option<Token<'src>>,
}

impl<'src> Parser<'src, Lexer<'src>> {
    /// Parse a script, lexing it on demand.
    pub fn new(source: &'src str) -> Self {
        Parser::from_stream(Lexer::new(source))
    }
}

impl<'src> Parser<'src, TokenList<'src>> {
    /// Parse a hand-built token list.
    ///
    /// The list does not need to end with `EndOfSource`; running out of
    /// tokens mid-statement is reported as an unexpected end.
    pub fn from_tokens(tokens: Vec<Token<'src>>) -> Self {
        let wrap: fn(Token<'src>) -> Result<Token<'src>, LexError> = Ok;
        Parser::from_stream(tokens.into_iter().map(wrap))
    }
}

impl<'src, I> Parser<'src, I>
where
    I: Iterator<Item = Result<Token<'src>, LexError>>,
{
    pub fn from_stream(tokens: I) -> Self {
        Parser {
            tokens,
            current: None,
        }
    }

    /// The last token pulled from the stream, if any.
    pub fn current(&self) -> Option<&Token<'src>> {
        self.current.as_ref()
    }

    /// Consume the parser, yielding top-level commands as they complete.
    pub fn parse(self) -> Commands<'src, I> {
        Commands {
            parser: self,
            finished: false,
        }
    }
}

/// Lazy sequence of top-level commands.
///
/// Ends at `EndOfSource`, at the end of the token stream, or right after
/// the first error.
pub struct Commands<'src, I> {
    parser: Parser<'src, I>,
    finished: bool,
}

impl<'src, I> Commands<'src, I>
where
    I: Iterator<Item = Result<Token<'src>, LexError>>,
{
    fn statement(&mut self) -> Option<Result<Command, ParseError>> {
        let token = match self.parser.advance() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(err) => return Some(Err(err)),
        };
        match token.kind {
            TokenKind::EndOfSource => None,
            TokenKind::LeftParen => Some(self.parser.visit_command()),
            _ => Some(Err(ParseError::unexpected("Expected '('", &token))),
        }
    }
}

impl<'src, I> Iterator for Commands<'src, I>
where
    I: Iterator<Item = Result<Token<'src>, LexError>>,
{
    type Item = Result<Command, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.statement();
        match &result {
            Some(Ok(command)) => {
                tracing::trace!(command = command.keyword(), "parsed statement");
            }
            Some(Err(err)) => {
                tracing::debug!(%err, "parse failed");
                self.finished = true;
            }
            None => self.finished = true,
        }
        result
    }
}

impl<'src, I> FusedIterator for Commands<'src, I> where
    I: Iterator<Item = Result<Token<'src>, LexError>>
{
}

/// Parse a whole script eagerly.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_program(source: &str) -> Result<Vec<Command>, ParseError> {
    Parser::new(source).parse().collect()
}
