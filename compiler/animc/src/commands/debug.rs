//! `lex` and `parse`: inspect the front end.

use std::io::Write;

use anim_eval::ScriptError;
use anim_lexer::Lexer;
use anim_parse::Parser;

/// Print one token per line with its position. Returns the token count,
/// `EndOfSource` included.
pub fn lex(source: &str, out: &mut impl Write) -> Result<usize, ScriptError> {
    let mut count = 0;
    for token in Lexer::new(source) {
        let token = token?;
        count += 1;
        let position = token.position.to_string();
        if token.kind.has_text() {
            let _ = writeln!(out, "{position:>8}  {:<11} {}", token.kind, token.text);
        } else {
            let _ = writeln!(out, "{position:>8}  {}", token.kind);
        }
    }
    Ok(count)
}

/// Print each top-level statement in canonical form. Returns the statement
/// count.
pub fn parse(source: &str, out: &mut impl Write) -> Result<usize, ScriptError> {
    let mut count = 0;
    for command in Parser::new(source).parse() {
        let command = command?;
        count += 1;
        let _ = writeln!(out, "{command}");
    }
    Ok(count)
}
