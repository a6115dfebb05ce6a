use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn lparen() -> Token<'static> {
    Token::synthetic(TokenKind::LeftParen, "(")
}

fn rparen() -> Token<'static> {
    Token::synthetic(TokenKind::RightParen, ")")
}

fn keyword(text: &'static str) -> Token<'static> {
    Token::synthetic(TokenKind::Keyword, text)
}

fn ident(text: &'static str) -> Token<'static> {
    Token::synthetic(TokenKind::Identifier, text)
}

fn number(text: &'static str) -> Token<'static> {
    Token::synthetic(TokenKind::Number, text)
}

fn eos() -> Token<'static> {
    Token::synthetic(TokenKind::EndOfSource, "")
}

fn cross_tokens() -> Vec<Token<'static>> {
    vec![
        lparen(),
        keyword("define"),
        ident("cross"),
        lparen(),
        lparen(),
        keyword("line"),
        lparen(),
        number("0"),
        number("0"),
        rparen(),
        lparen(),
        number("50"),
        number("50"),
        rparen(),
        rparen(),
        rparen(),
        rparen(),
        eos(),
    ]
}

fn ok_tokens(source: &str) -> Vec<Token<'_>> {
    match tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("unexpected lex error: {err}"),
    }
}

#[test]
fn single_line_define() {
    let tokens = ok_tokens("(define cross ( (line (0 0) (50 50)) ) )");
    assert_eq!(tokens, cross_tokens());
}

#[test]
fn multi_line_define() {
    let source = "(define cross \n            ( (line (0 0) (50 50)) ) )";
    assert_eq!(ok_tokens(source), cross_tokens());
}

#[test]
fn empty_source_is_just_end_of_source() {
    let tokens = ok_tokens("");
    assert_eq!(tokens, vec![eos()]);
    assert_eq!(tokens[0].position, TokenPosition::START);
    assert_eq!(ok_tokens(" \t\r\n \n"), vec![eos()]);
}

#[test]
fn end_of_source_is_yielded_once() {
    let mut lexer = Lexer::new("()");
    assert_eq!(lexer.by_ref().count(), 3);
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn invalid_character_fails_lazily() {
    let mut lexer = Lexer::new("(define cross ( (line (0 0) (50 50)) ) )*/");
    // Every token before the bad character is produced normally.
    for expected in cross_tokens().iter().take(17) {
        match lexer.next() {
            Some(Ok(token)) => assert_eq!(&token, expected),
            other => panic!("expected {expected}, got {other:?}"),
        }
    }
    let Some(Err(err)) = lexer.next() else {
        panic!("expected an error for '*'");
    };
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter);
    assert_eq!(err.found, '*');
    assert_eq!(err.position, TokenPosition::new(1, 41));
    assert_eq!(err.span, Span::new(40, 41));
    // Fused after the error: no resynchronisation on '/'.
    assert!(lexer.next().is_none());
}

#[test]
fn tokenize_stops_at_first_error() {
    let Err(err) = tokenize("(erase cross)\n  # comment") else {
        panic!("'#' must be rejected");
    };
    assert_eq!(err.found, '#');
    assert_eq!(err.position, TokenPosition::new(2, 3));
    assert_eq!(err.to_string(), "Invalid character '#' at line 2:3");
}

#[test]
fn positions_are_one_based_and_reset_after_newline() {
    let tokens = ok_tokens("(place a\n  (10 -2))");
    let positions: Vec<_> = tokens.iter().map(|t| (t.text, t.line(), t.column())).collect();
    assert_eq!(
        positions,
        vec![
            ("(", 1, 1),
            ("place", 1, 2),
            ("a", 1, 8),
            ("(", 2, 3),
            ("10", 2, 4),
            ("-2", 2, 7),
            (")", 2, 9),
            (")", 2, 10),
            ("", 2, 11),
        ]
    );
}

#[test]
fn spans_index_into_the_source() {
    let source = "(shift  cross left)";
    for token in ok_tokens(source) {
        assert_eq!(&source[token.span.to_range()], token.text);
    }
}

#[test]
fn numbers_keep_sign_and_fraction() {
    let tokens = ok_tokens("-5 12.75 -0.5 007");
    let texts: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        texts,
        vec![
            (TokenKind::Number, "-5"),
            (TokenKind::Number, "12.75"),
            (TokenKind::Number, "-0.5"),
            (TokenKind::Number, "007"),
            (TokenKind::EndOfSource, ""),
        ]
    );
}

#[test]
fn lone_minus_is_an_error() {
    let Err(err) = tokenize("(place a (- 5 10))") else {
        panic!("a lone '-' must be rejected");
    };
    assert_eq!(err.kind, LexErrorKind::DanglingMinus);
    assert_eq!(err.position, TokenPosition::new(1, 11));
    assert_eq!(err.code(), anim_diagnostic::ErrorCode::E0002);
}

#[test]
fn words_may_contain_digits_and_underscores() {
    let tokens = ok_tokens("shape_2 up2 up");
    assert_eq!(tokens, vec![ident("shape_2"), ident("up2"), keyword("up"), eos()]);
}

#[test]
fn non_ascii_letters_form_identifiers() {
    let tokens = ok_tokens("(define \u{e9}t\u{e9}_2 ()) \u{3bb}\u{661}");
    assert_eq!(
        tokens,
        vec![
            lparen(),
            keyword("define"),
            ident("\u{e9}t\u{e9}_2"),
            lparen(),
            rparen(),
            rparen(),
            ident("\u{3bb}\u{661}"),
            eos(),
        ]
    );
    // Columns count characters, spans count bytes.
    assert_eq!(tokens[3].position, TokenPosition::new(1, 15));
    assert_eq!(tokens[2].span.to_range(), 8..15);
    assert_eq!(tokens[6].span.to_range(), 20..24);
}

#[test]
fn symbols_outside_letters_are_still_rejected() {
    let Err(err) = tokenize("(define \u{2192} ())") else {
        panic!("an arrow is not a letter");
    };
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter);
    assert_eq!(err.found, '\u{2192}');
    assert_eq!(err.position, TokenPosition::new(1, 9));
}

#[test]
fn every_reserved_word_lexes_as_keyword() {
    for word in RESERVED {
        let tokens = ok_tokens(word);
        assert_eq!(tokens, vec![keyword(word), eos()]);
    }
}

#[test]
fn digits_then_letters_split_into_two_tokens() {
    assert_eq!(ok_tokens("3up"), vec![number("3"), keyword("up"), eos()]);
}

proptest! {
    #[test]
    fn identifiers_round_trip(word in "[a-z][a-z0-9_]{0,12}") {
        let tokens = ok_tokens(&word);
        let expected = if is_reserved(&word) { TokenKind::Keyword } else { TokenKind::Identifier };
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, expected);
        prop_assert_eq!(tokens[0].text, word.as_str());
    }

    #[test]
    fn integers_lex_as_single_number(n in any::<i32>()) {
        let text = n.to_string();
        let tokens = ok_tokens(&text);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].text, text.as_str());
    }
}
