//! Tests for the Tally lexer.

use tally_lexer::{TokenKind, tokenize};

#[test]
fn test_keywords() {
    let source = "num bool listnum listbool if else while for foreach true false";
    let tokens = tokenize(source).unwrap();

    let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Num,
            TokenKind::Bool,
            TokenKind::ListNum,
            TokenKind::ListBool,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Foreach,
            TokenKind::True,
            TokenKind::False,
        ]
    );
}

#[test]
fn test_keyword_prefixed_identifiers() {
    let tokens = tokenize("numbers format iffy listnums").unwrap();

    assert_eq!(tokens.len(), 4);
    for (token, _) in &tokens {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].0.text, "numbers");
}

#[test]
fn test_operators() {
    let source = "+ - * / % = == != < <= > >= && || !";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 15);
    assert!(matches!(tokens[0].0.kind, TokenKind::Plus));
    assert!(matches!(tokens[1].0.kind, TokenKind::Minus));
    assert!(matches!(tokens[5].0.kind, TokenKind::Equal));
    assert!(matches!(tokens[6].0.kind, TokenKind::EqualEqual));
    assert!(matches!(tokens[7].0.kind, TokenKind::BangEqual));
    assert!(matches!(tokens[9].0.kind, TokenKind::LessEqual));
    assert!(matches!(tokens[12].0.kind, TokenKind::AmpersandAmpersand));
    assert!(matches!(tokens[13].0.kind, TokenKind::PipePipe));
    assert!(matches!(tokens[14].0.kind, TokenKind::Bang));
}

#[test]
fn test_stacked_bangs() {
    let tokens = tokenize("!!x").unwrap();

    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[0].0.kind, TokenKind::Bang));
    assert!(matches!(tokens[1].0.kind, TokenKind::Bang));
    assert!(matches!(tokens[2].0.kind, TokenKind::Identifier));
}

#[test]
fn test_comments_and_whitespace() {
    let source = r#"
        // declarations
        num a; // trailing
        bool b;
    "#;
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[1].0.text, "a");
    assert_eq!(tokens[3].0.kind, TokenKind::Bool);
}

#[test]
fn test_spans() {
    let tokens = tokenize("num a;\nfoo = 12;").unwrap();

    let (token, span) = &tokens[3];
    assert_eq!(token.text, "foo");
    assert_eq!(span.start.offset, 7);
    assert_eq!(span.end.offset, 10);
    assert_eq!(span.start.line, 2);
    assert_eq!(span.start.column, 1);

    let (literal, _) = &tokens[5];
    assert_eq!(literal.kind, TokenKind::Integer);
    assert_eq!(literal.text, "12");
}
