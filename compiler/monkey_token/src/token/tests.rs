use super::*;

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.start, 7);
    assert_eq!(span.end, 7);
}

#[test]
fn span_from_range() {
    assert_eq!(Span::from(3..5), Span::new(3, 5));
}

#[test]
fn span_display() {
    assert_eq!(Span::new(4, 9).to_string(), "4..9");
    assert_eq!(format!("{:?}", Span::new(0, 1)), "0..1");
}

#[test]
fn eof_token_has_empty_literal() {
    let tok = Token::eof(12);
    assert!(tok.is_eof());
    assert_eq!(tok.literal, "");
    assert_eq!(tok.span, Span::point(12));
}

#[test]
fn token_debug_format() {
    let tok = Token::new(TokenKind::Let, "let", Span::new(0, 3));
    assert_eq!(format!("{tok:?}"), "Let(\"let\") @ 0..3");
}

#[test]
fn tokens_compare_by_value() {
    let a = Token::new(TokenKind::Int, "5", Span::new(2, 3));
    let b = Token::new(TokenKind::Int, "5", Span::new(2, 3));
    let c = Token::new(TokenKind::Int, "5", Span::new(4, 5));
    assert_eq!(a, b);
    assert_ne!(a, c);
}
