use matheval::{
    ast::{Kind, Node},
    error::ParseError,
    interpreter::lexer::tokenize,
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<Kind> {
    tokenize(src).unwrap_or_else(|e| panic!("`{src}` failed to lex: {e}"))
                 .iter()
                 .map(|token| token.kind)
                 .collect()
}

#[test]
fn operators_and_brackets() {
    use Kind::{
        Caret, Comma, End, LeftParen, Minus, Percent, Plus, RightParen, ShiftLeft, ShiftRight,
        Slash, Star, UnsignedShiftRight,
    };

    assert_eq!(kinds("+ - * / ^ % << >> >>> ( ) ,"),
               [Plus, Minus, Star, Slash, Caret, Percent, ShiftLeft, ShiftRight,
                UnsignedShiftRight, LeftParen, RightParen, Comma, End]);
}

#[test]
fn longest_shift_operator_wins() {
    assert_eq!(kinds(">>>>>"), [Kind::UnsignedShiftRight, Kind::ShiftRight, Kind::End]);
    assert_eq!(kinds("1>>>2"),
               [Kind::Literal, Kind::UnsignedShiftRight, Kind::Literal, Kind::End]);
}

#[test]
fn numeric_literals() {
    assert_eq!(tokenize("42 3.5 .25 1e3 2.5e-2 0x1F").unwrap(),
               vec![Node::number(42.0),
                    Node::number(3.5),
                    Node::number(0.25),
                    Node::number(1000.0),
                    Node::number(0.025),
                    Node::number(31.0),
                    Node::end()]);
}

#[test]
fn constants_and_names() {
    assert_eq!(tokenize("e pi pie e2 _x").unwrap(),
               vec![Node::number(std::f64::consts::E),
                    Node::number(std::f64::consts::PI),
                    Node::name("pie"),
                    Node::name("e2"),
                    Node::name("_x"),
                    Node::end()]);
}

#[test]
fn names_never_start_with_digits() {
    assert_eq!(tokenize("2x").unwrap(),
               vec![Node::number(2.0), Node::name("x"), Node::end()]);
    assert_eq!(tokenize("0x").unwrap(),
               vec![Node::number(0.0), Node::name("x"), Node::end()]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" \t1\n+\r\n2 "), [Kind::Literal, Kind::Plus, Kind::Literal, Kind::End]);
    assert_eq!(kinds("   "), [Kind::End]);
    assert_eq!(kinds(""), [Kind::End]);
}

#[test]
fn binary_literals_are_rejected() {
    assert_eq!(tokenize("1 + 0b11"),
               Err(ParseError::UnrecognizedSyntax { remainder: "0b11".to_string() }));
}

#[test]
fn unknown_characters_report_the_remainder() {
    assert_eq!(tokenize("3 # 4"),
               Err(ParseError::UnrecognizedSyntax { remainder: "# 4".to_string() }));
    assert_eq!(tokenize("1 < 2"),
               Err(ParseError::UnrecognizedSyntax { remainder: "< 2".to_string() }));
    assert_eq!(tokenize("√2"),
               Err(ParseError::UnrecognizedSyntax { remainder: "√2".to_string() }));
}

#[test]
fn any_unicode_whitespace_separates_tokens() {
    assert_eq!(kinds("1\u{a0}+\u{b}2\t*\r\n3\u{2003}"),
               [Kind::Literal, Kind::Plus, Kind::Literal, Kind::Star, Kind::Literal, Kind::End]);
    assert_eq!(matheval::evaluate("1\u{a0}+\u{b}2").answer, 3.0);
}
