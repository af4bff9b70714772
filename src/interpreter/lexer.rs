use logos::Logos;

use crate::{
    ast::{Kind, Node},
    error::ParseError,
    interpreter::parser::core::ParseResult,
    util::num::hex_to_f64,
};

/// Represents a lexeme of the expression language.
///
/// Lexing is longest-match. The patterns are arranged so that this yields the
/// same split as trying whitespace, separator, operator, bracket, hex, binary,
/// float, integer and name rules in that order: no name can start with a
/// digit, and the reserved binary form `0b…` has a rule of its own so it is
/// not read as `0` followed by a name.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Lexeme {
    /// Any Unicode whitespace, including vertical tabs and no-break spaces.
    #[regex(r"\s+", logos::skip)]
    Ignored,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `>>>`
    #[token(">>>")]
    UnsignedShiftRight,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Hexadecimal integer literal such as `0xff`.
    #[regex(r"0[xX][0-9a-fA-F]+", parse_hex)]
    Hex(f64),
    /// Binary literal such as `0b101`. Reserved: recognized so that it can be
    /// rejected as a whole.
    #[regex(r"0[bB][01]+")]
    Binary,
    /// Floating-point literal such as `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_number)]
    Real(f64),
    /// Decimal integer literal such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Integer(f64),
    /// The named constants `e` and `pi`.
    #[token("e", euler, priority = 3)]
    #[token("pi", pi)]
    Constant(f64),
    /// Any other identifier, such as `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

impl Lexeme {
    /// Converts the lexeme into a parser token.
    ///
    /// Returns `None` for lexemes that are recognized but not accepted,
    /// which is currently only the reserved binary literal.
    fn into_node(self) -> Option<Node> {
        let node = match self {
            Self::Ignored | Self::Binary => return None,
            Self::Comma => Node::token(Kind::Comma),
            Self::Plus => Node::token(Kind::Plus),
            Self::Minus => Node::token(Kind::Minus),
            Self::Star => Node::token(Kind::Star),
            Self::Slash => Node::token(Kind::Slash),
            Self::Caret => Node::token(Kind::Caret),
            Self::Percent => Node::token(Kind::Percent),
            Self::UnsignedShiftRight => Node::token(Kind::UnsignedShiftRight),
            Self::ShiftRight => Node::token(Kind::ShiftRight),
            Self::ShiftLeft => Node::token(Kind::ShiftLeft),
            Self::LParen => Node::token(Kind::LeftParen),
            Self::RParen => Node::token(Kind::RightParen),
            Self::Hex(value) | Self::Real(value) | Self::Integer(value) | Self::Constant(value) => {
                Node::number(value)
            },
            Self::Identifier(name) => Node::name(name),
        };
        Some(node)
    }
}

/// Splits `source` into parser tokens, terminated by an end-of-input token.
///
/// The source is scanned as given; callers that want case-insensitive names
/// and constants lower-case it first, as [`evaluate`](crate::evaluate) does.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedSyntax`] carrying the rest of the input
/// when no rule matches at the current position, or when the matched text is
/// a binary literal.
///
/// # Example
/// ```
/// use matheval::{ast::Kind, interpreter::lexer::tokenize};
///
/// let kinds: Vec<Kind> = tokenize("2 >>> 0x1f").unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [Kind::Literal, Kind::UnsignedShiftRight, Kind::Literal, Kind::End]);
///
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Node>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        match lexeme.ok().and_then(Lexeme::into_node) {
            Some(node) => tokens.push(node),
            None => {
                let remainder = source.get(lexer.span().start..).unwrap_or(source);
                return Err(ParseError::UnrecognizedSyntax { remainder: remainder.to_string() });
            },
        }
    }

    tokens.push(Node::end());
    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Parses a decimal literal (integer or float) from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a hexadecimal literal, skipping its `0x` prefix.
fn parse_hex(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().get(2..).and_then(hex_to_f64)
}

const fn euler(_: &logos::Lexer<Lexeme>) -> f64 {
    std::f64::consts::E
}

const fn pi(_: &logos::Lexer<Lexeme>) -> f64 {
    std::f64::consts::PI
}
