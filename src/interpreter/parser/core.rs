use std::vec::IntoIter;

use crate::{
    ast::{Kind, Node},
    config::{Options, TrailingInput},
    error::ParseError,
    interpreter::grammar::{BindingPower, Grammar},
};

/// Result type used by the lexer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Top-down operator precedence parser over a token stream.
///
/// The parser owns the tokens of a single expression and borrows the grammar
/// that decides, per token kind, how tightly it binds and how it starts or
/// extends an expression.
pub struct Parser<'g> {
    pub(super) grammar: &'g Grammar,
    current:            Node,
    tokens:             IntoIter<Node>,
}

impl<'g> Parser<'g> {
    /// Primes the cursor on the first token of `tokens`.
    ///
    /// A stream that is empty, or runs out before its end marker, behaves as
    /// if it were terminated by one.
    #[must_use]
    pub fn new(grammar: &'g Grammar, tokens: Vec<Node>) -> Self {
        let mut tokens = tokens.into_iter();
        let current = tokens.next().unwrap_or_else(Node::end);
        Self { grammar,
               current,
               tokens }
    }

    /// Kind of the token under the cursor.
    #[must_use]
    pub const fn peek(&self) -> Kind {
        self.current.kind
    }

    /// Moves the cursor forward and returns the token it was on.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Node {
        let next = self.tokens.next().unwrap_or_else(Node::end);
        std::mem::replace(&mut self.current, next)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `right_binding_power`.
    ///
    /// The token under the cursor starts the expression through its null
    /// denotation; then, for as long as the next token binds tighter than
    /// `right_binding_power`, that token extends the expression through its
    /// left denotation.
    ///
    /// # Errors
    /// Propagates the first error raised by a null or left denotation.
    pub fn parse_expression(&mut self, right_binding_power: BindingPower) -> ParseResult<Node> {
        let token = self.advance();
        let mut left = self.null_denotation(token)?;

        while right_binding_power < self.grammar.binding_power(self.peek()) {
            let token = self.advance();
            left = self.left_denotation(token, left)?;
        }

        Ok(left)
    }
}

/// Parses a complete token stream into a single expression tree.
///
/// With [`TrailingInput::Reject`] the expression must be followed by the end
/// of input; with [`TrailingInput::Ignore`] whatever follows the first
/// complete expression is dropped.
///
/// # Errors
/// Returns a [`ParseError`] if the tokens do not form an expression, or if
/// trailing tokens are rejected and present.
///
/// # Example
/// ```
/// use matheval::{
///     config::Options,
///     interpreter::{grammar::Grammar, lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let tree = parse(Grammar::standard(), tokens, &Options::default()).unwrap();
/// assert_eq!(tree.to_string(), "(+ (literal 1) (* (literal 2) (literal 3)))");
/// ```
pub fn parse(grammar: &Grammar, tokens: Vec<Node>, options: &Options) -> ParseResult<Node> {
    let mut parser = Parser::new(grammar, tokens);
    let root = parser.parse_expression(0)?;

    match (options.trailing_input, parser.peek()) {
        (TrailingInput::Reject, kind) if kind != Kind::End => {
            Err(ParseError::UnexpectedTrailingTokens { kind })
        },
        _ => {
            tracing::trace!(tree = %root, "parsed expression");
            Ok(root)
        },
    }
}
