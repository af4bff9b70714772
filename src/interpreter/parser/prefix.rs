use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        grammar::NullDenotation,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Starts a sub-expression at `token`, which has no operand to its left.
    ///
    /// - Leaves (literals and names) stand for themselves.
    /// - Prefix operators take one operand parsed at their binding power, so
    ///   `-2^2` applies the minus to `2` only when `^` binds no tighter.
    /// - An opening bracket parses an inner expression and requires `)`. The
    ///   bracket itself does not appear in the tree.
    ///
    /// # Errors
    /// - [`ParseError::SyntaxError`] if the token cannot start an expression.
    /// - [`ParseError::ExpectedClosingParen`] for an unclosed group.
    pub(in crate::interpreter::parser) fn null_denotation(&mut self,
                                                          token: Node)
                                                          -> ParseResult<Node> {
        match self.grammar.symbol(token.kind).nud {
            NullDenotation::Leaf => Ok(token),
            NullDenotation::Prefix(binding_power) => {
                let operand = self.parse_expression(binding_power)?;
                Ok(token.with_operand(operand))
            },
            NullDenotation::Group => {
                let inner = self.parse_expression(0)?;
                self.expect_closing_paren()?;
                Ok(inner)
            },
            NullDenotation::SyntaxError => Err(ParseError::SyntaxError { kind: token.kind }),
        }
    }
}
