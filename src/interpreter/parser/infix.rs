use crate::{
    ast::{Kind, Node},
    error::ParseError,
    interpreter::{
        grammar::LeftDenotation,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Extends `left` with `token`, which follows a complete operand.
    ///
    /// - `Infix(bp)`: `left token right` with `right` parsed at `bp`, so an
    ///   operator of equal strength to the right stops the recursion and
    ///   associates to the left.
    /// - `InfixRight(bp)`: as above with `right` parsed at `bp - 1`, letting an
    ///   operator of equal strength continue the right operand.
    /// - `Call`: `left` becomes the callee of a comma-separated argument list.
    ///
    /// # Errors
    /// - [`ParseError::UnknownOperator`] if the token has no left denotation.
    /// - Anything raised while parsing the right operand or the arguments.
    pub(in crate::interpreter::parser) fn left_denotation(&mut self,
                                                          token: Node,
                                                          left: Node)
                                                          -> ParseResult<Node> {
        match self.grammar.symbol(token.kind).led {
            LeftDenotation::Infix(binding_power) => {
                let right = self.parse_expression(binding_power)?;
                Ok(token.with_operands(left, right))
            },
            LeftDenotation::InfixRight(binding_power) => {
                let right = self.parse_expression(binding_power.saturating_sub(1))?;
                Ok(token.with_operands(left, right))
            },
            LeftDenotation::Call => {
                let arguments = self.parse_arguments()?;
                Ok(token.with_call(left, arguments))
            },
            LeftDenotation::UnknownOperator => {
                Err(ParseError::UnknownOperator { kind: token.kind })
            },
        }
    }

    /// Parses the arguments of a call up to and including the closing `)`.
    ///
    /// An immediately encountered `)` produces an empty list. Each argument is
    /// a full expression.
    ///
    /// Grammar: `arguments := (expression ("," expression)*)? ")"`
    ///
    /// # Errors
    /// [`ParseError::ExpectedClosingParen`] if an argument is followed by
    /// anything other than `,` or `)`.
    fn parse_arguments(&mut self) -> ParseResult<Vec<Node>> {
        let mut arguments = Vec::new();
        if self.peek() != Kind::RightParen {
            loop {
                arguments.push(self.parse_expression(0)?);
                if !self.eat(Kind::Comma) {
                    break;
                }
            }
        }
        self.expect_closing_paren()?;
        Ok(arguments)
    }
}
