use crate::{
    ast::Kind,
    error::ParseError,
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Consumes the token under the cursor, which must be a `)`.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedClosingParen`] naming the token found
    /// instead.
    pub(in crate::interpreter::parser) fn expect_closing_paren(&mut self) -> ParseResult<()> {
        match self.peek() {
            Kind::RightParen => {
                self.advance();
                Ok(())
            },
            found => Err(ParseError::ExpectedClosingParen { found }),
        }
    }

    /// Consumes the token under the cursor if it has the given kind.
    ///
    /// # Returns
    /// `true` if a token was consumed.
    pub(in crate::interpreter::parser) fn eat(&mut self, kind: Kind) -> bool {
        if self.peek() == kind {
            self.advance();
            return true;
        }
        false
    }
}
