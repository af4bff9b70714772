use thiserror::Error;

use crate::ast::Kind;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No lexer rule matches the text at the current position.
    #[error("unrecognized syntax at `{remainder}`")]
    UnrecognizedSyntax {
        /// The unconsumed input, starting at the offending character.
        remainder: String,
    },
    /// A token that cannot begin an expression appeared where one was
    /// expected, e.g. a bare operator or the end of input.
    #[error("syntax error near `{kind}`")]
    SyntaxError {
        /// The offending token kind.
        kind: Kind,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("expected ) near `{found}`")]
    ExpectedClosingParen {
        /// The token found instead.
        found: Kind,
    },
    /// A token with a binding power but no infix behavior followed a complete
    /// operand.
    #[error("unknown operator `{kind}`")]
    UnknownOperator {
        /// The offending token kind.
        kind: Kind,
    },
    /// Found extra tokens after a complete expression.
    #[error("unexpected `{kind}` after complete expression")]
    UnexpectedTrailingTokens {
        /// The first leftover token.
        kind: Kind,
    },
}
