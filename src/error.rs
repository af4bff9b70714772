/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing an
/// expression: unrecognized text, tokens that cannot start or continue an
/// expression, unbalanced brackets and leftover input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while walking a parsed tree: nodes without an
/// evaluation rule and calls to functions that do not exist.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure produced while evaluating an expression.
///
/// Each stage returns its own error type; this enum is what crosses the
/// library boundary through [`try_evaluate`](crate::try_evaluate). Its
/// `Display` output is the bare stage message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
