/// The Pratt loop and the parser state.
///
/// Holds the token cursor, the top-level [`parse`](core::parse) entry point and
/// the binding-power driven `parse_expression` loop.
pub mod core;
/// Null denotations.
///
/// Starts a sub-expression at a token with nothing to its left: literals,
/// names, prefix operators and parenthesized groups.
pub mod prefix;
/// Left denotations.
///
/// Extends an already parsed operand: infix operators, right-associative
/// operators and call argument lists.
pub mod infix;
/// Shared helpers for consuming expected tokens.
pub mod utils;
