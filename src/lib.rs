//! # matheval
//!
//! matheval evaluates arithmetic expressions written as text. It supports the
//! usual infix operators, unary plus and minus, 32-bit shifts, parentheses,
//! calls to a fixed set of math functions and the constants `e` and `pi`.
//!
//! Expressions go through three stages: the [lexer](interpreter::lexer) turns
//! text into tokens, a top-down operator precedence
//! [parser](interpreter::parser) builds a tree from them, and the
//! [evaluator](interpreter::evaluator) computes its value. All three consult
//! the same read-only [`Grammar`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

use crate::{
    ast::Node,
    config::Options,
    error::Error,
    interpreter::{evaluator::core::Evaluator, grammar::Grammar, lexer::tokenize, parser},
};

/// Defines the tokens and tree nodes of an expression.
///
/// This module declares the `Node` type, which serves both as the token the
/// lexer emits and as the tree node the parser builds, together with the
/// closed `Kind` enumeration that identifies it.
///
/// # Responsibilities
/// - Defines token kinds and their printable symbols.
/// - Holds literal values, identifiers and child slots.
/// - Renders trees as s-expressions.
pub mod ast;
/// Settings that change how an expression is parsed.
///
/// This module defines `Options`, passed to [`evaluate_with`] and [`parse`].
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. Their `Display` output is the diagnostic
/// reported in [`Evaluation::message`].
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Converts stage errors into the crate-level `Error`.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the grammar, lexer, parser and evaluator. The
/// functions at the crate root are thin wrappers around it.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the evaluator.
/// - Shares one immutable grammar between them.
pub mod interpreter;
/// General numeric helpers.
///
/// This module provides the conversions used by the lexer and the shift
/// operators.
pub mod util;

/// The outcome of evaluating one expression.
///
/// `answer` is only meaningful when `success` is `true`; `message` is only
/// set when it is `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Whether every stage succeeded.
    pub success: bool,
    /// The value of the expression, or `0` on failure.
    pub answer:  f64,
    /// Description of the failure, if any.
    pub message: Option<String>,
}

impl From<Result<f64, Error>> for Evaluation {
    fn from(result: Result<f64, Error>) -> Self {
        match result {
            Ok(answer) => Self { success: true,
                                 answer,
                                 message: None },
            Err(e) => Self { success: false,
                             answer:  0.0,
                             message: Some(e.to_string()), },
        }
    }
}

static TRACING_INIT: Once = Once::new();

/// Initializes tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Nothing is
/// installed unless `RUST_LOG` is set, e.g. `RUST_LOG=matheval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if std::env::var("RUST_LOG").is_ok() {
                        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                                        .with_writer(std::io::stderr))
                                                      .with(EnvFilter::from_default_env())
                                                      .init();
                    }
                });
}

/// Evaluates an expression with the default [`Options`].
///
/// The text is lower-cased before scanning, so names and constants are
/// case-insensitive. Every failure, whichever stage raises it, is reported
/// through the returned [`Evaluation`] instead of being propagated.
///
/// # Examples
/// ```
/// use matheval::evaluate;
///
/// let result = evaluate("2 + 3 * 4");
/// assert!(result.success);
/// assert_eq!(result.answer, 14.0);
///
/// let result = evaluate("foo(1)");
/// assert!(!result.success);
/// assert_eq!(result.message.as_deref(), Some("unknown function `foo`"));
/// ```
#[must_use]
pub fn evaluate(expression: &str) -> Evaluation {
    evaluate_with(expression, &Options::default())
}

/// Evaluates an expression with explicit [`Options`].
#[must_use]
pub fn evaluate_with(expression: &str, options: &Options) -> Evaluation {
    Evaluation::from(try_evaluate_with(expression, options))
}

/// Evaluates an expression with the default [`Options`], returning the typed
/// error on failure.
///
/// # Errors
/// Returns the first [`Error`] raised by the lexer, the parser or the
/// evaluator.
///
/// # Examples
/// ```
/// use matheval::{
///     ast::Kind,
///     error::{Error, ParseError},
///     try_evaluate,
/// };
///
/// assert_eq!(try_evaluate("2^3^2"), Ok(512.0));
/// assert_eq!(try_evaluate("1 +"),
///            Err(Error::Parse(ParseError::SyntaxError { kind: Kind::End })));
/// ```
pub fn try_evaluate(expression: &str) -> Result<f64, Error> {
    try_evaluate_with(expression, &Options::default())
}

/// Evaluates an expression with explicit [`Options`], returning the typed
/// error on failure.
///
/// # Errors
/// Returns the first [`Error`] raised by the lexer, the parser or the
/// evaluator.
pub fn try_evaluate_with(expression: &str, options: &Options) -> Result<f64, Error> {
    let grammar = Grammar::standard();
    tracing::debug!(expression, "evaluating");

    let result = parse_with(grammar, expression, options).and_then(|root| {
                     Evaluator::new(grammar).eval(&root).map_err(Error::from)
                 });

    match &result {
        Ok(answer) => tracing::debug!(answer, "evaluated"),
        Err(e) => tracing::debug!(error = %e, "evaluation failed"),
    }
    result
}

/// Parses an expression into its tree without evaluating it.
///
/// Like [`evaluate`], the text is lower-cased first.
///
/// # Errors
/// Returns the first lexing or parsing [`Error`].
///
/// # Examples
/// ```
/// use matheval::{config::Options, parse};
///
/// let tree = parse("-2^2", &Options::default()).unwrap();
/// assert_eq!(tree.to_string(), "(^ (- (literal 2)) (literal 2))");
/// ```
pub fn parse(expression: &str, options: &Options) -> Result<Node, Error> {
    parse_with(Grammar::standard(), expression, options)
}

fn parse_with(grammar: &Grammar, expression: &str, options: &Options) -> Result<Node, Error> {
    let tokens = tokenize(&expression.to_lowercase())?;
    Ok(parser::core::parse(grammar, tokens, options)?)
}
