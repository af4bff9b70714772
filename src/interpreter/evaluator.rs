/// Core evaluation logic.
///
/// Contains the [`Evaluator`](core::Evaluator), which dispatches every node to
/// the evaluation rule its kind was given in the grammar.
pub mod core;

/// Arithmetic operator evaluation.
///
/// Implements the binary operators, the unary plus and minus, and the 32-bit
/// shift semantics.
pub mod binary;

/// Function evaluation.
///
/// Resolves call nodes against the built-in function table and applies the
/// function to the evaluated arguments.
pub mod function;
