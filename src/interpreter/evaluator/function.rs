/// Single-argument math functions.
///
/// Trigonometry, roots, exponentials and rounding over `f64`.
pub mod builtin;
/// The `sum` (stepped range sum) function implementation.
///
/// Adds up the values of an inclusive, stepped range.
pub mod sum;
/// The `rand` function implementation.
///
/// Produces uniformly distributed values in `[0, 1)`.
pub mod random;

/// Builtin function table and call evaluation.
///
/// Maps names to implementations and applies them to evaluated arguments.
pub mod core;
