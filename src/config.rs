/// What the parser does with tokens left over after a complete expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Fail with [`ParseError::UnexpectedTrailingTokens`](crate::error::ParseError::UnexpectedTrailingTokens).
    /// `1 2` and `1+2)` are errors.
    #[default]
    Reject,
    /// Stop at the first complete expression and drop the rest, so `1 2`
    /// evaluates to `1`.
    Ignore,
}

/// Settings for a single evaluation.
///
/// # Example
/// ```
/// use matheval::{
///     config::{Options, TrailingInput},
///     evaluate_with,
/// };
///
/// assert!(!evaluate_with("1 2", &Options::default()).success);
///
/// let permissive = Options { trailing_input: TrailingInput::Ignore };
/// assert_eq!(evaluate_with("1 2", &permissive).answer, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Handling of input after the top-level expression.
    pub trailing_input: TrailingInput,
}

impl Options {
    /// Options that keep the first complete expression and ignore the rest.
    #[must_use]
    pub const fn permissive() -> Self {
        Self { trailing_input: TrailingInput::Ignore }
    }
}
