use thiserror::Error;

use crate::ast::Kind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The node's kind has no evaluation rule, or the rule does not accept the
    /// shape of the node (a bare name, for instance).
    #[error("unknown operation with `{kind}`")]
    UnknownOperation {
        /// The kind of the node that could not be evaluated.
        kind: Kind,
    },
    /// Called a function that is not in the function table.
    #[error("unknown function `{name}`")]
    UnknownFunction {
        /// The callee as written, or its tree rendering when the callee is not
        /// a plain name.
        name: String,
    },
}
