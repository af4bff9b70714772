use crate::{
    ast::{Children, Node},
    error::RuntimeError,
    interpreter::grammar::{Grammar, Operation},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees, computing their numeric value.
///
/// The evaluator holds no state of its own beyond the grammar it reads the
/// evaluation rules from, so a single instance can evaluate any number of
/// trees.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'g> {
    grammar: &'g Grammar,
}

impl<'g> Evaluator<'g> {
    /// Creates an evaluator for trees parsed with `grammar`.
    #[must_use]
    pub const fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Evaluates `node` and everything below it.
    ///
    /// Dispatches on the evaluation rule of the node's kind:
    /// - literals yield their value,
    /// - operators evaluate their operands, left before right, and combine
    ///   them,
    /// - calls resolve and apply a built-in function.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownOperation`] for a kind without an evaluation
    ///   rule (a bare name, for instance) or a node whose shape does not fit
    ///   its rule.
    /// - [`RuntimeError::UnknownFunction`] for a call to a missing function.
    ///
    /// # Example
    /// ```
    /// use matheval::{
    ///     ast::{Kind, Node},
    ///     interpreter::{evaluator::core::Evaluator, grammar::Grammar},
    /// };
    ///
    /// let evaluator = Evaluator::new(Grammar::standard());
    /// let product = Node::token(Kind::Star).with_operands(Node::number(6.0), Node::number(7.0));
    /// assert_eq!(evaluator.eval(&product).unwrap(), 42.0);
    ///
    /// assert!(evaluator.eval(&Node::name("x")).is_err());
    /// ```
    pub fn eval(&self, node: &Node) -> EvalResult<f64> {
        let unknown = || RuntimeError::UnknownOperation { kind: node.kind };

        match self.grammar.symbol(node.kind).operation {
            Operation::Unknown => Err(unknown()),
            Operation::Literal => node.as_number().ok_or_else(unknown),
            Operation::Binary(op) => match &node.children {
                Children::Binary { first, second } => {
                    let left = self.eval(first)?;
                    let right = self.eval(second)?;
                    Ok(Self::eval_binary(op, left, right))
                },
                Children::Unary { first } => {
                    let operand = self.eval(first)?;
                    Self::eval_unary(op, operand).ok_or_else(unknown)
                },
                Children::None | Children::Call { .. } => Err(unknown()),
            },
            Operation::Call => match &node.children {
                Children::Call { callee, arguments } => self.eval_call(callee, arguments),
                _ => Err(unknown()),
            },
        }
    }
}
