use crate::{
    interpreter::{evaluator::core::Evaluator, grammar::BinaryOperator},
    util::num::{SHIFT_MASK, to_int32, to_uint32},
};

impl Evaluator<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Arithmetic follows IEEE 754 throughout: division by zero yields an
    /// infinity or `NaN` rather than an error, and `%` is the truncated
    /// remainder (sign of the dividend).
    ///
    /// The shift operators first wrap both operands into 32-bit integers with
    /// [`to_int32`] / [`to_uint32`] and use only the low five bits of the
    /// count:
    /// - `<<` shifts the signed value left,
    /// - `>>` shifts the signed value right, preserving the sign,
    /// - `>>>` shifts the unsigned value right, filling with zeros.
    ///
    /// # Example
    /// ```
    /// use matheval::interpreter::{evaluator::core::Evaluator, grammar::BinaryOperator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Power, 2.0, 10.0), 1024.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Remainder, -7.0, 3.0), -1.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::ShiftLeft, 1.0, 33.0), 2.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::ShiftRight, -16.0, 2.0), -4.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::UnsignedShiftRight, -1.0, 28.0), 15.0);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{
            Add, Divide, Multiply, Power, Remainder, ShiftLeft, ShiftRight, Subtract,
            UnsignedShiftRight,
        };

        match op {
            Add => left + right,
            Subtract => left - right,
            Multiply => left * right,
            Divide => left / right,
            Remainder => left % right,
            Power => left.powf(right),
            ShiftLeft => f64::from(to_int32(left).wrapping_shl(to_uint32(right) & SHIFT_MASK)),
            ShiftRight => f64::from(to_int32(left) >> (to_uint32(right) & SHIFT_MASK)),
            UnsignedShiftRight => f64::from(to_uint32(left) >> (to_uint32(right) & SHIFT_MASK)),
        }
    }

    /// Applies `op` as a prefix operator.
    ///
    /// Only `Add` (identity) and `Subtract` (negation) have a unary form.
    ///
    /// # Returns
    /// `None` for every other operator.
    #[must_use]
    pub fn eval_unary(op: BinaryOperator, operand: f64) -> Option<f64> {
        match op {
            BinaryOperator::Add => Some(operand),
            BinaryOperator::Subtract => Some(-operand),
            _ => None,
        }
    }
}
