use crate::interpreter::evaluator::function::core::arg;

/// Applies a single-argument `f64` method to the first argument.
///
/// The generated functions read one argument; when it is missing the result is
/// `NaN`, and any further arguments are ignored.
///
/// # Example
/// ```
/// use matheval::interpreter::evaluator::function::builtin::{sin, sqrt};
///
/// assert_eq!(sin(&[0.0]), 0.0);
/// assert_eq!(sqrt(&[9.0, 123.0]), 3.0);
/// assert!(sqrt(&[]).is_nan());
/// ```
macro_rules! unary_builtin {
    ($fname:ident, $method:ident) => {
        #[must_use]
        pub fn $fname(args: &[f64]) -> f64 {
            arg(args, 0).$method()
        }
    };
}

unary_builtin!(sin, sin);
unary_builtin!(cos, cos);
unary_builtin!(tan, tan);
unary_builtin!(asin, asin);
unary_builtin!(acos, acos);
unary_builtin!(atan, atan);
unary_builtin!(sqrt, sqrt);
unary_builtin!(exp, exp);
unary_builtin!(floor, floor);
unary_builtin!(ceil, ceil);

/// Natural logarithm.
#[must_use]
pub fn log(args: &[f64]) -> f64 {
    arg(args, 0).ln()
}

/// Cotangent, computed as `1 / tan(x)`.
///
/// # Example
/// ```
/// use matheval::interpreter::evaluator::function::builtin::cot;
///
/// assert!((cot(&[std::f64::consts::FRAC_PI_4]) - 1.0).abs() < 1e-12);
/// assert_eq!(cot(&[0.0]), f64::INFINITY);
/// ```
#[must_use]
pub fn cot(args: &[f64]) -> f64 {
    1.0 / arg(args, 0).tan()
}

/// Angle of the point `(x, y)`, taking `y` first.
#[must_use]
pub fn atan2(args: &[f64]) -> f64 {
    arg(args, 0).atan2(arg(args, 1))
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
///
/// Unlike [`f64::round`], `-2.5` rounds to `-2`.
///
/// # Example
/// ```
/// use matheval::interpreter::evaluator::function::builtin::round;
///
/// assert_eq!(round(&[2.5]), 3.0);
/// assert_eq!(round(&[-2.5]), -2.0);
/// assert_eq!(round(&[-2.6]), -3.0);
/// assert_eq!(round(&[0.499_999_999_999_999_94]), 0.0);
/// ```
#[must_use]
pub fn round(args: &[f64]) -> f64 {
    let x = arg(args, 0);
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}
