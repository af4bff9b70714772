use crate::interpreter::evaluator::function::core::arg;

/// Sums the inclusive range `start, start + step, ...` up to `stop`.
///
/// - `step` defaults to `1`; a missing, `NaN`, zero or negative step is
///   replaced by `1`.
/// - A missing or `NaN` bound makes the range empty, giving `0`.
/// - `stop < start` gives `0`.
///
/// The loop runs to completion however large the range is. A step too small
/// to change `start` in floating point never terminates.
///
/// # Parameters
/// - `args`: `[start, stop, step?]`.
///
/// # Returns
/// The sum of the range.
///
/// # Example
/// ```
/// use matheval::interpreter::evaluator::function::sum::sum;
///
/// assert_eq!(sum(&[1.0, 5.0]), 15.0);
/// assert_eq!(sum(&[1.0, 10.0, 2.0]), 25.0);
/// assert_eq!(sum(&[1.0, 3.0, -4.0]), 6.0);
/// assert_eq!(sum(&[5.0, 1.0]), 0.0);
/// assert_eq!(sum(&[1.0]), 0.0);
/// ```
#[must_use]
pub fn sum(args: &[f64]) -> f64 {
    let start = arg(args, 0);
    let stop = arg(args, 1);
    let step = match arg(args, 2) {
        step if step > 0.0 => step,
        _ => 1.0,
    };

    let mut total = 0.0;
    let mut i = start;
    while i <= stop {
        total += i;
        i += step;
    }
    total
}
