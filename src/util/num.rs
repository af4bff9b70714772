/// `2^32` as a float, the modulus of the 32-bit wrapping conversions.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mask applied to shift counts; only the low five bits are significant.
pub const SHIFT_MASK: u32 = 0x1f;

/// Wraps a float into an unsigned 32-bit integer.
///
/// The value is truncated toward zero and reduced modulo `2^32`. `NaN` and
/// the infinities map to `0`. This is the conversion applied to both operands
/// of the shift operators before shifting.
///
/// ## Example
/// ```
/// use matheval::util::num::to_uint32;
///
/// assert_eq!(to_uint32(3.9), 3);
/// assert_eq!(to_uint32(-1.0), u32::MAX);
/// assert_eq!(to_uint32(4_294_967_301.0), 5);
/// assert_eq!(to_uint32(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(TWO_POW_32);
    wrapped as u32
}

/// Wraps a float into a signed 32-bit integer.
///
/// Same reduction as [`to_uint32`], reinterpreted as two's complement.
///
/// ## Example
/// ```
/// use matheval::util::num::to_int32;
///
/// assert_eq!(to_int32(-7.5), -7);
/// assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
/// assert_eq!(to_int32(f64::INFINITY), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}

/// Folds hexadecimal digits (without the `0x` prefix) into a float.
///
/// Accumulating in floating point means arbitrarily long literals lose
/// precision instead of overflowing.
///
/// ## Returns
/// - `Some(f64)`: the value of the digits.
/// - `None`: if `digits` is empty or contains a non-hex character.
///
/// ## Example
/// ```
/// use matheval::util::num::hex_to_f64;
///
/// assert_eq!(hex_to_f64("ff"), Some(255.0));
/// assert_eq!(hex_to_f64("1F"), Some(31.0));
/// assert_eq!(hex_to_f64(""), None);
/// assert_eq!(hex_to_f64("fg"), None);
/// ```
#[must_use]
pub fn hex_to_f64(digits: &str) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
                      c.to_digit(16).map(|digit| acc.mul_add(16.0, f64::from(digit)))
                  })
}
