/// Numeric conversion helpers.
///
/// This module provides the conversions the shift operators and the lexer need:
/// wrapping a floating-point operand into a 32-bit integer, and folding a
/// string of hexadecimal digits into an `f64` without overflowing.
pub mod num;
