/// Numeric conversion helpers.
///
/// This module provides the conversions the operator table needs when it
/// moves between floating-point operands and the integer domain used by the
/// bitwise and shift operators. Every fallible conversion returns a `Result`
/// instead of saturating or wrapping silently.
pub mod num;
