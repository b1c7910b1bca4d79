use crate::error::{RuntimeError, runtime_error::EvalResult};

/// Smallest `f64` that no longer fits in an `i64` (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Truncates an `f64` toward zero and converts it to an `i64`.
///
/// Bitwise and shift operators work on integers; their operands are truncated
/// the way a C-style cast would, but values that cannot be represented are
/// reported instead of invoking wrap-around.
///
/// ## Errors
/// Returns `RuntimeError::IntegerOutOfRange` for non-finite values and values
/// outside the `i64` range.
///
/// ## Example
/// ```
/// use exprtree::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(6.9).unwrap(), 6);
/// assert_eq!(f64_to_i64_truncated(-2.5).unwrap(), -2);
///
/// let err = f64_to_i64_truncated(f64::NAN).unwrap_err();
/// assert!(matches!(err, RuntimeError::IntegerOutOfRange { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::IntegerOutOfRange { value });
    }
    let truncated = value.trunc();
    if !(-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&truncated) {
        return Err(RuntimeError::IntegerOutOfRange { value });
    }
    Ok(truncated as i64)
}

/// Converts an `i64` result of a bitwise operation back to `f64`.
///
/// Magnitudes above `2^53` round to the nearest representable value, which is
/// the same behavior as every other arithmetic result in the evaluator.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Validates a shift amount and converts it to the `u32` that
/// `i64::wrapping_shl` and `i64::wrapping_shr` expect.
///
/// ## Errors
/// Returns `RuntimeError::InvalidShift` when the amount is negative or not
/// smaller than 64.
///
/// ## Example
/// ```
/// use exprtree::{error::RuntimeError, util::num::shift_amount};
///
/// assert_eq!(shift_amount(3).unwrap(), 3);
/// assert!(matches!(shift_amount(64).unwrap_err(),
///                  RuntimeError::InvalidShift { amount: 64 }));
/// assert!(matches!(shift_amount(-1).unwrap_err(),
///                  RuntimeError::InvalidShift { amount: -1 }));
/// ```
pub fn shift_amount(amount: i64) -> EvalResult<u32> {
    match u32::try_from(amount) {
        Ok(bits) if bits < i64::BITS => Ok(bits),
        _ => Err(RuntimeError::InvalidShift { amount }),
    }
}

/// Maps a truth value to the numeric encoding used by comparison and logical
/// operators: exactly `1.0` or `0.0`.
#[must_use]
pub const fn bool_to_f64(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
