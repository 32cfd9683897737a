//! The four plain arithmetic operations.
//!
//! Each function delegates to the native operator of the operand type, so
//! overflow and rounding behave exactly as documented in [`crate::types`].
//! Division is the exception: a zero divisor is always rejected with
//! [`ArithmeticError::DivisionByZero`] instead of panicking or producing an
//! infinity.

use crate::{
    error::{ArithmeticError, Result},
    types::Operand,
};

/// Returns the sum of `a` and `b`.
///
/// # Example
/// ```
/// use arithprop_core::ops::add;
/// assert_eq!(add(3, 5), 8);
/// ```
#[inline]
pub fn add<T: Operand>(a: T, b: T) -> T {
    a + b
}

/// Returns `a` minus `b`.
#[inline]
pub fn subtract<T: Operand>(a: T, b: T) -> T {
    a - b
}

/// Returns the product of `a` and `b`.
#[inline]
pub fn multiply<T: Operand>(a: T, b: T) -> T {
    a * b
}

/// Returns `a` divided by `b`.
///
/// Integer operands truncate toward zero. A NaN or infinite divisor is not
/// zero and follows IEEE-754 semantics.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] if `b` is exactly zero.
///
/// # Panics
///
/// Signed `T::MIN / -1` overflows and panics in every build profile. Use
/// [`checked_divide`](super::checked_divide) to get
/// [`ArithmeticError::Overflow`] instead.
///
/// # Example
/// ```
/// use arithprop_core::ops::divide;
/// assert_eq!(divide(10, 2), Ok(5));
/// assert!(divide(5, 0).unwrap_err().is_division_by_zero());
/// ```
#[inline]
pub fn divide<T: Operand>(a: T, b: T) -> Result<T> {
    reject_zero_divisor(a, b)?;
    Ok(a / b)
}

pub(crate) fn reject_zero_divisor<T: Operand>(dividend: T, divisor: T) -> Result<()> {
    if divisor.is_exact_zero() {
        tracing::debug!(
            %dividend,
            operand_type = T::TYPE_NAME,
            "rejected division by zero"
        );
        return Err(ArithmeticError::division_by_zero(dividend));
    }
    Ok(())
}
