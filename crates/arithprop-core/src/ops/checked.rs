//! Checked arithmetic that reports overflow instead of inheriting it.
//!
//! These mirror the plain operations but return
//! [`ArithmeticError::Overflow`] whenever the exact result does not fit the
//! operand type, e.g. `i64::MAX + 1` or `i64::MIN / -1`. They are available
//! for integers and, with the `decimal` feature, for `Decimal`.

use super::{basic::reject_zero_divisor, Operation};
use crate::{
    error::{ArithmeticError, Result},
    types::Operand,
};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};

/// Operand types supporting all four checked operations.
pub trait CheckedOperand: Operand + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv {}

impl<T> CheckedOperand for T where T: Operand + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv {}

fn overflow<T: Operand>(operation: Operation, lhs: T, rhs: T) -> ArithmeticError {
    tracing::debug!(
        operation = operation.name(),
        %lhs,
        %rhs,
        operand_type = T::TYPE_NAME,
        "checked operation overflowed"
    );
    ArithmeticError::overflow(operation, lhs, rhs, T::TYPE_NAME)
}

/// Returns `a + b`, or an overflow error.
///
/// # Example
/// ```
/// use arithprop_core::ops::checked_add;
/// assert_eq!(checked_add(250u8, 5), Ok(255));
/// assert!(checked_add(250u8, 6).is_err());
/// ```
pub fn checked_add<T: CheckedOperand>(a: T, b: T) -> Result<T> {
    a.checked_add(&b)
        .ok_or_else(|| overflow(Operation::Add, a, b))
}

/// Returns `a - b`, or an overflow error.
pub fn checked_subtract<T: CheckedOperand>(a: T, b: T) -> Result<T> {
    a.checked_sub(&b)
        .ok_or_else(|| overflow(Operation::Subtract, a, b))
}

/// Returns `a * b`, or an overflow error.
pub fn checked_multiply<T: CheckedOperand>(a: T, b: T) -> Result<T> {
    a.checked_mul(&b)
        .ok_or_else(|| overflow(Operation::Multiply, a, b))
}

/// Returns `a / b`.
///
/// # Errors
///
/// [`ArithmeticError::DivisionByZero`] when `b` is zero, and
/// [`ArithmeticError::Overflow`] when the quotient is not representable
/// (`MIN / -1` for signed integers).
pub fn checked_divide<T: CheckedOperand>(a: T, b: T) -> Result<T> {
    reject_zero_divisor(a, b)?;
    a.checked_div(&b)
        .ok_or_else(|| overflow(Operation::Divide, a, b))
}

impl Operation {
    /// Apply the checked form of this operation.
    pub fn checked_apply<T: CheckedOperand>(self, a: T, b: T) -> Result<T> {
        match self {
            Self::Add => checked_add(a, b),
            Self::Subtract => checked_subtract(a, b),
            Self::Multiply => checked_multiply(a, b),
            Self::Divide => checked_divide(a, b),
        }
    }
}
