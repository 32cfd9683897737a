//! Element-wise application of an operation over operand slices.
//!
//! The parallel variant fans the same pure calls out over the rayon pool;
//! successful results are identical to the sequential version.

use super::Operation;
use crate::{
    error::{ArithmeticError, Result},
    types::Operand,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn ensure_same_len<T>(lhs: &[T], rhs: &[T]) -> Result<()> {
    if lhs.len() != rhs.len() {
        return Err(ArithmeticError::length_mismatch(lhs.len(), rhs.len()));
    }
    Ok(())
}

/// Computes `lhs[i] op rhs[i]` for every index.
///
/// # Errors
///
/// [`ArithmeticError::LengthMismatch`] if the slices differ in length,
/// otherwise the error of the first failing element.
///
/// # Example
/// ```
/// use arithprop_core::ops::{apply_pairwise, Operation};
/// let sums = apply_pairwise(Operation::Add, &[1, 2, 3], &[10, 20, 30]).unwrap();
/// assert_eq!(sums, vec![11, 22, 33]);
/// ```
pub fn apply_pairwise<T: Operand>(operation: Operation, lhs: &[T], rhs: &[T]) -> Result<Vec<T>> {
    ensure_same_len(lhs, rhs)?;
    tracing::trace!(
        operation = operation.name(),
        len = lhs.len(),
        "applying operation pairwise"
    );

    lhs.iter()
        .zip(rhs)
        .map(|(&a, &b)| operation.apply(a, b))
        .collect()
}

/// Parallel version of [`apply_pairwise`].
///
/// If several elements fail, which of their errors is returned is
/// unspecified.
#[cfg(feature = "parallel")]
pub fn par_apply_pairwise<T: Operand>(
    operation: Operation,
    lhs: &[T],
    rhs: &[T],
) -> Result<Vec<T>> {
    ensure_same_len(lhs, rhs)?;
    tracing::trace!(
        operation = operation.name(),
        len = lhs.len(),
        threads = rayon::current_num_threads(),
        "applying operation pairwise in parallel"
    );

    lhs.par_iter()
        .zip(rhs.par_iter())
        .map(|(&a, &b)| operation.apply(a, b))
        .collect()
}
