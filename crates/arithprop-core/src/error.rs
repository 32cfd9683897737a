//! Error types for arithmetic operations.
//!
//! This module defines the error type shared by the plain, checked and batch
//! operations, together with the tolerance configuration.

use crate::ops::Operation;
use thiserror::Error;

/// Errors that can occur during arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor was exactly zero.
    ///
    /// Returned by every division entry point regardless of the operand
    /// type, including `-0.0` for floating-point operands.
    #[error("Division by zero: cannot divide {dividend} by zero")]
    DivisionByZero {
        /// Rendered dividend
        dividend: String,
    },

    /// The exact result is not representable in the operand type.
    ///
    /// Only the checked operations report this; the plain operations follow
    /// the native operator semantics of the type.
    #[error("Arithmetic overflow: {lhs} {operation} {rhs} does not fit in {type_name}")]
    Overflow {
        /// Operation that overflowed
        operation: Operation,
        /// Rendered left operand
        lhs: String,
        /// Rendered right operand
        rhs: String,
        /// Name of the operand type
        type_name: &'static str,
    },

    /// Operand slices of a batch operation have different lengths.
    #[error("Length mismatch: left operand has {left} elements, right operand has {right}")]
    LengthMismatch {
        /// Number of left operands
        left: usize,
        /// Number of right operands
        right: usize,
    },

    /// A tolerance parameter is negative, NaN or otherwise unusable.
    #[error("Invalid tolerance for {parameter}: {reason}")]
    InvalidTolerance {
        /// Name of the offending parameter
        parameter: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ArithmeticError {
    /// Create a DivisionByZero error for the given dividend.
    pub fn division_by_zero<D: std::fmt::Display>(dividend: D) -> Self {
        Self::DivisionByZero {
            dividend: dividend.to_string(),
        }
    }

    /// Create an Overflow error.
    pub fn overflow<L, R>(operation: Operation, lhs: L, rhs: R, type_name: &'static str) -> Self
    where
        L: std::fmt::Display,
        R: std::fmt::Display,
    {
        Self::Overflow {
            operation,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            type_name,
        }
    }

    /// Create a LengthMismatch error.
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Create an InvalidTolerance error.
    pub fn invalid_tolerance<S1, S2>(parameter: S1, reason: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidTolerance {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a rejected zero divisor.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}

/// Result type alias for arithmetic operations.
pub type Result<T> = std::result::Result<T, ArithmeticError>;
