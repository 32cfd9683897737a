//! Core arithmetic operations and their algebraic laws.
//!
//! This crate provides four binary arithmetic operations over a family of
//! numeric operand types, a text formatting helper, and the tooling used to
//! verify the algebraic properties those operations must satisfy.
//!
//! # Key Concepts
//!
//! - **Operands**: integers, floats and decimals, each with explicit overflow
//!   and rounding behavior
//! - **Division policy**: a zero divisor is always an error, never a panic or
//!   an infinity
//! - **Laws**: commutativity, associativity, identities and antisymmetry,
//!   checked exactly or within a tolerance
//!
//! # Modules
//!
//! - [`config`]: Tolerance configuration for inexact comparisons
//! - [`error`]: Error types for arithmetic operations
//! - [`numerical`]: Law verification
//! - [`ops`]: Plain, checked and batch operations
//! - [`text`]: Text formatting helper
//! - [`types`]: The numeric operand trait

pub mod config;
pub mod error;
pub mod numerical;
pub mod ops;
pub mod text;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub use utils::strategies;

// Re-export commonly used items at the crate root
pub use error::{ArithmeticError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use arithprop_core::prelude::*;
///
/// assert_eq!(add(3, 5), 8);
/// assert!(divide(5, 0).is_err());
/// ```
pub mod prelude {
    pub use crate::config::{Tolerance, ToleranceBuilder};
    pub use crate::error::{ArithmeticError, Result};
    pub use crate::numerical::{violations, LawCheck, LawChecker};
    #[cfg(feature = "parallel")]
    pub use crate::ops::par_apply_pairwise;
    pub use crate::ops::{
        add, apply_pairwise, checked_add, checked_divide, checked_multiply, checked_subtract,
        divide, multiply, subtract, CheckedOperand, Operation,
    };
    pub use crate::text::{format_text, TEXT_PREFIX};
    pub use crate::types::Operand;
}
