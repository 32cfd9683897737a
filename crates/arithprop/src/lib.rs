//! Scalar arithmetic with property-tested algebraic laws.
//!
//! `arithprop` exposes four pure arithmetic operations and a text formatting
//! helper:
//!
//! ```
//! use arithprop::prelude::*;
//!
//! assert_eq!(add(3, 5), 8);
//! assert_eq!(subtract(10, 4), 6);
//! assert_eq!(multiply(6, 7), 42);
//! assert_eq!(divide(10, 2), Ok(5));
//! assert!(divide(5, 0).unwrap_err().is_division_by_zero());
//! assert_eq!(format_text("hello"), "This is the input text: hello");
//! ```
//!
//! Division by zero is always reported as
//! [`ArithmeticError::DivisionByZero`], for integers, floats and decimals
//! alike. Overflow in the plain operations follows the operand type; use the
//! `checked_*` functions to have it reported.
//!
//! # Features
//!
//! - `decimal` (default): `rust_decimal::Decimal` operands
//! - `parallel` (default): rayon-backed batch application
//! - `serde`: serialization of [`config::Tolerance`] and [`ops::Operation`]

pub use arithprop_core::{config, error, numerical, ops, text, types};
pub use arithprop_core::{ArithmeticError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use arithprop_core::prelude::*;
}
