//! Numerical verification utilities.

pub mod laws;

pub use laws::{violations, LawCheck, LawChecker};
