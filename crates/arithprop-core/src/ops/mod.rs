//! Arithmetic operations.

pub mod basic;
pub mod batch;
pub mod checked;
pub mod operation;

pub use basic::{add, divide, multiply, subtract};
#[cfg(feature = "parallel")]
pub use batch::par_apply_pairwise;
pub use batch::apply_pairwise;
pub use checked::{checked_add, checked_divide, checked_multiply, checked_subtract, CheckedOperand};
pub use operation::Operation;
