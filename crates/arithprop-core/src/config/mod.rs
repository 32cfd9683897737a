//! Configuration for law verification.

pub mod tolerance;

pub use tolerance::{Tolerance, ToleranceBuilder};
