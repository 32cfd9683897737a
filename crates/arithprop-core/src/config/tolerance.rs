//! Floating-point comparison tolerance.
//!
//! Inexact operands cannot satisfy every algebraic law bit-for-bit, so the law
//! checker compares them through a [`Tolerance`]. Exact operands (integers,
//! decimals) never consult it.

use crate::{
    error::{ArithmeticError, Result},
    types::Operand,
};
use num_traits::ToPrimitive;

/// Tolerance used when comparing inexact results.
///
/// `epsilon` is an absolute bound. With the default of `f64::EPSILON`, any
/// two values closer than about `2.2e-16` compare equal, so differences in
/// the subnormal range are never reported. Lower `epsilon` (or use
/// [`Tolerance::exact`]) to compare tiny magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Absolute difference below which two values are always equal.
    pub epsilon: f64,
    /// Maximum difference relative to the magnitude of the compared values.
    pub max_relative: f64,
    /// Maximum distance in units in the last place.
    pub max_ulps: u32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: f64::EPSILON,
            max_relative: 1e-12,
            max_ulps: 4,
        }
    }
}

impl Tolerance {
    /// Start building a tolerance from the defaults.
    pub fn builder() -> ToleranceBuilder {
        ToleranceBuilder::new()
    }

    /// Exact comparison: only identical values are equal.
    pub fn exact() -> Self {
        Self {
            epsilon: 0.0,
            max_relative: 0.0,
            max_ulps: 0,
        }
    }

    /// Check that every parameter is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("epsilon", self.epsilon), ("max_relative", self.max_relative)] {
            if !value.is_finite() {
                return Err(ArithmeticError::invalid_tolerance(name, "must be finite"));
            }
            if value < 0.0 {
                return Err(ArithmeticError::invalid_tolerance(name, "must not be negative"));
            }
        }
        Ok(())
    }

    /// Whether `a` and `b` are equal within this tolerance.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        approx::relative_eq!(a, b, epsilon = self.epsilon, max_relative = self.max_relative)
            || approx::ulps_eq!(a, b, epsilon = self.epsilon, max_ulps = self.max_ulps)
    }

    /// Like [`Tolerance::approx_eq`], with the relative bound measured against
    /// `scale` instead of the compared values.
    ///
    /// Needed when the compared values are the result of cancellation, e.g.
    /// `(a + b) + c` against `a + (b + c)` where the intermediate sums are far
    /// larger than the result.
    pub fn approx_eq_scaled(&self, a: f64, b: f64, scale: f64) -> bool {
        self.approx_eq(a, b) || (a - b).abs() <= self.max_relative * scale.abs()
    }

    /// Compare two operands: exactly for exact types, otherwise through
    /// [`Tolerance::approx_eq_scaled`].
    pub fn operands_eq<T: Operand>(&self, a: T, b: T, scale: f64) -> bool {
        if T::EXACT {
            return a == b;
        }
        match (a.to_f64(), b.to_f64()) {
            (Some(a), Some(b)) => self.approx_eq_scaled(a, b, scale),
            _ => false,
        }
    }
}

/// Builder for a [`Tolerance`].
#[derive(Debug, Clone, Default)]
pub struct ToleranceBuilder {
    tolerance: Tolerance,
}

impl ToleranceBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute epsilon.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.tolerance.epsilon = epsilon;
        self
    }

    /// Set the maximum relative difference.
    pub fn max_relative(mut self, max_relative: f64) -> Self {
        self.tolerance.max_relative = max_relative;
        self
    }

    /// Set the maximum ULP distance.
    pub fn max_ulps(mut self, max_ulps: u32) -> Self {
        self.tolerance.max_ulps = max_ulps;
        self
    }

    /// Validate and build the tolerance.
    pub fn build(self) -> Result<Tolerance> {
        self.tolerance.validate()?;
        Ok(self.tolerance)
    }
}
