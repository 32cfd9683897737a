//! Verification of the algebraic laws of the arithmetic operations.
//!
//! Each check evaluates both sides of a law for concrete operands and reports
//! whether they agree. Exact operands are compared with `==`; inexact ones go
//! through the checker's [`Tolerance`].
//!
//! The plain operations inherit overflow from the operand type, so callers
//! are expected to keep integer operands in range (see [`crate::types`]).
//! NaN operands never satisfy a law.

use crate::{
    config::Tolerance,
    ops::{add, divide, multiply, subtract},
    types::Operand,
};
use num_traits::{Signed, ToPrimitive};
use std::fmt;

/// Outcome of checking one law for one set of operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawCheck {
    /// Name of the law
    pub law: &'static str,
    /// Rendered left-hand side
    pub lhs: String,
    /// Rendered right-hand side
    pub rhs: String,
    /// Whether both sides agreed
    pub holds: bool,
}

impl LawCheck {
    fn new<L: fmt::Display, R: fmt::Display>(law: &'static str, lhs: L, rhs: R, holds: bool) -> Self {
        Self {
            law,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            holds,
        }
    }
}

impl fmt::Display for LawCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.holds { "holds" } else { "violated" };
        write!(f, "{}: {} vs {} ({})", self.law, self.lhs, self.rhs, verdict)
    }
}

fn magnitude<T: Operand>(x: T) -> f64 {
    x.to_f64().map_or(0.0, f64::abs)
}

/// Checks algebraic laws with a fixed tolerance.
#[derive(Debug, Clone, Default)]
pub struct LawChecker {
    tolerance: Tolerance,
}

impl LawChecker {
    /// Create a checker comparing inexact operands with `tolerance`.
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// The tolerance used for inexact operands.
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    fn compare<T: Operand>(&self, law: &'static str, lhs: T, rhs: T, scale: f64) -> LawCheck {
        let holds = self.tolerance.operands_eq(lhs, rhs, scale);
        LawCheck::new(law, lhs, rhs, holds)
    }

    /// `add(a, b) == add(b, a)`
    pub fn add_commutative<T: Operand>(&self, a: T, b: T) -> LawCheck {
        self.compare("add_commutative", add(a, b), add(b, a), 0.0)
    }

    /// `add(a, 0) == a`
    pub fn add_identity<T: Operand>(&self, a: T) -> LawCheck {
        self.compare("add_identity", add(a, T::zero()), a, 0.0)
    }

    /// `add(add(a, b), c) == add(a, add(b, c))`
    pub fn add_associative<T: Operand>(&self, a: T, b: T, c: T) -> LawCheck {
        let scale = magnitude(a) + magnitude(b) + magnitude(c);
        self.compare(
            "add_associative",
            add(add(a, b), c),
            add(a, add(b, c)),
            scale,
        )
    }

    /// `multiply(a, b) == multiply(b, a)`
    pub fn multiply_commutative<T: Operand>(&self, a: T, b: T) -> LawCheck {
        self.compare("multiply_commutative", multiply(a, b), multiply(b, a), 0.0)
    }

    /// `multiply(a, 1) == a`
    pub fn multiply_identity<T: Operand>(&self, a: T) -> LawCheck {
        self.compare("multiply_identity", multiply(a, T::one()), a, 0.0)
    }

    /// `multiply(a, 0) == 0`
    pub fn multiply_absorbing<T: Operand>(&self, a: T) -> LawCheck {
        self.compare("multiply_absorbing", multiply(a, T::zero()), T::zero(), 0.0)
    }

    /// `multiply(multiply(a, b), c) == multiply(a, multiply(b, c))`
    pub fn multiply_associative<T: Operand>(&self, a: T, b: T, c: T) -> LawCheck {
        let scale = magnitude(a) * magnitude(b) * magnitude(c);
        self.compare(
            "multiply_associative",
            multiply(multiply(a, b), c),
            multiply(a, multiply(b, c)),
            scale,
        )
    }

    /// `subtract(a, 0) == a`
    pub fn subtract_identity<T: Operand>(&self, a: T) -> LawCheck {
        self.compare("subtract_identity", subtract(a, T::zero()), a, 0.0)
    }

    /// `subtract(a, a) == 0`
    pub fn subtract_self<T: Operand>(&self, a: T) -> LawCheck {
        self.compare("subtract_self", subtract(a, a), T::zero(), magnitude(a))
    }

    /// `subtract(a, b) == -subtract(b, a)`
    pub fn subtract_antisymmetric<T: Operand + Signed>(&self, a: T, b: T) -> LawCheck {
        self.compare(
            "subtract_antisymmetric",
            subtract(a, b),
            -subtract(b, a),
            magnitude(a) + magnitude(b),
        )
    }

    /// `divide(a, 1) == a`
    pub fn divide_identity<T: Operand>(&self, a: T) -> LawCheck {
        match divide(a, T::one()) {
            Ok(quotient) => self.compare("divide_identity", quotient, a, 0.0),
            Err(err) => LawCheck::new("divide_identity", err, a, false),
        }
    }

    /// `divide(a, 0)` is rejected with a division-by-zero error.
    pub fn divide_by_zero_rejected<T: Operand>(&self, a: T) -> LawCheck {
        match divide(a, T::zero()) {
            Err(err) => {
                let holds = err.is_division_by_zero();
                LawCheck::new("divide_by_zero_rejected", err, "division by zero", holds)
            }
            Ok(quotient) => {
                LawCheck::new("divide_by_zero_rejected", quotient, "division by zero", false)
            }
        }
    }

    /// Run every law for the operands `a`, `b` and `c`.
    pub fn check_all<T: Operand + Signed>(&self, a: T, b: T, c: T) -> Vec<LawCheck> {
        vec![
            self.add_commutative(a, b),
            self.add_identity(a),
            self.add_associative(a, b, c),
            self.multiply_commutative(a, b),
            self.multiply_identity(a),
            self.multiply_absorbing(a),
            self.multiply_associative(a, b, c),
            self.subtract_identity(a),
            self.subtract_self(a),
            self.subtract_antisymmetric(a, b),
            self.divide_identity(a),
            self.divide_by_zero_rejected(a),
        ]
    }
}

/// Checks from `checks` that did not hold.
pub fn violations(checks: &[LawCheck]) -> Vec<&LawCheck> {
    checks.iter().filter(|check| !check.holds).collect()
}
