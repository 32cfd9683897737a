//! Descriptor for the four binary arithmetic operations.

use super::basic::{add, divide, multiply, subtract};
use crate::{error::Result, types::Operand};
use std::fmt;

/// One of the four binary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, rejecting a zero divisor
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Infix symbol of the operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Lowercase name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Whether `a op b == b op a` for every operand pair.
    pub fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Multiply)
    }

    /// Whether the operation can fail for in-range operands.
    pub fn is_fallible(self) -> bool {
        matches!(self, Self::Divide)
    }

    /// Apply the operation to `a` and `b`.
    ///
    /// Only [`Operation::Divide`] can return an error.
    pub fn apply<T: Operand>(self, a: T, b: T) -> Result<T> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
