//! Numeric operand abstraction.
//!
//! Every arithmetic entry point is generic over [`Operand`], which fixes the
//! numeric representation explicitly instead of relying on an unbounded
//! numeric tower:
//!
//! | Type | Exact | Overflow in plain ops | Division |
//! |---|---|---|---|
//! | `i8..i128`, `isize` | yes | panics in debug, wraps in release | truncates toward zero; `MIN / -1` panics in every profile |
//! | `u8..u128`, `usize` | yes | panics in debug, wraps in release | truncates toward zero |
//! | `f32`, `f64` | no | saturates to infinity | IEEE-754 rounding |
//! | `Decimal` (`decimal` feature) | yes | panics | rounds at 28 digits |
//!
//! Use the checked operations in [`crate::ops`] when overflow must be
//! reported rather than inherited from the type. The release profile aborts
//! on panic, so signed division of untrusted input belongs in
//! [`crate::ops::checked_divide`].

use num_traits::{Num, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for numeric values accepted by the arithmetic operations.
pub trait Operand:
    Num + ToPrimitive + PartialOrd + Copy + Debug + Display + Send + Sync + 'static
{
    /// Whether addition and subtraction are exact for in-range values.
    ///
    /// Exact operands satisfy `subtract(a, a) == 0` and associativity with
    /// plain equality; inexact ones need a tolerance.
    const EXACT: bool;

    /// Human readable type name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Returns `true` if this value is exactly zero (`-0.0` included).
    #[inline]
    fn is_exact_zero(&self) -> bool {
        self.is_zero()
    }
}

macro_rules! operand_impl {
    ($exact:expr; $($t:ty),+ $(,)?) => {
        $(
            impl Operand for $t {
                const EXACT: bool = $exact;
                const TYPE_NAME: &'static str = stringify!($t);
            }
        )+
    };
}

operand_impl!(true; i8, i16, i32, i64, i128, isize);
operand_impl!(true; u8, u16, u32, u64, u128, usize);
operand_impl!(false; f32, f64);

#[cfg(feature = "decimal")]
impl Operand for rust_decimal::Decimal {
    const EXACT: bool = true;
    const TYPE_NAME: &'static str = "Decimal";
}
