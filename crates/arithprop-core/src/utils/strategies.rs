//! Proptest strategies for arithmetic operands.
//!
//! Integer strategies are bounded so that the laws checked by
//! [`crate::numerical::LawChecker`] never overflow the plain operations.

use crate::ops::Operation;
use proptest::prelude::*;

/// Largest magnitude for which the sum of three values fits in `i64`.
pub const ADDITIVE_I64_BOUND: i64 = i64::MAX / 4;

/// Largest magnitude for which the product of three values fits in `i64`.
pub const MULTIPLICATIVE_I64_BOUND: i64 = 1_000_000;

/// Magnitude bound of the float strategies.
pub const F64_BOUND: f64 = 1e10;

/// Integers safe to add and subtract in groups of three.
pub fn additive_i64() -> impl Strategy<Value = i64> {
    -ADDITIVE_I64_BOUND..=ADDITIVE_I64_BOUND
}

/// Integers safe to multiply in groups of three.
pub fn multiplicative_i64() -> impl Strategy<Value = i64> {
    -MULTIPLICATIVE_I64_BOUND..=MULTIPLICATIVE_I64_BOUND
}

/// Finite floats in `[-1e10, 1e10]`, mixing uniform values with zeros and
/// tiny magnitudes.
pub fn bounded_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -F64_BOUND..=F64_BOUND,
        1 => Just(0.0),
        1 => Just(-0.0),
        1 => prop::num::f64::SUBNORMAL,
        1 => -1.0..=1.0,
    ]
}

/// Any float that is neither NaN nor infinite.
pub fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE
        | prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO
}

/// Strings of `min..=max` characters containing no control characters.
pub fn printable_text(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        any::<char>().prop_filter("control character", |c| !c.is_control()),
        min..=max,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Any of the four operations.
pub fn operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

/// Decimals with an `i64` mantissa and up to eight fractional digits.
///
/// Rescaling any two of them to a common scale stays within the 96-bit
/// mantissa, so sums and differences are exact.
#[cfg(feature = "decimal")]
pub fn decimal() -> impl Strategy<Value = rust_decimal::Decimal> {
    (any::<i64>(), 0u32..=8).prop_map(|(mantissa, scale)| rust_decimal::Decimal::new(mantissa, scale))
}

/// Decimals small enough to multiply in groups of three.
#[cfg(feature = "decimal")]
pub fn small_decimal() -> impl Strategy<Value = rust_decimal::Decimal> {
    (-1_000_000i64..=1_000_000, 0u32..=4)
        .prop_map(|(mantissa, scale)| rust_decimal::Decimal::new(mantissa, scale))
}
