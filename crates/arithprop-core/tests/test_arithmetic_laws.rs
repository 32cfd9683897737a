//! Tests for the algebraic laws of the arithmetic operations.
//!
//! This test module verifies commutativity, associativity, identities,
//! antisymmetry and the division-by-zero policy across operand types.

use arithprop_core::{
    config::Tolerance,
    numerical::{violations, LawChecker},
    ops::{add, divide, multiply, subtract, Operation},
    types::Operand,
    ArithmeticError,
};
use proptest::prelude::*;

const BOUND: i64 = 1 << 20;

fn assert_laws_hold<T: Operand + num_traits::Signed>(a: T, b: T, c: T) {
    let checks = LawChecker::default().check_all(a, b, c);
    let failed = violations(&checks);
    assert!(
        failed.is_empty(),
        "laws violated for ({}, {}, {}): {:?}",
        a,
        b,
        c,
        failed
    );
}

#[test]
fn test_laws_hold_for_every_signed_integer_width() {
    assert_laws_hold(3i8, -5, 7);
    assert_laws_hold(30i16, -50, 7);
    assert_laws_hold(3i32, -5, 7);
    assert_laws_hold(3i64, -5, 7);
    assert_laws_hold(3i128, -5, 7);
    assert_laws_hold(3isize, -5, 7);
}

#[test]
fn test_laws_hold_for_both_float_widths() {
    assert_laws_hold(0.5f32, -1.25, 3.0);
    assert_laws_hold(0.1f64, 0.2, 0.3);
}

#[test]
fn test_unsigned_identities() {
    let checker = LawChecker::default();
    assert!(checker.add_commutative(3u64, 5).holds);
    assert!(checker.add_identity(u64::MAX).holds);
    assert!(checker.multiply_identity(u64::MAX).holds);
    assert!(checker.subtract_self(u64::MAX).holds);
    assert!(checker.divide_identity(u64::MAX).holds);
    assert!(checker.divide_by_zero_rejected(u64::MAX).holds);
}

#[test]
fn test_subtract_is_not_commutative() {
    assert_ne!(subtract(10, 4), subtract(4, 10));
    assert_eq!(subtract(10, 4), 6);
}

#[test]
fn test_divide_by_zero_for_every_operation_entry_point() {
    let expected = ArithmeticError::division_by_zero(5);
    assert_eq!(divide(5, 0), Err(expected.clone()));
    assert_eq!(Operation::Divide.apply(5, 0), Err(expected.clone()));
    assert_eq!(Operation::Divide.checked_apply(5, 0), Err(expected));
}

proptest! {
    #[test]
    fn add_is_commutative(a in -BOUND..BOUND, b in -BOUND..BOUND) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn add_and_multiply_have_identities(a in any::<i64>()) {
        prop_assert_eq!(add(a, 0), a);
        prop_assert_eq!(multiply(a, 1), a);
    }

    #[test]
    fn add_is_associative(a in -BOUND..BOUND, b in -BOUND..BOUND, c in -BOUND..BOUND) {
        prop_assert_eq!(add(add(a, b), c), add(a, add(b, c)));
    }

    #[test]
    fn subtract_is_antisymmetric(a in -BOUND..BOUND, b in -BOUND..BOUND) {
        prop_assert_eq!(subtract(a, b), -subtract(b, a));
    }

    #[test]
    fn divide_by_one_is_identity(a in any::<i64>()) {
        prop_assert_eq!(divide(a, 1), Ok(a));
    }

    #[test]
    fn divide_by_zero_always_fails(a in any::<i64>()) {
        let err = divide(a, 0).unwrap_err();
        prop_assert!(err.is_division_by_zero());
    }

    #[test]
    fn float_divide_by_signed_zero_always_fails(
        a in prop::num::f64::ANY,
        zero in prop_oneof![Just(0.0f64), Just(-0.0f64)],
    ) {
        prop_assert!(divide(a, zero).is_err());
    }

    #[test]
    fn float_laws_hold_within_tolerance(
        a in -1e10f64..1e10,
        b in -1e10f64..1e10,
        c in -1e10f64..1e10,
    ) {
        let checker = LawChecker::new(Tolerance::default());
        let checks = checker.check_all(a, b, c);
        prop_assert!(violations(&checks).is_empty(), "{:?}", violations(&checks));
    }

    #[test]
    fn checked_matches_native_checked(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Operation::Add.checked_apply(a, b).ok(), a.checked_add(b));
        prop_assert_eq!(Operation::Subtract.checked_apply(a, b).ok(), a.checked_sub(b));
        prop_assert_eq!(Operation::Multiply.checked_apply(a, b).ok(), a.checked_mul(b));
        prop_assert_eq!(Operation::Divide.checked_apply(a, b).ok(), a.checked_div(b));
    }
}
