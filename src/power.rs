//! Exponentiation and roots.
//!
//! # Algorithms
//!
//! - **Power**: binary exponentiation (square-and-multiply) on exact
//!   integers, O(log |n|) multiplications. Any approximate operand falls
//!   back to the platform `powf`.
//! - **Integer square root**: Newton's method carried out entirely on
//!   exact integers, exact for arbitrarily large inputs.
//!   Reference: Crandall & Pomerance (2005), *Prime Numbers: A
//!   Computational Perspective*, Algorithm 9.2.11.

use std::ops::Mul;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{MathError, Result};
use crate::number::Number;

/// Raises `x` to the power `n`.
///
/// # Promotion
/// - integer base, non-negative integer exponent: exact `Number::Int`
/// - integer base, negative integer exponent: `(1/x)^(-n)` as `Number::Float`
/// - any float operand: platform `powf`, `Number::Float`
///
/// # Complexity
/// O(log |n|) multiplications on the exact path.
///
/// # Examples
/// ```
/// use u_mathkit::number::Number;
/// use u_mathkit::power::power;
/// assert_eq!(power(2, 10), Number::from(1024));
/// assert_eq!(power(2, -2), Number::from(0.25));
/// assert!((power(2, 0.5).to_f64() - 2.0_f64.sqrt()).abs() < 1e-15);
/// ```
pub fn power(x: impl Into<Number>, n: impl Into<Number>) -> Number {
    match (x.into(), n.into()) {
        (Number::Int(base), Number::Int(exp)) => {
            if exp.is_negative() {
                let reciprocal = 1.0 / Number::Int(base).to_f64();
                Number::Float(pow_by_squaring(reciprocal, exp.magnitude(), 1.0))
            } else {
                Number::Int(pow_by_squaring(base, exp.magnitude(), BigInt::one()))
            }
        }
        (base, exp) => Number::Float(base.to_f64().powf(exp.to_f64())),
    }
}

/// Square-and-multiply over any type with a borrowing multiplication.
///
/// Invariant: `acc * base^exp` equals the requested power at the top of
/// every iteration.
fn pow_by_squaring<T>(mut base: T, exp: &BigUint, one: T) -> T
where
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    let mut exp = exp.clone();
    let mut acc = one;
    while !exp.is_zero() {
        if exp.is_odd() {
            acc = &acc * &base;
        }
        exp >>= 1u32;
        if !exp.is_zero() {
            base = &base * &base;
        }
    }
    acc
}

/// Square root as a float.
///
/// # Errors
/// [`MathError::Domain`] if `x < 0`.
///
/// # Examples
/// ```
/// use u_mathkit::power::sqrt;
/// assert_eq!(sqrt(16).unwrap(), 4.0);
/// assert!(sqrt(-1.0).is_err());
/// ```
pub fn sqrt(x: impl Into<Number>) -> Result<f64> {
    let x = x.into();
    if x.is_negative() {
        return Err(MathError::domain("sqrt", format!("{x} is negative")));
    }
    Ok(x.to_f64().sqrt())
}

/// Real `n`-th root, computed as `x^(1/n)`.
///
/// Always approximate. Negative `x` yields NaN, matching `powf`.
///
/// # Examples
/// ```
/// use u_mathkit::power::nth_root;
/// assert!((nth_root(27, 3) - 3.0).abs() < 1e-12);
/// ```
pub fn nth_root(x: impl Into<Number>, n: impl Into<Number>) -> f64 {
    let exponent = 1.0 / n.into().to_f64();
    power(x.into().to_f64(), exponent).to_f64()
}

/// Integer square root: the largest `r` with `r² ≤ x`.
///
/// # Algorithm
/// Newton iteration on integers starting at `⌊(1+x)/2⌋`:
/// `n ← ⌊(n + ⌊x/n⌋) / 2⌋`. Iterates decrease monotonically towards
/// `⌊√x⌋` and never undershoot it. Once two consecutive iterates differ by
/// at most one, the smaller is at most one above the answer and is
/// corrected by a single square check.
///
/// # Errors
/// [`MathError::Domain`] if `x < 0`.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use u_mathkit::power::isqrt;
/// assert_eq!(isqrt(99).unwrap(), BigInt::from(9));
/// assert_eq!(isqrt(100).unwrap(), BigInt::from(10));
/// assert!(isqrt(-4).is_err());
/// ```
pub fn isqrt(x: impl Into<BigInt>) -> Result<BigInt> {
    let x = x.into();
    if x.is_negative() {
        return Err(MathError::domain("isqrt", format!("{x} is negative")));
    }
    if x.is_zero() {
        return Ok(BigInt::zero());
    }

    let one = BigInt::one();
    let mut prev: BigInt = (&x + 1u32) / 2u32;
    loop {
        let next: BigInt = (&prev + &x / &prev) / 2u32;
        if (&prev - &next).abs() <= one {
            let candidate = prev.min(next);
            if &candidate * &candidate > x {
                return Ok(candidate - 1u32);
            }
            return Ok(candidate);
        }
        prev = next;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn isqrt_brackets_root(x in any::<u128>()) {
            let x = BigInt::from(x);
            let r = isqrt(x.clone()).unwrap();
            let r1 = &r + 1u32;
            prop_assert!(&r * &r <= x);
            prop_assert!(x < &r1 * &r1);
        }

        #[test]
        fn power_matches_repeated_multiplication(base in -50_i64..50, n in 0_u32..40) {
            let expected = (0..n).fold(BigInt::one(), |acc, _| acc * base);
            prop_assert_eq!(power(base, n), Number::Int(expected));
        }

        #[test]
        fn power_adds_exponents(base in -20_i64..20, a in 0_u32..30, b in 0_u32..30) {
            let lhs = power(base, a) * power(base, b);
            prop_assert_eq!(lhs, power(base, a + b));
        }

        #[test]
        fn nth_root_inverts_power(x in 0.01_f64..100.0, n in 1_i32..8) {
            let back = nth_root(power(x, n), n);
            prop_assert!(
                (back - x).abs() < 1e-12 * x.max(1.0),
                "nth_root(power({x}, {n}), {n}) = {back}"
            );
        }

        #[test]
        fn negative_exponent_is_reciprocal(base in 1_i64..1000, n in 1_u32..6) {
            let direct = power(base, -(n as i64)).to_f64();
            let reciprocal = 1.0 / power(base, n).to_f64();
            prop_assert!(
                (direct - reciprocal).abs() < 1e-12 * reciprocal,
                "{direct} vs {reciprocal}"
            );
        }
    }
}
