//! Greatest common divisors, Bézout coefficients and modular inverses.
//!
//! All routines operate on exact [`BigInt`] values. Results are never
//! negative where a sign convention exists: `gcd ≥ 0`, `lcm ≥ 0`, and
//! `mod_inv(a, m) ∈ [0, m)`.
//!
//! # Algorithm
//! Iterative extended Euclidean algorithm.
//! Reference: Knuth (1997), *TAOCP* Vol. 2, §4.5.2, Algorithm X.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{MathError, Result};
use crate::number::Number;

/// Bézout triple: `a·s + b·t = gcd` with `gcd = gcd(|a|, |b|)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bezout {
    /// Non-negative greatest common divisor.
    pub gcd: BigInt,
    /// Coefficient of `a`.
    pub s: BigInt,
    /// Coefficient of `b`.
    pub t: BigInt,
}

/// Extended Euclidean algorithm.
///
/// Runs on `|a|` and `|b|`, then restores the signs of the coefficients so
/// that `a·s + b·t = g` holds for the original operands.
///
/// `egcd(0, 0)` is `(0, 1, 0)`.
///
/// # Complexity
/// O(log min(|a|, |b|)) division steps.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use u_mathkit::number_theory::egcd;
/// let b = egcd(240, 46);
/// assert_eq!(b.gcd, BigInt::from(2));
/// assert_eq!(BigInt::from(240) * &b.s + BigInt::from(46) * &b.t, b.gcd);
/// ```
pub fn egcd(a: impl Into<BigInt>, b: impl Into<BigInt>) -> Bezout {
    let a = a.into();
    let b = b.into();

    let (mut r_prev, mut r_cur) = (a.abs(), b.abs());
    let (mut s_prev, mut s_cur) = (BigInt::one(), BigInt::zero());
    let (mut t_prev, mut t_cur) = (BigInt::zero(), BigInt::one());

    while !r_cur.is_zero() {
        let (q, r_next) = r_prev.div_rem(&r_cur);
        r_prev = std::mem::replace(&mut r_cur, r_next);

        let s_next = &s_prev - &q * &s_cur;
        s_prev = std::mem::replace(&mut s_cur, s_next);

        let t_next = &t_prev - &q * &t_cur;
        t_prev = std::mem::replace(&mut t_cur, t_next);
    }

    Bezout {
        gcd: r_prev,
        s: if a.is_negative() { -s_prev } else { s_prev },
        t: if b.is_negative() { -t_prev } else { t_prev },
    }
}

/// Greatest common divisor, always non-negative. `gcd(0, 0) = 0`.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use u_mathkit::number_theory::gcd;
/// assert_eq!(gcd(-12, 18), BigInt::from(6));
/// ```
pub fn gcd(a: impl Into<BigInt>, b: impl Into<BigInt>) -> BigInt {
    egcd(a, b).gcd
}

/// Least common multiple, always non-negative. `lcm(0, 0) = 0`.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use u_mathkit::number_theory::lcm;
/// assert_eq!(lcm(4, -6), BigInt::from(12));
/// ```
pub fn lcm(a: impl Into<BigInt>, b: impl Into<BigInt>) -> BigInt {
    let a = a.into();
    let b = b.into();
    if a.is_zero() && b.is_zero() {
        return BigInt::zero();
    }
    let g = gcd(a.clone(), b.clone());
    (a * b).abs() / g
}

/// Modular multiplicative inverse of `a` modulo `m`, normalized into `[0, m)`.
///
/// # Errors
/// - [`MathError::ExpectedInteger`] if either argument is a float.
/// - [`MathError::Domain`] if `m < 1`.
/// - [`MathError::NotCoprime`] if `gcd(a, m) != 1`.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use u_mathkit::number_theory::mod_inv;
/// assert_eq!(mod_inv(3, 11).unwrap(), BigInt::from(4));
/// assert!(mod_inv(123, 456).is_err());
/// ```
pub fn mod_inv(a: impl Into<Number>, m: impl Into<Number>) -> Result<BigInt> {
    let (a, m) = match (a.into(), m.into()) {
        (Number::Int(a), Number::Int(m)) => (a, m),
        _ => return Err(MathError::ExpectedInteger { function: "mod_inv" }),
    };
    if m < BigInt::one() {
        return Err(MathError::domain("mod_inv", format!("modulus {m} is below 1")));
    }
    let bezout = egcd(a.clone(), m.clone());
    if !bezout.gcd.is_one() {
        return Err(MathError::NotCoprime { a, m });
    }
    Ok(bezout.s.mod_floor(&m))
}

/// Panicking variant of [`mod_inv`].
///
/// # Panics
/// Panics with the error message whenever [`mod_inv`] would return an error.
pub fn mod_inv_or_panic(a: impl Into<Number>, m: impl Into<Number>) -> BigInt {
    mod_inv(a, m).unwrap_or_else(|err| panic!("{err}"))
}
