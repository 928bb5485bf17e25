//! Elementary functions and floating-point comparison.
//!
//! Thin forwarding layer over the platform's IEEE-754 math routines.
//! Functions whose mathematical domain is a strict subset of the reals
//! return [`Result`] and reject out-of-domain arguments with
//! [`MathError::Domain`] instead of producing NaN.
//!
//! The approximate comparator [`nearly_equal`] is the equality used for
//! every float-valued assertion in this crate.

use crate::error::{MathError, Result};

/// Tolerance of [`nearly_equal`].
pub const EPSILON: f64 = 1e-15;

/// π ≈ 3.141592653589793
pub fn pi() -> f64 {
    std::f64::consts::PI
}

/// τ = 2π ≈ 6.283185307179586
pub fn tau() -> f64 {
    std::f64::consts::TAU
}

/// Euler's number e ≈ 2.718281828459045
pub fn e() -> f64 {
    std::f64::consts::E
}

/// Approximate equality of two floats.
///
/// # Algorithm
/// 1. Exactly equal values (including equal infinities) are equal.
/// 2. If either operand is exactly zero, the absolute difference is
///    compared against [`EPSILON`].
/// 3. Otherwise the relative difference `|x−y| / min(|x|+|y|, f64::MAX)`
///    is compared against [`EPSILON`]. The clamp keeps the denominator
///    finite when `|x|+|y|` overflows.
///
/// The relation is symmetric but **not transitive**: `a ≈ b` and `b ≈ c`
/// do not imply `a ≈ c`.
///
/// # Examples
/// ```
/// use u_mathkit::elementary::nearly_equal;
/// assert!(nearly_equal(0.1 + 0.2, 0.3));
/// assert!(!nearly_equal(1.0, 1.0001));
/// assert!(!nearly_equal(f64::NAN, f64::NAN));
/// ```
pub fn nearly_equal(x: f64, y: f64) -> bool {
    if x == y {
        return true;
    }
    let diff = (x - y).abs();
    if x == 0.0 || y == 0.0 {
        diff < EPSILON
    } else {
        diff / (x.abs() + y.abs()).min(f64::MAX) < EPSILON
    }
}

/// Converts degrees to radians.
pub fn deg2rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
pub fn rad2deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Sine of `x` radians.
pub fn sin(x: f64) -> f64 {
    x.sin()
}

/// Cosine of `x` radians.
pub fn cos(x: f64) -> f64 {
    x.cos()
}

/// Tangent of `x` radians.
pub fn tan(x: f64) -> f64 {
    x.tan()
}

/// Arcsine. Domain: `[-1, 1]`.
pub fn asin(x: f64) -> Result<f64> {
    check_unit_interval("asin", x)?;
    Ok(x.asin())
}

/// Arccosine. Domain: `[-1, 1]`.
pub fn acos(x: f64) -> Result<f64> {
    check_unit_interval("acos", x)?;
    Ok(x.acos())
}

/// Arctangent, in `(-π/2, π/2)`.
pub fn atan(x: f64) -> f64 {
    x.atan()
}

/// Four-quadrant arctangent of `y / x`.
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

/// Hyperbolic sine.
pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

/// Hyperbolic cosine.
pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

/// Hyperbolic tangent.
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// Inverse hyperbolic sine. Defined on all reals.
pub fn asinh(x: f64) -> f64 {
    x.asinh()
}

/// Inverse hyperbolic cosine. Domain: `[1, ∞)`.
pub fn acosh(x: f64) -> Result<f64> {
    if !(x >= 1.0) {
        return Err(MathError::domain("acosh", format!("{x} is below 1")));
    }
    Ok(x.acosh())
}

/// Inverse hyperbolic tangent. Domain: the open interval `(-1, 1)`.
pub fn atanh(x: f64) -> Result<f64> {
    if !(x > -1.0 && x < 1.0) {
        return Err(MathError::domain("atanh", format!("{x} is outside (-1, 1)")));
    }
    Ok(x.atanh())
}

/// `e^x`.
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Natural logarithm. Domain: `(0, ∞)`.
///
/// # Examples
/// ```
/// use u_mathkit::elementary::{e, log, nearly_equal};
/// assert!(nearly_equal(log(e()).unwrap(), 1.0));
/// assert!(log(0.0).is_err());
/// ```
pub fn log(x: f64) -> Result<f64> {
    check_positive("log", x)?;
    Ok(x.ln())
}

/// Base-2 logarithm. Domain: `(0, ∞)`.
pub fn log2(x: f64) -> Result<f64> {
    check_positive("log2", x)?;
    Ok(x.log2())
}

/// Base-10 logarithm. Domain: `(0, ∞)`.
pub fn log10(x: f64) -> Result<f64> {
    check_positive("log10", x)?;
    Ok(x.log10())
}

/// Logarithm of `x` in an arbitrary `base`.
///
/// `log_base(x, x)` is exactly `1.0` for every valid `x`; other inputs are
/// computed as `ln(x) / ln(base)`.
///
/// # Errors
/// [`MathError::Domain`] if `x <= 0`, `base <= 0` or `base == 1`.
///
/// # Examples
/// ```
/// use u_mathkit::elementary::log_base;
/// assert_eq!(log_base(7.3, 7.3).unwrap(), 1.0);
/// assert!((log_base(1024.0, 2.0).unwrap() - 10.0).abs() < 1e-12);
/// ```
pub fn log_base(x: f64, base: f64) -> Result<f64> {
    check_positive("log_base", x)?;
    check_positive("log_base", base)?;
    if base == 1.0 {
        return Err(MathError::domain("log_base", "base must not be 1"));
    }
    if x == base {
        return Ok(1.0);
    }
    Ok(x.ln() / base.ln())
}

fn check_unit_interval(function: &'static str, x: f64) -> Result<()> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(MathError::domain(function, format!("{x} is outside [-1, 1]")));
    }
    Ok(())
}

fn check_positive(function: &'static str, x: f64) -> Result<()> {
    if !(x > 0.0) {
        return Err(MathError::domain(function, format!("{x} is not positive")));
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn nearly_equal_is_reflexive(x in prop::num::f64::ANY) {
            prop_assume!(!x.is_nan());
            prop_assert!(nearly_equal(x, x));
        }

        #[test]
        fn nearly_equal_is_symmetric(x in prop::num::f64::ANY, y in prop::num::f64::ANY) {
            prop_assert_eq!(nearly_equal(x, y), nearly_equal(y, x));
        }

        #[test]
        fn deg_rad_roundtrip(x in -1e6_f64..1e6) {
            let back = rad2deg(deg2rad(x));
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0));
        }

        #[test]
        fn asin_inverts_sin(x in -1.5_f64..1.5) {
            let y = asin(sin(x)).unwrap();
            prop_assert!((y - x).abs() < 1e-12, "asin(sin({x})) = {y}");
        }
    }
}
