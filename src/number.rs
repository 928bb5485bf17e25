//! Tagged numeric value carrying either an exact integer or an
//! approximate float.
//!
//! # Promotion
//!
//! | Left | Right | Result |
//! |---|---|---|
//! | `Int` | `Int` | `Int` (exact) |
//! | `Int` | `Float` | `Float` |
//! | `Float` | any | `Float` |
//!
//! Equality is structural: `Int(2)` and `Float(2.0)` are distinct values.
//! Use [`Number::total_cmp`] or [`crate::elementary::nearly_equal`] for
//! value comparisons across representations.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Mul;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// An exact integer or an IEEE-754 double.
///
/// # Examples
/// ```
/// use u_mathkit::number::Number;
/// let a = Number::from(3);
/// let b = Number::from(0.5);
/// assert!(a.is_exact());
/// assert!(!b.is_exact());
/// assert_eq!((a * b).to_f64(), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Exact integer of unbounded range.
    Int(BigInt),
    /// Approximate double-precision float.
    Float(f64),
}

impl Number {
    /// Returns `true` for the exact integer representation.
    pub fn is_exact(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Borrows the integer payload, or `None` for floats.
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    /// Consumes the value, returning the integer payload if exact.
    pub fn into_int(self) -> Option<BigInt> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    /// Converts to the nearest `f64`.
    ///
    /// Integers beyond the finite float range saturate to `±∞`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(i) => i.to_f64().unwrap_or(if i.is_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            Number::Float(f) => *f,
        }
    }

    /// Returns `true` if the value is exactly zero (`0` or `±0.0`).
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(i) => i.is_zero(),
            Number::Float(f) => *f == 0.0,
        }
    }

    /// Returns `true` if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Int(i) => i.is_negative(),
            Number::Float(f) => *f < 0.0,
        }
    }

    /// Total ordering used for sorting sequences of numbers.
    ///
    /// Two integers compare exactly. Every other pairing compares the
    /// `f64` projections with [`f64::total_cmp`], so NaN sorts after `+∞`
    /// and `-0.0` before `0.0`.
    pub fn total_cmp(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            _ => self.to_f64().total_cmp(&other.to_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a * b),
            (a, b) => Number::Float(a.to_f64() * b.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Int(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Int(value)
    }
}

impl From<&BigInt> for Number {
    fn from(value: &BigInt) -> Self {
        Number::Int(value.clone())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<&Number> for Number {
    fn from(value: &Number) -> Self {
        value.clone()
    }
}
