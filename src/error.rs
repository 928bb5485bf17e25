//! Error type shared by every fallible operation in the crate.
//!
//! Absence of a result (statistics over an empty sequence) is **not** an
//! error and is expressed as `Option::None` by the functions concerned.

use num_bigint::BigInt;

/// Errors raised by the numeric kernel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// Argument lies outside the domain of the function.
    #[error("{function}: domain error: {reason}")]
    Domain {
        /// Name of the failing function.
        function: &'static str,
        /// Human readable description of the violated precondition.
        reason: String,
    },

    /// `a` has no inverse modulo `m` because `gcd(a, m) != 1`.
    #[error("{a} is not coprime to {m}")]
    NotCoprime {
        /// The value whose inverse was requested.
        a: BigInt,
        /// The modulus.
        m: BigInt,
    },

    /// An exact integer was required but an approximate float was given.
    #[error("{function}: expected exact integer arguments")]
    ExpectedInteger {
        /// Name of the failing function.
        function: &'static str,
    },

    /// The operation is undefined for an empty input.
    #[error("{function}: empty input")]
    EmptyInput {
        /// Name of the failing function.
        function: &'static str,
    },

    /// Histograms need at least one bucket.
    #[error("bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
}

impl MathError {
    pub(crate) fn domain(function: &'static str, reason: impl Into<String>) -> Self {
        MathError::Domain {
            function,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_domain() {
        let err = MathError::domain("isqrt", "argument must be non-negative");
        assert_eq!(
            err.to_string(),
            "isqrt: domain error: argument must be non-negative"
        );
    }

    #[test]
    fn test_display_not_coprime() {
        let err = MathError::NotCoprime {
            a: BigInt::from(123),
            m: BigInt::from(456),
        };
        assert_eq!(err.to_string(), "123 is not coprime to 456");
    }

    #[test]
    fn test_display_bucket_count() {
        assert_eq!(
            MathError::InvalidBucketCount(0).to_string(),
            "bucket count must be at least 1, got 0"
        );
    }
}
