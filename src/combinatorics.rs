//! Factorials, k-permutations and k-combinations on exact integers.
//!
//! # Factorial table
//!
//! `0!` through `(FACTORIAL_TABLE_LEN − 1)!` are computed once, on first
//! use, into a process-wide read-only table guarded by
//! [`once_cell::sync::Lazy`]. Initialization is single-shot and
//! thread-safe; afterwards lookups are O(1) clones. Larger arguments
//! continue the product from the last table entry.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use crate::error::{MathError, Result};

/// Number of precomputed factorials (`0!` to `999!`).
pub const FACTORIAL_TABLE_LEN: usize = 1000;

static FACTORIALS: Lazy<Vec<BigInt>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(FACTORIAL_TABLE_LEN);
    let mut acc = BigInt::one();
    table.push(acc.clone());
    for n in 1..FACTORIAL_TABLE_LEN {
        acc *= n;
        table.push(acc.clone());
    }
    tracing::debug!(entries = table.len(), "factorial table initialized");
    table
});

/// Computes `n!`.
///
/// # Complexity
/// O(1) for `n < FACTORIAL_TABLE_LEN`, otherwise O(n − FACTORIAL_TABLE_LEN)
/// big-integer multiplications.
///
/// # Errors
/// [`MathError::Domain`] if `n < 0`.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use u_mathkit::combinatorics::factorial;
/// assert_eq!(factorial(5).unwrap(), BigInt::from(120));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigInt> {
    if n < 0 {
        return Err(MathError::domain("factorial", format!("{n} is negative")));
    }
    let n = n as u64;
    if n < FACTORIAL_TABLE_LEN as u64 {
        return Ok(FACTORIALS[n as usize].clone());
    }

    tracing::trace!(n, "factorial beyond precomputed table");
    let mut acc = FACTORIALS[FACTORIAL_TABLE_LEN - 1].clone();
    for k in FACTORIAL_TABLE_LEN as u64..=n {
        acc *= k;
    }
    Ok(acc)
}

/// Number of ordered selections of `k` items from `n`: `n! / (n−k)!`.
///
/// Returns `0` when `k > n`.
///
/// # Errors
/// [`MathError::Domain`] if `n < 0` or `k < 0`.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use u_mathkit::combinatorics::k_permutations;
/// assert_eq!(k_permutations(10, 2).unwrap(), BigInt::from(90));
/// assert_eq!(k_permutations(3, 4).unwrap(), BigInt::from(0));
/// ```
pub fn k_permutations(n: i64, k: i64) -> Result<BigInt> {
    check_counts("k_permutations", n, k)?;
    if k > n {
        return Ok(BigInt::zero());
    }
    Ok(factorial(n)? / factorial(n - k)?)
}

/// Number of unordered selections of `k` items from `n`: `n! / (k!·(n−k)!)`.
///
/// Returns `0` when `k > n`.
///
/// # Errors
/// [`MathError::Domain`] if `n < 0` or `k < 0`.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use u_mathkit::combinatorics::k_combinations;
/// assert_eq!(k_combinations(10, 2).unwrap(), BigInt::from(45));
/// ```
pub fn k_combinations(n: i64, k: i64) -> Result<BigInt> {
    check_counts("k_combinations", n, k)?;
    if k > n {
        return Ok(BigInt::zero());
    }
    Ok(factorial(n)? / (factorial(k)? * factorial(n - k)?))
}

fn check_counts(function: &'static str, n: i64, k: i64) -> Result<()> {
    if n < 0 || k < 0 {
        return Err(MathError::domain(
            function,
            format!("n = {n} and k = {k} must be non-negative"),
        ));
    }
    Ok(())
}
