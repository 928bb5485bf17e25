//! # u-mathkit
//!
//! Exact arithmetic, number theory, combinatorics and descriptive statistics.
//!
//! Integers stay exact: they are carried as arbitrary-precision
//! [`num_bigint::BigInt`] values and only turn into `f64` when a float
//! participates in the operation or the result is inherently fractional
//! (means, variances, roots).
//!
//! ## Modules
//!
//! - [`number`]: the mixed exact/float [`Number`] type
//! - [`elementary`]: constants, tolerant float comparison, trig and logs
//! - [`power`]: exponentiation by squaring, integer square root
//! - [`number_theory`]: gcd, lcm, Bézout coefficients, modular inverse
//! - [`combinatorics`]: factorials, k-permutations, k-combinations
//! - [`interpolation`]: linear interpolation and Bézier curves
//! - [`stats`]: mean, median, mode, variance, running statistics
//! - [`histogram`]: fixed-width histograms
//!
//! ## Design Philosophy
//!
//! - **Exact where possible**: integer inputs never lose precision to `f64`
//!   before they have to
//! - **Numerical stability**: Kahan summation for float accumulation,
//!   de Casteljau for Bézier evaluation
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod combinatorics;
pub mod elementary;
pub mod error;
pub mod histogram;
pub mod interpolation;
pub mod number;
pub mod number_theory;
pub mod power;
pub mod stats;

pub use error::{MathError, Result};
pub use number::Number;
