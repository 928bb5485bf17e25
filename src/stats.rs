//! Descriptive statistics over finite sequences of numbers.
//!
//! Every function accepts any `IntoIterator` whose items convert into
//! [`Number`]. This includes single-pass iterators. The input is
//! materialized in memory once, because sorting and grouping need random
//! access.
//!
//! An empty input yields `None` (or an empty `Vec` for [`mode`]). It is
//! never an error.
//!
//! # Algorithms
//!
//! - **Sums**: exact big-integer accumulation while every element is an
//!   integer. Once a float is present, Neumaier compensated summation
//!   keeps the error at O(ε) independent of n. Exact sums are divided
//!   in integer arithmetic before the result is projected to `f64`.
//! - **Variance**: population variance `E[X²] − (E[X])²`. Squares come
//!   from [`power`], so integer inputs have exact moment sums. The final
//!   float subtraction is still subject to catastrophic cancellation when
//!   `|mean|` is large relative to the spread.
//! - **Median**: sort, then take the middle element or the mean of the two
//!   middle elements.
//! - **Mode**: hash grouping by value. Returns every value that reaches
//!   the maximum occurrence count.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_integer::Integer;

use crate::number::Number;
use crate::power::power;

/// Multiplies all elements together.
///
/// The product is exact when every element is an integer.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_mathkit::number::Number;
/// use u_mathkit::stats::product;
/// assert_eq!(product([2, 3, 7]), Some(Number::from(42)));
/// assert_eq!(product(Vec::<i32>::new()), None);
/// ```
pub fn product<I>(data: I) -> Option<Number>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    data.into_iter().map(Into::into).reduce(|acc, x| acc * x)
}

/// Arithmetic mean.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_mathkit::stats::mean;
/// assert_eq!(mean([1, 2, 3]), Some(2.0));
/// assert_eq!(mean([0.5, 1.5]), Some(1.0));
/// ```
pub fn mean<I>(data: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    mean_of(&materialize(data))
}

/// Median: the middle element after sorting, or the mean of the two
/// middle elements for even-length input.
///
/// Sorting uses [`Number::total_cmp`], so NaN values sort last.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_mathkit::stats::median;
/// assert_eq!(median([3, 1, 2]), Some(2.0));
/// assert_eq!(median([1, 2, 3, 4, 5, -100]), Some(2.5));
/// ```
pub fn median<I>(data: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    let mut sorted = materialize(data);
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_unstable_by(Number::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2].to_f64())
    } else {
        let pair = [sorted[n / 2 - 1].clone(), sorted[n / 2].clone()];
        Some(divide(total(&pair), 2))
    }
}

/// Most frequent value(s).
///
/// Values are grouped by exact representation: `2` and `2.0` are distinct
/// and `0.0`/`-0.0` are the same. Every value that reaches the maximum
/// occurrence count is returned, even when that count is 1. The result is
/// ordered by first occurrence in the input.
///
/// # Complexity
/// Time: O(n) expected, Space: O(n)
///
/// # Returns
/// - An empty `Vec` if `data` is empty.
///
/// # Examples
/// ```
/// use u_mathkit::number::Number;
/// use u_mathkit::stats::mode;
/// assert_eq!(mode([1, 2, 3, 2, 3]), vec![Number::from(2), Number::from(3)]);
/// assert!(mode(Vec::<i32>::new()).is_empty());
/// ```
pub fn mode<I>(data: I) -> Vec<Number>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    let values = materialize(data);
    let mut groups: HashMap<GroupKey, (usize, usize)> = HashMap::new();
    for (index, value) in values.iter().enumerate() {
        groups.entry(GroupKey::from(value)).or_insert((index, 0)).1 += 1;
    }
    let Some(max_count) = groups.values().map(|&(_, count)| count).max() else {
        return Vec::new();
    };
    let mut winners: Vec<usize> = groups
        .values()
        .filter(|&&(_, count)| count == max_count)
        .map(|&(first, _)| first)
        .collect();
    winners.sort_unstable();
    winners.into_iter().map(|i| values[i].clone()).collect()
}

/// Population variance, `mean(x²) − mean(x)²`.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_mathkit::stats::variance;
/// assert_eq!(variance([1, 2, 3, 4, 5]), Some(2.0));
/// ```
pub fn variance<I>(data: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    let values = materialize(data);
    let m = mean_of(&values)?;
    let squares: Vec<Number> = values.into_iter().map(|x| power(x, 2)).collect();
    let mean_sq = mean_of(&squares)?;
    Some(mean_sq - m * m)
}

/// Population standard deviation, `sqrt(variance(data))`.
///
/// # Returns
/// - `None` if `data` is empty.
pub fn std_dev<I>(data: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    variance(data).map(f64::sqrt)
}

/// Smallest and largest element as floats.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_mathkit::stats::extent;
/// assert_eq!(extent([3, 1, 4, 1, 5]), Some((1.0, 5.0)));
/// ```
pub fn extent<I>(data: I) -> Option<(f64, f64)>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    let mut iter = data.into_iter().map(|x| x.into().to_f64());
    let first = iter.next()?;
    if first.is_nan() {
        return None;
    }
    iter.try_fold((first, first), |(lo, hi), x| {
        if x.is_nan() {
            None
        } else {
            Some((lo.min(x), hi.max(x)))
        }
    })
}

fn materialize<I>(data: I) -> Vec<Number>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    data.into_iter().map(Into::into).collect()
}

fn mean_of(values: &[Number]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(divide(total(values), values.len()))
}

/// `sum / n` as a float. Exact sums are divided in integer arithmetic
/// first, so a mean within `f64` range survives a sum beyond it.
fn divide(sum: Number, n: usize) -> f64 {
    match sum {
        Number::Int(sum) => {
            let (quotient, remainder) = sum.div_rem(&BigInt::from(n));
            Number::Int(quotient).to_f64() + Number::Int(remainder).to_f64() / n as f64
        }
        Number::Float(sum) => sum / n as f64,
    }
}

/// Exact sum for all-integer input, compensated float sum otherwise.
fn total(values: &[Number]) -> Number {
    let exact: Option<BigInt> = values.iter().map(Number::as_int).sum();
    match exact {
        Some(sum) => Number::Int(sum),
        None => {
            let floats: Vec<f64> = values.iter().map(Number::to_f64).collect();
            Number::Float(kahan_sum(&floats))
        }
    }
}

/// Hashable grouping key for [`mode`].
#[derive(Debug, PartialEq, Eq, Hash)]
enum GroupKey {
    Int(BigInt),
    Float(u64),
}

impl From<&Number> for GroupKey {
    fn from(value: &Number) -> Self {
        match value {
            Number::Int(i) => GroupKey::Int(i.clone()),
            // -0.0 == 0.0, so both must land in the same group.
            Number::Float(f) if *f == 0.0 => GroupKey::Float(0.0_f64.to_bits()),
            Number::Float(f) => GroupKey::Float(f.to_bits()),
        }
    }
}

// ---------------------------------------------------------------------------
// Kahan compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Streaming accumulator
// ---------------------------------------------------------------------------

/// Single-pass accumulator for mean and population variance.
///
/// Maintains the running weighted averages of `x` and `x²`:
/// `mean_{k+1} = (mean_k · k + x) / (k + 1)`, evaluated in the equivalent
/// form `mean_k + (x − mean_k) / (k + 1)` to avoid growing the running
/// product `mean_k · k`. Variance uses the same `E[X²] − (E[X])²`
/// definition as [`variance`], so both agree up to rounding.
///
/// # Examples
/// ```
/// use u_mathkit::stats::RunningStats;
/// let acc: RunningStats = [1, 2, 3, 4, 5].into_iter().collect();
/// assert_eq!(acc.count(), 5);
/// assert!((acc.mean().unwrap() - 3.0).abs() < 1e-15);
/// assert!((acc.variance().unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunningStats {
    count: u64,
    mean_acc: f64,
    mean_sq_acc: f64,
}

impl RunningStats {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: impl Into<Number>) {
        let value = value.into();
        let x = value.to_f64();
        let x_sq = power(value, 2).to_f64();
        self.count += 1;
        let n = self.count as f64;
        self.mean_acc += (x - self.mean_acc) / n;
        self.mean_sq_acc += (x_sq - self.mean_sq_acc) / n;
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean_acc)
    }

    /// Returns the running mean of squares, or `None` if empty.
    pub fn mean_of_squares(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean_sq_acc)
    }

    /// Returns the population variance, or `None` if empty.
    pub fn variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.mean_sq_acc - self.mean_acc * self.mean_acc)
    }

    /// Returns the population standard deviation, or `None` if empty.
    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Merges another accumulator into this one.
    ///
    /// The result equals feeding both sample streams into one accumulator,
    /// up to rounding.
    pub fn merge(&mut self, other: &RunningStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }
        let total = self.count + other.count;
        let weight = other.count as f64 / total as f64;
        self.mean_acc += (other.mean_acc - self.mean_acc) * weight;
        self.mean_sq_acc += (other.mean_sq_acc - self.mean_sq_acc) * weight;
        self.count = total;
    }
}

impl<T: Into<Number>> Extend<T> for RunningStats {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.update(x);
        }
    }
}

impl<T: Into<Number>> FromIterator<T> for RunningStats {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = RunningStats::new();
        acc.extend(iter);
        acc
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elementary::nearly_equal;
    use rand::{Rng, SeedableRng};

    const EMPTY: [i32; 0] = [];

    // --- product ---

    #[test]
    fn test_product_exact() {
        assert_eq!(product([1, 2, 3, 4, 5]), Some(Number::from(120)));
        let big = product(std::iter::repeat(10).take(30)).unwrap();
        assert_eq!(big, Number::Int(BigInt::from(10).pow(30)));
    }

    #[test]
    fn test_product_mixed() {
        assert_eq!(product([Number::from(4), Number::from(0.5)]), Some(Number::from(2.0)));
    }

    #[test]
    fn test_product_empty() {
        assert_eq!(product(EMPTY), None);
    }

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean([1, 2, 3]), Some(2.0));
        assert_eq!(mean([1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean([42]), Some(42.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(EMPTY), None);
    }

    #[test]
    fn test_mean_single_pass_source() {
        let once = (1..=100).map(|x| x * 2);
        assert_eq!(mean(once), Some(101.0));
    }

    #[test]
    fn test_mean_exact_for_large_integers() {
        // Left-to-right f64 accumulation rounds 2^53 + 1 back down to 2^53.
        let data = [1_i64 << 53, 1, 1];
        let exact = ((1_i64 << 53) + 2) as f64 / 3.0;
        let naive = (2f64.powi(53) + 1.0 + 1.0) / 3.0;
        assert_ne!(exact, naive);
        assert_eq!(mean(data), Some(exact));
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median([3, 1, 2]), Some(2.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median([1, 2, 3, 4, 5, -100]), Some(2.5));
        assert_eq!(median([4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_mixed_representations() {
        assert_eq!(median([Number::from(1), Number::from(2.5), Number::from(2)]), Some(2.0));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(EMPTY), None);
    }

    // --- mode ---

    #[test]
    fn test_mode_ties() {
        assert_eq!(mode([1, 2, 3, 2, 3]), vec![Number::from(2), Number::from(3)]);
    }

    #[test]
    fn test_mode_single_winner() {
        assert_eq!(mode([5, 1, 5, 2, 5]), vec![Number::from(5)]);
    }

    #[test]
    fn test_mode_all_distinct_returns_all() {
        assert_eq!(
            mode([3, 1, 2]),
            vec![Number::from(3), Number::from(1), Number::from(2)]
        );
    }

    #[test]
    fn test_mode_empty() {
        assert!(mode(EMPTY).is_empty());
    }

    #[test]
    fn test_mode_distinguishes_int_and_float() {
        let data = [Number::from(2), Number::from(2.0), Number::from(2.0)];
        assert_eq!(mode(data), vec![Number::from(2.0)]);
    }

    #[test]
    fn test_mode_signed_zero() {
        assert_eq!(mode([0.0, -0.0, 1.0]), vec![Number::from(0.0)]);
    }

    // --- variance / std_dev ---

    #[test]
    fn test_variance_basic() {
        assert_eq!(variance([1, 2, 3, 4, 5]), Some(2.0));
        let v = variance([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((v - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_variance_constant() {
        assert_eq!(variance([7; 50]), Some(0.0));
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(EMPTY), None);
        assert_eq!(std_dev(EMPTY), None);
    }

    #[test]
    fn test_std_dev() {
        assert!(nearly_equal(std_dev([1, 2, 3, 4, 5]).unwrap(), 1.4142135623730951));
    }

    // --- extent ---

    #[test]
    fn test_extent() {
        assert_eq!(extent([3.0, -1.0, 4.0]), Some((-1.0, 4.0)));
        assert_eq!(extent([7]), Some((7.0, 7.0)));
        assert_eq!(extent(EMPTY), None);
        assert_eq!(extent([1.0, f64::NAN]), None);
        assert_eq!(extent([f64::NAN, 1.0]), None);
    }

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_tenths() {
        // Ten copies of 0.1 accumulate to 0.9999999999999999 naively.
        assert_eq!(kahan_sum(&[0.1; 10]), 1.0);
    }

    #[test]
    fn test_mean_compensates_mixed_input() {
        // A float forces the compensated path; a naive sum drops the 1.
        let data = [Number::from(1e16), Number::from(1), Number::from(-1e16)];
        let m = mean(data).unwrap();
        assert!((m - 1.0 / 3.0).abs() < 1e-15, "got {m}");
    }

    #[test]
    fn test_mean_and_median_of_integers_beyond_f64() {
        let big = Number::from(BigInt::from(10).pow(308));
        let pair = [big.clone(), big];
        assert!(nearly_equal(mean(pair.clone()).unwrap(), 1e308));
        assert!(nearly_equal(median(pair).unwrap(), 1e308));
    }

    #[test]
    fn test_mean_negative_integers() {
        assert_eq!(mean([-1, -2]), Some(-1.5));
        assert_eq!(median([-7, 2, -4, 9]), Some(-1.0));
    }

    // --- RunningStats ---

    #[test]
    fn test_running_empty() {
        let acc = RunningStats::new();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.mean_of_squares(), None);
        assert_eq!(acc.variance(), None);
        assert_eq!(acc.std_dev(), None);
    }

    #[test]
    fn test_running_single() {
        let mut acc = RunningStats::new();
        acc.update(5);
        assert_eq!(acc.mean(), Some(5.0));
        assert_eq!(acc.mean_of_squares(), Some(25.0));
        assert_eq!(acc.variance(), Some(0.0));
    }

    #[test]
    fn test_running_matches_batch() {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
        let data: Vec<f64> = (0..500).map(|_| rng.random_range(-1000.0..1000.0)).collect();
        let acc: RunningStats = data.iter().copied().collect();
        let batch_mean = mean(data.iter().copied()).unwrap();
        let batch_var = variance(data.iter().copied()).unwrap();
        assert!((acc.mean().unwrap() - batch_mean).abs() < 1e-9);
        assert!((acc.variance().unwrap() - batch_var).abs() < 1e-6 * batch_var);
    }

    #[test]
    fn test_running_merge() {
        let data_a = [1, 2, 3, 4];
        let data_b = [5, 6, 7, 8];

        let mut acc_a: RunningStats = data_a.into_iter().collect();
        let acc_b: RunningStats = data_b.into_iter().collect();
        acc_a.merge(&acc_b);

        let all = data_a.into_iter().chain(data_b);
        assert_eq!(acc_a.count(), 8);
        assert!((acc_a.mean().unwrap() - 4.5).abs() < 1e-14);
        assert!((acc_a.variance().unwrap() - variance(all).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_running_merge_with_empty() {
        let mut acc: RunningStats = [1, 2, 3].into_iter().collect();
        acc.merge(&RunningStats::new());
        assert_eq!(acc.count(), 3);

        let mut empty = RunningStats::new();
        empty.merge(&acc);
        assert_eq!(empty.mean(), acc.mean());
    }
}
