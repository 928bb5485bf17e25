//! Fixed-width histograms over sequences of numbers.
//!
//! The range `[min, max]` of the input is split into `bucket_count`
//! intervals of equal width. Every bucket is half-open `[lo, hi)` except
//! the last, which is closed `[lo, max]` so the maximum is counted.
//! Only non-empty buckets are emitted, in ascending order.

use std::fmt;

use crate::error::{MathError, Result};
use crate::number::Number;
use crate::stats::extent;

/// Bucket count used when the caller has no preference.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// One histogram interval and the number of elements that fell into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    /// Inclusive lower bound.
    pub lo: f64,
    /// Upper bound; exclusive unless `closed`.
    pub hi: f64,
    /// `true` for the last bucket, whose upper bound is inclusive.
    pub closed: bool,
    /// Number of elements in the interval.
    pub count: usize,
}

impl Bucket {
    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns `true` if `x` lies inside the interval.
    pub fn contains(&self, x: f64) -> bool {
        if self.closed {
            self.lo <= x && x <= self.hi
        } else {
            self.lo <= x && x < self.hi
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed { ']' } else { ')' };
        write!(f, "[{}, {}{}: {}", self.lo, self.hi, close, self.count)
    }
}

/// Builds a histogram with `bucket_count` equal-width buckets.
///
/// # Algorithm
/// With `w = (max − min) / bucket_count`, element `e` goes to bucket
/// `⌊(e − min) / w⌋`, clamped to `bucket_count − 1` so that `e = max`
/// lands in the last bucket. If every element is equal, a single closed
/// bucket `[min, min]` holds all of them. When `max − min` exceeds the
/// `f64` range the computation runs on halved values, so bounds stay
/// finite for any finite input.
///
/// # Complexity
/// Time: O(n + bucket_count), Space: O(n + bucket_count)
///
/// # Returns
/// - `Ok(None)` if `data` is empty.
///
/// # Errors
/// - [`MathError::InvalidBucketCount`] if `bucket_count == 0`.
/// - [`MathError::Domain`] if `data` contains NaN, an infinity, or an
///   integer too large to convert to `f64`.
///
/// # Examples
/// ```
/// use u_mathkit::histogram::{histogram, DEFAULT_BUCKET_COUNT};
/// let buckets = histogram(1..=11, DEFAULT_BUCKET_COUNT).unwrap().unwrap();
/// assert_eq!((buckets[0].lo, buckets[0].hi, buckets[0].count), (1.0, 2.0, 1));
/// assert_eq!(buckets.len(), 10);
/// assert!(buckets[9].closed);
/// assert_eq!(buckets[9].count, 2);
/// ```
pub fn histogram<I>(data: I, bucket_count: usize) -> Result<Option<Vec<Bucket>>>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    if bucket_count == 0 {
        return Err(MathError::InvalidBucketCount(bucket_count));
    }
    let values = finite_values(data)?;
    if values.is_empty() {
        return Ok(None);
    }
    let Some((min, max)) = extent(values.iter().copied()) else {
        return Ok(None);
    };

    if min == max {
        tracing::debug!(value = min, count = values.len(), "degenerate histogram extent");
        return Ok(Some(vec![Bucket {
            lo: min,
            hi: max,
            closed: true,
            count: values.len(),
        }]));
    }

    // Work on halved values when `max - min` overflows, so the width and
    // every bucket bound stay finite.
    let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
    let origin = min * scale;
    let width = (max * scale - origin) / bucket_count as f64;
    let last = bucket_count - 1;
    let mut counts = vec![0_usize; bucket_count];
    for &e in &values {
        let index = ((e * scale - origin) / width).floor() as usize;
        counts[index.min(last)] += 1;
    }
    let bound = |i: usize| (origin + i as f64 * width) / scale;

    let buckets = counts
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .map(|(i, count)| {
            let hi = if i == last { max } else { bound(i + 1).min(max) };
            Bucket {
                lo: bound(i),
                hi,
                closed: i == last,
                count,
            }
        })
        .collect();
    Ok(Some(buckets))
}

/// Projects every element to `f64`, rejecting values that have no finite
/// float image.
fn finite_values<I>(data: I) -> Result<Vec<f64>>
where
    I: IntoIterator,
    I::Item: Into<Number>,
{
    data.into_iter()
        .map(|x| {
            let x = x.into();
            let value = x.to_f64();
            if value.is_finite() {
                return Ok(value);
            }
            let reason = match x {
                Number::Int(i) => format!("integer of {} bits exceeds f64 range", i.bits()),
                Number::Float(f) => format!("cannot bucket non-finite value {f}"),
            };
            Err(MathError::domain("histogram", reason))
        })
        .collect()
}

/// Applies `key` to every element, then builds a [`histogram`] of the keys.
///
/// # Examples
/// ```
/// use u_mathkit::histogram::histogram_by;
/// let words = ["a", "to", "the", "zebra", "of"];
/// let buckets = histogram_by(words, |w| w.len(), 4).unwrap().unwrap();
/// assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 5);
/// ```
pub fn histogram_by<I, F, K>(data: I, key: F, bucket_count: usize) -> Result<Option<Vec<Bucket>>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> K,
    K: Into<Number>,
{
    histogram(data.into_iter().map(key), bucket_count)
}
