//! Linear interpolation and Bézier curves over 2-D points.
//!
//! # Algorithm
//! Bézier curves are evaluated with de Casteljau's algorithm: repeatedly
//! interpolate consecutive control points at parameter `t` until a single
//! point remains. Numerically stable for all `t ∈ [0, 1]`.
//!
//! Reference: Farin (2002), *Curves and Surfaces for CAGD*, 5th ed., §4.2.

use crate::error::{MathError, Result};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Returns `p0 + t·(p1 − p0)` componentwise.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate along the line.
///
/// # Examples
/// ```
/// use u_mathkit::interpolation::{linear_interpolation, Point};
/// let p = linear_interpolation(0.25, Point::new(0.0, 0.0), Point::new(4.0, 8.0));
/// assert_eq!(p, Point::new(1.0, 2.0));
/// ```
pub fn linear_interpolation(t: f64, p0: Point, p1: Point) -> Point {
    Point {
        x: p0.x + t * (p1.x - p0.x),
        y: p0.y + t * (p1.y - p0.y),
    }
}

/// Evaluates the Bézier curve with the given control points at `t`.
///
/// The curve has degree `points.len() − 1`. A single control point is a
/// constant curve.
///
/// # Complexity
/// Time: O(n²), Space: O(n)
///
/// # Errors
/// [`MathError::EmptyInput`] if `points` is empty.
///
/// # Examples
/// ```
/// use u_mathkit::interpolation::{bezier_curve, Point};
/// let ctrl = [Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0)];
/// assert_eq!(bezier_curve(0.5, &ctrl).unwrap(), Point::new(1.0, 1.0));
/// ```
pub fn bezier_curve(t: f64, points: &[Point]) -> Result<Point> {
    if points.is_empty() {
        return Err(MathError::EmptyInput {
            function: "bezier_curve",
        });
    }
    let mut work = points.to_vec();
    for remaining in (1..work.len()).rev() {
        for i in 0..remaining {
            work[i] = linear_interpolation(t, work[i], work[i + 1]);
        }
    }
    Ok(work[0])
}
