//! Knot vector construction and inspection.

use crate::{CurveError, CurveResult};
use alloc::vec::Vec;
use num_traits::Float;

/// Which ends of a knot vector repeat their boundary value `degree + 1`
/// times.
///
/// A curve touches its first (last) control point exactly when its knot
/// vector is clamped at the start (end).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clamping {
    pub start: bool,
    pub end: bool,
}

impl Clamping {
    pub const NONE: Self = Self::new(false, false);
    pub const START: Self = Self::new(true, false);
    pub const END: Self = Self::new(false, true);
    pub const BOTH: Self = Self::new(true, true);

    pub const fn new(start: bool, end: bool) -> Self {
        Self { start, end }
    }

    /// Reads the clamping off an existing knot vector.
    ///
    /// An end counts as clamped when its first (last) `degree + 1` knots
    /// are equal. Knot vectors shorter than `degree + 1` are not clamped.
    pub fn detect<T: Float>(knots: &[T], degree: usize) -> Self {
        let multiplicity = degree + 1;
        if knots.len() < multiplicity {
            return Self::NONE;
        }

        let head = &knots[..multiplicity];
        let tail = &knots[knots.len() - multiplicity..];

        Self {
            start: head.iter().all(|&knot| knot == head[0]),
            end: tail.iter().all(|&knot| knot == tail[multiplicity - 1]),
        }
    }
}

/// Builds a knot vector normalized to `[0, 1]` for `count` control points
/// of the given `degree`.
///
/// With `n = count - 1` and `p = degree` the result has `n + p + 2` knots:
///
/// * Clamped at both ends: `p + 1` zeros, the interior knots
///   `i / (n - p + 1)` for `i = 1..=n - p`, then `p + 1` ones.
/// * Clamped at the start: `p + 1` zeros, then `i / (n + 1)` for
///   `i = 1..=n + 1`.
/// * Clamped at the end: `i / (n + 1)` for `i = 0..=n`, then `p + 1` ones.
/// * Unclamped: `i / m` for `i = 0..=m` with `m = n + p + 1`.
///
/// The single-end variants leave the other end uniform, so such a curve
/// does not reach the control point at its unclamped end.
///
/// When clamping both ends of a curve with `count <= degree` no interior
/// knots are generated and the result is shorter than `count + degree + 1`.
/// Such a curve cannot be evaluated as a B-spline anyway.
///
/// # Errors
/// [`CurveError::EmptyPolygon`] if `count` is zero and
/// [`CurveError::ZeroDegree`] if `degree` is zero.
///
/// # Examples
/// ```
/// use rational_curves::{knot_vector, Clamping};
///
/// let knots = knot_vector::<f64>(4, 3, Clamping::BOTH).unwrap();
/// assert_eq!(knots, [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
/// ```
pub fn knot_vector<T: Float>(
    count: usize,
    degree: usize,
    clamping: Clamping,
) -> CurveResult<Vec<T>> {
    if count == 0 {
        return Err(CurveError::EmptyPolygon);
    }
    if degree == 0 {
        return Err(CurveError::ZeroDegree);
    }

    let n = count - 1;
    let p = degree;
    let mut knots = Vec::with_capacity(n + p + 2);

    match (clamping.start, clamping.end) {
        (true, true) => {
            knots.extend((0..=p).map(|_| T::zero()));
            // n - p + 1 == count - p
            let segments = count.saturating_sub(p);
            knots.extend((1..segments).map(|i| ratio::<T>(i, segments)));
            knots.extend((0..=p).map(|_| T::one()));
        }
        (true, false) => {
            knots.extend((0..=p).map(|_| T::zero()));
            knots.extend((1..=n + 1).map(|i| ratio::<T>(i, n + 1)));
        }
        (false, true) => {
            knots.extend((0..=n).map(|i| ratio::<T>(i, n + 1)));
            knots.extend((0..=p).map(|_| T::one()));
        }
        (false, false) => {
            let m = n + p + 1;
            knots.extend((0..=m).map(|i| ratio::<T>(i, m)));
        }
    }

    Ok(knots)
}

// Every usize is representable (if rounded) as f32/f64.
#[inline]
fn ratio<T: Float>(numerator: usize, denominator: usize) -> T {
    let cast = |n: usize| T::from(n).unwrap_or_else(T::nan);
    cast(numerator) / cast(denominator)
}

/// Returns the index of the first knot that is smaller than its
/// predecessor.
#[cfg(feature = "monotonic_check")]
pub(crate) fn first_decreasing<T: Float>(knots: &[T]) -> Option<usize> {
    knots
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}
