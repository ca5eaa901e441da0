//! Rational Bézier curves.
//!
//! Evaluation uses the weighted form of de Casteljau's algorithm: every
//! interpolation step blends two neighbouring points by their weights and
//! hands the blended weight down to the next level. This makes the weights
//! shape the curve at every level rather than only in a final division.

use crate::{
    trace::Recorder, ConstructionTrace, ControlPoint, CurveError, CurveResult,
    Point2,
};
use num_traits::Float;
use smallvec::SmallVec;

/// Evaluates the rational Bézier curve defined by `points` at `t`.
///
/// All points take part in every evaluation, so the degree of the curve is
/// `points.len() - 1`. Any real `t` is accepted; `[0, 1]` covers the curve
/// from the first to the last control point.
///
/// # Errors
/// [`CurveError::EmptyPolygon`] if `points` is empty and
/// [`CurveError::Degenerate`] if a combined weight becomes zero, which only
/// happens with non-positive weights.
///
/// # Examples
/// ```
/// use rational_curves::{rational_bezier, ControlPoint, Point2};
///
/// let points = [
///     ControlPoint::new(0.0, 0.0, 1.0),
///     ControlPoint::new(1.0, 2.0, 1.0),
///     ControlPoint::new(2.0, 0.0, 1.0),
/// ];
///
/// assert_eq!(rational_bezier(&points, 0.5), Ok(Point2::new(1.0, 1.0)));
/// ```
pub fn rational_bezier<T: Float>(
    points: &[ControlPoint<T>],
    t: T,
) -> CurveResult<Point2<T>> {
    de_casteljau_with(points, t, &mut ())
}

/// Like [`rational_bezier()`] but returns every construction level, from
/// the control polygon down to the evaluated point.
pub fn rational_bezier_trace<T: Float>(
    points: &[ControlPoint<T>],
    t: T,
) -> CurveResult<ConstructionTrace<T>> {
    let mut trace = ConstructionTrace::new();
    de_casteljau_with(points, t, &mut trace)?;
    Ok(trace)
}

/// Weighted de Casteljau, reporting each level to `recorder`.
///
/// [`rational_bezier()`] and [`rational_bezier_trace()`] are this function
/// with the no-op and the collecting recorder respectively.
///
/// Levels are built in place: entry `i` of the next level only needs entries
/// `i` and `i + 1` of the current one.
pub fn de_casteljau_with<T, R>(
    points: &[ControlPoint<T>],
    t: T,
    recorder: &mut R,
) -> CurveResult<Point2<T>>
where
    T: Float,
    R: Recorder<T>,
{
    if points.is_empty() {
        return Err(CurveError::EmptyPolygon);
    }

    let mut level: SmallVec<[ControlPoint<T>; 8]> =
        points.iter().copied().collect();
    recorder.record(level.iter().map(ControlPoint::position));

    for len in (1..points.len()).rev() {
        for i in 0..len {
            level[i] = blend(&level[i], &level[i + 1], t)?;
        }
        level.truncate(len);
        recorder.record(level.iter().map(ControlPoint::position));
    }

    Ok(level[0].position())
}

#[inline]
fn blend<T: Float>(
    a: &ControlPoint<T>,
    b: &ControlPoint<T>,
    t: T,
) -> CurveResult<ControlPoint<T>> {
    let s = T::one() - t;
    let weight = s * a.weight + t * b.weight;
    if weight == T::zero() || !weight.is_finite() {
        return Err(CurveError::Degenerate);
    }

    Ok(ControlPoint::new(
        (s * a.weight * a.x + t * b.weight * b.x) / weight,
        (s * a.weight * a.y + t * b.weight * b.y) / weight,
        weight,
    ))
}
