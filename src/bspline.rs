//! Rational B-spline curves.
//!
//! Curve points come from the Cox–de Boor basis functions, weighted by the
//! control point weights and normalized. The construction trace uses plain
//! de Boor blending of the active control points instead; for curves with
//! uniform weights both strategies agree.

use crate::{
    trace::Recorder, Clamping, ConstructionTrace, ControlPoint, CurveError,
    CurveResult, Point2,
};
use alloc::vec::Vec;
use lerp::Lerp;
use num_traits::Float;
use smallvec::SmallVec;

type Scratch<T> = SmallVec<[T; 8]>;

/// Options for [`bspline_with()`].
///
/// All fields are optional; `None` selects the default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BsplineOptions<T> {
    /// How close a parameter must be to a clamped boundary knot to return
    /// the boundary control point directly.
    ///
    /// Default: `T::epsilon()`.
    pub endpoint_epsilon: Option<T>,
}

impl<T> Default for BsplineOptions<T> {
    fn default() -> Self {
        Self {
            endpoint_epsilon: None,
        }
    }
}

impl<T: Float> BsplineOptions<T> {
    pub fn with_endpoint_epsilon(mut self, epsilon: T) -> Self {
        self.endpoint_epsilon = Some(epsilon);
        self
    }

    fn endpoint_epsilon(&self) -> T {
        self.endpoint_epsilon.unwrap_or_else(T::epsilon)
    }
}

/// Evaluates the rational B-spline of `degree` over `knots` at `u`.
///
/// The curve is defined on `[knots[degree], knots[points.len()]]`. On a
/// clamped end the boundary control point is returned directly, since the
/// basis functions all vanish exactly at a clamped boundary knot.
///
/// # Errors
/// * [`CurveError::ZeroDegree`], [`CurveError::TooFewControlPoints`] or
///   [`CurveError::InvalidKnotLength`] when the inputs do not describe a
///   B-spline (and `NonMonotonicKnots` with the `monotonic_check`
///   feature).
/// * [`CurveError::OutOfDomain`] if `u` lies outside the curve's domain.
/// * [`CurveError::Degenerate`] if the weighted basis sums to zero.
///
/// # Examples
/// ```
/// use rational_curves::{bspline, knot_vector, Clamping, ControlPoint};
///
/// let points = [
///     ControlPoint::unweighted(0.0, 0.0),
///     ControlPoint::unweighted(1.0, 2.0),
///     ControlPoint::unweighted(3.0, 2.0),
///     ControlPoint::unweighted(4.0, 0.0),
/// ];
/// let knots = knot_vector(points.len(), 3, Clamping::BOTH).unwrap();
///
/// assert_eq!(bspline(&points, 3, &knots, 0.0).unwrap(), points[0].position());
/// assert_eq!(bspline(&points, 3, &knots, 1.0).unwrap(), points[3].position());
/// ```
pub fn bspline<T: Float>(
    points: &[ControlPoint<T>],
    degree: usize,
    knots: &[T],
    u: T,
) -> CurveResult<Point2<T>> {
    bspline_with(points, degree, knots, u, &BsplineOptions::default())
}

/// Like [`bspline()`] with explicit [`BsplineOptions`].
pub fn bspline_with<T: Float>(
    points: &[ControlPoint<T>],
    degree: usize,
    knots: &[T],
    u: T,
    options: &BsplineOptions<T>,
) -> CurveResult<Point2<T>> {
    validate(points.len(), degree, knots)?;
    check_domain(points.len(), degree, knots, u)?;

    let clamping = Clamping::detect(knots, degree);
    let epsilon = options.endpoint_epsilon();
    if clamping.start && (u - knots[0]).abs() < epsilon {
        return Ok(points[0].position());
    }
    if clamping.end && (u - knots[knots.len() - 1]).abs() < epsilon {
        return Ok(points[points.len() - 1].position());
    }

    let span = find_span(knots, degree, points.len(), u);
    let basis = basis_values(knots, degree, span, u);
    let active = &points[span - degree..=span];

    let weighted: Scratch<T> = basis
        .iter()
        .zip(active)
        .map(|(&n, point)| n * point.weight)
        .collect();
    let denominator = weighted.iter().fold(T::zero(), |sum, &w| sum + w);
    if denominator == T::zero() || !denominator.is_finite() {
        return Err(CurveError::Degenerate);
    }

    Ok(weighted.iter().zip(active).fold(
        Point2::new(T::zero(), T::zero()),
        |sum, (&w, point)| {
            let factor = w / denominator;
            Point2::new(sum.x + factor * point.x, sum.y + factor * point.y)
        },
    ))
}

/// Records the de Boor construction pyramid at `u`.
///
/// The first level holds the `degree + 1` control points active at `u`,
/// the last the evaluated point. Weights are ignored.
///
/// # Errors
/// As [`bspline()`]; a domain of zero length is reported as
/// [`CurveError::Degenerate`].
pub fn bspline_trace<T: Float>(
    points: &[ControlPoint<T>],
    degree: usize,
    knots: &[T],
    u: T,
) -> CurveResult<ConstructionTrace<T>> {
    let mut trace = ConstructionTrace::new();
    de_boor_with(points, degree, knots, u, &mut trace)?;
    Ok(trace)
}

/// Plain de Boor at `u`, reporting each level to `recorder`.
///
/// # Errors
/// As [`bspline_trace()`].
pub fn de_boor_with<T, R>(
    points: &[ControlPoint<T>],
    degree: usize,
    knots: &[T],
    u: T,
    recorder: &mut R,
) -> CurveResult<Point2<T>>
where
    T: Float,
    R: Recorder<T>,
{
    validate(points.len(), degree, knots)?;
    check_domain(points.len(), degree, knots, u)?;
    de_boor(points, degree, knots, u, recorder)
}

/// Blends the active points in place. Inputs must be validated.
fn de_boor<T, R>(
    points: &[ControlPoint<T>],
    degree: usize,
    knots: &[T],
    u: T,
    recorder: &mut R,
) -> CurveResult<Point2<T>>
where
    T: Float,
    R: Recorder<T>,
{
    let mut span = find_span(knots, degree, points.len(), u);
    // Only the first span can be empty here; blend in the next non-empty
    // one, which also contains `u`.
    while span + 1 < points.len() && knots[span] == knots[span + 1] {
        span += 1;
    }
    let first = span - degree;

    let mut level: Scratch<Point2<T>> = points[first..=span]
        .iter()
        .map(ControlPoint::position)
        .collect();
    recorder.record(level.iter().copied());

    for r in 1..=degree {
        for i in 0..=degree - r {
            let lower = knots[first + r + i];
            let upper = knots[span + i + 1];
            if upper - lower <= T::zero() {
                return Err(CurveError::Degenerate);
            }
            let alpha = (u - lower) / (upper - lower);
            level[i] = level[i].lerp(level[i + 1], alpha);
        }
        level.truncate(degree - r + 1);
        recorder.record(level.iter().copied());
    }

    Ok(level[0])
}

/// Finds the knot span for `u`: the smallest `span >= degree` with
/// `u <= knots[span + 1]`, capped at `count - 1`.
///
/// Ties go to the earlier span, so a parameter sitting exactly on an
/// interior knot belongs to the span that ends there.
///
/// `knots` must have at least `count + 1` entries.
pub fn find_span<T: Float>(
    knots: &[T],
    degree: usize,
    count: usize,
    u: T,
) -> usize {
    (degree..count.saturating_sub(1))
        .find(|&span| u <= knots[span + 1])
        .unwrap_or(count.saturating_sub(1))
}

/// Locates the span of `u` and returns it together with the `degree + 1`
/// basis function values `N[span - degree..=span]` at `u`.
///
/// Anywhere inside the domain of the curve, its end knots included, the
/// values sum to one.
///
/// # Errors
/// The same input checks as [`bspline()`], including the domain of `u`.
pub fn basis_functions<T: Float>(
    count: usize,
    degree: usize,
    knots: &[T],
    u: T,
) -> CurveResult<(usize, Vec<T>)> {
    validate(count, degree, knots)?;
    check_domain(count, degree, knots, u)?;

    let span = find_span(knots, degree, count, u);
    Ok((span, basis_values(knots, degree, span, u).into_vec()))
}

/// Cox–de Boor, bottom-up.
///
/// Row `k` of the triangle holds `N[first + j, k]` for
/// `j = 0..=2 * degree - k`, starting from the degree-zero indicator
/// functions. A term only contributes when its knot interval has positive
/// length.
///
/// The indicators are half-open on the right. When `u` sits on the right
/// end of `span` and no later interval in the triangle contains it, as on a
/// clamped end knot, `span` is closed on the right instead.
fn basis_values<T: Float>(
    knots: &[T],
    degree: usize,
    span: usize,
    u: T,
) -> Scratch<T> {
    let first = span - degree;

    let mut row: Scratch<T> = (first..=span + degree)
        .map(|i| {
            if knots[i] <= u && u < knots[i + 1] {
                T::one()
            } else {
                T::zero()
            }
        })
        .collect();

    if row.iter().all(|&n| n == T::zero())
        && knots[span] < knots[span + 1]
        && u == knots[span + 1]
    {
        row[degree] = T::one();
    }

    for k in 1..=degree {
        for j in 0..=2 * degree - k {
            let i = first + j;
            let mut value = T::zero();

            let left = knots[i + k] - knots[i];
            if left > T::zero() {
                value = value + (u - knots[i]) / left * row[j];
            }

            let right = knots[i + k + 1] - knots[i + 1];
            if right > T::zero() {
                value = value + (knots[i + k + 1] - u) / right * row[j + 1];
            }

            row[j] = value;
        }
        row.truncate(2 * degree - k + 1);
    }

    row.truncate(degree + 1);
    row
}

pub(crate) fn validate<T: Float>(
    count: usize,
    degree: usize,
    knots: &[T],
) -> CurveResult<()> {
    if degree == 0 {
        return Err(CurveError::ZeroDegree);
    }
    if count <= degree {
        return Err(CurveError::TooFewControlPoints {
            degree,
            min: degree + 1,
            actual: count,
        });
    }
    if knots.len() != count + degree + 1 {
        return Err(CurveError::InvalidKnotLength {
            expected: count + degree + 1,
            actual: knots.len(),
        });
    }

    #[cfg(feature = "monotonic_check")]
    if let Some(index) = crate::knot_vector::first_decreasing(knots) {
        return Err(CurveError::NonMonotonicKnots { index });
    }

    Ok(())
}

fn check_domain<T: Float>(
    count: usize,
    degree: usize,
    knots: &[T],
    u: T,
) -> CurveResult<()> {
    let (start, end) = (knots[degree], knots[count]);
    if u >= start && u <= end {
        Ok(())
    } else {
        Err(CurveError::OutOfDomain {
            parameter: u.to_f64().unwrap_or(f64::NAN),
            start: start.to_f64().unwrap_or(f64::NAN),
            end: end.to_f64().unwrap_or(f64::NAN),
        })
    }
}
