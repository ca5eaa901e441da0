//! Trait-based curve evaluation.
//!
//! This module provides the `Curve` trait which lets callers such as an
//! editor's drawing loop treat Bézier and B-spline curves alike.

use crate::{
    bspline::validate, bspline_trace, bspline_with, rational_bezier,
    rational_bezier_trace, BsplineOptions, Clamping, ConstructionTrace,
    ControlPoint, CurveError, CurveResult, Point2,
};
use alloc::vec::Vec;
use num_traits::Float;

/// A parametric curve on the plane.
pub trait Curve<T: Float> {
    /// Evaluates the curve at parameter `u`.
    fn point(&self, u: T) -> CurveResult<Point2<T>>;

    /// Evaluates the curve at `u`, returning every construction level.
    fn trace(&self, u: T) -> CurveResult<ConstructionTrace<T>>;

    /// The parameter range to sample when drawing the curve.
    fn domain(&self) -> (T, T);

    /// Evaluates `steps + 1` evenly spaced parameters across
    /// [`domain()`](Curve::domain).
    ///
    /// Parameters the curve is not defined at are skipped, so the result
    /// may hold fewer than `steps + 1` points. Any other error is returned.
    fn sample(&self, steps: usize) -> CurveResult<Vec<Point2<T>>> {
        let (start, end) = self.domain();
        let steps = steps.max(1);
        let scale = T::from(steps).unwrap_or_else(T::one);

        let mut polyline = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let step = T::from(i).unwrap_or_else(T::zero);
            match self.point(start + step / scale * (end - start)) {
                Ok(point) => polyline.push(point),
                Err(CurveError::OutOfDomain { .. }) => {}
                Err(error) => return Err(error),
            }
        }
        Ok(polyline)
    }
}

/// A rational Bézier curve over a borrowed control polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RationalBezier<'a, T> {
    points: &'a [ControlPoint<T>],
}

impl<'a, T: Float> RationalBezier<'a, T> {
    pub fn new(points: &'a [ControlPoint<T>]) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::EmptyPolygon);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &'a [ControlPoint<T>] {
        self.points
    }

    /// The curve's degree, one less than the number of control points.
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }
}

impl<T: Float> Curve<T> for RationalBezier<'_, T> {
    fn point(&self, t: T) -> CurveResult<Point2<T>> {
        rational_bezier(self.points, t)
    }

    fn trace(&self, t: T) -> CurveResult<ConstructionTrace<T>> {
        rational_bezier_trace(self.points, t)
    }

    fn domain(&self) -> (T, T) {
        (T::zero(), T::one())
    }
}

/// A rational B-spline over borrowed control points and knots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RationalBspline<'a, T> {
    points: &'a [ControlPoint<T>],
    degree: usize,
    knots: &'a [T],
    options: BsplineOptions<T>,
}

impl<'a, T: Float> RationalBspline<'a, T> {
    /// # Errors
    /// The input checks of [`bspline()`](crate::bspline()).
    pub fn new(
        points: &'a [ControlPoint<T>],
        degree: usize,
        knots: &'a [T],
    ) -> CurveResult<Self> {
        validate(points.len(), degree, knots)?;
        Ok(Self {
            points,
            degree,
            knots,
            options: BsplineOptions::default(),
        })
    }

    pub fn with_options(mut self, options: BsplineOptions<T>) -> Self {
        self.options = options;
        self
    }

    pub fn points(&self) -> &'a [ControlPoint<T>] {
        self.points
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &'a [T] {
        self.knots
    }

    pub fn clamping(&self) -> Clamping {
        Clamping::detect(self.knots, self.degree)
    }

    /// The range `[knots[degree], knots[count]]` the curve is defined on.
    pub fn valid_range(&self) -> (T, T) {
        (self.knots[self.degree], self.knots[self.points.len()])
    }

    /// The curve point at each knot value, paired with the knot's index.
    ///
    /// On a clamped end the repeated interior copies of the boundary knot
    /// (indices `1..degree` at the start, `len - degree - 1..len - 1` at
    /// the end) are left out. So are knots outside the valid range.
    pub fn knot_points(&self) -> CurveResult<Vec<(usize, Point2<T>)>> {
        let clamping = self.clamping();
        let len = self.knots.len();
        let repeated = |i: usize| {
            (clamping.start && i > 0 && i < self.degree)
                || (clamping.end && i < len - 1 && i + self.degree + 2 > len)
        };

        let mut points = Vec::with_capacity(len);
        for (i, &knot) in self.knots.iter().enumerate() {
            if repeated(i) {
                continue;
            }
            match self.point(knot) {
                Ok(point) => points.push((i, point)),
                Err(CurveError::OutOfDomain { .. }) => {}
                Err(error) => return Err(error),
            }
        }
        Ok(points)
    }
}

impl<T: Float> Curve<T> for RationalBspline<'_, T> {
    fn point(&self, u: T) -> CurveResult<Point2<T>> {
        bspline_with(self.points, self.degree, self.knots, u, &self.options)
    }

    fn trace(&self, u: T) -> CurveResult<ConstructionTrace<T>> {
        bspline_trace(self.points, self.degree, self.knots, u)
    }

    /// The full knot range, `[knots[0], knots[last]]`.
    fn domain(&self) -> (T, T) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knot_vector;
    use alloc::vec;

    fn polygon() -> Vec<ControlPoint<f64>> {
        vec![
            ControlPoint::unweighted(0.0, 0.0),
            ControlPoint::new(1.0, 2.0, 2.0),
            ControlPoint::unweighted(3.0, 2.0),
            ControlPoint::new(4.0, 0.0, 0.5),
            ControlPoint::unweighted(6.0, 1.0),
        ]
    }

    #[test]
    fn bezier_sample_hits_endpoints() {
        let points = polygon();
        let curve = RationalBezier::new(&points).unwrap();
        let polyline = curve.sample(10).unwrap();

        assert_eq!(curve.degree(), 4);
        assert_eq!(polyline.len(), 11);
        assert_eq!(polyline[0], points[0].position());
        assert_eq!(polyline[10], points[4].position());
    }

    #[test]
    fn empty_bezier_is_rejected() {
        let points: Vec<ControlPoint<f64>> = Vec::new();
        assert_eq!(RationalBezier::new(&points), Err(CurveError::EmptyPolygon));
    }

    #[test]
    fn bspline_sample_skips_undefined_parameters() {
        let points = polygon();
        let knots = knot_vector::<f64>(points.len(), 2, Clamping::END).unwrap();
        let curve = RationalBspline::new(&points, 2, &knots).unwrap();

        // Valid range starts at knots[2] = 0.4 of [0, 1].
        let (start, end) = curve.valid_range();
        assert_eq!((start, end), (0.4, 1.0));

        let polyline = curve.sample(10).unwrap();
        assert_eq!(polyline.len(), 7);
        assert_eq!(polyline[6], points[4].position());
    }

    #[test]
    fn knot_points_skip_repeated_clamped_knots() {
        let points = polygon();
        let knots = knot_vector::<f64>(points.len(), 3, Clamping::BOTH).unwrap();
        let curve = RationalBspline::new(&points, 3, &knots).unwrap();

        // knots = [0, 0, 0, 0, 0.5, 1, 1, 1, 1]
        let indices: Vec<usize> = curve
            .knot_points()
            .unwrap()
            .iter()
            .map(|&(i, _)| i)
            .collect();
        assert_eq!(indices, [0, 3, 4, 8]);

        let first = curve.knot_points().unwrap()[0].1;
        assert_eq!(first, points[0].position());
    }

    #[test]
    fn invalid_bspline_is_rejected_up_front() {
        let points = polygon();
        let knots = knot_vector::<f64>(points.len(), 2, Clamping::BOTH).unwrap();
        assert_eq!(
            RationalBspline::new(&points[..2], 2, &knots),
            Err(CurveError::TooFewControlPoints {
                degree: 2,
                min: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn trace_ends_in_point() {
        let points = polygon();
        let bezier = RationalBezier::new(&points).unwrap();
        let trace = bezier.trace(0.3).unwrap();
        assert_eq!(trace.point(), bezier.point(0.3).ok());
    }
}
