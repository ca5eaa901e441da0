//! Points and weighted control points.

use core::ops::{Add, Mul, Sub};
use num_traits::Float;

/// The smallest weight an interactively edited control point may carry.
pub const MIN_WEIGHT: f64 = 0.1;

/// A position on the plane; the result of evaluating a curve.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<Output = T>> Add for Point2<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Sub<Output = T>> Sub for Point2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

// Together with `Add` this makes `lerp::Lerp` available on points.
impl<T: Mul<Output = T> + Copy> Mul<T> for Point2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Point2::new(self.x * scalar, self.y * scalar)
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2::new(x, y)
    }
}

/// A control point with a scalar weight.
///
/// The weight changes how strongly the point pulls on the curve. It must be
/// positive; evaluators report [`CurveError::Degenerate`](crate::CurveError)
/// instead of dividing by a zero combined weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint<T> {
    pub x: T,
    pub y: T,
    pub weight: T,
}

impl<T: Float> ControlPoint<T> {
    #[inline]
    pub fn new(x: T, y: T, weight: T) -> Self {
        Self { x, y, weight }
    }

    /// A control point with weight `1`.
    #[inline]
    pub fn unweighted(x: T, y: T) -> Self {
        Self::new(x, y, T::one())
    }

    #[inline]
    pub fn position(&self) -> Point2<T> {
        Point2::new(self.x, self.y)
    }

    /// Sets the weight, clamped to at least [`MIN_WEIGHT`].
    ///
    /// This is the rule editors apply when a weight is dragged
    /// interactively. NaN is treated as the minimum.
    pub fn set_weight_clamped(&mut self, weight: T) {
        let min = T::from(MIN_WEIGHT).unwrap_or_else(T::epsilon);
        self.weight = if weight > min { weight } else { min };
    }
}

impl<T: Float> From<Point2<T>> for ControlPoint<T> {
    fn from(point: Point2<T>) -> Self {
        ControlPoint::unweighted(point.x, point.y)
    }
}
