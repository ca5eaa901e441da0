//! Error types for curve operations.

use alloc::string::String;
use thiserror::Error;

/// Broad classification of a [`CurveError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The inputs do not describe an evaluable curve.
    InvalidInput,
    /// The queried parameter lies outside the curve's domain.
    OutOfDomain,
    /// An interpolation step hit a zero weight or denominator.
    Degenerate,
}

/// Errors that can occur during curve evaluation.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CurveError {
    /// The control polygon has no points.
    #[error("control polygon must have at least one point")]
    EmptyPolygon,

    /// Curves must have a degree of at least one.
    #[error("curve degree must be at least 1")]
    ZeroDegree,

    /// A B-spline of degree `p` needs at least `p + 1` control points.
    #[error("degree {degree} curve must have at least {min} control points. Found: {actual}")]
    TooFewControlPoints {
        degree: usize,
        min: usize,
        actual: usize,
    },

    /// The knot vector must have `control points + degree + 1` entries.
    #[error("knot vector must have {expected} knots. Found: {actual}")]
    InvalidKnotLength { expected: usize, actual: usize },

    /// The knot vector decreases at `index`.
    #[cfg(feature = "monotonic_check")]
    #[error("knot vector is not monotonic at index {index}")]
    NonMonotonicKnots { index: usize },

    /// The parameter lies outside `[start, end]`.
    #[error("parameter {parameter} lies outside the curve domain [{start}, {end}]")]
    OutOfDomain { parameter: f64, start: f64, end: f64 },

    /// A combined weight or basis denominator was zero.
    #[error("zero weight encountered during interpolation")]
    Degenerate,
}

impl CurveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CurveError::OutOfDomain { .. } => ErrorKind::OutOfDomain,
            CurveError::Degenerate => ErrorKind::Degenerate,
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors from reading the textual point and knot formats.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A control point line must have two or three fields.
    #[error("line {line}: expected `x,y[,weight]`, found {found} fields")]
    FieldCount { line: usize, found: usize },

    /// A field of a control point line is not a number.
    #[error("line {line}: `{field}` is not a number")]
    InvalidNumber { line: usize, field: String },

    /// Weights must be positive.
    #[error("line {line}: weight must be positive")]
    NonPositiveWeight { line: usize },

    /// An entry of a knot list is not a number. `index` counts every
    /// comma-separated field, empty ones included.
    #[error("knot {index}: `{field}` is not a number")]
    InvalidKnot { index: usize, field: String },
}
