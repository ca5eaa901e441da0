#![no_std]
//! Rational Bézier and B-spline curve evaluation.
//!
//! Two curve families share one point type:
//!
//! * Rational Bézier curves, evaluated with the weighted form of de
//!   Casteljau's algorithm ([`rational_bezier()`]).
//! * Rational B-splines over a knot vector, evaluated through the Cox–de
//!   Boor basis functions ([`bspline()`]). [`knot_vector()`] builds uniform,
//!   clamped-start, clamped-end or fully clamped knot vectors.
//!
//! Every evaluator also comes as a `*_trace()` variant that returns the
//! intermediate points of each interpolation level as a
//! [`ConstructionTrace`], e.g. to draw the construction lines of the
//! subdivision.
//!
//! All functions are pure. Nothing is cached between calls and failures are
//! reported through [`CurveError`], never as NaN or infinite coordinates.
//!
//! # Examples
//! ```
//! use rational_curves::prelude::*;
//!
//! let points = parse_control_points::<f64>("0,0\n1,2\n3,2,2\n4,0").unwrap();
//!
//! // Cubic Bézier through all four points.
//! let mid = rational_bezier(&points, 0.5).unwrap();
//! assert!(mid.y > 1.0);
//!
//! // Quadratic B-spline, clamped at both ends.
//! let knots = knot_vector(points.len(), 2, Clamping::BOTH).unwrap();
//! let curve = RationalBspline::new(&points, 2, &knots).unwrap();
//! assert_eq!(curve.point(1.0).unwrap(), Point2::new(4.0, 0.0));
//!
//! // Out-of-domain parameters are undefined rather than extrapolated.
//! assert!(curve.point(1.5).is_err());
//! ```
//!
//! ## Cargo features
#![doc = document_features::document_features!()]

extern crate alloc;

pub mod bezier;
pub mod bspline;
pub mod curve_trait;
pub mod error;
pub mod knot_vector;
pub mod point;
pub mod text;
pub mod trace;

pub use bezier::{de_casteljau_with, rational_bezier, rational_bezier_trace};
pub use bspline::{
    basis_functions, bspline, bspline_trace, bspline_with, de_boor_with,
    find_span, BsplineOptions,
};
pub use curve_trait::{Curve, RationalBezier, RationalBspline};
pub use error::{CurveError, CurveResult, ErrorKind, ParseError};
pub use knot_vector::{knot_vector, Clamping};
pub use point::{ControlPoint, Point2, MIN_WEIGHT};
pub use text::{
    format_control_points, format_knots, parse_control_points, parse_knots,
};
pub use trace::{ConstructionTrace, Recorder};

pub mod prelude {
    //! Convenience re-export of common members.
    pub use crate::{
        bspline, bspline_trace, knot_vector, parse_control_points,
        parse_knots, rational_bezier, rational_bezier_trace, Clamping,
        ConstructionTrace, ControlPoint, Curve, CurveError, Point2,
        RationalBezier, RationalBspline,
    };
}
