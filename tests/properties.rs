//! Properties every rational Bézier and B-spline evaluation must satisfy.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rational_curves::{
    basis_functions, bspline, bspline_trace, knot_vector, rational_bezier,
    rational_bezier_trace, Clamping, ControlPoint, CurveError, ErrorKind,
    Point2,
};

const SEED: u64 = 12345;

fn random_polygon(
    rng: &mut StdRng,
    count: usize,
    weighted: bool,
) -> Vec<ControlPoint<f64>> {
    (0..count)
        .map(|_| {
            let weight = if weighted {
                rng.random_range(0.1..5.0)
            } else {
                1.0
            };
            ControlPoint::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                weight,
            )
        })
        .collect()
}

fn assert_point_eq(a: Point2<f64>, b: Point2<f64>, epsilon: f64) {
    assert_relative_eq!(a.x, b.x, epsilon = epsilon);
    assert_relative_eq!(a.y, b.y, epsilon = epsilon);
}

#[test]
fn clamped_bspline_interpolates_endpoints() {
    let mut rng = StdRng::seed_from_u64(SEED);

    for count in 2..9 {
        for degree in 1..count {
            let points = random_polygon(&mut rng, count, true);
            let knots = knot_vector::<f64>(count, degree, Clamping::BOTH).unwrap();

            assert_eq!(
                bspline(&points, degree, &knots, 0.0),
                Ok(points[0].position())
            );
            assert_eq!(
                bspline(&points, degree, &knots, 1.0),
                Ok(points[count - 1].position())
            );
        }
    }
}

#[test]
fn degree_one_is_linear_interpolation() {
    let p0 = Point2::new(-1.0, 3.0);
    let p1 = Point2::new(5.0, -2.0);
    let points = [
        ControlPoint::unweighted(p0.x, p0.y),
        ControlPoint::unweighted(p1.x, p1.y),
    ];
    let knots = knot_vector::<f64>(2, 1, Clamping::BOTH).unwrap();

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let expected = p0 * (1.0 - t) + p1 * t;
        assert_point_eq(rational_bezier(&points, t).unwrap(), expected, 1e-12);
        assert_point_eq(
            bspline(&points, 1, &knots, t).unwrap(),
            expected,
            1e-12,
        );
    }
}

#[test]
fn scaling_all_weights_keeps_bezier() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);

    for count in 1..10 {
        let points = random_polygon(&mut rng, count, true);
        let factor = rng.random_range(0.01..100.0);
        let scaled: Vec<_> = points
            .iter()
            .map(|p| ControlPoint::new(p.x, p.y, p.weight * factor))
            .collect();

        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert_point_eq(
                rational_bezier(&points, t).unwrap(),
                rational_bezier(&scaled, t).unwrap(),
                1e-9,
            );
        }
    }
}

#[test]
fn basis_functions_sum_to_one() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);

    for count in 2..10 {
        for degree in 1..count {
            for clamping in
                [Clamping::NONE, Clamping::START, Clamping::END, Clamping::BOTH]
            {
                let knots = knot_vector::<f64>(count, degree, clamping).unwrap();
                let (start, end) = (knots[degree], knots[count]);

                let samples = (0..20)
                    .map(|_| start + rng.random_range(0.0..1.0) * (end - start))
                    .chain([start, end]);

                for u in samples {
                    let (span, basis) =
                        basis_functions(count, degree, &knots, u).unwrap();

                    assert_eq!(basis.len(), degree + 1);
                    assert!(span >= degree && span < count);
                    assert!(basis.iter().all(|&n| n >= 0.0));
                    assert_relative_eq!(
                        basis.iter().sum::<f64>(),
                        1.0,
                        epsilon = 1e-9
                    );
                }
            }
        }
    }
}

#[test]
fn bezier_trace_matches_evaluation_exactly() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);

    for count in 1..12 {
        for weighted in [false, true] {
            let points = random_polygon(&mut rng, count, weighted);
            // Unit weights keep every combined weight at one, so the
            // polynomial extension outside [0, 1] is safe to query.
            let t = if weighted {
                rng.random_range(0.0..1.0)
            } else {
                rng.random_range(-0.5..1.5)
            };

            let trace = rational_bezier_trace(&points, t).unwrap();
            assert_eq!(trace.len(), count);
            assert_eq!(trace.levels()[0].len(), count);
            assert_eq!(trace.point(), rational_bezier(&points, t).ok());
        }
    }
}

#[test]
fn bspline_trace_matches_unweighted_evaluation() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);

    for count in 2..9 {
        for degree in 1..count {
            for clamping in
                [Clamping::NONE, Clamping::START, Clamping::END, Clamping::BOTH]
            {
                let points = random_polygon(&mut rng, count, false);
                let knots = knot_vector::<f64>(count, degree, clamping).unwrap();
                let (start, end) = (knots[degree], knots[count]);

                for i in 0..=10 {
                    let s = i as f64 / 10.0;
                    // Exact at both ends, where `start + s * (end - start)`
                    // can overshoot the domain by an ulp.
                    let u = start * (1.0 - s) + end * s;
                    let trace =
                        bspline_trace(&points, degree, &knots, u).unwrap();
                    let point = bspline(&points, degree, &knots, u).unwrap();

                    assert_eq!(trace.len(), degree + 1);
                    assert_point_eq(trace.point().unwrap(), point, 1e-9);
                }
            }
        }
    }
}

#[test]
fn quadratic_bezier_scenario() {
    let points = [
        ControlPoint::new(0.0, 0.0, 1.0),
        ControlPoint::new(1.0, 2.0, 1.0),
        ControlPoint::new(2.0, 0.0, 1.0),
    ];
    assert_eq!(rational_bezier(&points, 0.5), Ok(Point2::new(1.0, 1.0)));
}

#[test]
fn cubic_clamped_scenario() {
    let points = [
        ControlPoint::unweighted(0.0, 0.0),
        ControlPoint::new(1.0, 3.0, 2.0),
        ControlPoint::new(3.0, 3.0, 0.5),
        ControlPoint::unweighted(4.0, 0.0),
    ];
    let knots = knot_vector::<f64>(4, 3, Clamping::BOTH).unwrap();

    assert_eq!(knots, [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    assert_eq!(bspline(&points, 3, &knots, 0.0), Ok(points[0].position()));
    assert_eq!(bspline(&points, 3, &knots, 1.0), Ok(points[3].position()));

    // A single Bézier segment: the B-spline matches the rational Bézier.
    for u in [0.1, 0.5, 0.9] {
        assert_point_eq(
            bspline(&points, 3, &knots, u).unwrap(),
            rational_bezier(&points, u).unwrap(),
            1e-12,
        );
    }
}

#[test]
fn uniform_quadratic_scenario() {
    let knots = knot_vector::<f64>(5, 2, Clamping::NONE).unwrap();
    assert_eq!(knots.len(), 8);
    for (i, &knot) in knots.iter().enumerate() {
        assert_relative_eq!(knot, i as f64 / 7.0);
    }
}

#[test]
fn failures_are_classified() {
    let points = [
        ControlPoint::unweighted(0.0, 0.0),
        ControlPoint::unweighted(1.0, 1.0),
    ];
    let knots = knot_vector::<f64>(2, 1, Clamping::BOTH).unwrap();

    let error = bspline(&points, 2, &knots, 0.5).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidInput);

    let error = bspline(&points, 1, &knots, 1.5).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::OutOfDomain);

    let zero = [
        ControlPoint::new(0.0, 0.0, 0.0),
        ControlPoint::new(1.0, 1.0, 0.0),
    ];
    let error = rational_bezier(&zero, 0.5).unwrap_err();
    assert_eq!(error, CurveError::Degenerate);
    assert_eq!(error.kind(), ErrorKind::Degenerate);
    assert_eq!(
        bspline(&zero, 1, &knots, 0.5),
        Err(CurveError::Degenerate)
    );

    // A failed query leaves nothing behind for the next one.
    assert_eq!(
        bspline(&points, 1, &knots, 0.5),
        Ok(Point2::new(0.5, 0.5))
    );
}
