//! Basic usage example for rational-curves

use rational_curves::prelude::*;

fn main() {
    println!("=== Basic Curve Evaluation Example ===\n");

    // Example 1: Rational Bézier curve
    println!("Quadratic rational Bézier:");
    let points = parse_control_points::<f64>("0,0\n1,2\n2,0").unwrap();

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let p = rational_bezier(&points, t).unwrap();
        println!("  bezier({:.2}) = ({:.4}, {:.4})", t, p.x, p.y);
    }

    // Example 2: Weights pull the curve towards a control point
    println!("\nRaising the middle weight:");
    for weight in [0.5, 1.0, 2.0, 4.0] {
        let mut weighted = points.clone();
        weighted[1].weight = weight;
        let p = rational_bezier(&weighted, 0.5).unwrap();
        println!("  w = {:.1}: bezier(0.5) = ({:.4}, {:.4})", weight, p.x, p.y);
    }

    // Example 3: Knot vectors for every clamping
    println!("\nKnot vectors for 5 points of degree 2:");
    for (name, clamping) in [
        ("uniform", Clamping::NONE),
        ("start", Clamping::START),
        ("end", Clamping::END),
        ("both", Clamping::BOTH),
    ] {
        let knots = knot_vector::<f64>(5, 2, clamping).unwrap();
        println!("  {:<8} {}", name, rational_curves::format_knots(&knots));
    }

    // Example 4: B-spline curve and its construction pyramid
    println!("\nCubic B-spline, clamped at both ends:");
    let points =
        parse_control_points::<f64>("0,0\n1,2\n2,-1\n3,2,3\n4,0").unwrap();
    let knots = knot_vector(points.len(), 3, Clamping::BOTH).unwrap();
    let curve = RationalBspline::new(&points, 3, &knots).unwrap();

    for p in curve.sample(4).unwrap() {
        println!("  ({:.4}, {:.4})", p.x, p.y);
    }

    let trace = curve.trace(0.4).unwrap();
    println!("\nde Boor levels at u = 0.4:");
    for (depth, level) in trace.iter().enumerate() {
        let level: Vec<String> = level
            .iter()
            .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
            .collect();
        println!("  {}: {}", depth, level.join(" "));
    }

    // Example 5: Error handling
    println!("\nError handling:");
    match curve.point(1.5) {
        Ok(p) => println!("  Result: ({}, {})", p.x, p.y),
        Err(e) => println!("  Error: {}", e),
    }

    match RationalBspline::new(&points[..2], 3, &knots) {
        Ok(_) => println!("  Unexpectedly valid"),
        Err(e) => println!("  Error: {}", e),
    }
}
