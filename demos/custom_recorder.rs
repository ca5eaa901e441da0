//! Example implementing a custom `Recorder`.
//!
//! The built-in `ConstructionTrace` keeps every level. A drawing layer that
//! only needs the construction lines can collect segments directly.

use rational_curves::{de_casteljau_with, ControlPoint, Point2, Recorder};

/// Collects the line segments between neighbouring points of each level.
#[derive(Default)]
struct SegmentCollector {
    segments: Vec<(Point2<f64>, Point2<f64>)>,
    levels: usize,
}

impl Recorder<f64> for SegmentCollector {
    fn record<I>(&mut self, level: I)
    where
        I: IntoIterator<Item = Point2<f64>>,
    {
        let mut previous = None;
        for point in level {
            if let Some(previous) = previous {
                self.segments.push((previous, point));
            }
            previous = Some(point);
        }
        self.levels += 1;
    }
}

fn main() {
    let points = [
        ControlPoint::new(0.0, 0.0, 1.0),
        ControlPoint::new(1.0, 3.0, 2.0),
        ControlPoint::new(3.0, 3.0, 0.5),
        ControlPoint::new(4.0, 0.0, 1.0),
    ];

    let mut collector = SegmentCollector::default();
    let point = de_casteljau_with(&points, 0.5, &mut collector).unwrap();

    println!("Curve point at t = 0.5: ({:.4}, {:.4})", point.x, point.y);
    println!(
        "{} levels, {} construction segments:",
        collector.levels,
        collector.segments.len()
    );
    for (a, b) in &collector.segments {
        println!(
            "  ({:.3}, {:.3}) -> ({:.3}, {:.3})",
            a.x, a.y, b.x, b.y
        );
    }
}
