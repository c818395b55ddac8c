use crate::{cubic_path, demo_path, mixed_path, zigzag_path};
use approx::assert_abs_diff_eq;
use curvescan::algorithms::closest::closest_point_index;
use curvescan::algorithms::lookup_table::{LookupTable, LookupTableOptions};
use curvescan::algorithms::sampled_path::SampledPath;
use curvescan::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment, Segment};
use curvescan::math::{point, Point};
use curvescan::path::Path;

fn queries() -> Vec<Point> {
    let mut queries = Vec::new();
    for x in -2..8 {
        for y in -2..6 {
            queries.push(point(x as f32 * 73.5, y as f32 * 61.25));
        }
    }

    queries
}

#[test]
fn segments_agree_with_their_endpoints() {
    let from = point(10.0, 20.0);
    let to = point(300.0, 160.0);

    let line = LineSegment { from, to };
    let quadratic = QuadraticBezierSegment {
        from,
        ctrl: point(800.0, -50.0),
        to,
    };
    let cubic = CubicBezierSegment {
        from,
        ctrl1: point(0.0, 300.0),
        ctrl2: point(300.0, 300.0),
        to,
    };

    let check = |start: Point, end: Point| {
        assert_abs_diff_eq!(start.x, from.x, epsilon = 1e-4);
        assert_abs_diff_eq!(start.y, from.y, epsilon = 1e-4);
        assert_abs_diff_eq!(end.x, to.x, epsilon = 1e-4);
        assert_abs_diff_eq!(end.y, to.y, epsilon = 1e-4);
    };

    check(line.sample(0.0), line.sample(1.0));
    check(quadratic.sample(0.0), quadratic.sample(1.0));
    check(cubic.sample(0.0), cubic.sample(1.0));
}

#[test]
fn point_count() {
    let paths = [demo_path(), cubic_path(), mixed_path(), zigzag_path(7), zigzag_path(300)];
    let budgets = [0, 1, 3, 10, 100, 1000];

    for path in &paths {
        let num_segments = path.iter().filter(|cmd| cmd.is_drawable()).count();
        for &budget in &budgets {
            let options = LookupTableOptions::sample_budget(budget);
            let table = LookupTable::from_path(path, &options);

            let intervals = budget / num_segments;
            assert_eq!(table.len(), num_segments * (intervals + 1), "budget {}", budget);
        }
    }
}

#[test]
fn closest_point_is_minimal() {
    for path in &[demo_path(), mixed_path(), zigzag_path(42)] {
        let table = LookupTable::from_path(path, &LookupTableOptions::DEFAULT);

        for query in queries() {
            let closest = table.closest_point(query);
            assert!(table.points().contains(&closest));

            let best = (closest.to_f64() - query.to_f64()).square_length();
            for p in &table {
                assert!((p.to_f64() - query.to_f64()).square_length() >= best);
            }
        }
    }
}

#[test]
fn ties_are_deterministic() {
    // A square: the center is at the same distance from the four corners.
    let mut builder = Path::builder();
    builder.move_to(point(-1.0, -1.0));
    builder.line_to(point(1.0, -1.0));
    builder.line_to(point(1.0, 1.0));
    builder.line_to(point(-1.0, 1.0));
    builder.close();

    let table = LookupTable::from_path(&builder.build(), &LookupTableOptions::sample_budget(3));
    assert_eq!(table.len(), 6);

    let center = point(0.0, 0.0);
    let first = table.closest_index(center);
    for _ in 0..10 {
        assert_eq!(table.closest_index(center), first);
    }

    // Two segments crossing at the origin.
    let mut builder = Path::builder();
    builder.move_to(point(-1.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.move_to(point(0.0, -1.0));
    builder.line_to(point(0.0, 1.0));
    let table = LookupTable::from_path(&builder.build(), &LookupTableOptions::sample_budget(4));

    // Both segments contain the origin at t = 0.5.
    assert_eq!(table.points()[1], center);
    assert_eq!(table.points()[4], center);
    assert_eq!(table.closest_index(point(0.0, 0.0)), Ok(1));
    assert_eq!(closest_point_index(table.points(), center), Some(1));
}

#[test]
fn generate_twice() {
    let mut path = SampledPath::new(mixed_path());
    path.generate_lookup_table();
    let first = path.lookup_table().clone();

    path.generate_lookup_table();
    assert_eq!(path.lookup_table(), &first);
    assert_eq!(
        path.lookup_table().len(),
        LookupTable::from_path(&mixed_path(), &LookupTableOptions::DEFAULT).len()
    );
}
