//! Find the point of a set closest to a query position.

use crate::math::Point;

/// Returns the index of the point closest to `query`, or `None` if `points` is empty.
///
/// Points are compared by euclidean distance. When several points are at the
/// same minimal distance, the one with the smallest index wins.
pub fn closest_point_index(points: &[Point], query: Point) -> Option<usize> {
    let first = points.first()?;

    let mut best_index = 0;
    let mut best_distance = square_distance(*first, query);

    for (i, p) in points.iter().enumerate().skip(1) {
        let d = square_distance(*p, query);
        if d < best_distance {
            best_index = i;
            best_distance = d;
        }
    }

    Some(best_index)
}

// Computed in f64, squared f32 distances overflow past 1.8e19.
#[inline]
fn square_distance(a: Point, b: Point) -> f64 {
    (a.to_f64() - b.to_f64()).square_length()
}

/// Returns the point closest to `query`, or `None` if `points` is empty.
///
/// See [`closest_point_index`](fn.closest_point_index.html).
pub fn closest_point(points: &[Point], query: Point) -> Option<Point> {
    closest_point_index(points, query).map(|idx| points[idx])
}

#[test]
fn empty() {
    use crate::math::point;

    assert_eq!(closest_point_index(&[], point(1.0, 2.0)), None);
    assert_eq!(closest_point(&[], point(1.0, 2.0)), None);
}

#[test]
fn single_point() {
    use crate::math::point;

    let points = [point(3.0, 4.0)];
    assert_eq!(closest_point(&points, point(-100.0, 50.0)), Some(point(3.0, 4.0)));
}

#[test]
fn nearest() {
    use crate::math::point;

    let points = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ];

    assert_eq!(closest_point_index(&points, point(9.0, 8.0)), Some(2));
    assert_eq!(closest_point_index(&points, point(-1.0, 11.0)), Some(3));
    assert_eq!(closest_point(&points, point(10.0, 0.0)), Some(point(10.0, 0.0)));
}

#[test]
fn ties_keep_the_earliest_point() {
    use crate::math::point;

    // The query is equidistant from the first two points and from the last two.
    let points = [
        point(-1.0, 0.0),
        point(1.0, 0.0),
        point(0.0, 5.0),
        point(1.0, 0.0),
    ];

    for _ in 0..3 {
        assert_eq!(closest_point_index(&points, point(0.0, 0.0)), Some(0));
    }

    let duplicates = [point(5.0, 5.0), point(2.0, 2.0), point(2.0, 2.0)];
    assert_eq!(closest_point_index(&duplicates, point(0.0, 0.0)), Some(1));
}

#[test]
fn large_coordinates() {
    use crate::math::point;

    let points = [point(0.0, 0.0), point(1e20, 0.0)];
    assert_eq!(closest_point_index(&points, point(2e20, 0.0)), Some(1));

    let points = [point(-3e38, 3e38), point(3e38, -3e38), point(3e38, 3e38)];
    assert_eq!(closest_point_index(&points, point(2e38, 2e38)), Some(2));
}
