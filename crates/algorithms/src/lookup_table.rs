//! Uniformly sampled approximation of a path.
//!
//! # Sampling
//!
//! A lookup table is built from a fixed sample budget `B` (100 by default). Each
//! drawable segment of the path (lines, quadratic and cubic béziers, but not
//! `MoveTo` commands) receives `B / n` intervals, `n` being the number of drawable
//! segments, using integer division. A segment with `k` intervals contributes `k + 1`
//! points, sampled at `t = i / k` for `i` in `0..=k`, so both of its endpoints are
//! in the table and shared endpoints between consecutive segments appear twice.
//!
//! When a path has more drawable segments than the budget, `k` is zero and each
//! segment contributes its start point only.
//!
//! Points are stored in path traversal order: sub-path order, then increasing `t`
//! within each segment. The index of a point is therefore a (coarse) proxy for its
//! position along the path.
//!
//! # Examples
//!
//! ```
//! use curvescan_algorithms::lookup_table::{LookupTable, LookupTableOptions};
//! use curvescan_algorithms::math::point;
//! use curvescan_algorithms::path::Path;
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.cubic_bezier_to(point(0.0, 10.0), point(10.0, 10.0), point(10.0, 0.0));
//! builder.quadratic_bezier_to(point(15.0, -5.0), point(20.0, 0.0));
//! let path = builder.build();
//!
//! let table = LookupTable::from_path(&path, &LookupTableOptions::DEFAULT);
//! // 100 / 2 = 50 intervals per segment, 51 points each.
//! assert_eq!(table.len(), 102);
//! ```

use crate::closest;
use crate::error::LookupTableError;
use crate::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment, Segment};
use crate::math::Point;
use crate::path::{Path, PathCommand};

use alloc::vec::Vec;
use log::{debug, trace, warn};

/// Parameters for the lookup table construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct LookupTableOptions {
    /// Total number of intervals distributed among the drawable segments of the path.
    ///
    /// Default value: `LookupTableOptions::DEFAULT_SAMPLE_BUDGET`.
    pub sample_budget: usize,
}

impl LookupTableOptions {
    /// Default sample budget.
    pub const DEFAULT_SAMPLE_BUDGET: usize = 100;

    /// Upper bound of the number of intervals a single segment is split into.
    ///
    /// Beyond 2^24 intervals, consecutive values of `t` are no longer distinct in `f32`.
    pub const MAX_INTERVALS_PER_SEGMENT: usize = 1 << 24;

    pub const DEFAULT: Self = LookupTableOptions {
        sample_budget: Self::DEFAULT_SAMPLE_BUDGET,
    };

    #[inline]
    pub fn sample_budget(sample_budget: usize) -> Self {
        Self::DEFAULT.with_sample_budget(sample_budget)
    }

    #[inline]
    pub fn with_sample_budget(mut self, sample_budget: usize) -> Self {
        self.sample_budget = sample_budget;
        self
    }

    /// Number of intervals each drawable segment receives for a given segment count.
    ///
    /// The result never exceeds `MAX_INTERVALS_PER_SEGMENT`.
    #[inline]
    pub fn intervals_per_segment(&self, num_segments: usize) -> usize {
        if num_segments == 0 {
            return 0;
        }

        (self.sample_budget / num_segments).min(Self::MAX_INTERVALS_PER_SEGMENT)
    }
}

impl Default for LookupTableOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An ordered sequence of points approximating a path.
///
/// Built once from a path, read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LookupTable {
    points: Vec<Point>,
}

impl LookupTable {
    /// Creates an empty lookup table.
    pub fn new() -> Self {
        LookupTable { points: Vec::new() }
    }

    /// Samples a path.
    ///
    /// # Panics
    ///
    /// If the path's command stream is malformed, or if a drawable segment is not
    /// preceded by a `MoveTo`.
    pub fn from_path(path: &Path, options: &LookupTableOptions) -> Self {
        Self::from_commands(&path.decompose(), options)
    }

    /// Samples a sequence of decomposed path commands.
    ///
    /// # Panics
    ///
    /// If a drawable segment is not preceded by a `MoveTo`.
    pub fn from_commands(commands: &[PathCommand], options: &LookupTableOptions) -> Self {
        let mut table = LookupTable::new();
        table.append_commands(commands, options);

        table
    }

    fn append_commands(&mut self, commands: &[PathCommand], options: &LookupTableOptions) {
        let num_segments = commands.iter().filter(|cmd| cmd.is_drawable()).count();
        if num_segments == 0 {
            debug!("No drawable segment, the lookup table is empty.");
            return;
        }

        let intervals = options.intervals_per_segment(num_segments);
        if intervals == 0 {
            warn!(
                "Sample budget {} is below the segment count {}, only sampling segment starts.",
                options.sample_budget, num_segments,
            );
        }

        self.points.reserve(num_segments.saturating_mul(intervals + 1));

        let points = &mut self.points;
        let mut previous: Option<Point> = None;
        for command in commands {
            let from = match (command, previous) {
                (PathCommand::MoveTo { to }, _) => {
                    previous = Some(*to);
                    continue;
                }
                (_, Some(from)) => from,
                (_, None) => panic!(
                    "{:?} is not preceded by a MoveTo command, the path has no start point.",
                    command
                ),
            };

            let mut push = |p: Point| points.push(p);
            match *command {
                PathCommand::LineTo { to } => {
                    LineSegment { from, to }.for_each_uniform_sample(intervals, &mut push);
                }
                PathCommand::QuadraticTo { ctrl, to } => {
                    QuadraticBezierSegment { from, ctrl, to }
                        .for_each_uniform_sample(intervals, &mut push);
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    }
                    .for_each_uniform_sample(intervals, &mut push);
                }
                PathCommand::MoveTo { .. } => {}
            }

            previous = Some(command.to());
        }

        debug!(
            "Built lookup table: {} segment(s), {} interval(s) per segment, {} point(s).",
            num_segments,
            intervals,
            self.points.len(),
        );
    }

    /// The sampled points, in path order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Index of the sample closest to `query`.
    ///
    /// Ties are broken in favor of the smallest index.
    pub fn closest_index(&self, query: Point) -> Result<usize, LookupTableError> {
        closest::closest_point_index(&self.points, query).ok_or(LookupTableError::Empty)
    }

    /// The sample closest to `query`.
    ///
    /// Ties are broken in favor of the earliest sample in path order.
    pub fn try_closest_point(&self, query: Point) -> Result<Point, LookupTableError> {
        let idx = self.closest_index(query)?;
        let result = self.points[idx];
        trace!("closest sample to {:?}: #{} {:?}", query, idx, result);

        Ok(result)
    }

    /// The sample closest to `query`.
    ///
    /// # Panics
    ///
    /// If the table is empty.
    pub fn closest_point(&self, query: Point) -> Point {
        match self.try_closest_point(query) {
            Ok(p) => p,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'l> IntoIterator for &'l LookupTable {
    type Item = &'l Point;
    type IntoIter = core::slice::Iter<'l, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
fn approx_eq(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn single_line() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    let path = builder.build();

    let table = LookupTable::from_path(&path, &LookupTableOptions::DEFAULT);

    assert_eq!(table.len(), 101);
    for (i, p) in table.iter().enumerate() {
        assert!(approx_eq(*p, point(i as f32 * 0.1, 0.0)), "#{} {:?}", i, p);
    }
    assert_eq!(table.points()[0], point(0.0, 0.0));
    assert_eq!(table.points()[100], point(10.0, 0.0));
}

#[test]
fn custom_budget() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(4.0, 0.0));
    builder.line_to(point(4.0, 4.0));
    let path = builder.build();

    // 9 / 2 = 4 intervals per segment.
    let table = LookupTable::from_path(&path, &LookupTableOptions::sample_budget(9));

    assert_eq!(table.len(), 10);
    assert_eq!(
        table.points(),
        &[
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(2.0, 0.0),
            point(3.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 1.0),
            point(4.0, 2.0),
            point(4.0, 3.0),
            point(4.0, 4.0),
        ]
    );
}

#[test]
fn point_count_matches_segment_count() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.quadratic_bezier_to(point(2.0, 1.0), point(3.0, 0.0));
    builder.close();
    builder.move_to(point(10.0, 10.0));
    builder.cubic_bezier_to(point(11.0, 12.0), point(13.0, 12.0), point(14.0, 10.0));
    let path = builder.build();

    for budget in &[0, 1, 2, 3, 7, 100, 1000] {
        let options = LookupTableOptions::sample_budget(*budget);
        let table = LookupTable::from_path(&path, &options);
        let intervals = budget / 3;
        assert_eq!(table.len(), 3 * (intervals + 1), "budget {}", budget);
    }
}

#[test]
fn subpaths_are_sampled_in_order() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.move_to(point(5.0, 5.0));
    builder.line_to(point(6.0, 5.0));
    let path = builder.build();

    let table = LookupTable::from_path(&path, &LookupTableOptions::sample_budget(2));

    assert_eq!(
        table.points(),
        &[point(0.0, 0.0), point(1.0, 0.0), point(5.0, 5.0), point(6.0, 5.0)]
    );
}

#[test]
fn more_segments_than_budget() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    for i in 1..=150 {
        builder.line_to(point(i as f32, 0.0));
    }
    let path = builder.build();

    let table = LookupTable::from_path(&path, &LookupTableOptions::DEFAULT);

    assert_eq!(table.len(), 150);
    for (i, p) in table.iter().enumerate() {
        assert_eq!(*p, point(i as f32, 0.0));
    }
}

#[test]
fn huge_budget_is_clamped() {
    let options = LookupTableOptions::sample_budget(usize::MAX);

    assert_eq!(
        options.intervals_per_segment(1),
        LookupTableOptions::MAX_INTERVALS_PER_SEGMENT
    );
    assert_eq!(
        options.intervals_per_segment(3),
        LookupTableOptions::MAX_INTERVALS_PER_SEGMENT
    );
    assert_eq!(options.intervals_per_segment(usize::MAX), 1);
    assert_eq!(options.intervals_per_segment(0), 0);

    let options = LookupTableOptions::sample_budget(1 << 26);
    assert_eq!(options.intervals_per_segment(8), 1 << 23);
}

#[test]
fn empty_path() {
    let table = LookupTable::from_path(&Path::new(), &LookupTableOptions::DEFAULT);

    assert!(table.is_empty());
    assert_eq!(
        table.try_closest_point(crate::math::point(0.0, 0.0)),
        Err(LookupTableError::Empty)
    );
}

#[test]
fn move_only_path() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(1.0, 1.0));
    builder.move_to(point(2.0, 2.0));
    let table = LookupTable::from_path(&builder.build(), &LookupTableOptions::DEFAULT);

    assert!(table.is_empty());
}

#[test]
#[should_panic(expected = "not preceded by a MoveTo")]
fn segment_without_anchor() {
    use crate::math::point;

    let commands = [PathCommand::LineTo {
        to: point(1.0, 0.0),
    }];

    LookupTable::from_commands(&commands, &LookupTableOptions::DEFAULT);
}

#[test]
#[should_panic(expected = "The lookup table is empty")]
fn closest_point_on_empty_table() {
    LookupTable::new().closest_point(crate::math::point(0.0, 0.0));
}

#[test]
fn closest_point_is_a_sample() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(10.0, 20.0));
    builder.cubic_bezier_to(point(0.0, 300.0), point(300.0, 300.0), point(300.0, 160.0));
    builder.quadratic_bezier_to(point(800.0, -50.0), point(600.0, 320.0));
    let table = LookupTable::from_path(&builder.build(), &LookupTableOptions::DEFAULT);

    let queries = [
        point(0.0, 0.0),
        point(150.0, 150.0),
        point(700.0, 100.0),
        point(-500.0, 900.0),
    ];
    for query in &queries {
        let result = table.closest_point(*query);
        let idx = table.closest_index(*query).unwrap();
        assert_eq!(table.points()[idx], result);

        let best = (result.to_f64() - query.to_f64()).square_length();
        for p in &table {
            assert!((p.to_f64() - query.to_f64()).square_length() >= best);
        }
    }
}
