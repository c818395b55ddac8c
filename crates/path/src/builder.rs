//! Path building.
//!
//! The [`Builder`](struct.Builder.html) mirrors the usual vector graphics API:
//! a path is a sequence of sub-paths, each starting with `move_to` followed by
//! line and curve commands, optionally terminated with `close`.
//!
//! ```
//! use curvescan_path::Path;
//! use curvescan_path::math::point;
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! builder.quadratic_bezier_to(point(15.0, 5.0), point(10.0, 10.0));
//! builder.close();
//!
//! let path = builder.build();
//! assert_eq!(path.decompose().len(), 3);
//! ```

use crate::math::Point;
use crate::path::Path;
use crate::{PathCommand, Verb};

use alloc::vec::Vec;

/// The default builder for `Path`.
///
/// Adding an edge before the first `move_to` is a programming error and panics.
/// After `close`, edges continue from the first point of the closed sub-path, which
/// is recorded as an implicit `move_to`.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    points: Vec<Point>,
    verbs: Vec<Verb>,
    first: Option<Point>,
    need_move_to: bool,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            points: Vec::new(),
            verbs: Vec::new(),
            first: None,
            need_move_to: false,
        }
    }

    pub fn with_capacity(points: usize, verbs: usize) -> Self {
        Builder {
            points: Vec::with_capacity(points),
            verbs: Vec::with_capacity(verbs),
            first: None,
            need_move_to: false,
        }
    }

    /// Starts a new sub-path at the given position.
    pub fn move_to(&mut self, to: Point) {
        nan_check(to);

        self.first = Some(to);
        self.need_move_to = false;
        self.points.push(to);
        self.verbs.push(Verb::MoveTo);
    }

    pub fn line_to(&mut self, to: Point) {
        self.edge();
        nan_check(to);

        self.points.push(to);
        self.verbs.push(Verb::LineTo);
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.edge();
        nan_check(ctrl);
        nan_check(to);

        self.points.push(ctrl);
        self.points.push(to);
        self.verbs.push(Verb::QuadraticTo);
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.edge();
        nan_check(ctrl1);
        nan_check(ctrl2);
        nan_check(to);

        self.points.push(ctrl1);
        self.points.push(ctrl2);
        self.points.push(to);
        self.verbs.push(Verb::CubicTo);
    }

    /// Closes the current sub-path.
    ///
    /// Closing does not add a segment back to the start of the sub-path.
    pub fn close(&mut self) {
        if self.first.is_none() || self.need_move_to {
            return;
        }

        self.verbs.push(Verb::Close);
        self.need_move_to = true;
    }

    /// Appends a decomposed command.
    pub fn command(&mut self, command: PathCommand) {
        match command {
            PathCommand::MoveTo { to } => self.move_to(to),
            PathCommand::LineTo { to } => self.line_to(to),
            PathCommand::QuadraticTo { ctrl, to } => self.quadratic_bezier_to(ctrl, to),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => self.cubic_bezier_to(ctrl1, ctrl2, to),
        }
    }

    /// The endpoint of the last command, if any.
    pub fn current_position(&self) -> Option<Point> {
        if self.need_move_to {
            return self.first;
        }
        self.points.last().cloned()
    }

    pub fn build(self) -> Path {
        Path::from_raw_parts(self.verbs, self.points)
    }

    fn edge(&mut self) {
        let first = match self.first {
            Some(first) => first,
            None => panic!("edge operation is made before move_to()"),
        };

        if self.need_move_to {
            self.move_to(first);
        }
    }
}

#[inline]
fn nan_check(p: Point) {
    debug_assert!(p.x.is_finite());
    debug_assert!(p.y.is_finite());
}

#[test]
fn edges_after_close_restart_from_first_point() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(1.0, 1.0));
    builder.line_to(point(2.0, 1.0));
    builder.close();
    assert_eq!(builder.current_position(), Some(point(1.0, 1.0)));
    builder.line_to(point(3.0, 3.0));
    let path = builder.build();

    assert_eq!(
        path.verbs(),
        &[
            Verb::MoveTo,
            Verb::LineTo,
            Verb::Close,
            Verb::MoveTo,
            Verb::LineTo
        ]
    );
    assert_eq!(
        path.decompose()[2],
        PathCommand::MoveTo {
            to: point(1.0, 1.0)
        }
    );
}

#[test]
fn double_close_is_ignored() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.close();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.close();
    builder.close();
    let path = builder.build();

    assert_eq!(path.verbs(), &[Verb::MoveTo, Verb::LineTo, Verb::Close]);
}

#[test]
#[should_panic(expected = "before move_to")]
fn edge_before_move_to() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.line_to(point(1.0, 0.0));
}

#[test]
fn with_capacity() {
    use crate::math::point;

    let mut builder = Builder::with_capacity(4, 2);
    assert_eq!(builder.current_position(), None);
    builder.move_to(point(0.0, 0.0));
    builder.cubic_bezier_to(point(1.0, 1.0), point(2.0, 1.0), point(3.0, 0.0));
    assert_eq!(builder.current_position(), Some(point(3.0, 0.0)));
    assert_eq!(builder.build().points().len(), 4);
}
