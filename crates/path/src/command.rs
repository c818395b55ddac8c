use crate::geom::arrayvec::ArrayVec;
use crate::math::Point;

/// The kind of a command in a path's command stream, without its points.
///
/// This is how [`Path`](struct.Path.html) stores its commands. Each verb consumes a
/// fixed number of points from the path's point buffer, see [`Verb::num_points`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Verb {
    MoveTo,
    LineTo,
    QuadraticTo,
    CubicTo,
    Close,
}

impl Verb {
    /// Number of points stored for this verb: control points first, then the endpoint.
    #[inline]
    pub fn num_points(self) -> usize {
        match self {
            Verb::MoveTo | Verb::LineTo => 1,
            Verb::QuadraticTo => 2,
            Verb::CubicTo => 3,
            Verb::Close => 0,
        }
    }
}

/// One decomposed segment of a path.
///
/// The start of a drawable command is implicit: it is the endpoint of the command
/// that precedes it. A `MoveTo` draws nothing and only sets that anchor for the
/// following commands.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathCommand {
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    QuadraticTo {
        ctrl: Point,
        to: Point,
    },
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}

impl PathCommand {
    /// The endpoint of this command.
    #[inline]
    pub fn to(&self) -> Point {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::QuadraticTo { to, .. }
            | PathCommand::CubicTo { to, .. } => to,
        }
    }

    /// The control points of this command, in order (zero, one or two of them).
    pub fn control_points(&self) -> ArrayVec<Point, 2> {
        let mut points = ArrayVec::new();
        match *self {
            PathCommand::MoveTo { .. } | PathCommand::LineTo { .. } => {}
            PathCommand::QuadraticTo { ctrl, .. } => {
                points.push(ctrl);
            }
            PathCommand::CubicTo { ctrl1, ctrl2, .. } => {
                points.push(ctrl1);
                points.push(ctrl2);
            }
        }

        points
    }

    pub fn verb(&self) -> Verb {
        match self {
            PathCommand::MoveTo { .. } => Verb::MoveTo,
            PathCommand::LineTo { .. } => Verb::LineTo,
            PathCommand::QuadraticTo { .. } => Verb::QuadraticTo,
            PathCommand::CubicTo { .. } => Verb::CubicTo,
        }
    }

    /// Returns false for `MoveTo`, true for the commands that draw something.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        match self {
            PathCommand::MoveTo { .. } => false,
            _ => true,
        }
    }
}

#[test]
fn arity() {
    use crate::math::point;

    let cubic = PathCommand::CubicTo {
        ctrl1: point(0.0, 300.0),
        ctrl2: point(300.0, 300.0),
        to: point(300.0, 160.0),
    };

    assert_eq!(cubic.to(), point(300.0, 160.0));
    assert_eq!(
        &cubic.control_points()[..],
        &[point(0.0, 300.0), point(300.0, 300.0)]
    );
    assert_eq!(cubic.verb().num_points(), cubic.control_points().len() + 1);

    let quadratic = PathCommand::QuadraticTo {
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };
    assert_eq!(quadratic.verb().num_points(), quadratic.control_points().len() + 1);

    let line = PathCommand::LineTo { to: point(1.0, 0.0) };
    assert!(line.control_points().is_empty());
    assert!(line.is_drawable());

    let move_to = PathCommand::MoveTo { to: point(1.0, 0.0) };
    assert!(!move_to.is_drawable());
    assert_eq!(Verb::Close.num_points(), 0);
}
