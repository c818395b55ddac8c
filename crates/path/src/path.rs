//! The default path data structure.
//!

use crate::builder::Builder;
use crate::math::Point;
use crate::{PathCommand, Verb};

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;

/// A simple path data structure.
///
/// # Representation
///
/// Paths contain two buffers:
/// - a buffer of verbs (MoveTo, LineTo, QuadraticTo, CubicTo or Close),
/// - and a buffer of points that can be endpoints or control points.
///
/// The order of storage for points is determined by the sequence of verbs. For each
/// verb, its control points (if any) come first, followed by its endpoint.
///
/// ```ascii
///  ___________________________________
/// |        |        |             |
/// | MoveTo | LineTo | QuadraticTo | ...
/// |________|________|_____________|___
///  ________________________________________
/// |         |         |          |         |
/// |start x,y| to x, y | ctrl x,y | to x, y | ...
/// |_________|_________|__________|_________|
/// ```
///
/// The buffers can be provided directly through [`Path::from_raw_parts`], in which case
/// nothing guarantees that they agree with each other until the path is decomposed.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    points: Box<[Point]>,
    verbs: Box<[Verb]>,
}

impl Path {
    /// Creates a [Builder](../builder/struct.Builder.html) to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates an Empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            points: Box::new([]),
            verbs: Box::new([]),
        }
    }

    /// Creates a path from a raw command stream.
    ///
    /// The buffers are not validated here. Decomposing a path whose verbs don't
    /// match its points panics.
    pub fn from_raw_parts(verbs: Vec<Verb>, points: Vec<Point>) -> Path {
        Path {
            points: points.into_boxed_slice(),
            verbs: verbs.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Iterates over the commands of the path, skipping close markers.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.points, &self.verbs)
    }

    /// Decomposes the path into an ordered list of commands.
    ///
    /// Close markers carry no geometry of their own and are dropped.
    ///
    /// # Panics
    ///
    /// If the command stream is malformed, that is if the number of points doesn't
    /// match what the verbs require.
    pub fn decompose(&self) -> Vec<PathCommand> {
        self.iter().collect()
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<T: IntoIterator<Item = PathCommand>>(iter: T) -> Path {
        let mut builder = Path::builder();
        for command in iter.into_iter() {
            builder.command(command);
        }

        builder.build()
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathCommand;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.x, formatter)?;
            write!(formatter, " ")?;
            fmt::Debug::fmt(&point.y, formatter)
        }

        write!(formatter, "\"")?;

        let mut points = self.points.iter();
        for verb in self.verbs.iter() {
            let letter = match verb {
                Verb::MoveTo => " M",
                Verb::LineTo => " L",
                Verb::QuadraticTo => " Q",
                Verb::CubicTo => " C",
                Verb::Close => " Z",
            };
            write!(formatter, "{}", letter)?;
            for _ in 0..verb.num_points() {
                match points.next() {
                    Some(p) => write_point(formatter, *p)?,
                    None => write!(formatter, " ?")?,
                }
            }
        }

        write!(formatter, "\"")
    }
}

/// An iterator decomposing a `Path` into [`PathCommand`](../enum.PathCommand.html)s.
///
/// Each verb pulls its points from the point buffer according to its arity. Close
/// markers are skipped.
///
/// # Panics
///
/// Running out of points, or having points left once all verbs are consumed, means
/// the command stream is corrupted. The iterator panics rather than silently
/// truncating the output.
#[derive(Clone)]
pub struct Iter<'l> {
    points: &'l [Point],
    verbs: core::slice::Iter<'l, Verb>,
}

impl<'l> Iter<'l> {
    fn new(points: &'l [Point], verbs: &'l [Verb]) -> Self {
        Iter {
            points,
            verbs: verbs.iter(),
        }
    }

    #[inline]
    fn take_points(&mut self, verb: Verb) -> &'l [Point] {
        let n = verb.num_points();
        assert!(
            self.points.len() >= n,
            "Malformed path: {:?} requires {} point(s) but only {} remain.",
            verb,
            n,
            self.points.len(),
        );
        let (taken, rest) = self.points.split_at(n);
        self.points = rest;

        taken
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathCommand;
    fn next(&mut self) -> Option<PathCommand> {
        loop {
            let verb = match self.verbs.next() {
                Some(verb) => *verb,
                None => {
                    assert!(
                        self.points.is_empty(),
                        "Malformed path: {} point(s) left after the last command.",
                        self.points.len(),
                    );
                    return None;
                }
            };

            let p = self.take_points(verb);
            return Some(match verb {
                Verb::MoveTo => PathCommand::MoveTo { to: p[0] },
                Verb::LineTo => PathCommand::LineTo { to: p[0] },
                Verb::QuadraticTo => PathCommand::QuadraticTo {
                    ctrl: p[0],
                    to: p[1],
                },
                Verb::CubicTo => PathCommand::CubicTo {
                    ctrl1: p[0],
                    ctrl2: p[1],
                    to: p[2],
                },
                Verb::Close => continue,
            });
        }
    }
}

#[cfg(test)]
use alloc::{format, vec};

#[test]
fn decompose_simple() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(10.0, 20.0));
    builder.cubic_bezier_to(point(0.0, 300.0), point(300.0, 300.0), point(300.0, 160.0));
    builder.quadratic_bezier_to(point(800.0, -50.0), point(600.0, 320.0));
    builder.line_to(point(0.0, 0.0));
    let path = builder.build();

    assert_eq!(
        path.decompose(),
        vec![
            PathCommand::MoveTo {
                to: point(10.0, 20.0)
            },
            PathCommand::CubicTo {
                ctrl1: point(0.0, 300.0),
                ctrl2: point(300.0, 300.0),
                to: point(300.0, 160.0),
            },
            PathCommand::QuadraticTo {
                ctrl: point(800.0, -50.0),
                to: point(600.0, 320.0),
            },
            PathCommand::LineTo {
                to: point(0.0, 0.0)
            },
        ]
    );
}

#[test]
fn decompose_drops_close() {
    use crate::math::point;

    let path = Path::from_raw_parts(
        vec![Verb::MoveTo, Verb::LineTo, Verb::LineTo, Verb::Close],
        vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)],
    );

    let commands = path.decompose();
    assert_eq!(commands.len(), 3);
    assert!(commands.iter().all(|cmd| cmd.verb() != Verb::Close));
    assert_eq!(commands[2].to(), point(1.0, 1.0));
}

#[test]
fn decompose_empty() {
    assert!(Path::new().decompose().is_empty());
    assert!(Path::new().is_empty());
}

#[test]
#[should_panic(expected = "Malformed path")]
fn decompose_missing_points() {
    use crate::math::point;

    let path = Path::from_raw_parts(
        vec![Verb::MoveTo, Verb::CubicTo],
        vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)],
    );

    path.decompose();
}

#[test]
#[should_panic(expected = "Malformed path")]
fn decompose_extra_points() {
    use crate::math::point;

    let path = Path::from_raw_parts(
        vec![Verb::MoveTo, Verb::LineTo],
        vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)],
    );

    path.decompose();
}

#[test]
fn from_iterator() {
    use crate::math::point;

    let commands = vec![
        PathCommand::MoveTo {
            to: point(0.0, 0.0),
        },
        PathCommand::QuadraticTo {
            ctrl: point(1.0, 2.0),
            to: point(2.0, 0.0),
        },
    ];

    let path: Path = commands.iter().cloned().collect();
    assert_eq!(path.decompose(), commands);
    assert_eq!(path.verbs(), &[Verb::MoveTo, Verb::QuadraticTo]);
    assert_eq!(path.points().len(), 3);
}

#[test]
fn debug_svg_syntax() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 2.0));
    builder.close();
    let path = builder.build();

    assert_eq!(format!("{:?}", path), "\" M 0.0 0.0 L 1.0 2.0 Z\"");
}
