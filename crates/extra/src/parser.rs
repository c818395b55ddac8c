//! Build paths from SVG path data.
//!
//! ```
//! use curvescan_extra::parser::parse_path;
//!
//! let path = parse_path("M 10 20 C 0 300 300 300 300 160 Q 800 -50 600 320").unwrap();
//! assert_eq!(path.decompose().len(), 3);
//! ```

use crate::path::builder::Builder;
use crate::path::math::{point, Point};
use crate::path::Path;

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Invalid command {command:?}.")]
    Command {
        command: char,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Expected move-to command, got {command:?}.")]
    MissingMoveTo {
        command: char,
        line: i32,
        column: i32,
    },
}

/// Parses SVG path data into a `Path`.
///
/// Supports the `M`, `L`, `H`, `V`, `Q`, `T`, `C`, `S` and `Z` commands in their absolute
/// and relative forms. Elliptic arcs are rejected.
pub fn parse_path(src: &str) -> Result<Path, ParseError> {
    let mut builder = Path::builder();
    PathParser::new().parse(&mut Source::new(src.chars()), &mut builder)?;

    Ok(builder.build())
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }
}

/// A context object for parsing SVG path data.
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    number_line: i32,
    number_column: i32,
    current_position: Point,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<Iter>(
        &mut self,
        src: &mut Source<Iter>,
        output: &mut Builder,
    ) -> Result<(), ParseError>
    where
        Iter: Iterator<Item = char>,
    {
        // "If a relative moveto (m) appears as the first element of the path, then it is
        // treated as a pair of absolute coordinates."
        self.current_position = point(0.0, 0.0);
        let mut first_position = point(0.0, 0.0);

        let mut need_start = true;
        let mut prev_cubic_ctrl = None;
        let mut prev_quadratic_ctrl = None;
        let mut implicit_cmd = 'M';

        src.skip_whitespace();

        while !src.finished {
            let mut cmd = src.current;
            let cmd_line = src.line;
            let cmd_col = src.col;

            if cmd.is_ascii_alphabetic() {
                src.advance_one();
            } else {
                cmd = implicit_cmd;
            }

            if need_start && is_command(cmd) && cmd != 'm' && cmd != 'M' {
                return Err(ParseError::MissingMoveTo {
                    command: cmd,
                    line: cmd_line,
                    column: cmd_col,
                });
            }

            let is_relative = cmd.is_lowercase();

            match cmd {
                'l' | 'L' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    output.line_to(to);
                }
                'h' | 'H' => {
                    let mut x = self.parse_number(src)?;
                    if is_relative {
                        x += self.current_position.x;
                    }
                    let to = self.finite(point(x, self.current_position.y))?;
                    self.current_position = to;
                    output.line_to(to);
                }
                'v' | 'V' => {
                    let mut y = self.parse_number(src)?;
                    if is_relative {
                        y += self.current_position.y;
                    }
                    let to = self.finite(point(self.current_position.x, y))?;
                    self.current_position = to;
                    output.line_to(to);
                }
                'q' | 'Q' => {
                    let ctrl = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_bezier_to(ctrl, to);
                }
                't' | 'T' => {
                    let ctrl = self.get_smooth_ctrl(prev_quadratic_ctrl)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_quadratic_ctrl = Some(ctrl);
                    output.quadratic_bezier_to(ctrl, to);
                }
                'c' | 'C' => {
                    let ctrl1 = self.parse_point(is_relative, src)?;
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                's' | 'S' => {
                    let ctrl1 = self.get_smooth_ctrl(prev_cubic_ctrl)?;
                    let ctrl2 = self.parse_point(is_relative, src)?;
                    let to = self.parse_endpoint(is_relative, src)?;
                    prev_cubic_ctrl = Some(ctrl2);
                    output.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                'm' | 'M' => {
                    let to = self.parse_endpoint(is_relative, src)?;
                    first_position = to;
                    output.move_to(to);
                    need_start = false;
                }
                'z' | 'Z' => {
                    output.close();
                    self.current_position = first_position;
                    need_start = true;
                }
                _ => {
                    return Err(ParseError::Command {
                        command: cmd,
                        line: cmd_line,
                        column: cmd_col,
                    });
                }
            }

            match cmd {
                'c' | 'C' | 's' | 'S' => {
                    prev_quadratic_ctrl = None;
                }
                'q' | 'Q' | 't' | 'T' => {
                    prev_cubic_ctrl = None;
                }
                _ => {
                    prev_cubic_ctrl = None;
                    prev_quadratic_ctrl = None;
                }
            }

            implicit_cmd = match cmd {
                'm' => 'l',
                'M' => 'L',
                'z' => 'm',
                'Z' => 'M',
                c => c,
            };

            src.skip_whitespace();
        }

        Ok(())
    }

    fn get_smooth_ctrl(&self, prev_ctrl: Option<Point>) -> Result<Point, ParseError> {
        if let Some(prev_ctrl) = prev_ctrl {
            self.finite(self.current_position + (self.current_position - prev_ctrl))
        } else {
            Ok(self.current_position)
        }
    }

    // Relative coordinates and reflected control points can overflow even when
    // every number in the source fits in an f32.
    fn finite(&self, p: Point) -> Result<Point, ParseError> {
        if p.x.is_finite() && p.y.is_finite() {
            return Ok(p);
        }

        Err(ParseError::Number {
            src: self.float_buffer.clone(),
            line: self.number_line,
            column: self.number_column,
        })
    }

    fn parse_endpoint(
        &mut self,
        is_relative: bool,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<Point, ParseError> {
        let position = self.parse_point(is_relative, src)?;
        self.current_position = position;

        Ok(position)
    }

    fn parse_point(
        &mut self,
        is_relative: bool,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<Point, ParseError> {
        let mut x = self.parse_number(src)?;
        let mut y = self.parse_number(src)?;

        if is_relative {
            x += self.current_position.x;
            y += self.current_position.y;
        }

        self.finite(point(x, y))
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f32, ParseError> {
        self.float_buffer.clear();

        src.skip_whitespace();

        let line = src.line;
        let column = src.col;
        self.number_line = line;
        self.number_column = column;

        if src.current == '-' {
            self.float_buffer.push('-');
            src.advance_one();
        }

        while src.current.is_ascii_digit() {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' {
                self.float_buffer.push('-');
                src.advance_one();
            }

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        match self.float_buffer.parse::<f32>() {
            Ok(val) if val.is_finite() => Ok(val),
            _ => Err(ParseError::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }
}

fn is_command(c: char) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        'M' | 'L' | 'H' | 'V' | 'Q' | 'T' | 'C' | 'S' | 'Z'
    )
}

#[cfg(test)]
use crate::path::PathCommand;

#[test]
fn empty() {
    assert!(parse_path("").unwrap().is_empty());
    assert!(parse_path(" ").unwrap().is_empty());
}

#[test]
fn simple_square() {
    let path = parse_path("M 0 0 L 1 0 L 1 1 L 0 1 Z").unwrap();

    assert_eq!(
        path.decompose(),
        vec![
            PathCommand::MoveTo { to: point(0.0, 0.0) },
            PathCommand::LineTo { to: point(1.0, 0.0) },
            PathCommand::LineTo { to: point(1.0, 1.0) },
            PathCommand::LineTo { to: point(0.0, 1.0) },
        ]
    );
}

#[test]
fn curves() {
    let path = parse_path("M10,20 C0,300 300,300 300,160 Q800,-50 600,320").unwrap();

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
        ]
    );
}

#[test]
fn relative_and_smooth_commands() {
    let path = parse_path("m 1 1 h 2 v 2 l -1 0 q 1 1 2 0 t 2 0 c 0 1 1 1 1 0 s 1 -1 1 0").unwrap();
    let commands = path.decompose();

    assert_eq!(commands[0], PathCommand::MoveTo { to: point(1.0, 1.0) });
    assert_eq!(commands[1], PathCommand::LineTo { to: point(3.0, 1.0) });
    assert_eq!(commands[2], PathCommand::LineTo { to: point(3.0, 3.0) });
    assert_eq!(commands[3], PathCommand::LineTo { to: point(2.0, 3.0) });
    assert_eq!(
        commands[4],
        PathCommand::QuadraticTo {
            ctrl: point(3.0, 4.0),
            to: point(4.0, 3.0)
        }
    );
    // Reflection of the previous control point.
    assert_eq!(
        commands[5],
        PathCommand::QuadraticTo {
            ctrl: point(5.0, 2.0),
            to: point(6.0, 3.0)
        }
    );
    assert_eq!(
        commands[6],
        PathCommand::CubicTo {
            ctrl1: point(6.0, 4.0),
            ctrl2: point(7.0, 4.0),
            to: point(7.0, 3.0)
        }
    );
    assert_eq!(
        commands[7],
        PathCommand::CubicTo {
            ctrl1: point(7.0, 2.0),
            ctrl2: point(8.0, 2.0),
            to: point(8.0, 3.0)
        }
    );
}

#[test]
fn implicit_polyline() {
    let path = parse_path("0 0 1 1 2 2 3 3").unwrap();
    let commands = path.decompose();

    assert_eq!(commands.len(), 4);
    assert_eq!(commands[0], PathCommand::MoveTo { to: point(0.0, 0.0) });
    assert_eq!(commands[3], PathCommand::LineTo { to: point(3.0, 3.0) });
}

#[test]
fn invalid_cmd() {
    assert_eq!(
        parse_path("x 0 0 0").err().unwrap(),
        ParseError::Command {
            command: 'x',
            line: 0,
            column: 0
        }
    );

    assert_eq!(
        parse_path("\n M 0 \n0 x 1 1 1").err().unwrap(),
        ParseError::Command {
            command: 'x',
            line: 2,
            column: 2
        }
    );

    match parse_path("M 0 0 A 1 1 0 0 1 2 2") {
        Err(ParseError::Command { command: 'A', .. }) => {}
        other => panic!("{:?}", other),
    }

    // Unknown letters are reported as such even where a move-to is expected.
    match parse_path("a 1 1 0 0 1 2 2") {
        Err(ParseError::Command { command: 'a', .. }) => {}
        other => panic!("{:?}", other),
    }
    match parse_path("M 0 0 Z x 1 1") {
        Err(ParseError::Command { command: 'x', .. }) => {}
        other => panic!("{:?}", other),
    }
}

#[test]
fn number_01() {
    // Per SVG spec, this is equivalent to "M 0.6 0.5".
    let path = parse_path("M 0.6.5").unwrap();

    assert_eq!(
        path.decompose(),
        vec![PathCommand::MoveTo {
            to: point(0.6, 0.5)
        }]
    );
}

#[test]
fn number_scientific_notation() {
    let path = parse_path("M 1e-2 -1E3").unwrap();

    assert_eq!(path.points(), &[point(0.01, -1000.0)]);
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| match parse_path(src) {
        Err(ParseError::Number { .. }) => true,
        r => {
            println!("{:?}", r);
            false
        }
    };

    assert!(bad_number("M 0 --1"));
    assert!(bad_number("M 0 1ee2"));
    assert!(bad_number("M 0 1e--1"));
    assert!(bad_number("M 0 *2"));
    assert!(bad_number("M 0 e"));
    assert!(bad_number("M 0 1e"));
    assert!(bad_number("M 0 +1"));
}

#[test]
fn need_start() {
    match parse_path("M 0 0 Z L 1 1 2 2 L 3 3 Z M 4 4") {
        Err(ParseError::MissingMoveTo { command: 'L', .. }) => {}
        other => panic!("{:?}", other),
    }

    match parse_path("L 1 1") {
        Err(ParseError::MissingMoveTo { command: 'L', .. }) => {}
        other => panic!("{:?}", other),
    }

    let path = parse_path("M 0 0 L 1 0 Z M 4 4 L 5 5").unwrap();
    assert_eq!(path.decompose().len(), 4);
}

#[test]
fn error_messages() {
    let err = parse_path("M 0 0 L 1 x").err().unwrap();

    assert_eq!(err.to_string(), "Line 0 Column 10: Expected number, got \"\".");
}

#[test]
fn out_of_range_numbers() {
    match parse_path("M 0 0 L 1e39 0") {
        Err(ParseError::Number { src, line: 0, column: 8 }) => assert_eq!(src, "1e39"),
        other => panic!("{:?}", other),
    }

    match parse_path("M 0 0 L 0 -1e39") {
        Err(ParseError::Number { .. }) => {}
        other => panic!("{:?}", other),
    }

    // Each number fits, their sum doesn't.
    match parse_path("M 3e38 0 l 3e38 0") {
        Err(ParseError::Number { src, .. }) => assert_eq!(src, "0"),
        other => panic!("{:?}", other),
    }

    match parse_path("M 0 0 h 3e38 h 3e38") {
        Err(ParseError::Number { .. }) => {}
        other => panic!("{:?}", other),
    }

    match parse_path("M 3e38 0 Q -3e38 0 3e38 0 T 0 0") {
        Err(ParseError::Number { .. }) => {}
        other => panic!("{:?}", other),
    }
}
