use crate::scalar::Scalar;
use crate::Point;

/// Common APIs to segment types.
pub trait Segment: Copy + Sized {
    type Scalar: Scalar;

    /// Start of the curve.
    fn from(&self) -> Point<Self::Scalar>;

    /// End of the curve.
    fn to(&self) -> Point<Self::Scalar>;

    /// Sample the curve at t (expecting t between 0 and 1).
    fn sample(&self, t: Self::Scalar) -> Point<Self::Scalar>;

    /// Sample x at t (expecting t between 0 and 1).
    fn x(&self, t: Self::Scalar) -> Self::Scalar {
        self.sample(t).x
    }

    /// Sample y at t (expecting t between 0 and 1).
    fn y(&self, t: Self::Scalar) -> Self::Scalar {
        self.sample(t).y
    }

    /// Swap the direction of the segment.
    fn flip(&self) -> Self;

    /// Evaluates the curve at `num_intervals + 1` evenly spaced values of `t`,
    /// `t = i / num_intervals` for `i` in `0..=num_intervals`, in increasing order.
    ///
    /// Both endpoints are included. With `num_intervals == 0` the curve is only
    /// sampled once, at `t = 0`.
    fn for_each_uniform_sample(
        &self,
        num_intervals: usize,
        callback: &mut dyn FnMut(Point<Self::Scalar>),
    ) {
        if num_intervals == 0 {
            callback(self.sample(Self::Scalar::ZERO));
            return;
        }

        let n = Self::Scalar::from_usize(num_intervals);
        for i in 0..=num_intervals {
            let t = Self::Scalar::from_usize(i) / n;
            callback(self.sample(t));
        }
    }
}

macro_rules! impl_segment {
    ($S:ty) => {
        type Scalar = $S;
        fn from(&self) -> Point<$S> {
            self.from()
        }
        fn to(&self) -> Point<$S> {
            self.to()
        }
        fn sample(&self, t: $S) -> Point<$S> {
            self.sample(t)
        }
        fn x(&self, t: $S) -> $S {
            self.x(t)
        }
        fn y(&self, t: $S) -> $S {
            self.y(t)
        }
        fn flip(&self) -> Self {
            self.flip()
        }
    };
}

#[test]
fn uniform_samples_include_both_endpoints() {
    use crate::{point, LineSegment, Segment};
    use std::vec::Vec;

    let line = LineSegment {
        from: point(0.0f32, 0.0),
        to: point(4.0, 0.0),
    };

    let mut samples = Vec::new();
    line.for_each_uniform_sample(4, &mut |p| samples.push(p));

    assert_eq!(
        samples,
        [
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(2.0, 0.0),
            point(3.0, 0.0),
            point(4.0, 0.0),
        ]
    );
}

#[test]
fn zero_intervals_yields_the_start_point() {
    use crate::{point, QuadraticBezierSegment, Segment};
    use std::vec::Vec;

    let curve = QuadraticBezierSegment {
        from: point(1.0f32, 2.0),
        ctrl: point(5.0, 5.0),
        to: point(9.0, 2.0),
    };

    let mut samples = Vec::new();
    curve.for_each_uniform_sample(0, &mut |p| samples.push(p));

    assert_eq!(samples, [point(1.0, 2.0)]);
}
