use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::Point;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    #[inline]
    fn weights(t: S) -> (S, S, S) {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        (one_t2, S::TWO * one_t * t, t2)
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        Point::new(self.x(t), self.y(t))
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let (a, b, c) = Self::weights(t);
        self.from.x * a + self.ctrl.x * b + self.to.x * c
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let (a, b, c) = Self::weights(t);
        self.from.y * a + self.ctrl.y * b + self.to.y * c
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        QuadraticBezierSegment {
            from: self.to,
            ctrl: self.ctrl,
            to: self.from,
        }
    }
}

impl<S: Scalar> Segment for QuadraticBezierSegment<S> {
    impl_segment!(S);
}

#[test]
fn sample_endpoints() {
    use crate::point;

    let curve = QuadraticBezierSegment {
        from: point(300.0f32, 160.0),
        ctrl: point(800.0, -50.0),
        to: point(600.0, 320.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
}

#[test]
fn sample_midpoint() {
    use crate::point;

    // P(0.5) = 0.25 * from + 0.5 * ctrl + 0.25 * to.
    let curve = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(2.0, 4.0),
        to: point(4.0, 0.0),
    };

    assert_eq!(curve.sample(0.5), point(2.0, 2.0));
}

#[test]
fn degenerate_curve_is_evaluated_as_is() {
    use crate::point;

    let p = point(3.0f32, 3.0);
    let curve = QuadraticBezierSegment {
        from: p,
        ctrl: p,
        to: p,
    };

    for i in 0..=4 {
        let s = curve.sample(i as f32 / 4.0);
        assert!((s - p).length() < 1e-5);
    }
}
