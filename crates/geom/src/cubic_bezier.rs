use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::Point;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    #[inline]
    fn weights(t: S) -> (S, S, S, S) {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        (one_t3, S::THREE * one_t2 * t, S::THREE * one_t * t2, t3)
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        Point::new(self.x(t), self.y(t))
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let (a, b, c, d) = Self::weights(t);
        self.from.x * a + self.ctrl1.x * b + self.ctrl2.x * c + self.to.x * d
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let (a, b, c, d) = Self::weights(t);
        self.from.y * a + self.ctrl1.y * b + self.ctrl2.y * c + self.to.y * d
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
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }
}

impl<S: Scalar> Segment for CubicBezierSegment<S> {
    impl_segment!(S);
}

#[test]
fn sample_endpoints() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(10.0f32, 20.0),
        ctrl1: point(0.0, 300.0),
        ctrl2: point(300.0, 300.0),
        to: point(300.0, 160.0),
    };

    assert_eq!(curve.sample(0.0), curve.from);
    assert_eq!(curve.sample(1.0), curve.to);
}

#[test]
fn sample_midpoint() {
    use crate::point;

    // P(0.5) = (from + 3 * ctrl1 + 3 * ctrl2 + to) / 8.
    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(0.0, 8.0),
        ctrl2: point(8.0, 8.0),
        to: point(8.0, 0.0),
    };

    assert_eq!(curve.sample(0.5), point(4.0, 6.0));
}

#[test]
fn flip_reverses_parametrization() {
    use crate::point;

    let curve = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 3.0),
        ctrl2: point(5.0, -2.0),
        to: point(7.0, 1.0),
    };
    let flipped = curve.flip();

    for i in 0..=8 {
        let t = i as f64 / 8.0;
        let a = curve.sample(t);
        let b = flipped.sample(1.0 - t);
        assert!((a - b).length() < 1e-9);
    }
}
