use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::Point;

/// A linear segment.
///
/// The segment is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t) * from + t * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        let one_t = S::ONE - t;
        Point::new(
            self.from.x * one_t + self.to.x * t,
            self.from.y * one_t + self.to.y * t,
        )
    }

    /// Sample the x coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn x(&self, t: S) -> S {
        self.from.x * (S::ONE - t) + self.to.x * t
    }

    /// Sample the y coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn y(&self, t: S) -> S {
        self.from.y * (S::ONE - t) + self.to.y * t
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }
}

impl<S: Scalar> Segment for LineSegment<S> {
    impl_segment!(S);
}

#[test]
fn sample_endpoints() {
    use crate::point;

    let l = LineSegment {
        from: point(-3.5f32, 7.25),
        to: point(12.0, -1.5),
    };

    assert_eq!(l.sample(0.0), l.from);
    assert_eq!(l.sample(1.0), l.to);
    assert_eq!(l.sample(0.5), point(4.25, 2.875));
}

#[test]
fn sample_matches_coordinates() {
    use crate::point;

    let l = LineSegment {
        from: point(0.0f64, 10.0),
        to: point(10.0, 0.0),
    };

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let p = l.sample(t);
        assert_eq!(p.x, l.x(t));
        assert_eq!(p.y, l.y(t));
        assert!((p.x + p.y - 10.0).abs() < 1e-12);
    }
}

#[test]
fn flip() {
    use crate::point;

    let l = LineSegment {
        from: point(1.0f32, 1.0),
        to: point(4.0, 5.0),
    };

    assert_eq!(l.flip().from, point(4.0, 5.0));
    assert_eq!(l.flip().sample(0.25), l.sample(0.75));
}
