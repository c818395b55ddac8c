#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 2D curve primitives on top of euclid.
//!
//! This crate is reexported in [curvescan](https://docs.rs/curvescan/).
//!
//! # Overview.
//!
//! This crate implements the maths to evaluate:
//!
//! - line segments,
//! - quadratic bézier curves,
//! - cubic bézier curves.
//!
//! All of them are parametrized over `t ∈ [0, 1]`, `t = 0` being the start of the
//! segment and `t = 1` its end. Evaluation uses the Bernstein basis directly, without
//! any special handling of degenerate (coincident or collinear) control points.
//!
//! ```
//! use curvescan_geom::{point, CubicBezierSegment};
//!
//! let curve = CubicBezierSegment {
//!     from: point(10.0, 20.0),
//!     ctrl1: point(0.0, 300.0),
//!     ctrl2: point(300.0, 300.0),
//!     to: point(300.0, 160.0),
//! };
//!
//! assert_eq!(curve.sample(0.0), point(10.0, 20.0));
//! assert_eq!(curve.sample(1.0), point(300.0, 160.0));
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

#[macro_use]
mod segment;
pub mod cubic_bezier;
mod line;
pub mod quadratic_bezier;

#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::segment::Segment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::cast::cast;
    pub(crate) use num_traits::{Float, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float + NumCast + Sized + Display + Debug + AddAssign + SubAssign + MulAssign + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;

        /// Converts a sample index into a scalar.
        fn from_usize(v: usize) -> Self {
            cast(v).unwrap_or_else(Self::max_value)
        }
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}
