#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]
#![no_std]

//! Data structures to build bézier paths and decompose them into segments.
//!
//! This crate is reexported in [curvescan](https://docs.rs/curvescan/).
//!
//! # Examples
//!
//! ```
//! use curvescan_path::{Path, PathCommand};
//! use curvescan_path::math::point;
//!
//! // Create a builder object to build the path.
//! let mut builder = Path::builder();
//! builder.move_to(point(10.0, 20.0));
//! builder.cubic_bezier_to(point(0.0, 300.0), point(300.0, 300.0), point(300.0, 160.0));
//! builder.quadratic_bezier_to(point(800.0, -50.0), point(600.0, 320.0));
//!
//! // Generate the actual path object.
//! let path = builder.build();
//!
//! for command in &path {
//!     println!("{:?}", command);
//! }
//!
//! assert_eq!(path.decompose()[0], PathCommand::MoveTo { to: point(10.0, 20.0) });
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use curvescan_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
mod command;
pub mod path;

#[doc(inline)]
pub use crate::builder::Builder;
pub use crate::command::*;
#[doc(inline)]
pub use crate::path::{Iter, Path};

pub mod math {
    //! f32 version of the curvescan_geom types used everywhere. Most other curvescan
    //! crates reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = euclid::default::Point2D<f32>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }
}
