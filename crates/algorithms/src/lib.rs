#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Sampled approximations of 2d paths and nearest-point queries against them.
//!
//! This crate is reexported in [curvescan](https://docs.rs/curvescan/).
//!
//! A path is approximated by a [lookup table](lookup_table/index.html): a flat,
//! ordered array of points obtained by sampling each segment uniformly in parameter
//! space. Nearest-point queries are answered with a linear scan over that array.
//!
//! ```
//! use curvescan_algorithms::path::Path;
//! use curvescan_algorithms::math::point;
//! use curvescan_algorithms::sampled_path::SampledPath;
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//!
//! let mut path = SampledPath::new(builder.build());
//! path.generate_lookup_table();
//!
//! assert_eq!(path.lookup_table().len(), 101);
//! assert_eq!(path.find_closest_point_on_path(point(5.0, 3.0)), point(5.0, 0.0));
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub extern crate curvescan_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod closest;
mod error;
pub mod lookup_table;
pub mod sampled_path;

pub use crate::error::LookupTableError;
pub use crate::path::geom;
pub use crate::path::math;
