#![deny(bare_trait_objects)]

//! Optional utilities for the curvescan crates.

extern crate curvescan_path as path;

pub use path::geom::euclid;
pub use path::math;

pub mod parser;
