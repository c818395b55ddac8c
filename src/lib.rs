#![deny(bare_trait_objects)]

//! Nearest-point queries against sampled 2D bézier paths.
//!
//! # Crates
//!
//! This meta-crate (`curvescan`) reexports the following sub-crates for convenience:
//!
//! * **curvescan_geom** - Line, quadratic and cubic bézier segments and their evaluation.
//! * **curvescan_path** - Tools to build paths and decompose them into drawing commands.
//! * **curvescan_algorithms** - Lookup table generation and nearest-point search.
//! * **curvescan_extra** - An SVG path data parser.
//!
//! Each `curvescan_<name>` crate is reexported as a `<name>` module in `curvescan`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! When using the main crate `curvescan`, the `curvescan_extra` dependency is disabled
//! by default. It can be added with the feature flag `extra`.
//!
//! # Examples
//!
//! ## Finding the point of a path closest to the cursor
//!
//! ```
//! use curvescan::math::point;
//! use curvescan::path::Path;
//! use curvescan::algorithms::sampled_path::SampledPath;
//!
//! // Build a Path.
//! let mut builder = Path::builder();
//! builder.move_to(point(10.0, 20.0));
//! builder.cubic_bezier_to(point(0.0, 300.0), point(300.0, 300.0), point(300.0, 160.0));
//! builder.quadratic_bezier_to(point(800.0, -50.0), point(600.0, 320.0));
//!
//! // Sample it. With the default budget of 100 samples and two segments,
//! // each segment is split into 50 intervals.
//! let mut path = SampledPath::new(builder.build());
//! path.generate_lookup_table();
//! assert_eq!(path.lookup_table().len(), 102);
//!
//! // The closest sample to the start of the path is the start of the path.
//! assert_eq!(path.find_closest_point_on_path(point(0.0, 0.0)), point(10.0, 20.0));
//! ```
//!
//! ## Choosing the sample budget
//!
//! The total number of samples is approximately distributed evenly among the
//! drawable segments of the path:
//!
//! ```
//! use curvescan::math::point;
//! use curvescan::path::Path;
//! use curvescan::algorithms::lookup_table::{LookupTable, LookupTableOptions};
//!
//! let mut builder = Path::builder();
//! builder.move_to(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! builder.line_to(point(10.0, 10.0));
//! let path = builder.build();
//!
//! let table = LookupTable::from_path(&path, &LookupTableOptions::sample_budget(20));
//! assert_eq!(table.len(), 22);
//! ```

pub extern crate curvescan_algorithms;
#[cfg(feature = "extra")]
pub extern crate curvescan_extra;

pub use curvescan_algorithms as algorithms;
#[cfg(feature = "extra")]
pub use curvescan_extra as extra;
pub use algorithms::geom;
pub use algorithms::path;

pub use path::math;
