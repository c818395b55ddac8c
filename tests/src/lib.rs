//! Shared fixtures for the end-to-end tests and the benchmarks.

use curvescan::math::point;
use curvescan::path::Path;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;

/// A cubic bézier followed by a quadratic bézier.
pub fn demo_path() -> Path {
    let mut builder = Path::builder();
    builder.move_to(point(10.0, 20.0));
    builder.cubic_bezier_to(point(0.0, 300.0), point(300.0, 300.0), point(300.0, 160.0));
    builder.quadratic_bezier_to(point(800.0, -50.0), point(600.0, 320.0));

    builder.build()
}

/// A single cubic bézier segment.
pub fn cubic_path() -> Path {
    let mut builder = Path::builder();
    builder.move_to(point(10.0, 20.0));
    builder.cubic_bezier_to(point(0.0, 300.0), point(300.0, 300.0), point(300.0, 160.0));

    builder.build()
}

/// A polyline zig-zagging along the x axis with `num_segments` edges.
pub fn zigzag_path(num_segments: usize) -> Path {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    for i in 1..=num_segments {
        let y = if i % 2 == 0 { 0.0 } else { 10.0 };
        builder.line_to(point(i as f32 * 5.0, y));
    }

    builder.build()
}

/// Several sub-paths mixing every kind of segment, some of them closed.
pub fn mixed_path() -> Path {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(100.0, 0.0));
    builder.quadratic_bezier_to(point(150.0, 50.0), point(100.0, 100.0));
    builder.close();
    builder.move_to(point(200.0, 200.0));
    builder.cubic_bezier_to(point(250.0, 150.0), point(300.0, 250.0), point(350.0, 200.0));
    builder.line_to(point(350.0, 300.0));
    builder.move_to(point(-50.0, -50.0));
    builder.line_to(point(-50.0, 50.0));

    builder.build()
}
