use crate::{cubic_path, demo_path, zigzag_path};
use approx::assert_abs_diff_eq;
use curvescan::algorithms::lookup_table::{LookupTable, LookupTableOptions};
use curvescan::algorithms::sampled_path::SampledPath;
use curvescan::extra::parser::parse_path;
use curvescan::math::point;
use curvescan::path::Path;

#[test]
fn single_line() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));

    let mut path = SampledPath::new(builder.build());
    path.generate_lookup_table();

    let table = path.lookup_table();
    assert_eq!(table.len(), 101);
    for (i, p) in table.iter().enumerate() {
        assert_abs_diff_eq!(p.x, i as f32 * 0.1, epsilon = 1e-5);
        assert_eq!(p.y, 0.0);
    }
    assert_eq!(table.points()[0], point(0.0, 0.0));
    assert_eq!(table.points()[100], point(10.0, 0.0));

    assert_eq!(path.find_closest_point_on_path(point(5.0, 3.0)), point(5.0, 0.0));
}

#[test]
fn single_cubic() {
    let mut path = SampledPath::new(cubic_path());
    path.generate_lookup_table();

    let table = path.lookup_table();
    assert_eq!(table.len(), 101);
    assert_eq!(table.points()[0], point(10.0, 20.0));
    assert_eq!(table.points()[100], point(300.0, 160.0));

    assert_eq!(table.closest_index(point(0.0, 0.0)), Ok(0));
    assert_eq!(path.find_closest_point_on_path(point(0.0, 0.0)), point(10.0, 20.0));
}

#[test]
fn cubic_then_quadratic() {
    let options = LookupTableOptions::DEFAULT;
    assert_eq!(options.intervals_per_segment(2), 50);

    let table = LookupTable::from_path(&demo_path(), &options);
    assert_eq!(table.len(), 2 * 51);

    // The junction between both segments appears twice.
    assert_eq!(table.points()[50], point(300.0, 160.0));
    assert_eq!(table.points()[51], point(300.0, 160.0));
    assert_eq!(table.points()[101], point(600.0, 320.0));
}

#[test]
fn more_segments_than_samples() {
    let path = zigzag_path(150);

    assert_eq!(LookupTableOptions::DEFAULT.intervals_per_segment(150), 0);

    let table = LookupTable::from_path(&path, &LookupTableOptions::DEFAULT);
    assert_eq!(table.len(), 150);

    // Each segment only contributes its start point.
    let commands = path.decompose();
    assert_eq!(table.points()[0], point(0.0, 0.0));
    for i in 1..150 {
        assert_eq!(table.points()[i], commands[i].to());
    }

    assert_eq!(table.closest_point(point(-3.0, -3.0)), point(0.0, 0.0));
}

#[test]
fn parsed_path_matches_built_path() {
    let parsed = parse_path("M10,20 C0,300 300,300 300,160 Q800,-50 600,320").unwrap();
    assert_eq!(parsed, demo_path());

    let mut a = SampledPath::new(parsed);
    let mut b = SampledPath::new(demo_path());
    a.generate_lookup_table();
    b.generate_lookup_table();

    assert_eq!(a.lookup_table(), b.lookup_table());
}

#[test]
fn closed_sub_paths_are_not_sampled_twice() {
    let open = parse_path("M 0 0 L 10 0 L 10 10").unwrap();
    let closed = parse_path("M 0 0 L 10 0 L 10 10 Z").unwrap();

    let options = LookupTableOptions::sample_budget(10);
    assert_eq!(
        LookupTable::from_path(&open, &options),
        LookupTable::from_path(&closed, &options)
    );
}
