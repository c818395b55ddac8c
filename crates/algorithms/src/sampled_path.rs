//! A path bundled with its lookup table.

use crate::error::LookupTableError;
use crate::lookup_table::{LookupTable, LookupTableOptions};
use crate::math::Point;
use crate::path::Path;

/// A path that can answer nearest-point queries.
///
/// The lookup table is empty until [`generate_lookup_table`](#method.generate_lookup_table)
/// is called. Generating it again replaces the previous samples rather than appending
/// to them, so the table always reflects the current path and options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledPath {
    path: Path,
    options: LookupTableOptions,
    lookup_table: LookupTable,
}

impl SampledPath {
    pub fn new(path: Path) -> Self {
        Self::with_options(path, LookupTableOptions::DEFAULT)
    }

    pub fn with_options(path: Path, options: LookupTableOptions) -> Self {
        SampledPath {
            path,
            options,
            lookup_table: LookupTable::new(),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn options(&self) -> &LookupTableOptions {
        &self.options
    }

    /// The samples produced by the last call to `generate_lookup_table`.
    #[inline]
    pub fn lookup_table(&self) -> &LookupTable {
        &self.lookup_table
    }

    /// Samples the path, replacing any previously generated lookup table.
    ///
    /// # Panics
    ///
    /// If the path's command stream is malformed.
    pub fn generate_lookup_table(&mut self) {
        self.lookup_table = LookupTable::from_path(&self.path, &self.options);
    }

    /// Returns the sample of the lookup table closest to `point`.
    pub fn try_find_closest_point_on_path(&self, point: Point) -> Result<Point, LookupTableError> {
        self.lookup_table.try_closest_point(point)
    }

    /// Returns the sample of the lookup table closest to `point`.
    ///
    /// # Panics
    ///
    /// If the lookup table is empty, which is the case before `generate_lookup_table`
    /// is called or when the path has no drawable segment.
    pub fn find_closest_point_on_path(&self, point: Point) -> Point {
        self.lookup_table.closest_point(point)
    }
}

impl From<Path> for SampledPath {
    fn from(path: Path) -> Self {
        SampledPath::new(path)
    }
}

#[test]
fn generate_is_idempotent() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    let mut path = SampledPath::new(builder.build());

    assert!(path.lookup_table().is_empty());

    path.generate_lookup_table();
    let first = path.lookup_table().clone();
    path.generate_lookup_table();

    assert_eq!(first.len(), 101);
    assert_eq!(path.lookup_table(), &first);
}

#[test]
fn query_before_generation() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    let path: SampledPath = builder.build().into();

    assert_eq!(
        path.try_find_closest_point_on_path(point(1.0, 1.0)),
        Err(LookupTableError::Empty)
    );
}

#[test]
fn custom_options() {
    use crate::math::point;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    let options = LookupTableOptions::sample_budget(10);
    let mut path = SampledPath::with_options(builder.build(), options);
    path.generate_lookup_table();

    assert_eq!(path.options(), &options);
    assert_eq!(path.lookup_table().len(), 11);
    assert_eq!(path.path().verbs().len(), 2);
    assert_eq!(path.find_closest_point_on_path(point(5.2, -2.0)), point(5.0, 0.0));
}
