use curvescan::algorithms::lookup_table::LookupTableOptions;
use curvescan::math::Point;
use curvescan::path::Path;
use std::io;

pub struct SampleCmd {
    pub path: Path,
    pub options: LookupTableOptions,
    pub output: Box<dyn io::Write>,
    pub count: bool,
}

pub struct ClosestCmd {
    pub path: Path,
    pub options: LookupTableOptions,
    pub output: Box<dyn io::Write>,
    pub query: Point,
}
