use crate::commands::ClosestCmd;
use anyhow::Context;
use curvescan::algorithms::lookup_table::LookupTable;
use std::io::Write;

pub fn closest(mut cmd: ClosestCmd) -> anyhow::Result<()> {
    let table = LookupTable::from_path(&cmd.path, &cmd.options);

    let index = table
        .closest_index(cmd.query)
        .with_context(|| format!("Cannot find the point closest to {:?}", cmd.query))?;
    let p = table.points()[index];

    writeln!(&mut *cmd.output, "{} {} (sample {} of {})", p.x, p.y, index, table.len())?;

    Ok(())
}
