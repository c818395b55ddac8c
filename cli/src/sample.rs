use crate::commands::SampleCmd;
use curvescan::algorithms::lookup_table::LookupTable;
use std::io::Write;

pub fn sample(mut cmd: SampleCmd) -> anyhow::Result<()> {
    let table = LookupTable::from_path(&cmd.path, &cmd.options);

    if cmd.count {
        let num_segments = cmd.path.iter().filter(|c| c.is_drawable()).count();
        writeln!(&mut *cmd.output, "segments: {}", num_segments)?;
        writeln!(&mut *cmd.output, "samples: {}", table.len())?;

        return Ok(());
    }

    for p in &table {
        writeln!(&mut *cmd.output, "{} {}", p.x, p.y)?;
    }

    Ok(())
}
