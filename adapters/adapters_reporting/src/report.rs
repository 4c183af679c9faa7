//! Allocation Run Report
//!
//! Formats the final state of one strategy run: a header naming the
//! strategy, one line per partition in original index order, and the two
//! fragmentation totals. Reporting is read-only; rendering the same
//! state twice produces identical output.

use entities_simulation::{Job, Partition};
use std::io::{self, Write};
use usecases_allocation::FragmentationReport;

/// Write the report for one completed strategy run
pub fn write_report<W: Write>(
    out: &mut W,
    strategy_name: &str,
    partitions: &[Partition],
    jobs: &[Job],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} Allocation:", strategy_name)?;

    for partition in partitions {
        let job_str = match partition.job_id {
            Some(id) => id.to_string(),
            None => "None".to_string(),
        };
        writeln!(
            out,
            "Partition: Size={} Occupied={} JobID={}",
            partition.size, partition.occupied, job_str
        )?;
    }

    let report = FragmentationReport::compute(partitions, jobs);
    writeln!(out, "Internal Fragmentation: {}", report.internal)?;
    writeln!(out, "External Fragmentation: {}", report.external)?;

    Ok(())
}

/// Write the report to stdout
pub fn print_report(
    strategy_name: &str,
    partitions: &[Partition],
    jobs: &[Job],
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, strategy_name, partitions, jobs)
}
