//! Next-Fit Placement
//!
//! Next-fit behaves like first-fit with a rotating start position. The
//! scan for each job begins where the previous successful placement
//! landed (initially index 0) and wraps around the partition list at most
//! once. The start position is shared by all jobs within a run and is
//! left unchanged when a job cannot be placed.

use super::strategy::{place, AllocationResult, Placement, PlacementStrategy};
use entities_simulation::{Job, Partition};

/// Next-fit placement strategy
pub struct NextFitStrategy;

impl PlacementStrategy for NextFitStrategy {
    fn name(&self) -> &'static str {
        "Next Fit"
    }

    fn allocate(&self, partitions: &mut [Partition], jobs: &[Job]) -> AllocationResult {
        let mut result = AllocationResult::default();
        // Carried across jobs; updated only on successful placement.
        let mut start = 0;

        for job in jobs {
            let mut chosen = None;
            let mut index = start;
            // At most one full revolution per job.
            for _ in 0..partitions.len() {
                let partition = &mut partitions[index];
                if !partition.occupied && partition.size >= job.size {
                    place(partition, job);
                    chosen = Some(index);
                    // The next job's scan begins at the matched index
                    // itself, not its successor.
                    start = index;
                    break;
                }
                index = (index + 1) % partitions.len();
            }
            result.placements.push(Placement {
                job_id: job.id,
                partition_index: chosen,
            });
        }

        result
    }
}
