//! First-Fit Placement
//!
//! First-fit scans partitions in index order and places each job into the
//! first free partition large enough to hold it. This is the fastest scan
//! of the four strategies but tends to crowd jobs toward the front of the
//! partition list.

use super::strategy::{place, AllocationResult, Placement, PlacementStrategy};
use entities_simulation::{Job, Partition};

/// First-fit placement strategy
pub struct FirstFitStrategy;

impl PlacementStrategy for FirstFitStrategy {
    fn name(&self) -> &'static str {
        "First Fit"
    }

    fn allocate(&self, partitions: &mut [Partition], jobs: &[Job]) -> AllocationResult {
        let mut result = AllocationResult::default();

        for job in jobs {
            let mut chosen = None;
            for (index, partition) in partitions.iter_mut().enumerate() {
                if !partition.occupied && partition.size >= job.size {
                    place(partition, job);
                    chosen = Some(index);
                    break; // First match wins
                }
            }
            result.placements.push(Placement {
                job_id: job.id,
                partition_index: chosen,
            });
        }

        result
    }
}
