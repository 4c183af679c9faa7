//! Worst-Fit Placement
//!
//! Worst-fit is the mirror image of best-fit: among the free partitions
//! large enough for the job it picks the largest one, leaving the biggest
//! possible remainder unused. Ties go to the earliest partition in index
//! order.

use super::strategy::{place, AllocationResult, Placement, PlacementStrategy};
use entities_simulation::{Job, Partition};

/// Worst-fit placement strategy
pub struct WorstFitStrategy;

impl PlacementStrategy for WorstFitStrategy {
    fn name(&self) -> &'static str {
        "Worst Fit"
    }

    fn allocate(&self, partitions: &mut [Partition], jobs: &[Job]) -> AllocationResult {
        let mut result = AllocationResult::default();

        for job in jobs {
            // Largest fitting partition; strict > keeps the earliest
            // index on ties.
            let mut worst: Option<(usize, usize)> = None;
            for (index, partition) in partitions.iter().enumerate() {
                if partition.occupied || partition.size < job.size {
                    continue;
                }
                let looser = match worst {
                    Some((_, worst_size)) => partition.size > worst_size,
                    None => true,
                };
                if looser {
                    worst = Some((index, partition.size));
                }
            }

            if let Some((index, _)) = worst {
                place(&mut partitions[index], job);
            }
            result.placements.push(Placement {
                job_id: job.id,
                partition_index: worst.map(|(index, _)| index),
            });
        }

        result
    }
}
