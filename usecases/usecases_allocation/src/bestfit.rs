//! Best-Fit Placement
//!
//! Best-fit scans every free partition large enough for the job and picks
//! the smallest one, keeping the wasted space inside the chosen partition
//! as small as possible. Ties go to the earliest partition in index
//! order.

use super::strategy::{place, AllocationResult, Placement, PlacementStrategy};
use entities_simulation::{Job, Partition};

/// Best-fit placement strategy
pub struct BestFitStrategy;

impl PlacementStrategy for BestFitStrategy {
    fn name(&self) -> &'static str {
        "Best Fit"
    }

    fn allocate(&self, partitions: &mut [Partition], jobs: &[Job]) -> AllocationResult {
        let mut result = AllocationResult::default();

        for job in jobs {
            // Smallest fitting partition; strict < keeps the earliest
            // index on ties.
            let mut best: Option<(usize, usize)> = None;
            for (index, partition) in partitions.iter().enumerate() {
                if partition.occupied || partition.size < job.size {
                    continue;
                }
                let tighter = match best {
                    Some((_, best_size)) => partition.size < best_size,
                    None => true,
                };
                if tighter {
                    best = Some((index, partition.size));
                }
            }

            if let Some((index, _)) = best {
                place(&mut partitions[index], job);
            }
            result.placements.push(Placement {
                job_id: job.id,
                partition_index: best.map(|(index, _)| index),
            });
        }

        result
    }
}
