//! Strategy Trait and Types
//!
//! Defines the common interface implemented by all placement strategies,
//! the selector enum used to pick them by name, and the per-run outcome
//! records they all return.

use entities_simulation::{Job, Partition};
use std::fmt;
use std::str::FromStr;

use crate::bestfit::BestFitStrategy;
use crate::firstfit::FirstFitStrategy;
use crate::nextfit::NextFitStrategy;
use crate::worstfit::WorstFitStrategy;

/// Placement strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// First-fit placement
    FirstFit,
    /// Best-fit placement
    BestFit,
    /// Worst-fit placement
    WorstFit,
    /// Next-fit placement
    NextFit,
}

impl StrategyType {
    /// All strategies, in canonical run order
    pub fn all() -> [StrategyType; 4] {
        [
            StrategyType::FirstFit,
            StrategyType::BestFit,
            StrategyType::WorstFit,
            StrategyType::NextFit,
        ]
    }

    /// Construct the strategy implementation for this selector
    pub fn strategy(&self) -> Box<dyn PlacementStrategy> {
        match self {
            StrategyType::FirstFit => Box::new(FirstFitStrategy),
            StrategyType::BestFit => Box::new(BestFitStrategy),
            StrategyType::WorstFit => Box::new(WorstFitStrategy),
            StrategyType::NextFit => Box::new(NextFitStrategy),
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyType::FirstFit => "First Fit",
            StrategyType::BestFit => "Best Fit",
            StrategyType::WorstFit => "Worst Fit",
            StrategyType::NextFit => "Next Fit",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for StrategyType {
    type Err = String;

    /// Parse a strategy name
    ///
    /// Accepts the short form (`first`), the hyphenated form
    /// (`first-fit`), and the display form (`First Fit`), case
    /// insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(*c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "first" | "firstfit" => Ok(StrategyType::FirstFit),
            "best" | "bestfit" => Ok(StrategyType::BestFit),
            "worst" | "worstfit" => Ok(StrategyType::WorstFit),
            "next" | "nextfit" => Ok(StrategyType::NextFit),
            _ => Err(format!("unknown strategy name: {}", s)),
        }
    }
}

/// Outcome of placing a single job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Id of the job this outcome belongs to
    pub job_id: u32,
    /// Index of the partition the job was placed in, or `None` if the job
    /// was left unallocated
    pub partition_index: Option<usize>,
}

/// Outcome of one strategy run
///
/// One entry per job, in job input order. The partition list itself is
/// mutated in place by the run; this records which index each job ended
/// up in, which is what tests and diagnostics want to look at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllocationResult {
    /// Per-job placements, in job input order
    pub placements: Vec<Placement>,
}

impl AllocationResult {
    /// Number of jobs that received a partition
    pub fn allocated_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|placement| placement.partition_index.is_some())
            .count()
    }

    /// Ids of the jobs left without a partition
    pub fn unallocated_jobs(&self) -> Vec<u32> {
        self.placements
            .iter()
            .filter(|placement| placement.partition_index.is_none())
            .map(|placement| placement.job_id)
            .collect()
    }
}

/// Common interface implemented by every placement strategy
///
/// Implementations consider each job exactly once, in input order. A job
/// is placed into at most one free partition with `size >= job.size`;
/// once a partition is committed it is never reassigned. Jobs that fit
/// nowhere are left unallocated, which is a normal outcome.
pub trait PlacementStrategy {
    /// Display name used in report headers
    fn name(&self) -> &'static str;

    /// Place each job, mutating partition occupancy in place
    fn allocate(&self, partitions: &mut [Partition], jobs: &[Job]) -> AllocationResult;
}

/// Mark a partition as holding the given job
pub(crate) fn place(partition: &mut Partition, job: &Job) {
    partition.occupied = true;
    partition.job_id = Some(job.id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_type_display_names() {
        assert_eq!(StrategyType::FirstFit.to_string(), "First Fit");
        assert_eq!(StrategyType::BestFit.to_string(), "Best Fit");
        assert_eq!(StrategyType::WorstFit.to_string(), "Worst Fit");
        assert_eq!(StrategyType::NextFit.to_string(), "Next Fit");
    }

    #[test]
    fn test_strategy_type_parsing() {
        assert_eq!("first".parse::<StrategyType>(), Ok(StrategyType::FirstFit));
        assert_eq!("best-fit".parse::<StrategyType>(), Ok(StrategyType::BestFit));
        assert_eq!("Worst Fit".parse::<StrategyType>(), Ok(StrategyType::WorstFit));
        assert_eq!("NEXTFIT".parse::<StrategyType>(), Ok(StrategyType::NextFit));
    }

    #[test]
    fn test_strategy_type_parsing_rejects_unknown_names() {
        let result = "quickest".parse::<StrategyType>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("quickest"));
    }

    #[test]
    fn test_all_runs_in_canonical_order() {
        let order = StrategyType::all();
        assert_eq!(
            order,
            [
                StrategyType::FirstFit,
                StrategyType::BestFit,
                StrategyType::WorstFit,
                StrategyType::NextFit,
            ]
        );
    }

    #[test]
    fn test_factory_names_match_display() {
        for strategy_type in StrategyType::all() {
            assert_eq!(strategy_type.strategy().name(), strategy_type.to_string());
        }
    }

    #[test]
    fn test_allocation_result_counters() {
        let result = AllocationResult {
            placements: vec![
                Placement {
                    job_id: 1,
                    partition_index: Some(2),
                },
                Placement {
                    job_id: 2,
                    partition_index: None,
                },
            ],
        };
        assert_eq!(result.allocated_count(), 1);
        assert_eq!(result.unallocated_jobs(), vec![2]);
    }
}
