//! Simulation Run Loop
//!
//! Executes the selected strategies in order against one scenario. Every
//! strategy receives a freshly built partition vector, so no run ever
//! observes another run's occupancy mutations; the job list is shared
//! read-only.

use crate::scenario::Scenario;
use adapters_reporting::write_report;
use std::io::{self, Write};
use usecases_allocation::{PlacementStrategy, StrategyType};

/// Run each strategy and write its report to `out`
pub fn run_simulation<W: Write>(
    scenario: &Scenario,
    strategies: &[StrategyType],
    out: &mut W,
) -> io::Result<()> {
    let jobs = scenario.build_jobs();

    for strategy_type in strategies {
        let strategy = strategy_type.strategy();
        let mut partitions = scenario.build_partitions();

        let result = strategy.allocate(&mut partitions, &jobs);
        log::debug!(
            "{}: {} of {} jobs placed",
            strategy.name(),
            result.allocated_count(),
            jobs.len()
        );

        write_report(out, strategy.name(), &partitions, &jobs)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_simulation_reports_each_selected_strategy() {
        let scenario = Scenario::default();
        let mut out = Vec::new();

        run_simulation(
            &scenario,
            &[StrategyType::BestFit, StrategyType::FirstFit],
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let best = text.find("Best Fit Allocation:").unwrap();
        let first = text.find("First Fit Allocation:").unwrap();
        // Selection order is preserved
        assert!(best < first);
    }

    #[test]
    fn test_run_simulation_with_no_strategies_writes_nothing() {
        let scenario = Scenario::default();
        let mut out = Vec::new();

        run_simulation(&scenario, &[], &mut out).unwrap();

        assert!(out.is_empty());
    }
}
