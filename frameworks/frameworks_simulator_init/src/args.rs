//! Command-Line Argument Parsing Module
//!
//! Argument surface of the `memsim` binary. Uses clap for type-safe
//! parsing; strategy names are resolved against `StrategyType`.

use clap::Parser;
use std::path::PathBuf;
use usecases_allocation::StrategyType;

/// Fixed-partition memory allocation simulator arguments
#[derive(Parser, Debug)]
#[command(name = "memsim")]
#[command(about = "Fixed-partition memory allocation simulator")]
pub struct SimulatorArgs {
    /// Path to a TOML scenario file (defaults to the built-in data set)
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Strategy to run (repeatable; defaults to all four in order)
    #[arg(long = "strategy")]
    pub strategies: Vec<String>,

    /// Special mode: print the known strategy names and exit
    #[arg(long)]
    pub list_strategies: bool,
}

impl SimulatorArgs {
    /// Resolve the requested strategies, defaulting to all four
    pub fn selected_strategies(&self) -> Result<Vec<StrategyType>, String> {
        if self.strategies.is_empty() {
            return Ok(StrategyType::all().to_vec());
        }
        self.strategies.iter().map(|name| name.parse()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_all_strategies_in_order() {
        let args = SimulatorArgs::parse_from(["memsim"]);
        let strategies = args.selected_strategies().unwrap();
        assert_eq!(strategies, StrategyType::all().to_vec());
    }

    #[test]
    fn test_explicit_selection_preserves_argument_order() {
        let args = SimulatorArgs::parse_from([
            "memsim",
            "--strategy",
            "next",
            "--strategy",
            "first",
        ]);
        let strategies = args.selected_strategies().unwrap();
        assert_eq!(strategies, vec![StrategyType::NextFit, StrategyType::FirstFit]);
    }

    #[test]
    fn test_unknown_strategy_name_is_reported() {
        let args = SimulatorArgs::parse_from(["memsim", "--strategy", "middling"]);
        let err = args.selected_strategies().unwrap_err();
        assert!(err.contains("middling"));
    }
}
