//! Simulator Binary Entry Point
//!
//! Wires together logging, argument parsing, scenario resolution, and
//! the run loop, and maps failures to the process exit status. The
//! reports go to stdout; diagnostics go through the logging facade.

use std::io;
use std::process;

mod args;

use args::SimulatorArgs;
use clap::Parser;
use frameworks_simulator_init::run::run_simulation;
use frameworks_simulator_init::scenario::Scenario;
use usecases_allocation::StrategyType;

fn main() {
    env_logger::Builder::from_default_env().init();

    let args = SimulatorArgs::parse();

    // Handle special modes (must exit early)
    if args.list_strategies {
        for strategy_type in StrategyType::all() {
            println!("{}", strategy_type);
        }
        process::exit(0);
    }

    let strategies = match args.selected_strategies() {
        Ok(strategies) => strategies,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Resolve the scenario: file if given, built-in data set otherwise
    let scenario = match &args.scenario {
        Some(path) => match Scenario::load(path) {
            Ok(scenario) => {
                log::info!("Loaded scenario from {}", path.display());
                scenario
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => Scenario::default(),
    };

    if let Err(e) = scenario.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run_simulation(&scenario, &strategies, &mut out) {
        eprintln!("Error: failed to write report: {}", e);
        process::exit(1);
    }
}
