//! Frameworks Layer: Simulator Initialization
//!
//! Outer layer of the fixed-partition simulator: resolves the input
//! scenario and drives the selected placement strategies in order.
//!
//! ## Modules
//!
//! - **[`scenario`]**: input data set (built-in default or TOML file),
//!   validation, and entity-vector builders
//!
//! - **[`run`]**: the run loop; one freshly built partition list per
//!   strategy, allocation, then the textual report
//!
//! Command-line parsing lives in the `memsim` binary itself.

pub mod run;
pub mod scenario;

pub use run::run_simulation;
pub use scenario::{JobSpec, Scenario, ScenarioError};
