//! Scenario Configuration
//!
//! A scenario is the input data set for one simulator execution: the
//! fixed partition sizes and the ordered job list. The built-in default
//! is the classic teaching data set; alternatively a scenario is loaded
//! from a TOML file of the form:
//!
//! ```toml
//! partitions = [100, 500, 200, 300, 600]
//!
//! [[jobs]]
//! id = 1
//! size = 212
//! ```

use entities_simulation::{Job, Partition};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// One job request in a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct JobSpec {
    /// Unique job id
    pub id: u32,
    /// Memory requirement
    pub size: usize,
}

/// Simulator input data set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// Partition sizes, in fixed order
    pub partitions: Vec<usize>,
    /// Jobs, in arrival order
    pub jobs: Vec<JobSpec>,
}

/// Scenario loading and validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Scenario file could not be read
    Io(String),
    /// Scenario file contents could not be parsed
    Parse(String),
    /// Scenario data violates an input rule
    Invalid(String),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(msg) => write!(f, "cannot read scenario: {}", msg),
            ScenarioError::Parse(msg) => write!(f, "cannot parse scenario: {}", msg),
            ScenarioError::Invalid(msg) => write!(f, "invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl Default for Scenario {
    /// The classic teaching data set
    fn default() -> Self {
        Self {
            partitions: vec![100, 500, 200, 300, 600],
            jobs: vec![
                JobSpec { id: 1, size: 212 },
                JobSpec { id: 2, size: 417 },
                JobSpec { id: 3, size: 112 },
                JobSpec { id: 4, size: 426 },
            ],
        }
    }
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ScenarioError::Io(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&contents).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// Check the input rules file-sourced scenarios must satisfy
    ///
    /// Partition and job sizes must be positive, job ids unique, and at
    /// least one partition present. A job that fits nowhere is still
    /// fine; that is a simulation outcome, not an input error.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.partitions.is_empty() {
            return Err(ScenarioError::Invalid("no partitions defined".to_string()));
        }
        if self.partitions.iter().any(|&size| size == 0) {
            return Err(ScenarioError::Invalid(
                "partition sizes must be positive".to_string(),
            ));
        }
        if self.jobs.iter().any(|job| job.size == 0) {
            return Err(ScenarioError::Invalid(
                "job sizes must be positive".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(job.id) {
                return Err(ScenarioError::Invalid(format!(
                    "duplicate job id: {}",
                    job.id
                )));
            }
        }
        Ok(())
    }

    /// Build a fresh partition vector
    ///
    /// Called once per strategy run so that no run observes another
    /// run's occupancy mutations.
    pub fn build_partitions(&self) -> Vec<Partition> {
        self.partitions
            .iter()
            .map(|&size| Partition::new(size))
            .collect()
    }

    /// Build the job list
    pub fn build_jobs(&self) -> Vec<Job> {
        self.jobs
            .iter()
            .map(|spec| Job::new(spec.id, spec.size))
            .collect()
    }
}
