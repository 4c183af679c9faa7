//! Entities Layer: Simulation
//!
//! Provides the core value types of the fixed-partition simulation:
//! - Memory partitions
//! - Jobs (memory requests)
//!
//! Both are plain data holders. Placement decisions and derived metrics
//! live in the use cases layer.

pub mod job;
pub mod partition;

pub use job::Job;
pub use partition::Partition;
