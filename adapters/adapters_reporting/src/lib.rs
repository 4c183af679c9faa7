//! Adapters Layer: Reporting
//!
//! Renders the textual report emitted after each strategy run. The
//! fragmentation math lives in the use cases layer; this crate only
//! turns a final partition/job state into report lines.

pub mod report;

pub use report::{print_report, write_report};
