//! Use Cases Layer: Allocation
//!
//! Provides the placement strategies of the fixed-partition memory
//! simulation and the fragmentation metrics derived from their results.
//!
//! ## Overview
//!
//! Every strategy implements the same contract: given a mutable partition
//! list and a read-only job list, consider each job exactly once in input
//! order and either place it into one free, sufficiently large partition
//! or leave it unallocated. Committed placements are never revisited, and
//! an unplaceable job is a normal outcome rather than an error.
//!
//! ## Placement Strategies
//!
//! - **[`firstfit`]**: first free partition in index order that fits;
//!   the fastest scan, fragments toward the end of the list
//!
//! - **[`bestfit`]**: smallest free partition that fits, minimizing the
//!   wasted space inside the chosen partition
//!
//! - **[`worstfit`]**: largest free partition that fits, leaving the
//!   biggest possible remainder unused
//!
//! - **[`nextfit`]**: first fit with a rotating start index carried from
//!   the previous successful placement
//!
//! - **[`strategy`]**: common strategy interface, selector, and per-run
//!   outcome types
//!
//! - **[`fragmentation`]**: internal/external fragmentation metrics
//!   computed from a final allocation state

pub mod bestfit;
pub mod firstfit;
pub mod fragmentation;
pub mod nextfit;
pub mod strategy;
pub mod worstfit;

pub use fragmentation::FragmentationReport;
pub use strategy::{AllocationResult, Placement, PlacementStrategy, StrategyType};
