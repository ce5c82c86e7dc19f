//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement the split pipeline:
//!
//! - [`bootstrap`]: Building the breakpoint table from configuration
//! - [`resolver`]: Selecting candidate breakpoints for a rule
//! - [`reducer`]: Coverage reduction and the removal decision
//! - [`pipeline`]: Per-unit orchestration and bucket-label composition
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod pipeline;
pub mod reducer;
pub mod resolver;

pub use bootstrap::{BreakpointSpec, build_breakpoint_table};
pub use pipeline::{SplitUnit, UnitContext, UnitOptions, UnitReport};
pub use reducer::{ReduceOutcome, reduce};
pub use resolver::{CandidateRecord, resolve_candidates};
