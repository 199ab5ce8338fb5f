//! Trace-driven simulation host.
//!
//! # Components
//! - [`Simulator`] - handles faults and reports references to the policy
//! - [`Trace`] - parsed memory reference trace
//! - [`SimStats`] - hit/miss/eviction counters

mod simulator;
mod stats;
mod trace;

pub use simulator::Simulator;
pub use stats::SimStats;
pub use trace::{Access, AccessKind, Trace};
