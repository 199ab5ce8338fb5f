//! Configuration for the simulator.

use crate::common::{Error, Result};
use crate::replacer::PolicyKind;

/// Number of low address bits that select a byte within a page.
///
/// Virtual addresses from a trace are turned into page numbers by
/// shifting right by this amount.
pub const PAGE_SHIFT: u32 = 12;

/// Size of a simulated page in bytes (4KB).
pub const PAGE_SIZE: usize = 1 << PAGE_SHIFT;

/// Settings fixed for the lifetime of one simulator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of physical frames (M).
    pub frame_count: usize,

    /// Which eviction policy drives the run.
    pub policy: PolicyKind,
}

impl SimConfig {
    /// Create a config.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frame_count` is 0
    pub fn new(frame_count: usize, policy: PolicyKind) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::ZeroFrames);
        }
        Ok(Self {
            frame_count,
            policy,
        })
    }
}
