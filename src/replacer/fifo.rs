//! FIFO (First-In-First-Out) replacement policy.
//!
//! Frames are filled in index order, so arrival order is simply cyclic
//! frame order and no per-access bookkeeping is needed.

use tracing::trace;

use super::{FrameTable, PolicyKind, ReplacementPolicy};
use crate::common::{Error, FrameId, Result};
use crate::memory::PageTableEntry;

/// Evicts frames in the cyclic order 0, 1, ..., M-1, 0, ...
///
/// Accesses never change the order. The replacer does not check that the
/// frame it returns is occupied; the caller only asks when memory is full.
#[derive(Debug)]
pub struct FifoReplacer {
    /// Next frame to evict (the head of the queue).
    head: FrameId,

    /// Number of frames (M).
    frame_count: usize,
}

impl FifoReplacer {
    /// Create a FIFO replacer for `frame_count` frames.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        assert!(frame_count > 0, "frame_count must be > 0");
        Self {
            head: FrameId::new(0),
            frame_count,
        }
    }

    /// Frame the next `evict` will return.
    pub fn head(&self) -> FrameId {
        self.head
    }
}

impl ReplacementPolicy for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn init(&mut self, frame_count: usize) -> Result<()> {
        if frame_count == 0 {
            return Err(Error::ZeroFrames);
        }
        self.frame_count = frame_count;
        self.head = FrameId::new(0);
        Ok(())
    }

    fn record_access(&mut self, _entry: &mut PageTableEntry) {}

    fn evict(&mut self, _frames: &mut dyn FrameTable) -> Result<FrameId> {
        let frame = self.head;
        trace!(head = frame.0, "fifo: queue head");
        self.head = frame.next(self.frame_count);
        Ok(frame)
    }
}
