//! CLOCK (second chance) replacement policy.
//!
//! A single hand sweeps the frames in index order. A frame whose page has
//! been referenced since the hand last passed gets its bit cleared and is
//! skipped once; the first frame found with a clear bit is the victim.

use tracing::trace;

use super::{FrameTable, PolicyKind, ReplacementPolicy};
use crate::common::{Error, FrameId, Result};
use crate::memory::PageTableEntry;

/// Second-chance eviction over a fixed number of frames.
///
/// After `evict` returns frame F the hand rests on `(F + 1) mod M`.
/// `evict` is O(M): at worst every frame is visited twice.
#[derive(Debug)]
pub struct ClockReplacer {
    /// Next frame the sweep inspects.
    hand: FrameId,

    /// Number of frames (M).
    frame_count: usize,
}

impl ClockReplacer {
    /// Create a clock replacer for `frame_count` frames, hand at frame 0.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        assert!(frame_count > 0, "frame_count must be > 0");
        Self {
            hand: FrameId::new(0),
            frame_count,
        }
    }

    /// Current hand position.
    pub fn hand(&self) -> FrameId {
        self.hand
    }
}

impl ReplacementPolicy for ClockReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn init(&mut self, frame_count: usize) -> Result<()> {
        if frame_count == 0 {
            return Err(Error::ZeroFrames);
        }
        self.frame_count = frame_count;
        self.hand = FrameId::new(0);
        Ok(())
    }

    fn record_access(&mut self, entry: &mut PageTableEntry) {
        entry.set_referenced();
        trace!(frame = entry.frame().0, "clock: set reference bit");
    }

    fn evict(&mut self, frames: &mut dyn FrameTable) -> Result<FrameId> {
        debug_assert_eq!(frames.frame_count(), self.frame_count);

        loop {
            let frame = self.hand;
            self.hand = frame.next(self.frame_count);

            // A free frame has no entry and therefore no reference bit.
            match frames.entry_mut(frame) {
                Some(entry) if entry.is_referenced() => {
                    entry.clear_referenced();
                    trace!(hand = frame.0, "clock: cleared reference bit");
                }
                _ => {
                    trace!(hand = frame.0, "clock: chose victim");
                    return Ok(frame);
                }
            }
        }
    }
}
