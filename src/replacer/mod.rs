//! Eviction policy implementations (replacers).
//!
//! Every policy implements [`ReplacementPolicy`]:
//! - [`ClockReplacer`] - second chance, one rotating hand + reference bits
//! - [`FifoReplacer`] - evicts frames in cyclic arrival order
//! - [`LruReplacer`] - exact least-recently-used ordering
//!
//! The host picks one at startup through [`PolicyKind`].

mod clock;
mod fifo;
mod lru;

use std::fmt;
use std::str::FromStr;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

use crate::common::{Error, FrameId, Result};
use crate::memory::PageTableEntry;

/// Host view of the frames a policy evicts from.
///
/// Policies never own frame contents. The clock policy uses this to reach
/// the page table entry that owns a frame so it can test and clear the
/// reference bit.
pub trait FrameTable {
    /// Number of physical frames (M).
    fn frame_count(&self) -> usize;

    /// Entry of the page resident in `frame`, or None if the frame is free.
    fn entry_mut(&mut self, frame: FrameId) -> Option<&mut PageTableEntry>;
}

/// A table where frame `i` is owned by `self[i]`.
impl FrameTable for Vec<PageTableEntry> {
    fn frame_count(&self) -> usize {
        self.len()
    }

    fn entry_mut(&mut self, frame: FrameId) -> Option<&mut PageTableEntry> {
        self.get_mut(frame.0)
    }
}

/// Common contract of the page replacement policies.
pub trait ReplacementPolicy {
    /// Which algorithm this is.
    fn kind(&self) -> PolicyKind;

    /// Reset all bookkeeping for a memory of `frame_count` frames.
    ///
    /// Constructors already call this; calling it again starts over.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frame_count` is 0
    /// - `Error::OutOfMemory` if bookkeeping cannot be allocated
    fn init(&mut self, frame_count: usize) -> Result<()>;

    /// Record an access to the page described by `entry`.
    ///
    /// Called on every simulated memory reference, after the page is resident.
    fn record_access(&mut self, entry: &mut PageTableEntry);

    /// Choose the frame to evict.
    ///
    /// Only called when every frame is occupied. The returned frame is in
    /// `[0, frame_count)`; the caller is responsible for reusing it.
    ///
    /// # Errors
    /// - `Error::NoTrackedFrames` if the policy has nothing to evict (LRU only)
    fn evict(&mut self, frames: &mut dyn FrameTable) -> Result<FrameId>;
}

/// Selects one of the replacement policies.
///
/// # Example
/// ```
/// use pagesim::replacer::PolicyKind;
///
/// let kind: PolicyKind = "lru".parse().unwrap();
/// assert_eq!(kind, PolicyKind::Lru);
/// assert_eq!(kind.to_string(), "lru");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Clock,
    Fifo,
    Lru,
}

impl PolicyKind {
    /// Every available policy.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Clock, PolicyKind::Fifo, PolicyKind::Lru];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Clock => "clock",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
        }
    }

    /// Construct an initialised policy of this kind.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frame_count` is 0
    /// - `Error::OutOfMemory` if LRU bookkeeping cannot be allocated
    pub fn build(self, frame_count: usize) -> Result<Box<dyn ReplacementPolicy>> {
        if frame_count == 0 {
            return Err(Error::ZeroFrames);
        }
        Ok(match self {
            PolicyKind::Clock => Box::new(ClockReplacer::new(frame_count)),
            PolicyKind::Fifo => Box::new(FifoReplacer::new(frame_count)),
            PolicyKind::Lru => Box::new(LruReplacer::new(frame_count)?),
        })
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clock" => Ok(PolicyKind::Clock),
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
