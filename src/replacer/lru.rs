//! LRU (Least Recently Used) replacement policy.
//!
//! Exact recency order is kept in a doubly linked list of frames, oldest at
//! the head and most recently used at the tail. Nodes live in an arena and
//! link to each other by slot index; a per-frame lookup table gives O(1)
//! access to a frame's node.
//!
//! ```text
//!  lookup: [Some(2), None, Some(0), Some(1)]     (frame → slot)
//!
//!  head                                 tail
//!   │                                    │
//!   ▼                                    ▼
//!  slot 2 ──next──▶ slot 0 ──next──▶ slot 1
//!  frame 0 ◀─prev── frame 2 ◀─prev── frame 3
//! ```
//!
//! All arena storage is reserved up front by `init`, so `record_access`
//! never allocates.

use std::collections::TryReserveError;

use tracing::{enabled, trace, Level};

use super::{FrameTable, PolicyKind, ReplacementPolicy};
use crate::common::{Error, FrameId, Result};
use crate::memory::PageTableEntry;

/// Index of a node in the arena.
type Slot = usize;

#[derive(Debug, Clone, Copy)]
struct Node {
    frame: FrameId,
    prev: Option<Slot>,
    next: Option<Slot>,
}

/// Exact LRU eviction.
///
/// `record_access` and `evict` are O(1).
#[derive(Debug)]
pub struct LruReplacer {
    /// Node storage; slots are reused through `free_slots`.
    nodes: Vec<Node>,

    /// Arena slots not currently linked into the list.
    free_slots: Vec<Slot>,

    /// Frame index → slot of its node, None if the frame is not tracked.
    lookup: Vec<Option<Slot>>,

    /// Least recently used.
    head: Option<Slot>,

    /// Most recently used.
    tail: Option<Slot>,

    /// Number of tracked frames.
    len: usize,
}

impl LruReplacer {
    /// Create an LRU replacer for `frame_count` frames, tracking nothing.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frame_count` is 0
    /// - `Error::OutOfMemory` if the lookup table or arena cannot be allocated
    pub fn new(frame_count: usize) -> Result<Self> {
        let mut replacer = Self {
            nodes: Vec::new(),
            free_slots: Vec::new(),
            lookup: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        };
        replacer.init(frame_count)?;
        Ok(replacer)
    }

    /// Number of frames currently tracked.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `frame` is in the recency list.
    pub fn contains(&self, frame: FrameId) -> bool {
        self.lookup.get(frame.0).is_some_and(Option::is_some)
    }

    /// Tracked frames from least to most recently used.
    pub fn iter(&self) -> impl Iterator<Item = FrameId> + '_ {
        std::iter::successors(self.head, |&slot| self.nodes[slot].next)
            .map(|slot| self.nodes[slot].frame)
    }

    /// Take a slot for `frame`, reusing a free one when possible.
    fn alloc_node(&mut self, frame: FrameId) -> Slot {
        let node = Node {
            frame,
            prev: None,
            next: None,
        };
        match self.free_slots.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Detach `slot` from its neighbours, fixing head and tail.
    fn unlink(&mut self, slot: Slot) {
        let Node { prev, next, .. } = self.nodes[slot];

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[slot].prev = None;
        self.nodes[slot].next = None;
    }

    /// Append `slot` as the most recently used node.
    fn push_back(&mut self, slot: Slot) {
        self.nodes[slot].prev = self.tail;
        self.nodes[slot].next = None;

        match self.tail {
            Some(t) => self.nodes[t].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    fn trace_queue(&self) {
        if enabled!(Level::TRACE) {
            let queue: Vec<usize> = self.iter().map(|f| f.0).collect();
            trace!(?queue, "lru: queue");
        }
    }
}

impl ReplacementPolicy for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn init(&mut self, frame_count: usize) -> Result<()> {
        if frame_count == 0 {
            return Err(Error::ZeroFrames);
        }

        let oom = |_: TryReserveError| Error::OutOfMemory {
            frames: frame_count,
        };

        let mut lookup = Vec::new();
        lookup.try_reserve_exact(frame_count).map_err(oom)?;
        lookup.resize(frame_count, None);

        let mut nodes = Vec::new();
        nodes.try_reserve_exact(frame_count).map_err(oom)?;

        let mut free_slots = Vec::new();
        free_slots.try_reserve_exact(frame_count).map_err(oom)?;

        self.lookup = lookup;
        self.nodes = nodes;
        self.free_slots = free_slots;
        self.head = None;
        self.tail = None;
        self.len = 0;
        Ok(())
    }

    /// Move the entry's frame to the most recently used position.
    ///
    /// # Panics
    /// Panics if the entry's frame is outside `[0, frame_count)`.
    fn record_access(&mut self, entry: &mut PageTableEntry) {
        let frame = entry.frame();
        assert!(
            frame.0 < self.lookup.len(),
            "{} out of range for {} frames",
            frame,
            self.lookup.len()
        );

        let slot = match self.lookup[frame.0] {
            Some(slot) if self.tail == Some(slot) => {
                trace!("lru: queue not changed");
                return;
            }
            Some(slot) => {
                self.unlink(slot);
                slot
            }
            None => {
                let slot = self.alloc_node(frame);
                self.lookup[frame.0] = Some(slot);
                self.len += 1;
                slot
            }
        };

        self.push_back(slot);
        self.trace_queue();
    }

    fn evict(&mut self, _frames: &mut dyn FrameTable) -> Result<FrameId> {
        let slot = self.head.ok_or(Error::NoTrackedFrames)?;
        let frame = self.nodes[slot].frame;

        self.unlink(slot);
        self.free_slots.push(slot);
        self.lookup[frame.0] = None;
        self.len -= 1;

        trace!(victim = frame.0, "lru: evicted queue head");
        Ok(frame)
    }
}
