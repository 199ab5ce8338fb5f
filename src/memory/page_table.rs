//! Page table entries and the page table that owns them.

use std::collections::HashMap;

use crate::common::{FrameId, PageId};

/// Mapping state for one virtual page.
///
/// The frame number is only meaningful while `is_valid()` holds; after an
/// eviction the entry keeps its last frame but is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableEntry {
    frame: FrameId,
    valid: bool,
    dirty: bool,
    referenced: bool,
    on_swap: bool,
}

impl PageTableEntry {
    /// Create a valid, clean, unreferenced entry mapped to `frame`.
    pub fn new(frame: FrameId) -> Self {
        Self {
            frame,
            valid: true,
            dirty: false,
            referenced: false,
            on_swap: false,
        }
    }

    /// The frame this entry maps to.
    #[inline]
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Point the entry at `frame` and mark it valid.
    pub fn map(&mut self, frame: FrameId) {
        self.frame = frame;
        self.valid = true;
    }

    // ========================================================================
    // Valid flag
    // ========================================================================

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Mark the page as no longer resident.
    #[inline]
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    // ========================================================================
    // Dirty flag
    // ========================================================================

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // ========================================================================
    // Reference bit (used by the clock policy)
    // ========================================================================

    #[inline]
    pub fn is_referenced(&self) -> bool {
        self.referenced
    }

    #[inline]
    pub fn set_referenced(&mut self) {
        self.referenced = true;
    }

    #[inline]
    pub fn clear_referenced(&mut self) {
        self.referenced = false;
    }

    // ========================================================================
    // Swap state
    // ========================================================================

    /// Whether an up-to-date copy of the page lives in swap.
    #[inline]
    pub fn is_on_swap(&self) -> bool {
        self.on_swap
    }

    #[inline]
    pub fn mark_on_swap(&mut self) {
        self.on_swap = true;
    }
}

/// All page table entries of the simulated address space.
#[derive(Debug, Default)]
pub struct PageTable {
    entries: HashMap<PageId, PageTableEntry>,
}

impl PageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, page_id: PageId) -> Option<&PageTableEntry> {
        self.entries.get(&page_id)
    }

    pub fn get_mut(&mut self, page_id: PageId) -> Option<&mut PageTableEntry> {
        self.entries.get_mut(&page_id)
    }

    /// Map `page_id` to `frame`, creating the entry on first touch.
    ///
    /// An existing entry keeps its dirty and swap flags.
    pub fn map(&mut self, page_id: PageId, frame: FrameId) -> &mut PageTableEntry {
        let entry = self
            .entries
            .entry(page_id)
            .or_insert_with(|| PageTableEntry::new(frame));
        entry.map(frame);
        entry
    }

    /// Number of pages ever touched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
