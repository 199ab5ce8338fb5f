//! Coremap and page table together, as the policies see them.

use crate::common::{FrameId, Result};
use crate::memory::{Coremap, PageTable, PageTableEntry};
use crate::replacer::FrameTable;

/// Physical frames plus the page table whose entries own them.
#[derive(Debug)]
pub struct AddressSpace {
    coremap: Coremap,
    page_table: PageTable,
}

impl AddressSpace {
    /// Create an empty address space backed by `frame_count` frames.
    ///
    /// # Errors
    /// Same as [`Coremap::new`].
    pub fn new(frame_count: usize) -> Result<Self> {
        Ok(Self {
            coremap: Coremap::new(frame_count)?,
            page_table: PageTable::new(),
        })
    }

    pub fn coremap(&self) -> &Coremap {
        &self.coremap
    }

    pub fn coremap_mut(&mut self) -> &mut Coremap {
        &mut self.coremap
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn page_table_mut(&mut self) -> &mut PageTable {
        &mut self.page_table
    }
}

impl FrameTable for AddressSpace {
    fn frame_count(&self) -> usize {
        self.coremap.frame_count()
    }

    fn entry_mut(&mut self, frame: FrameId) -> Option<&mut PageTableEntry> {
        if frame.0 >= self.coremap.frame_count() {
            return None;
        }
        let page_id = self.coremap.frame(frame).owner()?;
        self.page_table.get_mut(page_id)
    }
}
