//! Virtual page identifier type.

use std::fmt;

use crate::common::config::PAGE_SHIFT;

/// Identifies a virtual page (its virtual page number).
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::from_address(0x0804_a123);
/// assert_eq!(page_id, PageId::new(0x0804a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u64) -> Self {
        PageId(id)
    }

    /// The page containing the virtual address `addr`.
    #[inline]
    pub fn from_address(addr: u64) -> Self {
        PageId(addr >> PAGE_SHIFT)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({:#x})", self.0)
    }
}
