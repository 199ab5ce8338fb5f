//! Host-side memory bookkeeping.
//!
//! The replacement policies only rank frames; the structures here hold
//! what they rank:
//! - [`PageTableEntry`] / [`PageTable`] - virtual page → frame mappings
//! - [`Coremap`] - which page currently owns each physical frame
//! - [`AddressSpace`] - both of the above, exposed to policies as a
//!   [`FrameTable`](crate::replacer::FrameTable)

mod address_space;
mod coremap;
mod page_table;

pub use address_space::AddressSpace;
pub use coremap::{CoreFrame, Coremap};
pub use page_table::{PageTable, PageTableEntry};
