//! pagesim - interchangeable page-replacement policies for a virtual-memory
//! simulator.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Simulation host (sim/)                   │   │
//! │  │       Trace → Simulator (fault handling) → SimStats      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                 ref(entry) ↓        ↑ evict() → FrameId         │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │         Replacement policies (replacer/)                 │   │
//! │  │             CLOCK  |  FIFO  |  LRU                       │   │
//! │  │        (one ReplacementPolicy trait, chosen at start)    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Memory bookkeeping (memory/)                │   │
//! │  │        Coremap + PageTable (+ reference bits)            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`replacer`] - Eviction policies and their common trait
//! - [`memory`] - Coremap and page table
//! - [`sim`] - Trace-driven simulator
//!
//! # Quick Start
//! ```
//! use pagesim::replacer::{FifoReplacer, ReplacementPolicy};
//! use pagesim::{FrameId, PageTableEntry};
//!
//! let mut frames: Vec<PageTableEntry> =
//!     (0..3).map(|i| PageTableEntry::new(FrameId::new(i))).collect();
//! let mut fifo = FifoReplacer::new(3);
//!
//! fifo.record_access(&mut frames[2]);
//! assert_eq!(fifo.evict(&mut frames).unwrap(), FrameId::new(0));
//! ```

pub mod common;
pub mod memory;
pub mod replacer;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{PAGE_SHIFT, PAGE_SIZE};
pub use common::{Error, FrameId, PageId, Result, SimConfig};

pub use memory::{AddressSpace, Coremap, PageTable, PageTableEntry};
pub use replacer::{PolicyKind, ReplacementPolicy};
pub use sim::{SimStats, Simulator, Trace};
