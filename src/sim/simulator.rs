//! Simulator - replays references against a fixed set of frames.
//!
//! The [`Simulator`] plays the part of the page-fault handler:
//! - Resident pages are hits
//! - Misses take the lowest free frame, or ask the policy for a victim
//! - Dirty victims are written back to (simulated) swap
//! - Every reference is reported to the policy

use tracing::{debug, info};

use crate::common::{FrameId, PageId, Result, SimConfig};
use crate::memory::AddressSpace;
use crate::replacer::{PolicyKind, ReplacementPolicy};
use crate::sim::{AccessKind, SimStats, Trace};

/// Drives one replacement policy over a stream of page references.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │                      Simulator                       │
/// │  ┌────────────────────────────┐   ┌──────────────┐   │
/// │  │        AddressSpace        │   │    policy    │   │
/// │  │  page_table ──▶ coremap    │◀──│ Clock / FIFO │   │
/// │  │  PageId→PTE    FrameId→Pg  │   │    / LRU     │   │
/// │  └────────────────────────────┘   └──────────────┘   │
/// │  ┌──────────────┐                                    │
/// │  │   SimStats   │                                    │
/// │  └──────────────┘                                    │
/// └──────────────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use pagesim::{PageId, SimConfig, Simulator};
/// use pagesim::replacer::PolicyKind;
/// use pagesim::sim::AccessKind;
///
/// let config = SimConfig::new(2, PolicyKind::Lru).unwrap();
/// let mut sim = Simulator::new(config).unwrap();
///
/// for page in [1, 2, 1, 3, 2] {
///     sim.access(PageId::new(page), AccessKind::Load).unwrap();
/// }
/// assert_eq!(sim.stats().hits, 1);
/// assert_eq!(sim.stats().misses, 4);
/// ```
pub struct Simulator {
    config: SimConfig,
    space: AddressSpace,
    policy: Box<dyn ReplacementPolicy>,
    stats: SimStats,
}

impl Simulator {
    /// Create a simulator with all frames free.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if the config has no frames
    /// - `Error::OutOfMemory` if policy bookkeeping or the coremap cannot
    ///   be allocated
    pub fn new(config: SimConfig) -> Result<Self> {
        let policy = config.policy.build(config.frame_count)?;
        let space = AddressSpace::new(config.frame_count)?;
        debug!(
            frames = config.frame_count,
            policy = %config.policy,
            "simulator initialised"
        );

        Ok(Self {
            config,
            space,
            policy,
            stats: SimStats::default(),
        })
    }

    // ========================================================================
    // Public API
    // ========================================================================

    /// Reference `page`, faulting it in if needed. Returns the frame it
    /// now occupies.
    ///
    /// # Errors
    /// - `Error::NoTrackedFrames` if the LRU policy is asked to evict with
    ///   nothing tracked; the simulation cannot continue after this
    pub fn access(&mut self, page: PageId, kind: AccessKind) -> Result<FrameId> {
        // Fast path: page is resident
        if let Some(entry) = self.space.page_table_mut().get_mut(page) {
            if entry.is_valid() {
                if kind.is_write() {
                    entry.mark_dirty();
                }
                self.policy.record_access(entry);
                self.stats.hits += 1;
                return Ok(entry.frame());
            }
        }

        self.handle_fault(page, kind)
    }

    /// Replay every reference in `trace` and return the totals.
    ///
    /// # Errors
    /// Stops at the first error from [`Simulator::access`].
    pub fn run(&mut self, trace: &Trace) -> Result<SimStats> {
        for access in trace.accesses() {
            self.access(access.page, access.kind)?;
        }

        info!(
            policy = %self.config.policy,
            frames = self.config.frame_count,
            hits = self.stats.hits,
            misses = self.stats.misses,
            hit_rate = self.stats.hit_rate(),
            "trace replay finished"
        );
        Ok(self.stats)
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    pub fn address_space(&self) -> &AddressSpace {
        &self.space
    }

    /// Frame holding `page`, if it is resident.
    pub fn resident_frame(&self, page: PageId) -> Option<FrameId> {
        self.space
            .page_table()
            .get(page)
            .filter(|entry| entry.is_valid())
            .map(|entry| entry.frame())
    }

    // ========================================================================
    // Internal: faults and eviction
    // ========================================================================

    fn handle_fault(&mut self, page: PageId, kind: AccessKind) -> Result<FrameId> {
        self.stats.misses += 1;

        let frame = match self.space.coremap().find_free() {
            Some(frame) => frame,
            None => self.evict_page()?,
        };

        self.space.coremap_mut().assign(frame, page);

        let entry = self.space.page_table_mut().map(page, frame);
        if kind.is_write() {
            entry.mark_dirty();
        }
        self.policy.record_access(entry);

        Ok(frame)
    }

    /// Ask the policy for a victim and detach its page.
    fn evict_page(&mut self) -> Result<FrameId> {
        let frame = self.policy.evict(&mut self.space)?;

        let old_page = self.space.coremap_mut().release(frame);
        let entry = old_page.and_then(|pid| self.space.page_table_mut().get_mut(pid));

        if let Some(entry) = entry {
            let dirty = entry.is_dirty();
            if dirty {
                // Write back to swap
                entry.mark_on_swap();
                entry.clear_dirty();
                self.stats.dirty_evictions += 1;
            } else {
                self.stats.clean_evictions += 1;
            }
            entry.invalidate();

            debug!(victim = %frame, page = ?old_page, dirty, "evicted page");
        }

        Ok(frame)
    }
}
