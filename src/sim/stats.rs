//! Simulation statistics.

use std::fmt;

/// Counters collected over one simulator run.
///
/// # Example
/// ```
/// use pagesim::SimStats;
///
/// let stats = SimStats { hits: 7, misses: 3, ..Default::default() };
/// assert_eq!(stats.references(), 10);
/// assert_eq!(stats.hit_rate(), 0.7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// References to a page that was already resident.
    pub hits: u64,

    /// References that faulted the page in.
    pub misses: u64,

    /// Evictions of pages that had not been written.
    pub clean_evictions: u64,

    /// Evictions of modified pages (written back to swap).
    pub dirty_evictions: u64,
}

impl SimStats {
    /// Total number of references.
    pub fn references(&self) -> u64 {
        self.hits + self.misses
    }

    /// Total number of evictions.
    pub fn evictions(&self) -> u64 {
        self.clean_evictions + self.dirty_evictions
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hit count: {}", self.hits)?;
        writeln!(f, "Miss count: {}", self.misses)?;
        writeln!(f, "Clean evictions: {}", self.clean_evictions)?;
        writeln!(f, "Dirty evictions: {}", self.dirty_evictions)?;
        writeln!(f, "Total references: {}", self.references())?;
        write!(f, "Hit rate: {:.4}", self.hit_rate() * 100.0)
    }
}
