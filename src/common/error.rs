//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a trace file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Eviction was requested while the LRU policy tracks no frames.
    ///
    /// This indicates a bug in the caller - eviction must only be
    /// requested once frames are occupied. It is never recovered from.
    #[error("No LRU records found")]
    NoTrackedFrames,

    /// Bookkeeping for the given number of frames could not be allocated.
    #[error("Out of memory allocating replacement state for {frames} frames")]
    OutOfMemory { frames: usize },

    /// A simulator was configured without any physical frames.
    #[error("Frame count must be greater than zero")]
    ZeroFrames,

    /// Policy name did not match any known policy.
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),

    /// A trace line could not be parsed.
    #[error("Malformed trace at line {line}: {reason}")]
    MalformedTrace { line: usize, reason: String },
}
