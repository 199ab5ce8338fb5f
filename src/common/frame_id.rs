//! Frame identifier type.

use std::fmt;

/// Identifies a physical frame, i.e. a slot in the coremap.
///
/// Frame ids are dense in `[0, M)` where M is the number of frames,
/// so they index directly into per-frame tables: `table[frame_id.0]`.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(5);
/// assert_eq!(frame_id.next(8), FrameId::new(6));
/// assert_eq!(FrameId::new(7).next(8), FrameId::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The frame after this one, wrapping at `frame_count`.
    #[inline]
    pub fn next(self, frame_count: usize) -> Self {
        FrameId((self.0 + 1) % frame_count)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}
