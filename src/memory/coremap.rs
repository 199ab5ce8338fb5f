//! The coremap - one record per physical frame.

use crate::common::{Error, FrameId, PageId, Result};

/// A physical frame as seen by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreFrame {
    /// Page currently resident in this frame, or None if the frame is free.
    owner: Option<PageId>,
}

impl CoreFrame {
    #[inline]
    pub fn owner(&self) -> Option<PageId> {
        self.owner
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

/// Fixed array of frame records, indexed by [`FrameId`].
///
/// The frame count is fixed at construction and never changes.
#[derive(Debug)]
pub struct Coremap {
    frames: Vec<CoreFrame>,
}

impl Coremap {
    /// Create a coremap with `frame_count` free frames.
    ///
    /// # Errors
    /// - `Error::ZeroFrames` if `frame_count` is 0
    /// - `Error::OutOfMemory` if the frame records cannot be allocated
    pub fn new(frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::ZeroFrames);
        }

        let mut frames = Vec::new();
        frames
            .try_reserve_exact(frame_count)
            .map_err(|_| Error::OutOfMemory {
                frames: frame_count,
            })?;
        frames.resize(frame_count, CoreFrame::default());

        Ok(Self { frames })
    }

    /// Number of physical frames (M).
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The record for `frame_id`.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    #[inline]
    pub fn frame(&self, frame_id: FrameId) -> &CoreFrame {
        &self.frames[frame_id.0]
    }

    /// Lowest-index free frame, if any.
    pub fn find_free(&self) -> Option<FrameId> {
        self.frames.iter().position(CoreFrame::is_free).map(FrameId::new)
    }

    /// Number of frames with no resident page.
    pub fn free_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_free()).count()
    }

    /// Record that `page_id` now lives in `frame_id`.
    pub fn assign(&mut self, frame_id: FrameId, page_id: PageId) {
        self.frames[frame_id.0].owner = Some(page_id);
    }

    /// Forget the owner of `frame_id`, returning it.
    pub fn release(&mut self, frame_id: FrameId) -> Option<PageId> {
        self.frames[frame_id.0].owner.take()
    }
}
