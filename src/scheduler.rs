//! Coalesces bursts of edits into a single re-render

use tracing::trace;

/// Dirty flag plus explicit flush. Any number of `mark_dirty` calls between
/// two flushes produce exactly one render.
#[derive(Debug, Clone, Default)]
pub struct RenderScheduler {
    dirty: bool,
    /// Changes folded into the next render
    pending: usize,
    renders: u64,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Total renders performed so far
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.pending += 1;
    }

    /// Run `render` if anything changed since the last flush.
    /// Returns whether a render happened.
    pub fn flush<F>(&mut self, render: F) -> bool
    where
        F: FnOnce(),
    {
        if !self.dirty {
            return false;
        }
        trace!(coalesced = self.pending, "Flushing render");
        render();
        self.dirty = false;
        self.pending = 0;
        self.renders += 1;
        true
    }
}
