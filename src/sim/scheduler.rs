//! Per-frame tick scheduling
//!
//! The host owns the real clock (requestAnimationFrame, a vsync callback, a
//! test loop). The animator only asks for "one more frame" and cancels the
//! outstanding request on teardown.

/// Opaque handle to a requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Source of animation ticks
pub trait FrameScheduler {
    /// Ask for one tick before the next repaint
    fn request_frame(&mut self) -> FrameHandle;
    /// Release a previously requested tick
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Headless scheduler that just records requests
///
/// The caller drives time itself and checks `take_pending` to decide whether
/// another tick is wanted.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    /// Number of frames ever requested
    pub requested: u64,
    /// Number of frames cancelled before delivery
    pub cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tick is currently wanted
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the outstanding request (the host is about to deliver it)
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
