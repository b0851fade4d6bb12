//! Frame scheduling capability.
//!
//! Abstracts the display-refresh callback (`requestAnimationFrame` in the
//! browser) as "schedule a callback, get a handle; cancel the handle and the
//! callback is guaranteed not to run". Everything runs on one thread, so the
//! trait works with `Rc` and `RefCell` rather than `Send` bounds.
//!
//! [`ManualScheduler`] is the headless implementation: frames advance only
//! when the caller runs them, which makes frame loops fully deterministic.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::cell::{Cell, RefCell};

use crate::consts::FRAME_INTERVAL_MS;

/// Callback invoked with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Opaque id for a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(i32);

impl FrameHandle {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> i32 {
        self.0
    }
}

/// Host capability for per-frame callbacks.
pub trait FrameScheduler {
    /// Schedule `callback` for the next frame.
    ///
    /// Returns `None` when the host cannot schedule frames (no display, no
    /// window); the callback is dropped without running.
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle>;

    /// Cancel a scheduled callback. Cancelling an unknown or already-run
    /// handle is a no-op.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Deterministic scheduler driven by explicit [`ManualScheduler::run_frame`] calls.
pub struct ManualScheduler {
    next_id: Cell<i32>,
    now_ms: Cell<f64>,
    pending: RefCell<Vec<(FrameHandle, FrameCallback)>>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self { next_id: Cell::new(1), now_ms: Cell::new(0.0), pending: RefCell::new(Vec::new()) }
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Timestamp that will be handed to the next frame's callbacks.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }

    /// Run every callback that was scheduled before this frame began.
    ///
    /// Callbacks scheduled while the frame runs wait for the next frame, and a
    /// callback cancelled by an earlier one in the same frame does not run.
    /// Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let now = self.now_ms.get() + FRAME_INTERVAL_MS;
        self.now_ms.set(now);

        let due = self.pending.borrow().iter().map(|(handle, _)| *handle).collect::<Vec<_>>();
        let mut ran = 0;
        for handle in due {
            let callback = {
                let mut pending = self.pending.borrow_mut();
                pending
                    .iter()
                    .position(|(h, _)| *h == handle)
                    .map(|index| pending.remove(index).1)
            };
            if let Some(callback) = callback {
                callback(now);
                ran += 1;
            }
        }
        ran
    }

    /// Run `count` frames, returning the total number of callbacks that ran.
    pub fn run_frames(&self, count: usize) -> usize {
        (0..count).map(|_| self.run_frame()).sum()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let handle = FrameHandle(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        self.pending.borrow_mut().push((handle, callback));
        Some(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.pending.borrow_mut().retain(|(h, _)| *h != handle);
    }
}
