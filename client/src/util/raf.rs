//! `requestAnimationFrame` implementation of the frame scheduling capability.
//!
//! Each scheduled callback is wrapped in a `Closure` that must stay alive
//! until the browser calls it. Live closures are kept in a map keyed by the
//! RAF id; running or cancelling a frame removes its entry, so a cancelled
//! callback is dropped without ever running.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use shell::frame::{FrameCallback, FrameHandle, FrameScheduler};
use wasm_bindgen::{JsCast, closure::Closure};

type LiveFrames = Rc<RefCell<HashMap<i32, Closure<dyn FnMut(f64)>>>>;

/// Frame scheduler backed by the browser's display refresh.
#[derive(Default)]
pub struct RafScheduler {
    live: LiveFrames,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle> {
        let window = web_sys::window()?;

        let id_slot = Rc::new(Cell::new(0));
        let id_for_cb = Rc::clone(&id_slot);
        let live_for_cb = Rc::clone(&self.live);
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move |ts: f64| {
            let own = live_for_cb.borrow_mut().remove(&id_for_cb.get());
            if let Some(callback) = callback.take() {
                callback(ts);
            }
            drop(own);
        }) as Box<dyn FnMut(f64)>);

        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => {
                id_slot.set(id);
                self.live.borrow_mut().insert(id, closure);
                Some(FrameHandle::new(id))
            }
            Err(e) => {
                leptos::logging::warn!("requestAnimationFrame failed: {e:?}");
                None
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if self.live.borrow_mut().remove(&handle.id()).is_none() {
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.cancel_animation_frame(handle.id()) {
                leptos::logging::warn!("cancelAnimationFrame failed: {e:?}");
            }
        }
    }
}
