//! Browser document helpers: viewport width, scroll lock, resize wiring.
//!
//! Every function compiles to a no-op outside the `hydrate` build so SSR and
//! native tests never touch a DOM.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::state::nav::NavContext;
#[cfg(feature = "hydrate")]
use shell::nav::NavEvent;

/// Current layout viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Lock or unlock page scrolling behind the mobile menu.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked { style.set_property("overflow", "hidden") } else { style.remove_property("overflow").map(|_| ()) };
        if let Err(e) = result {
            leptos::logging::warn!("scroll lock update failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Feed the current viewport width and every later resize into the
/// coordinator. The listener is removed and the scroll lock released when the
/// owning component is cleaned up.
pub fn install_viewport_listener(nav: NavContext) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        // The server renders the wide layout; the real width is applied after
        // hydration so the first client render matches the server markup.
        Effect::new(move |_| {
            if let Some(width) = viewport_width() {
                nav.dispatch(NavEvent::ViewportResize(width));
            }
        });
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = viewport_width() {
                nav.dispatch(NavEvent::ViewportResize(width));
            }
        });
        on_cleanup(move || {
            handle.remove();
            set_scroll_lock(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nav;
    }
}
