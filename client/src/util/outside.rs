//! Browser wiring for the outside-interaction detector.
//!
//! ARCHITECTURE
//! ============
//! Each overlay registers the element that wraps both its trigger and its
//! panel. While an overlay is open, a document-level `pointerdown` listener
//! classifies the event target against that overlay's region and reports it
//! to the coordinator as an outside interaction, with the owning overlay as
//! origin when the target is inside. The coordinator keeps an overlay whose
//! own region received the pointer and closes it otherwise.
//!
//! Pointer-down always fires before the click of the same gesture, so a click
//! that both lands outside an overlay and navigates reaches the coordinator
//! as two dispatches. Closing and navigating converge to the same state in
//! either order, which makes the browser's event order sufficient on its own.

use leptos::prelude::*;
use shell::nav::Overlay;

use crate::state::nav::NavContext;
#[cfg(feature = "hydrate")]
use shell::nav::NavEvent;
#[cfg(feature = "hydrate")]
use shell::outside::{OutsideDetector, Region};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Element region of one overlay, resolved lazily at event time.
#[derive(Clone, Copy)]
pub struct DomRegion(pub NodeRef<leptos::html::Div>);

#[cfg(feature = "hydrate")]
impl Region<web_sys::Node> for DomRegion {
    fn contains(&self, target: &web_sys::Node) -> bool {
        self.0.get_untracked().is_some_and(|el| el.contains(Some(target)))
    }
}

/// Install the document `pointerdown` listener for the given overlay regions.
pub fn install_outside_listener(nav: NavContext, regions: Vec<(Overlay, DomRegion)>) {
    #[cfg(feature = "hydrate")]
    {
        let mut detector = OutsideDetector::new();
        for (overlay, region) in regions {
            detector.register(overlay, region);
        }
        let detector = RefCell::new(detector);

        let handle = window_event_listener(leptos::ev::pointerdown, move |ev| {
            let open = nav.state.with_untracked(|state| state.overlay().open());
            let Some(open) = open else {
                return;
            };
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };

            let verdict = {
                let mut detector = detector.borrow_mut();
                for overlay in [Overlay::MobileMenu, Overlay::ProfileDropdown] {
                    detector.set_open(overlay, overlay == open);
                }
                detector.pointer_down(&target)
            };
            nav.dispatch(NavEvent::OutsideInteraction { origin: verdict.inside() });
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nav, regions);
    }
}
