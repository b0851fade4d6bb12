//! Reactive wrapper around the navigation coordinator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation surface (panel, mobile bar, mobile menu, profile dropdown,
//! page buttons) reads from and dispatches into one `NavContext` provided at
//! the app root. The coordinator answers each event with a list of actions;
//! this module applies them: route changes are parked in `pending_route` for
//! the router effect in `app.rs`, scroll lock goes straight to the document.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use shell::nav::{NavAction, NavEvent, NavigationState};
use shell::view::ViewId;

use crate::util::dom;

/// Net effect of one action list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppliedActions {
    /// Last route the list navigated to, if any.
    pub route: Option<ViewId>,
    /// Final scroll-lock value, if the list changed it.
    pub scroll_lock: Option<bool>,
}

/// Collapse an action list into what the host must do.
pub fn fold_actions(actions: &[NavAction]) -> AppliedActions {
    actions.iter().fold(AppliedActions::default(), |mut applied, action| {
        match *action {
            NavAction::Navigate(view) => applied.route = Some(view),
            NavAction::SetScrollLock(locked) => applied.scroll_lock = Some(locked),
        }
        applied
    })
}

/// Coordinator signal plus the route hand-off slot.
#[derive(Clone, Copy)]
pub struct NavContext {
    pub state: RwSignal<NavigationState>,
    pub pending_route: RwSignal<Option<ViewId>>,
}

impl NavContext {
    pub fn new(initial: NavigationState) -> Self {
        Self { state: RwSignal::new(initial), pending_route: RwSignal::new(None) }
    }

    /// Apply one event and its resulting actions.
    pub fn dispatch(self, event: NavEvent) {
        let actions = self.state.try_update(|state| state.dispatch(event)).unwrap_or_default();
        self.apply(&actions);
    }

    /// Run a coordinator operation that is not expressed as an event.
    pub fn run(self, op: impl FnOnce(&mut NavigationState) -> Vec<NavAction>) {
        let actions = self.state.try_update(op).unwrap_or_default();
        self.apply(&actions);
    }

    /// Tracked read of the coordinator.
    pub fn with<R>(self, read: impl FnOnce(&NavigationState) -> R) -> R {
        self.state.with(read)
    }

    fn apply(self, actions: &[NavAction]) {
        let applied = fold_actions(actions);
        if let Some(locked) = applied.scroll_lock {
            dom::set_scroll_lock(locked);
        }
        if let Some(view) = applied.route {
            self.pending_route.set(Some(view));
        }
    }
}

/// The coordinator context provided by the app shell.
pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}
