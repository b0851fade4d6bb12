//! View navigation and overlay coordinator.
//!
//! A single state machine owns the active view mirror, the collapsed flag of
//! the navigation panel, the overlay axis (mobile menu / profile dropdown),
//! the compact-layout flag and the ephemeral session. Desktop and compact
//! layouts share this one machine; layout only changes how it is rendered.
//!
//! Operations never talk to the route layer directly. They return
//! [`NavAction`]s that the host applies in order, so the same logic runs
//! headless in tests.
//!
//! Overlay transitions:
//!
//! | From            | `toggle_mobile_menu` | `toggle_profile_dropdown` (signed in) |
//! |-----------------|----------------------|---------------------------------------|
//! | Closed          | MobileMenuOpen       | ProfileOpen                           |
//! | MobileMenuOpen  | Closed               | ProfileOpen                           |
//! | ProfileOpen     | MobileMenuOpen       | Closed                                |
//!
//! Navigation and outside interactions force `Closed`. Resizing never does.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::fmt::Display;

use crate::breakpoint::BreakpointMonitor;
use crate::consts::COMPACT_BREAKPOINT_PX;
use crate::session::Session;
use crate::view::{self, ViewId};

/// Overlay surfaces that can be open above the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    MobileMenu,
    ProfileDropdown,
}

/// The overlay axis of the navigation state. At most one overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    MobileMenuOpen,
    ProfileOpen,
}

impl OverlayState {
    /// The overlay that is open in this state, if any.
    #[must_use]
    pub fn open(self) -> Option<Overlay> {
        match self {
            Self::Closed => None,
            Self::MobileMenuOpen => Some(Overlay::MobileMenu),
            Self::ProfileOpen => Some(Overlay::ProfileDropdown),
        }
    }
}

/// How the page content sits next to the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLayout {
    /// Narrow viewport: top bar plus overlay menu.
    Compact,
    /// Wide viewport with the panel hidden.
    FullWidth,
    /// Wide viewport with the panel shown beside the content.
    WithNavigation,
}

/// What the profile slot of the navigation offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    /// Signed in: the slot opens the profile dropdown.
    Profile,
    /// Guest anywhere but the auth view: go to auth.
    Connect,
    /// Guest on the auth view: go back home.
    Back,
}

/// Side effects for the host to apply, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Commit a navigation to the route layer.
    Navigate(ViewId),
    /// Lock or unlock page scrolling behind the mobile menu.
    SetScrollLock(bool),
}

/// Input events accepted by [`NavigationState::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    RequestNavigate(String),
    TogglePanelCollapsed,
    ToggleMobileMenu,
    ToggleProfileDropdown,
    Login(Session),
    Logout,
    /// Pointer-down outside the open overlays. `origin` is the overlay whose
    /// own region (trigger included) received the pointer, if any.
    OutsideInteraction { origin: Option<Overlay> },
    ViewportResize(f64),
    RouteChanged(ViewId),
}

impl NavEvent {
    /// Ordering rank inside a batch: navigation commits before overlay closing.
    fn batch_rank(&self) -> u8 {
        match self {
            Self::RequestNavigate(_) | Self::Login(_) | Self::Logout | Self::RouteChanged(_) => 0,
            Self::OutsideInteraction { .. } => 2,
            _ => 1,
        }
    }
}

/// Tunables for the coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    pub compact_breakpoint: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { compact_breakpoint: COMPACT_BREAKPOINT_PX }
    }
}

/// Process-lifetime navigation state. Never serialized.
#[derive(Debug, Clone)]
pub struct NavigationState {
    active_view: ViewId,
    panel_collapsed: bool,
    overlay: OverlayState,
    breakpoint: BreakpointMonitor,
    session: Option<Session>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

impl NavigationState {
    #[must_use]
    pub fn new(config: NavConfig) -> Self {
        Self {
            active_view: ViewId::Home,
            panel_collapsed: false,
            overlay: OverlayState::Closed,
            breakpoint: BreakpointMonitor::new(config.compact_breakpoint),
            session: None,
        }
    }

    /// State seeded from the address and viewport width at startup.
    #[must_use]
    pub fn with_initial(config: NavConfig, path: &str, viewport_width: f64) -> Self {
        let mut state = Self::new(config);
        state.active_view = ViewId::from_path(path);
        state.breakpoint.observe(viewport_width);
        state
    }

    // --- Operations ---

    /// Validate `raw` against the registry and navigate there.
    ///
    /// Unknown ids degrade to [`ViewId::NotFound`]; this never fails.
    pub fn request_navigate(&mut self, raw: &str) -> Vec<NavAction> {
        self.navigate_to(ViewId::resolve(raw))
    }

    /// Navigate to an already-typed view, closing both overlays.
    pub fn navigate_to(&mut self, view: ViewId) -> Vec<NavAction> {
        let mut actions = Vec::with_capacity(2);
        self.active_view = view;
        actions.push(NavAction::Navigate(view));
        self.set_overlay(OverlayState::Closed, &mut actions);
        actions
    }

    /// Show or hide the navigation panel. Overlays are untouched.
    pub fn toggle_panel_collapsed(&mut self) {
        self.panel_collapsed = !self.panel_collapsed;
    }

    pub fn toggle_mobile_menu(&mut self) -> Vec<NavAction> {
        let next = match self.overlay {
            OverlayState::MobileMenuOpen => OverlayState::Closed,
            OverlayState::Closed | OverlayState::ProfileOpen => OverlayState::MobileMenuOpen,
        };
        let mut actions = Vec::new();
        self.set_overlay(next, &mut actions);
        actions
    }

    /// Flip the profile dropdown. Does nothing without a session.
    pub fn toggle_profile_dropdown(&mut self) -> Vec<NavAction> {
        let mut actions = Vec::new();
        if self.session.is_none() {
            return actions;
        }
        let next = match self.overlay {
            OverlayState::ProfileOpen => OverlayState::Closed,
            OverlayState::Closed | OverlayState::MobileMenuOpen => OverlayState::ProfileOpen,
        };
        self.set_overlay(next, &mut actions);
        actions
    }

    /// Start a session and land on the dashboard.
    pub fn on_login(&mut self, session: Session) -> Vec<NavAction> {
        self.session = Some(session);
        self.navigate_to(ViewId::Dashboard)
    }

    /// Apply the outcome of an auth attempt. Failures leave state untouched.
    pub fn on_auth_result<E: Display>(&mut self, result: Result<Session, E>) -> Vec<NavAction> {
        match result {
            Ok(session) => self.on_login(session),
            Err(err) => {
                log::warn!("sign-in failed: {err}");
                Vec::new()
            }
        }
    }

    /// End the session, close every overlay and return home.
    pub fn on_logout(&mut self) -> Vec<NavAction> {
        self.session = None;
        self.navigate_to(ViewId::Home)
    }

    /// Close open overlays except the one that owns the interaction.
    pub fn on_outside_interaction(&mut self, origin: Option<Overlay>) -> Vec<NavAction> {
        let mut actions = Vec::new();
        let keep = match (self.overlay.open(), origin) {
            (Some(open), Some(origin)) if open == origin => self.overlay,
            _ => OverlayState::Closed,
        };
        self.set_overlay(keep, &mut actions);
        actions
    }

    /// Record a viewport width. Returns the new compact flag when it flipped.
    ///
    /// Overlays stay as they are: an open dropdown survives crossing the
    /// breakpoint. The scroll lock does not, since the wide layout renders no
    /// mobile menu; use [`Self::resize`] to get the lock transition as well.
    pub fn on_viewport_resize(&mut self, width: f64) -> Option<bool> {
        self.breakpoint.observe(width)
    }

    /// Record a viewport width and report the scroll-lock transition it
    /// causes, if any.
    pub fn resize(&mut self, width: f64) -> Vec<NavAction> {
        let was_locked = self.scroll_locked();
        self.on_viewport_resize(width);
        let locked = self.scroll_locked();
        if was_locked == locked { Vec::new() } else { vec![NavAction::SetScrollLock(locked)] }
    }

    /// Mirror the route layer's current view.
    ///
    /// A view change that did not originate here (history navigation) still
    /// closes the overlays.
    pub fn sync_route(&mut self, view: ViewId) -> Vec<NavAction> {
        let mut actions = Vec::new();
        if view == self.active_view {
            return actions;
        }
        self.active_view = view;
        self.set_overlay(OverlayState::Closed, &mut actions);
        actions
    }

    /// Apply one event.
    pub fn dispatch(&mut self, event: NavEvent) -> Vec<NavAction> {
        match event {
            NavEvent::RequestNavigate(raw) => self.request_navigate(&raw),
            NavEvent::TogglePanelCollapsed => {
                self.toggle_panel_collapsed();
                Vec::new()
            }
            NavEvent::ToggleMobileMenu => self.toggle_mobile_menu(),
            NavEvent::ToggleProfileDropdown => self.toggle_profile_dropdown(),
            NavEvent::Login(session) => self.on_login(session),
            NavEvent::Logout => self.on_logout(),
            NavEvent::OutsideInteraction { origin } => self.on_outside_interaction(origin),
            NavEvent::ViewportResize(width) => self.resize(width),
            NavEvent::RouteChanged(view) => self.sync_route(view),
        }
    }

    /// Apply the events produced by one physical interaction as a single batch.
    ///
    /// Navigation-type events run first and outside-interaction closing runs
    /// last; relative order within a rank is preserved.
    pub fn dispatch_batch(&mut self, events: impl IntoIterator<Item = NavEvent>) -> Vec<NavAction> {
        let mut events = events.into_iter().collect::<Vec<_>>();
        events.sort_by_key(NavEvent::batch_rank);
        events.into_iter().flat_map(|event| self.dispatch(event)).collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    #[must_use]
    pub fn is_active(&self, view: ViewId) -> bool {
        self.active_view == view
    }

    #[must_use]
    pub fn is_panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.overlay == OverlayState::MobileMenuOpen
    }

    #[must_use]
    pub fn is_profile_dropdown_open(&self) -> bool {
        self.overlay == OverlayState::ProfileOpen
    }

    #[must_use]
    pub fn is_compact_layout(&self) -> bool {
        self.breakpoint.is_compact()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Links for the current session.
    #[must_use]
    pub fn nav_links(&self) -> &'static [ViewId] {
        view::nav_links(self.is_authenticated())
    }

    /// Page scrolling is locked while the mobile menu covers the page, which
    /// it only does in the compact layout.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_compact_layout() && self.is_mobile_menu_open()
    }

    #[must_use]
    pub fn content_layout(&self) -> ContentLayout {
        if self.is_compact_layout() {
            ContentLayout::Compact
        } else if self.panel_collapsed {
            ContentLayout::FullWidth
        } else {
            ContentLayout::WithNavigation
        }
    }

    #[must_use]
    pub fn footer_action(&self) -> FooterAction {
        if self.is_authenticated() {
            FooterAction::Profile
        } else if self.active_view == ViewId::Auth {
            FooterAction::Back
        } else {
            FooterAction::Connect
        }
    }

    /// Activate the profile slot according to [`Self::footer_action`].
    pub fn activate_footer(&mut self) -> Vec<NavAction> {
        match self.footer_action() {
            FooterAction::Profile => self.toggle_profile_dropdown(),
            FooterAction::Connect => self.navigate_to(ViewId::Auth),
            FooterAction::Back => self.navigate_to(ViewId::Home),
        }
    }

    fn set_overlay(&mut self, next: OverlayState, actions: &mut Vec<NavAction>) {
        let was_locked = self.scroll_locked();
        self.overlay = next;
        let locked = self.scroll_locked();
        if was_locked != locked {
            actions.push(NavAction::SetScrollLock(locked));
        }
    }
}
