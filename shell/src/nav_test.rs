use super::*;

// =============================================================
// Helpers
// =============================================================

fn signed_in() -> NavigationState {
    let mut state = NavigationState::default();
    state.on_login(Session::new("Ana", "ana@example.com"));
    state
}

fn compact() -> NavigationState {
    NavigationState::with_initial(NavConfig::default(), "/", 600.0)
}

fn assert_exclusive(state: &NavigationState) {
    assert!(
        !(state.is_mobile_menu_open() && state.is_profile_dropdown_open()),
        "both overlays open: {:?}",
        state.overlay()
    );
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_home_closed_and_signed_out() {
    let state = NavigationState::default();
    assert_eq!(state.active_view(), ViewId::Home);
    assert_eq!(state.overlay(), OverlayState::Closed);
    assert!(!state.is_panel_collapsed());
    assert!(!state.is_compact_layout());
    assert!(state.session().is_none());
}

#[test]
fn with_initial_reads_path_and_width() {
    let state = NavigationState::with_initial(NavConfig::default(), "/explore", 480.0);
    assert_eq!(state.active_view(), ViewId::Explore);
    assert!(state.is_compact_layout());
}

#[test]
fn with_initial_unknown_path_is_not_found() {
    let state = NavigationState::with_initial(NavConfig::default(), "/nowhere", 1280.0);
    assert_eq!(state.active_view(), ViewId::NotFound);
}

// =============================================================
// requestNavigate
// =============================================================

#[test]
fn request_navigate_commits_valid_view() {
    let mut state = NavigationState::default();
    let actions = state.request_navigate("search");
    assert_eq!(actions, vec![NavAction::Navigate(ViewId::Search)]);
    assert_eq!(state.active_view(), ViewId::Search);
}

#[test]
fn request_navigate_unknown_degrades_to_not_found() {
    let mut state = NavigationState::default();
    let actions = state.request_navigate("recipes/42");
    assert_eq!(actions, vec![NavAction::Navigate(ViewId::NotFound)]);
    assert_eq!(state.active_view(), ViewId::NotFound);
}

#[test]
fn navigation_closes_every_overlay_state() {
    for view in ViewId::REGISTERED {
        for setup in [OverlayState::Closed, OverlayState::MobileMenuOpen, OverlayState::ProfileOpen] {
            let mut state = signed_in();
            match setup {
                OverlayState::Closed => {}
                OverlayState::MobileMenuOpen => {
                    state.toggle_mobile_menu();
                }
                OverlayState::ProfileOpen => {
                    state.toggle_profile_dropdown();
                }
            }
            assert_eq!(state.overlay(), setup);
            state.request_navigate(view.as_str());
            assert!(!state.is_mobile_menu_open());
            assert!(!state.is_profile_dropdown_open());
            assert_eq!(state.active_view(), view);
        }
    }
}

#[test]
fn navigating_from_open_menu_releases_scroll_lock() {
    let mut state = compact();
    assert_eq!(state.toggle_mobile_menu(), vec![NavAction::SetScrollLock(true)]);
    let actions = state.request_navigate("explore");
    assert_eq!(
        actions,
        vec![NavAction::Navigate(ViewId::Explore), NavAction::SetScrollLock(false)]
    );
    assert!(!state.scroll_locked());
}

// =============================================================
// Overlay toggles
// =============================================================

#[test]
fn mobile_menu_toggles_open_and_closed() {
    let mut state = compact();
    state.toggle_mobile_menu();
    assert_eq!(state.overlay(), OverlayState::MobileMenuOpen);
    state.toggle_mobile_menu();
    assert_eq!(state.overlay(), OverlayState::Closed);
}

#[test]
fn mobile_menu_replaces_open_profile_dropdown() {
    let mut state = signed_in();
    state.toggle_profile_dropdown();
    state.toggle_mobile_menu();
    assert_eq!(state.overlay(), OverlayState::MobileMenuOpen);
}

#[test]
fn profile_dropdown_replaces_open_menu() {
    let mut state = compact();
    state.on_login(Session::new("Ana", "ana@example.com"));
    state.toggle_mobile_menu();
    let actions = state.toggle_profile_dropdown();
    assert_eq!(state.overlay(), OverlayState::ProfileOpen);
    assert_eq!(actions, vec![NavAction::SetScrollLock(false)]);
}

#[test]
fn toggles_never_open_both_overlays() {
    // Exhaustive over every sequence of up to 6 toggles, signed in and out.
    for signed in [false, true] {
        for len in 0..=6_u32 {
            for mask in 0..(1_u32 << len) {
                let mut state = if signed { signed_in() } else { NavigationState::default() };
                for bit in 0..len {
                    if mask & (1 << bit) == 0 {
                        state.toggle_mobile_menu();
                    } else {
                        state.toggle_profile_dropdown();
                    }
                    assert_exclusive(&state);
                    if !signed {
                        assert!(!state.is_profile_dropdown_open());
                    }
                }
            }
        }
    }
}

#[test]
fn profile_dropdown_without_session_is_noop() {
    let mut state = NavigationState::default();
    assert!(state.toggle_profile_dropdown().is_empty());
    assert_eq!(state.overlay(), OverlayState::Closed);
}

#[test]
fn guest_menu_open_then_profile_toggle_changes_nothing() {
    let mut state = NavigationState::default();
    state.toggle_mobile_menu();
    assert!(state.is_mobile_menu_open());
    state.toggle_profile_dropdown();
    assert!(state.is_mobile_menu_open());
    assert!(!state.is_profile_dropdown_open());
}

#[test]
fn panel_collapse_leaves_overlays_alone() {
    let mut state = signed_in();
    state.toggle_profile_dropdown();
    state.toggle_panel_collapsed();
    assert!(state.is_panel_collapsed());
    assert!(state.is_profile_dropdown_open());
    state.toggle_panel_collapsed();
    assert!(!state.is_panel_collapsed());
    assert!(state.is_profile_dropdown_open());
}

// =============================================================
// Session
// =============================================================

#[test]
fn login_lands_on_dashboard_with_overlays_closed() {
    let mut state = compact();
    state.toggle_mobile_menu();
    let actions = state.on_login(Session::new("Ana", ""));
    assert_eq!(state.session().and_then(|s| s.display_name.as_deref()), Some("Ana"));
    assert_eq!(state.active_view(), ViewId::Dashboard);
    assert!(!state.is_mobile_menu_open());
    assert!(!state.is_profile_dropdown_open());
    assert_eq!(
        actions,
        vec![NavAction::Navigate(ViewId::Dashboard), NavAction::SetScrollLock(false)]
    );
}

#[test]
fn logout_clears_session_and_returns_home() {
    let mut state = signed_in();
    state.toggle_profile_dropdown();
    let actions = state.on_logout();
    assert!(state.session().is_none());
    assert_eq!(state.active_view(), ViewId::Home);
    assert_eq!(state.overlay(), OverlayState::Closed);
    assert_eq!(actions, vec![NavAction::Navigate(ViewId::Home)]);
}

#[test]
fn failed_auth_result_leaves_state_untouched() {
    let mut state = NavigationState::default();
    let actions = state.on_auth_result::<&str>(Err("service unavailable"));
    assert!(actions.is_empty());
    assert!(state.session().is_none());
    assert_eq!(state.active_view(), ViewId::Home);
}

#[test]
fn successful_auth_result_logs_in() {
    let mut state = NavigationState::default();
    state.on_auth_result::<&str>(Ok(Session::new("Ana", "")));
    assert!(state.is_authenticated());
    assert_eq!(state.active_view(), ViewId::Dashboard);
}

#[test]
fn links_follow_session() {
    let mut state = NavigationState::default();
    assert!(!state.nav_links().contains(&ViewId::Dashboard));
    state.on_login(Session::default());
    assert!(state.nav_links().contains(&ViewId::Dashboard));
}

// =============================================================
// Outside interaction
// =============================================================

#[test]
fn outside_interaction_closes_open_dropdown() {
    let mut state = signed_in();
    state.toggle_profile_dropdown();
    state.on_outside_interaction(None);
    assert!(!state.is_profile_dropdown_open());
}

#[test]
fn interaction_inside_own_region_keeps_overlay() {
    let mut state = signed_in();
    state.toggle_profile_dropdown();
    state.on_outside_interaction(Some(Overlay::ProfileDropdown));
    assert!(state.is_profile_dropdown_open());
}

#[test]
fn interaction_in_other_region_closes_open_overlay() {
    let mut state = compact();
    state.toggle_mobile_menu();
    let actions = state.on_outside_interaction(Some(Overlay::ProfileDropdown));
    assert_eq!(state.overlay(), OverlayState::Closed);
    assert_eq!(actions, vec![NavAction::SetScrollLock(false)]);
}

#[test]
fn outside_interaction_when_closed_is_noop() {
    let mut state = NavigationState::default();
    assert!(state.on_outside_interaction(None).is_empty());
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_updates_compact_flag() {
    let mut state = NavigationState::default();
    assert_eq!(state.on_viewport_resize(1280.0), None);
    assert_eq!(state.on_viewport_resize(600.0), Some(true));
    assert!(state.is_compact_layout());
    assert_eq!(state.on_viewport_resize(600.0), None);
}

#[test]
fn resize_across_breakpoint_keeps_dropdown_open() {
    let mut state = signed_in();
    state.on_viewport_resize(1280.0);
    state.toggle_profile_dropdown();
    state.on_viewport_resize(700.0);
    assert!(state.is_profile_dropdown_open());
    state.on_viewport_resize(1400.0);
    assert!(state.is_profile_dropdown_open());
}

#[test]
fn widening_with_open_menu_releases_scroll_lock() {
    let mut state = compact();
    state.toggle_mobile_menu();
    assert!(state.scroll_locked());

    assert_eq!(state.resize(1400.0), vec![NavAction::SetScrollLock(false)]);
    assert!(state.is_mobile_menu_open());
    assert!(!state.scroll_locked());

    assert_eq!(state.dispatch(NavEvent::ViewportResize(600.0)), vec![NavAction::SetScrollLock(true)]);
    assert!(state.scroll_locked());
    assert!(state.dispatch(NavEvent::ViewportResize(650.0)).is_empty());
}

#[test]
fn menu_opened_in_wide_layout_does_not_lock() {
    let mut state = NavigationState::with_initial(NavConfig::default(), "/", 1280.0);
    assert!(state.toggle_mobile_menu().is_empty());
    assert!(!state.scroll_locked());
    assert_eq!(state.resize(700.0), vec![NavAction::SetScrollLock(true)]);
}

#[test]
fn content_layout_follows_breakpoint_and_collapse() {
    let mut state = NavigationState::with_initial(NavConfig::default(), "/", 1280.0);
    assert_eq!(state.content_layout(), ContentLayout::WithNavigation);
    state.toggle_panel_collapsed();
    assert_eq!(state.content_layout(), ContentLayout::FullWidth);
    state.on_viewport_resize(500.0);
    assert_eq!(state.content_layout(), ContentLayout::Compact);
}

// =============================================================
// Route sync and footer
// =============================================================

#[test]
fn route_change_from_history_closes_overlays() {
    let mut state = compact();
    state.toggle_mobile_menu();
    let actions = state.sync_route(ViewId::Search);
    assert_eq!(state.active_view(), ViewId::Search);
    assert_eq!(actions, vec![NavAction::SetScrollLock(false)]);
}

#[test]
fn route_sync_to_same_view_keeps_overlays() {
    let mut state = compact();
    state.toggle_mobile_menu();
    assert!(state.sync_route(ViewId::Home).is_empty());
    assert!(state.is_mobile_menu_open());
}

#[test]
fn footer_action_depends_on_session_and_view() {
    let mut state = NavigationState::default();
    assert_eq!(state.footer_action(), FooterAction::Connect);
    state.activate_footer();
    assert_eq!(state.active_view(), ViewId::Auth);
    assert_eq!(state.footer_action(), FooterAction::Back);
    state.activate_footer();
    assert_eq!(state.active_view(), ViewId::Home);

    let mut user = signed_in();
    assert_eq!(user.footer_action(), FooterAction::Profile);
    user.activate_footer();
    assert!(user.is_profile_dropdown_open());
}

// =============================================================
// Batches
// =============================================================

#[test]
fn batch_applies_navigation_before_outside_close() {
    let mut state = signed_in();
    state.toggle_profile_dropdown();
    let actions = state.dispatch_batch([
        NavEvent::OutsideInteraction { origin: None },
        NavEvent::RequestNavigate("explore".to_owned()),
    ]);
    assert_eq!(actions, vec![NavAction::Navigate(ViewId::Explore)]);
    assert_eq!(state.active_view(), ViewId::Explore);
    assert_eq!(state.overlay(), OverlayState::Closed);
}

#[test]
fn batch_order_is_deterministic_for_either_input_order() {
    let mut a = signed_in();
    let mut b = signed_in();
    a.toggle_profile_dropdown();
    b.toggle_profile_dropdown();
    let nav = NavEvent::RequestNavigate("profile".to_owned());
    let outside = NavEvent::OutsideInteraction { origin: Some(Overlay::ProfileDropdown) };
    let from_a = a.dispatch_batch([nav.clone(), outside.clone()]);
    let from_b = b.dispatch_batch([outside, nav]);
    assert_eq!(from_a, from_b);
    assert_eq!(a.overlay(), b.overlay());
    assert_eq!(a.active_view(), ViewId::Profile);
}

#[test]
fn dispatch_covers_every_event() {
    let mut state = NavigationState::default();
    state.dispatch(NavEvent::ViewportResize(500.0));
    assert!(state.is_compact_layout());
    state.dispatch(NavEvent::TogglePanelCollapsed);
    assert!(state.is_panel_collapsed());
    state.dispatch(NavEvent::ToggleMobileMenu);
    assert!(state.is_mobile_menu_open());
    state.dispatch(NavEvent::Login(Session::new("Ana", "")));
    assert_eq!(state.active_view(), ViewId::Dashboard);
    state.dispatch(NavEvent::ToggleProfileDropdown);
    assert!(state.is_profile_dropdown_open());
    state.dispatch(NavEvent::RouteChanged(ViewId::Profile));
    assert_eq!(state.active_view(), ViewId::Profile);
    state.dispatch(NavEvent::Logout);
    assert!(state.session().is_none());
}
