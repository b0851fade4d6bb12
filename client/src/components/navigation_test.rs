use super::*;

// =============================================================
// footer_button
// =============================================================

#[test]
fn signed_in_slot_has_no_guest_button() {
    assert_eq!(footer_button(FooterAction::Profile), None);
}

#[test]
fn guest_buttons_connect_and_back() {
    let connect = footer_button(FooterAction::Connect).unwrap();
    assert_eq!(connect.label, "Connect");
    assert_eq!(connect.modifier, "connect");
    let back = footer_button(FooterAction::Back).unwrap();
    assert_eq!(back.label, "Back");
    assert_eq!(back.modifier, "back");
}

// =============================================================
// welcome_suffix
// =============================================================

#[test]
fn welcome_suffix_needs_named_session() {
    assert_eq!(welcome_suffix(None), None);
    assert_eq!(welcome_suffix(Some(&Session::new("", "a@b.co"))), None);
    assert_eq!(welcome_suffix(Some(&Session::new("Asha", "a@b.co"))), Some(" • Welcome back!"));
}

// =============================================================
// labels
// =============================================================

#[test]
fn toggle_labels_follow_state() {
    assert_eq!(panel_toggle_label(true), "Show navigation");
    assert_eq!(panel_toggle_label(false), "Hide navigation");
    assert_eq!(menu_toggle_label(true), "Close menu");
    assert_eq!(menu_toggle_label(false), "Open menu");
}

#[test]
fn every_linkable_view_has_an_icon() {
    for view in ViewId::REGISTERED {
        assert!(!link_icon(view).is_empty(), "{view} has no icon");
    }
}
