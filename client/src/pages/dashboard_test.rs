use super::*;

#[test]
fn welcome_uses_first_name() {
    let session = Session::new("Asha Rao", "asha@example.com");
    assert_eq!(welcome_title(Some(&session)), "Welcome back, Asha!");
}

#[test]
fn welcome_falls_back_to_chef() {
    assert_eq!(welcome_title(None), "Welcome back, Chef!");
    assert_eq!(welcome_title(Some(&Session::new("", "a@b.co"))), "Welcome back, Chef!");
}

#[test]
fn quick_actions_route_to_registered_views() {
    for (_, label, view) in QUICK_ACTIONS {
        assert!(view.is_registered(), "{label} targets {view}");
    }
}

#[test]
fn stat_icon_tint_uses_alpha_suffix() {
    assert_eq!(stat_icon_style("#667eea"), "background-color: #667eea20; color: #667eea");
}
