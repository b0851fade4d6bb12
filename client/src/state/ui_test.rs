use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_rainy() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Rainy);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_toggles_between_both_values() {
    assert_eq!(Theme::Dark.toggled(), Theme::Rainy);
    assert_eq!(Theme::Rainy.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn theme_parse_accepts_stored_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" rainy "), Some(Theme::Rainy));
    assert_eq!(Theme::parse("light"), Some(Theme::Rainy));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_round_trips_through_attribute_value() {
    for theme in [Theme::Dark, Theme::Rainy] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_labels() {
    assert_eq!(Theme::Dark.label(), "Dark");
    assert_eq!(Theme::Rainy.label(), "Rainy");
}
