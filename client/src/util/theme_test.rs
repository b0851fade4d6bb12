#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_default_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Rainy);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Rainy), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Rainy);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Rainy);
}
