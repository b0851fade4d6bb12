#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_threshold_is_900_and_starts_wide() {
    let monitor = BreakpointMonitor::default();
    assert_eq!(monitor.threshold(), 900.0);
    assert!(!monitor.is_compact());
    assert_eq!(monitor.width(), None);
}

#[test]
fn threshold_is_exclusive() {
    assert!(BreakpointMonitor::classify(900.0, 899.0));
    assert!(!BreakpointMonitor::classify(900.0, 900.0));
}

#[test]
fn observe_reports_only_transitions() {
    let mut monitor = BreakpointMonitor::default();
    assert_eq!(monitor.observe(1200.0), None);
    assert_eq!(monitor.observe(800.0), Some(true));
    assert_eq!(monitor.observe(700.0), None);
    assert_eq!(monitor.observe(901.0), Some(false));
    assert_eq!(monitor.width(), Some(901.0));
}

#[test]
fn repeated_same_width_is_idempotent() {
    let mut monitor = BreakpointMonitor::with_width(900.0, 600.0);
    assert!(monitor.is_compact());
    for _ in 0..5 {
        assert_eq!(monitor.observe(600.0), None);
        assert!(monitor.is_compact());
    }
}

#[test]
fn rapid_resize_sequence_ends_on_last_width() {
    let mut monitor = BreakpointMonitor::default();
    let flips = [1000.0, 899.0, 901.0, 10.0, 2000.0, 850.0]
        .into_iter()
        .filter_map(|w| monitor.observe(w))
        .collect::<Vec<_>>();
    assert_eq!(flips, vec![true, false, true, false, true]);
    assert!(monitor.is_compact());
}

#[test]
fn invalid_widths_are_ignored() {
    let mut monitor = BreakpointMonitor::with_width(900.0, 1000.0);
    assert_eq!(monitor.observe(f64::NAN), None);
    assert_eq!(monitor.observe(-5.0), None);
    assert_eq!(monitor.width(), Some(1000.0));
}
