//! Breakpoint monitor: derives the compact-layout flag from viewport width.
//!
//! Every resize event must be fed through [`BreakpointMonitor::observe`]; there
//! is no debouncing. Evaluation is idempotent, so a resize to the same side of
//! the threshold reports no change.

#[cfg(test)]
#[path = "breakpoint_test.rs"]
mod breakpoint_test;

use crate::consts::COMPACT_BREAKPOINT_PX;

/// Tracks the last observed viewport width against a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointMonitor {
    threshold: f64,
    width: f64,
    compact: bool,
}

impl Default for BreakpointMonitor {
    fn default() -> Self {
        Self::new(COMPACT_BREAKPOINT_PX)
    }
}

impl BreakpointMonitor {
    /// Monitor with the given threshold. Until a width is observed the layout
    /// is treated as non-compact.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, width: f64::INFINITY, compact: false }
    }

    /// Monitor seeded with an initial width.
    #[must_use]
    pub fn with_width(threshold: f64, width: f64) -> Self {
        let mut monitor = Self::new(threshold);
        monitor.observe(width);
        monitor
    }

    /// Whether `width` falls in the compact layout for `threshold`.
    #[must_use]
    pub fn classify(threshold: f64, width: f64) -> bool {
        width < threshold
    }

    /// Record a resize. Returns `Some(compact)` only when the flag flipped.
    ///
    /// Non-finite or negative widths are ignored.
    pub fn observe(&mut self, width: f64) -> Option<bool> {
        if !width.is_finite() || width < 0.0 {
            return None;
        }
        self.width = width;
        let compact = Self::classify(self.threshold, width);
        if compact == self.compact {
            return None;
        }
        self.compact = compact;
        Some(compact)
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Last observed width, if any.
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.width.is_finite().then_some(self.width)
    }
}
