//! Shared numeric constants for the shell crate.

// ── Layout ──────────────────────────────────────────────────────

/// Viewport widths strictly below this value use the compact layout.
pub const COMPACT_BREAKPOINT_PX: f64 = 900.0;

// ── Carousel ────────────────────────────────────────────────────

/// Number of concatenated copies of the source list in the virtual track.
pub const CAROUSEL_TILE_COUNT: usize = 4;

/// Width of one carousel card including its gap, in CSS pixels.
pub const CAROUSEL_ITEM_WIDTH_PX: f64 = 280.0;

/// Per-frame scroll increment while nothing is hovered.
pub const CAROUSEL_CRUISE_SPEED: f64 = 1.0;

/// Per-frame scroll increment while the pointer is over the surface.
pub const CAROUSEL_HOVER_SPEED: f64 = 0.25;

/// Fraction of the remaining speed gap closed each frame (1.0 = immediate).
pub const CAROUSEL_SPEED_EASING: f64 = 1.0;

// ── Frames ──────────────────────────────────────────────────────

/// Nominal frame interval used by the manual scheduler's clock.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;
