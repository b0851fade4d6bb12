//! Headless core of the recipe browser shell.
//!
//! Everything here is plain Rust with no browser dependency. The client crate
//! feeds DOM events in (clicks, pointer-downs, resizes, animation frames) and
//! applies what comes back (route changes, scroll lock, scroll offsets), so
//! every state machine can be driven deterministically from tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Navigation and overlay coordinator ([`nav::NavigationState`]) |
//! | [`view`] | View registry, route paths and nav link sets |
//! | [`session`] | Ephemeral signed-in identity and display helpers |
//! | [`breakpoint`] | Compact-layout breakpoint monitor |
//! | [`outside`] | Outside-interaction detector for open overlays |
//! | [`carousel`] | Continuously looping carousel track and frame loop |
//! | [`frame`] | Frame scheduling capability and a manual scheduler |
//! | [`geom`] | Points and rectangles in viewport space |
//! | [`consts`] | Shared numeric constants (breakpoint, carousel tuning) |

pub mod breakpoint;
pub mod carousel;
pub mod consts;
pub mod frame;
pub mod geom;
pub mod nav;
pub mod outside;
pub mod session;
pub mod view;
