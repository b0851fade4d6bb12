//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Navigation state is the `shell` coordinator wrapped in a signal (`nav`);
//! presentation preferences (`ui`) stay separate so the theme can change
//! without touching routing state.

pub mod nav;
pub mod ui;
