//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (listeners, storage, animation
//! frames) and static data from page and component logic. Everything that
//! touches `web_sys` is compiled only with the `hydrate` feature and degrades
//! to a no-op otherwise, so the same helpers run in SSR and native tests.

pub mod auth;
pub mod dom;
pub mod fixtures;
pub mod outside;
#[cfg(feature = "hydrate")]
pub mod raf;
pub mod theme;
