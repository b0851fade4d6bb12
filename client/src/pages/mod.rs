//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its local form or filter state and delegates navigation to
//! the coordinator. Pure helpers sit beside each page component and are
//! tested in the page's `_test.rs` sibling.

pub mod auth;
pub mod create_recipe;
pub mod dashboard;
pub mod explore;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod search;
