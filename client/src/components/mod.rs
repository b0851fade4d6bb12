//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome and shared widgets, reading and
//! dispatching into the coordinator provided through Leptos context.

pub mod carousel;
pub mod error_view;
pub mod loading_spinner;
pub mod mobile_menu;
pub mod navigation;
pub mod profile_menu;
pub mod theme_toggle;
