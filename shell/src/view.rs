//! View registry: the set of top-level pages and their address mapping.
//!
//! The route layer is authoritative for which view is displayed. Everything
//! here is a pure mapping between view ids, their canonical paths, and the
//! navigation links offered to guests and signed-in users.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a registered view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view id: {0:?}")]
pub struct UnknownView(pub String);

/// One top-level page identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewId {
    #[default]
    Home,
    Explore,
    Search,
    Auth,
    Dashboard,
    CreateRecipe,
    Profile,
    /// Marker for any address that matches no registered view.
    NotFound,
}

impl ViewId {
    /// Every view reachable by navigation, in registry order.
    pub const REGISTERED: [ViewId; 7] = [
        Self::Home,
        Self::Explore,
        Self::Search,
        Self::Auth,
        Self::Dashboard,
        Self::CreateRecipe,
        Self::Profile,
    ];

    /// Stable identifier used in navigation requests.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Explore => "explore",
            Self::Search => "search",
            Self::Auth => "auth",
            Self::Dashboard => "dashboard",
            Self::CreateRecipe => "createRecipe",
            Self::Profile => "profile",
            Self::NotFound => "notFound",
        }
    }

    /// Canonical address for this view. Home lives at the root.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Explore => "/explore",
            Self::Search => "/search",
            Self::Auth => "/auth",
            Self::Dashboard => "/dashboard",
            Self::CreateRecipe => "/createRecipe",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// Resolve an address to a view. Unmatched addresses yield `NotFound`.
    ///
    /// Query strings and fragments are ignored, as is a single trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_start_matches('/');
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Self::Home;
        }
        Self::resolve(trimmed)
    }

    /// Resolve a navigation request id, degrading unknown ids to `NotFound`.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        match raw.parse::<Self>() {
            Ok(Self::NotFound) | Err(_) => {
                log::debug!("navigation target {raw:?} is not registered, routing to not-found");
                Self::NotFound
            }
            Ok(view) => view,
        }
    }

    /// Whether the view is part of the registry (everything except `NotFound`).
    #[must_use]
    pub fn is_registered(self) -> bool {
        self != Self::NotFound
    }

    /// Label shown for this view in navigation links.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Explore => "Explore",
            Self::Search => "Search",
            Self::Auth => "Connect",
            Self::Dashboard => "Dashboard",
            Self::CreateRecipe => "Create Recipe",
            Self::Profile => "Profile",
            Self::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::REGISTERED
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_owned()))
    }
}

/// Links shown in the navigation panel and mobile menu.
///
/// Guests see explore/home/search; a signed-in user also gets the dashboard.
#[must_use]
pub fn nav_links(signed_in: bool) -> &'static [ViewId] {
    const GUEST: [ViewId; 3] = [ViewId::Explore, ViewId::Home, ViewId::Search];
    const USER: [ViewId; 4] = [ViewId::Explore, ViewId::Home, ViewId::Search, ViewId::Dashboard];
    if signed_in { &USER } else { &GUEST }
}
