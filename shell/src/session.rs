//! Ephemeral signed-in user summary.
//!
//! A session exists only for the lifetime of the page. It is never written to
//! storage; reloading the application always starts signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Fallback name used when a login form carries no name.
pub const DEFAULT_LOGIN_NAME: &str = "Recipe Chef";

/// Authenticated-user summary shared read-only with every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { display_name: non_blank(display_name.into()), email: non_blank(email.into()) }
    }

    /// Session produced by a login form. A blank name becomes [`DEFAULT_LOGIN_NAME`].
    #[must_use]
    pub fn from_login(name: &str, email: &str) -> Self {
        let name = if name.trim().is_empty() { DEFAULT_LOGIN_NAME } else { name.trim() };
        Self::new(name, email.trim())
    }

    /// Session produced by a registration form; the submitted name is kept as-is.
    #[must_use]
    pub fn from_register(name: &str, email: &str) -> Self {
        Self::new(name.trim(), email.trim())
    }

    /// First word of the display name, if any.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.display_name.as_deref().and_then(|name| name.split_whitespace().next())
    }

    /// Label for the profile trigger: `Hi, <first name>` or `Profile`.
    #[must_use]
    pub fn greeting(&self) -> String {
        match self.first_name() {
            Some(first) => format!("Hi, {first}"),
            None => "Profile".to_owned(),
        }
    }

    /// Uppercased first character of the display name, `U` when unnamed.
    #[must_use]
    pub fn avatar_initial(&self) -> char {
        self.display_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }

    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or("User")
    }

    #[must_use]
    pub fn email_or_default(&self) -> &str {
        self.email.as_deref().unwrap_or("user@example.com")
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
