//! Local UI chrome state (theme).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of navigation state so the theme can
//! change without waking every navigation subscriber.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual theme applied through `<html data-theme>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Night palette.
    Dark,
    /// Light, rain-washed palette.
    #[default]
    Rainy,
}

impl Theme {
    /// Value written to the `data-theme` attribute and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Rainy => "rainy",
        }
    }

    /// Parse a stored value. Anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Self::Dark),
            "rainy" | "light" => Some(Self::Rainy),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Rainy,
            Self::Rainy => Self::Dark,
        }
    }

    /// Label shown next to the toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Rainy => "Rainy",
        }
    }
}

/// UI state shared through context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
