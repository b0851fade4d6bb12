//! Dark / rainy theme switch.

use leptos::prelude::*;

use crate::state::ui::{Theme, UiState};

/// Toggle button reading and writing the app-wide theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let theme = move || ui.get().theme;

    view! {
        <button
            class="theme-toggle"
            class:theme-toggle--dark=move || theme() == Theme::Dark
            aria-label=move || format!("Switch to {} theme", theme().toggled().label().to_lowercase())
            on:click=move |_| {
                let next = crate::util::theme::toggle(ui.get_untracked().theme);
                ui.update(|u| u.theme = next);
            }
        >
            <span class="theme-toggle__track">
                <span class="theme-toggle__thumb">
                    {move || if theme() == Theme::Dark { "☾" } else { "☂" }}
                </span>
            </span>
            <span class="theme-toggle__label">{move || theme().label()}</span>
        </button>
    }
}
