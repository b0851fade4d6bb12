//! Profile trigger and dropdown for a signed-in user.

use leptos::prelude::*;
use shell::nav::{NavEvent, NavigationState};
use shell::session::Session;
use shell::view::ViewId;

use crate::state::nav::use_nav;

fn current_session() -> impl Fn() -> Session + Copy {
    let nav = use_nav();
    move || nav.with(|state| state.session().cloned()).unwrap_or_default()
}

/// Button that opens the dropdown. `compact` renders only the avatar initial.
#[component]
pub fn ProfileTrigger(#[prop(optional)] compact: bool) -> impl IntoView {
    let nav = use_nav();
    let session = current_session();
    let open = move || nav.with(NavigationState::is_profile_dropdown_open);

    view! {
        <button
            class="profile-trigger"
            class:profile-trigger--compact=compact
            class:profile-trigger--open=open
            aria-haspopup="true"
            aria-expanded=move || open().to_string()
            aria-label=move || compact.then(|| session().greeting())
            on:click=move |_| nav.run(NavigationState::activate_footer)
        >
            <Show
                when=move || compact
                fallback=move || {
                    view! {
                        <span class="nav-link__icon">"👤"</span>
                        <span class="shimmer">{move || session().greeting()}</span>
                    }
                }
            >
                <span class="profile-trigger__avatar">{move || session().avatar_initial().to_string()}</span>
            </Show>
        </button>
    }
}

/// Dropdown body: identity header, View Profile and Logout.
#[component]
pub fn ProfileDropdown() -> impl IntoView {
    let nav = use_nav();
    let session = current_session();

    view! {
        <div class="profile-dropdown" role="menu">
            <div class="profile-dropdown__header">
                <div class="profile-dropdown__avatar">{move || session().avatar_initial().to_string()}</div>
                <div class="profile-dropdown__details">
                    <span class="profile-dropdown__name">{move || session().name_or_default().to_owned()}</span>
                    <span class="profile-dropdown__email">{move || session().email_or_default().to_owned()}</span>
                </div>
            </div>
            <div class="profile-dropdown__divider"></div>
            <button
                class="profile-dropdown__item"
                role="menuitem"
                on:click=move |_| nav.run(|state| state.navigate_to(ViewId::Profile))
            >
                <span>"👤"</span>
                <span>"View Profile"</span>
            </button>
            <button
                class="profile-dropdown__item profile-dropdown__item--logout"
                role="menuitem"
                on:click=move |_| nav.dispatch(NavEvent::Logout)
            >
                <span>"⎋"</span>
                <span>"Logout"</span>
            </button>
        </div>
    }
}
