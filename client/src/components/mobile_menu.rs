//! Overlay menu of the compact layout.

use leptos::prelude::*;
use shell::nav::{NavEvent, NavigationState};
use shell::view::ViewId;

use crate::components::navigation::{GuestFooterButton, NavLinks, welcome_suffix};
use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::use_nav;

/// Full-screen menu: links, account actions, theme toggle and footer.
///
/// Signed-in users get their account actions inline here; the dropdown
/// itself is anchored to the avatar in the top bar.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let nav = use_nav();
    let signed_in = move || nav.with(NavigationState::is_authenticated);
    let greeting = move || nav.with(|state| state.session().map(shell::session::Session::greeting)).unwrap_or_default();

    view! {
        <div class="mobile-menu">
            <div class="mobile-menu__content">
                <NavLinks mobile=true/>
                <div class="mobile-menu__account">
                    <Show when=signed_in fallback=|| view! { <GuestFooterButton mobile=true/> }>
                        <p class="mobile-menu__greeting shimmer">{greeting}</p>
                        <button
                            class="footer-button footer-button--mobile"
                            on:click=move |_| nav.run(|state| state.navigate_to(ViewId::Profile))
                        >
                            <span class="nav-link__icon">"👤"</span>
                            <span>"View Profile"</span>
                        </button>
                        <button
                            class="footer-button footer-button--mobile footer-button--logout"
                            on:click=move |_| nav.dispatch(NavEvent::Logout)
                        >
                            <span class="nav-link__icon">"⎋"</span>
                            <span>"Logout"</span>
                        </button>
                    </Show>
                </div>
                <ThemeToggle/>
                <p class="mobile-menu__copyright shimmer">
                    "© 2025 MonsoonRecipes"
                    {move || nav.with(|state| welcome_suffix(state.session()))}
                </p>
            </div>
        </div>
    }
}
