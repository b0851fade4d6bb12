//! Navigation chrome: desktop panel, compact top bar and their overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here renders from the single coordinator signal provided by
//! the app shell. Clicks become coordinator events; the coordinator decides
//! which overlays close and which route to commit.
//!
//! ARCHITECTURE
//! ============
//! Wide viewports get the side panel (hidden while collapsed). Compact
//! viewports get a top bar with two anchors: the menu toggle plus the mobile
//! menu, and for signed-in users an avatar plus the profile dropdown. Each
//! anchor is one `<div>` registered with the outside-interaction listener, so
//! a pointer-down on a trigger counts as inside its own overlay.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use shell::nav::{FooterAction, NavEvent, NavigationState, Overlay};
use shell::session::Session;
use shell::view::ViewId;

use crate::components::mobile_menu::MobileMenu;
use crate::components::profile_menu::{ProfileDropdown, ProfileTrigger};
use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::{NavContext, use_nav};
use crate::util::outside::{DomRegion, install_outside_listener};

/// Icon shown beside a navigation link.
pub fn link_icon(view: ViewId) -> &'static str {
    match view {
        ViewId::Explore => "🧭",
        ViewId::Home => "🏠",
        ViewId::Search => "🔍",
        ViewId::Dashboard => "📊",
        ViewId::Auth => "🔌",
        ViewId::CreateRecipe => "➕",
        ViewId::Profile => "👤",
        ViewId::NotFound => "❔",
    }
}

/// Icon, label and modifier class of a guest footer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterButton {
    pub icon: &'static str,
    pub label: &'static str,
    pub modifier: &'static str,
}

/// Presentation of a guest footer action. `None` for the signed-in slot,
/// which renders the profile trigger instead.
pub fn footer_button(action: FooterAction) -> Option<FooterButton> {
    match action {
        FooterAction::Profile => None,
        FooterAction::Connect => Some(FooterButton { icon: "🔌", label: "Connect", modifier: "connect" }),
        FooterAction::Back => Some(FooterButton { icon: "←", label: "Back", modifier: "back" }),
    }
}

/// Trailing welcome note shown once a named user is signed in.
pub fn welcome_suffix(session: Option<&Session>) -> Option<&'static str> {
    session.and_then(|s| s.display_name.as_ref()).map(|_| " • Welcome back!")
}

/// Accessible label of the panel show/hide button.
pub fn panel_toggle_label(collapsed: bool) -> &'static str {
    if collapsed { "Show navigation" } else { "Hide navigation" }
}

/// Accessible label of the compact menu toggle.
pub fn menu_toggle_label(open: bool) -> &'static str {
    if open { "Close menu" } else { "Open menu" }
}

/// Top-level navigation for the current layout.
#[component]
pub fn Navigation() -> impl IntoView {
    let nav = use_nav();
    let menu_region = NodeRef::<leptos::html::Div>::new();
    let profile_region = NodeRef::<leptos::html::Div>::new();
    install_outside_listener(
        nav,
        vec![(Overlay::MobileMenu, DomRegion(menu_region)), (Overlay::ProfileDropdown, DomRegion(profile_region))],
    );

    let compact = move || nav.with(NavigationState::is_compact_layout);
    let collapsed = move || nav.with(NavigationState::is_panel_collapsed);

    view! {
        <Show
            when=compact
            fallback=move || {
                view! {
                    <Show when=move || !collapsed()>
                        <NavPanel profile_region=profile_region/>
                    </Show>
                }
            }
        >
            <MobileBar menu_region=menu_region profile_region=profile_region/>
        </Show>
    }
}

/// Button that shows or hides the wide-layout panel.
#[component]
pub fn PanelToggle() -> impl IntoView {
    let nav = use_nav();
    let collapsed = move || nav.with(NavigationState::is_panel_collapsed);
    let compact = move || nav.with(NavigationState::is_compact_layout);

    view! {
        <Show when=move || !compact()>
            <button
                class="panel-toggle"
                class:panel-toggle--collapsed=collapsed
                aria-label=move || panel_toggle_label(collapsed())
                on:click=move |_| nav.dispatch(NavEvent::TogglePanelCollapsed)
            >
                {move || if collapsed() { "☰" } else { "✕" }}
            </button>
        </Show>
    }
}

/// Links for the current session, marking the active view.
#[component]
pub fn NavLinks(#[prop(optional)] mobile: bool) -> impl IntoView {
    let nav = use_nav();
    let (class, label) = if mobile {
        ("mobile-menu__links", "Mobile navigation")
    } else {
        ("nav-panel__links", "Main navigation")
    };

    view! {
        <nav class=class role="navigation" aria-label=label>
            {move || {
                nav.with(NavigationState::nav_links)
                    .iter()
                    .map(|&view| view! { <NavLinkButton view=view mobile=mobile/> })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn NavLinkButton(view: ViewId, mobile: bool) -> impl IntoView {
    let nav = use_nav();
    let active = move || nav.with(|state| state.is_active(view));

    view! {
        <button
            class="nav-link"
            class:nav-link--mobile=mobile
            class:nav-link--active=active
            aria-current=move || active().then_some("page")
            on:click=move |_| nav.dispatch(NavEvent::RequestNavigate(view.as_str().to_owned()))
        >
            <span class="nav-link__icon">{link_icon(view)}</span>
            <span class="shimmer">{view.label()}</span>
            <span class="nav-link__line"></span>
        </button>
    }
}

/// Connect / Back button for guests.
#[component]
pub fn GuestFooterButton(#[prop(optional)] mobile: bool) -> impl IntoView {
    let nav = use_nav();
    let button = move || footer_button(nav.with(NavigationState::footer_action));

    view! {
        {move || {
            button()
                .map(|b| {
                    view! {
                        <button
                            class=format!("footer-button footer-button--{}", b.modifier)
                            class:footer-button--mobile=mobile
                            on:click=move |_| nav.run(NavigationState::activate_footer)
                        >
                            <span class="nav-link__icon">{b.icon}</span>
                            <span class="shimmer">{b.label}</span>
                        </button>
                    }
                })
        }}
    }
}

fn logo_click(nav: NavContext) {
    nav.run(|state| state.navigate_to(ViewId::Home));
}

#[component]
fn NavPanel(profile_region: NodeRef<leptos::html::Div>) -> impl IntoView {
    let nav = use_nav();
    let signed_in = move || nav.with(NavigationState::is_authenticated);
    let profile_open = move || nav.with(NavigationState::is_profile_dropdown_open);

    view! {
        <aside class="nav-panel">
            <div class="nav-panel__logo" on:click=move |_| logo_click(nav)>
                <span class="logo-text shimmer">"MonsoonRecipes"</span>
            </div>
            <NavLinks/>
            <div class="nav-panel__footer">
                <div class="nav-panel__profile" node_ref=profile_region>
                    <Show when=signed_in fallback=|| view! { <GuestFooterButton/> }>
                        <ProfileTrigger/>
                        <Show when=profile_open>
                            <ProfileDropdown/>
                        </Show>
                    </Show>
                </div>
                <div class="nav-panel__bottom">
                    <ThemeToggle/>
                    <p class="nav-panel__copyright shimmer">
                        "Enjoy your culinary adventures with "
                        <strong>"\"MonsoonRecipes\""</strong>
                        {move || nav.with(|state| welcome_suffix(state.session()))}
                    </p>
                </div>
            </div>
        </aside>
    }
}

#[component]
fn MobileBar(menu_region: NodeRef<leptos::html::Div>, profile_region: NodeRef<leptos::html::Div>) -> impl IntoView {
    let nav = use_nav();
    let signed_in = move || nav.with(NavigationState::is_authenticated);
    let menu_open = move || nav.with(NavigationState::is_mobile_menu_open);
    let profile_open = move || nav.with(NavigationState::is_profile_dropdown_open);

    view! {
        <header class="mobile-bar">
            <button class="mobile-bar__logo logo-text shimmer" on:click=move |_| logo_click(nav)>
                "MonsoonRecipes"
            </button>
            <div class="mobile-bar__actions">
                <Show when=signed_in>
                    <div class="mobile-bar__profile" node_ref=profile_region>
                        <ProfileTrigger compact=true/>
                        <Show when=profile_open>
                            <ProfileDropdown/>
                        </Show>
                    </div>
                </Show>
                <div class="mobile-bar__menu" node_ref=menu_region>
                    <button
                        class="menu-toggle"
                        aria-label=move || menu_toggle_label(menu_open())
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| nav.dispatch(NavEvent::ToggleMobileMenu)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                    <Show when=menu_open>
                        <MobileMenu/>
                    </Show>
                </div>
            </div>
        </header>
    }
}
