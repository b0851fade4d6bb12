//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the theme context and the router. `AppShell` sits inside
//! the router: it seeds the navigation coordinator from the current address,
//! hands coordinator route decisions to the router, mirrors router changes
//! (history navigation) back into the coordinator and lays the content out
//! next to the navigation chrome.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};
use shell::nav::{ContentLayout, NavConfig, NavEvent, NavigationState};
use shell::view::ViewId;

use crate::components::error_view::ErrorView;
use crate::components::navigation::{Navigation, PanelToggle};
use crate::pages::{
    auth::AuthPage, create_recipe::CreateRecipePage, dashboard::DashboardPage, explore::ExplorePage, home::HomePage,
    not_found::NotFoundPage, profile::ProfilePage, search::SearchPage,
};
use crate::state::nav::NavContext;
use crate::state::ui::UiState;
use crate::util::{dom, theme};

/// Content wrapper class for a layout mode.
pub fn content_class(layout: ContentLayout) -> &'static str {
    match layout {
        ContentLayout::Compact => "content content--compact",
        ContentLayout::FullWidth => "content content--full",
        ContentLayout::WithNavigation => "content content--with-nav",
    }
}

/// Page width class: forms and search read better narrow.
pub fn page_class(view: ViewId) -> &'static str {
    match view {
        ViewId::Search | ViewId::Auth | ViewId::CreateRecipe | ViewId::Profile => "page page--medium",
        ViewId::Home | ViewId::Explore | ViewId::Dashboard | ViewId::NotFound => "page page--large",
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="rainy">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Stored preference is read once the browser is live.
    Effect::new(move |_| {
        let stored = theme::read_preference();
        ui.update(|u| u.theme = stored);
    });
    Effect::new(move |_| theme::apply(ui.get().theme));

    view! {
        <Stylesheet id="leptos" href="/pkg/monsoon-recipes.css"/>
        <Title text="MonsoonRecipes"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    // The server has no viewport; it renders the wide layout and the real
    // width arrives after hydration.
    let initial = NavigationState::with_initial(NavConfig::default(), &location.pathname.get_untracked(), f64::INFINITY);
    let nav = NavContext::new(initial);
    provide_context(nav);

    Effect::new(move |_| {
        if let Some(view) = nav.pending_route.get() {
            nav.pending_route.set(None);
            navigate(view.path(), NavigateOptions::default());
        }
    });

    Effect::new(move |_| {
        let view = ViewId::from_path(&location.pathname.get());
        nav.dispatch(NavEvent::RouteChanged(view));
    });

    dom::install_viewport_listener(nav);

    let layout = move || nav.with(NavigationState::content_layout);
    let page = move || nav.with(|state| page_class(state.active_view()));

    view! {
        <div class="app">
            <div class="app__background" aria-hidden="true"></div>
            <PanelToggle/>
            <Navigation/>
            <main class=move || content_class(layout())>
                <div class=page>
                    <ErrorBoundary fallback=|errors| {
                        for (_, err) in errors.get_untracked() {
                            leptos::logging::error!("page render failed: {err}");
                        }
                        view! { <ErrorView/> }
                    }>
                        <Routes fallback=|| view! { <NotFoundPage/> }>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("explore") view=ExplorePage/>
                            <Route path=StaticSegment("search") view=SearchPage/>
                            <Route path=StaticSegment("auth") view=AuthPage/>
                            <Route path=StaticSegment("dashboard") view=DashboardPage/>
                            <Route path=StaticSegment("createRecipe") view=CreateRecipePage/>
                            <Route path=StaticSegment("profile") view=ProfilePage/>
                        </Routes>
                    </ErrorBoundary>
                </div>
            </main>
        </div>
    }
}
