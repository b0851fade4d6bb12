//! Recoverable error screen shown by the app's error boundary.

use leptos::prelude::*;

/// Generic failure view with reload and home actions.
#[component]
pub fn ErrorView() -> impl IntoView {
    let on_retry = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    leptos::logging::warn!("reload failed: {e:?}");
                }
            }
        }
    };
    let on_home = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href("/") {
                    leptos::logging::warn!("navigation home failed: {e:?}");
                }
            }
        }
    };

    view! {
        <div class="error-view" role="alert">
            <div class="error-view__content">
                <h2>"🍃 Something went wrong"</h2>
                <p>
                    "We're sorry, but something unexpected happened while preparing your recipe experience."
                </p>
                <button class="btn btn--primary" on:click=on_retry>"Try Again"</button>
                <button class="btn" on:click=on_home>"Back to Home"</button>
            </div>
        </div>
    }
}
