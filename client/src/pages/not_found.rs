//! "Lost in the Monsoon" page for unknown addresses.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;
use shell::view::ViewId;

use crate::state::nav::use_nav;

pub const RAINDROP_COUNT: usize = 150;

const SUGGESTIONS: [(&str, &str); 4] = [
    ("🔍", "Double-check the URL for typos"),
    ("⏰", "Try again in a moment"),
    ("🏠", "Return to our cozy home"),
    ("🍳", "Explore our recipe collection"),
];

/// Inline style of raindrop `index`.
///
/// Positions follow a golden-ratio sequence, identical on server and browser.
#[allow(clippy::cast_precision_loss)]
pub fn raindrop_style(index: usize) -> String {
    const GOLDEN: f64 = 0.618_033_988_749_895;
    let n = index as f64;
    let a = (n * GOLDEN).fract();
    let b = (n * GOLDEN * GOLDEN).fract();
    let c = (n * 0.5 * GOLDEN + 0.25).fract();
    format!(
        "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s; opacity: {:.2}",
        a * 100.0,
        b * 2.0,
        0.5 + c * 1.5,
        0.3 + b * 0.4,
    )
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let nav = use_nav();
    let go = move |view: ViewId| nav.run(|state| state.navigate_to(view));
    let go_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(Err(e)) = web_sys::window().and_then(|w| w.history().ok()).map(|h| h.back()) {
                leptos::logging::warn!("history back failed: {e:?}");
            }
        }
    };

    view! {
        <div class="not-found">
            <div class="not-found__rain" aria-hidden="true">
                {(0..RAINDROP_COUNT)
                    .map(|i| view! { <div class="not-found__drop" style=raindrop_style(i)></div> })
                    .collect_view()}
            </div>

            <div class="not-found__content">
                <div class="not-found__umbrella" aria-hidden="true">"☂"</div>
                <div class="not-found__code">"404"</div>
                <h1 class="not-found__title">"Lost in the Monsoon"</h1>
                <p class="not-found__message">
                    "Looks like this recipe got washed away by the rain! Don't worry, we'll help you find your way back to delicious discoveries."
                </p>

                <div class="not-found__suggestions">
                    <h3>"🌧️ Weather the storm with these options:"</h3>
                    <div class="not-found__grid">
                        {SUGGESTIONS
                            .into_iter()
                            .map(|(icon, text)| {
                                view! {
                                    <div class="not-found__suggestion">
                                        <span>{icon}</span>
                                        <span>{text}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="not-found__actions">
                    <button class="btn btn--primary" on:click=move |_| go(ViewId::Home)>"🏠 Back to Home"</button>
                    <button class="btn" on:click=go_back>"← Go Back"</button>
                    <button class="btn" on:click=move |_| go(ViewId::Search)>"🔍 Search Recipes"</button>
                </div>

                <div class="not-found__help">
                    <p>"☔ Still caught in the rain? Let's find shelter together!"</p>
                    <button class="btn btn--link" on:click=move |_| go(ViewId::Explore)>"🌟 Popular Recipes"</button>
                    <button class="btn btn--link" on:click=move |_| go(ViewId::Home)>"🔥 Featured Content"</button>
                </div>
            </div>
        </div>
    }
}
