//! Raindrop loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Preparing your recipes...".to_owned());
    view! {
        <div class="spinner" role="status">
            <div class="spinner__drops">
                <span class="spinner__drop"></span>
                <span class="spinner__drop"></span>
                <span class="spinner__drop"></span>
            </div>
            <span class="spinner__text">{message}</span>
        </div>
    }
}
