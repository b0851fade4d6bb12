//! Sign-in / registration page backed by the simulated auth collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form model lives in `util::auth::AuthFormState`. On submit the page
//! validates, waits out the simulated delay and reports the outcome to the
//! coordinator through `on_auth_result`, which starts the session and routes
//! to the dashboard. A second submit while one is pending is refused.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use shell::nav::NavigationState;
use shell::session::Session;

use crate::state::nav::use_nav;
use crate::util::auth::{AuthError, AuthFormState, Field, authenticate};

/// Input type, placeholder and icon for a form field.
pub fn field_meta(field: Field) -> (&'static str, &'static str, &'static str) {
    match field {
        Field::Name => ("text", "Full Name", "👤"),
        Field::Email => ("email", "Email Address", "✉"),
        Field::Password => ("password", "Password", "🔒"),
        Field::ConfirmPassword => ("password", "Confirm Password", "🔒"),
    }
}

/// Effective input type once the visibility toggle is applied.
pub fn input_type(field: Field, revealed: bool) -> &'static str {
    let (kind, _, _) = field_meta(field);
    if revealed && kind == "password" { "text" } else { kind }
}

/// Clear the in-flight flag and pass the result on.
///
/// Returns `None` once the page that started the request is gone, so a late
/// answer cannot pull the user back to the dashboard.
pub fn settle_submit(
    form: RwSignal<AuthFormState>,
    result: Result<Session, AuthError>,
) -> Option<Result<Session, AuthError>> {
    form.try_update(AuthFormState::finish_submit).map(|()| result)
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let nav = use_nav();
    let form = RwSignal::new(AuthFormState::default());
    let mode = move || form.with(|f| f.mode);
    let loading = move || form.with(|f| f.in_flight);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = form.try_update(AuthFormState::begin_submit);
        match started {
            Some(Ok(snapshot)) => {
                let mode = form.with_untracked(|f| f.mode);
                leptos::task::spawn_local(async move {
                    let result = authenticate(mode, snapshot).await;
                    match settle_submit(form, result) {
                        Some(result) => nav.run(|state: &mut NavigationState| state.on_auth_result(result)),
                        None => leptos::logging::log!("auth result dropped: page left before it arrived"),
                    }
                });
            }
            Some(Err(AuthError::Busy)) => leptos::logging::log!("auth submit ignored: request in flight"),
            Some(Err(e)) => leptos::logging::log!("auth form rejected: {e}"),
            None => {}
        }
    };

    view! {
        <div class="auth">
            <div class="auth__card">
                <header class="auth__header">
                    <h2 class="auth__title shimmer">{move || mode().title()}</h2>
                    <p class="auth__subtitle">{move || mode().subtitle()}</p>
                </header>

                <form class="auth__form" on:submit=on_submit novalidate=true>
                    {move || {
                        mode()
                            .fields()
                            .iter()
                            .map(|&field| view! { <AuthInput field=field form=form/> })
                            .collect_view()
                    }}
                    <button
                        type="submit"
                        class="auth__submit"
                        class:auth__submit--loading=loading
                        disabled=loading
                    >
                        <Show when=loading fallback=move || view! { <span>{mode().submit_label()}</span> " →" }>
                            <span class="auth__spinner"></span>
                        </Show>
                    </button>
                </form>

                <footer class="auth__footer">
                    <p class="auth__switch">
                        {move || mode().switch_prompt().0}
                        " "
                        <button
                            class="auth__switch-button"
                            disabled=loading
                            on:click=move |_| form.update(AuthFormState::switch_mode)
                        >
                            {move || mode().switch_prompt().1}
                        </button>
                    </p>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn AuthInput(field: Field, form: RwSignal<AuthFormState>) -> impl IntoView {
    let (_, placeholder, icon) = field_meta(field);
    let revealed = RwSignal::new(false);
    let error = move || form.with(|f| f.error(field));
    let loading = move || form.with(|f| f.in_flight);
    let maskable = matches!(field, Field::Password | Field::ConfirmPassword);

    view! {
        <div class="auth__group">
            <div class="auth__input-wrapper">
                <span class="auth__input-icon">{icon}</span>
                <input
                    class="auth__input"
                    class:auth__input--error=move || error().is_some()
                    type=move || input_type(field, revealed.get())
                    placeholder=placeholder
                    disabled=loading
                    prop:value=move || form.with(|f| f.form.value(field).to_owned())
                    on:input=move |ev| form.update(|f| f.input(field, event_target_value(&ev)))
                    on:blur=move |_| form.update(|f| f.blur(field))
                />
                <Show when=move || maskable>
                    <button
                        type="button"
                        class="auth__reveal"
                        disabled=loading
                        aria-label=move || if revealed.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || if revealed.get() { "🙈" } else { "👁" }}
                    </button>
                </Show>
            </div>
            {move || error().map(|message| view! { <span class="auth__error">{message}</span> })}
        </div>
    }
}
