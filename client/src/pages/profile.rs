//! Profile page with an edit / save / cancel cycle.
//!
//! Saved values live only for as long as the page is mounted.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use serde::Serialize;
use shell::session::Session;
use shell::view::ViewId;

use crate::state::nav::use_nav;

const DEFAULT_PHONE: &str = "+91 98703 74204";
const DEFAULT_LOCATION: &str = "New Delhi, India";
const DEFAULT_BIO: &str = "Passionate home chef who loves experimenting with flavors from around the world.";
const JOIN_DATE: &str = "March 2024";

/// Profile stats: value, label.
pub const PROFILE_STATS: [(&str, &str); 4] =
    [("12", "Recipes Created"), ("89", "Followers"), ("156", "Following"), ("1.2K", "Total Views")];

pub const PREFERENCES: [&str; 3] = ["Email Notifications", "Recipe Recommendations", "Public Profile"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Location,
    Bio,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub join_date: String,
}

impl ProfileData {
    /// Session identity plus the canned contact details.
    pub fn for_session(session: Option<&Session>) -> Self {
        Self {
            name: session.and_then(|s| s.display_name.clone()).unwrap_or_default(),
            email: session.and_then(|s| s.email.clone()).unwrap_or_default(),
            phone: DEFAULT_PHONE.to_owned(),
            location: DEFAULT_LOCATION.to_owned(),
            bio: DEFAULT_BIO.to_owned(),
            join_date: JOIN_DATE.to_owned(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::Bio => &self.bio,
        }
    }

    fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Location => self.location = value,
            ProfileField::Bio => self.bio = value,
        }
    }

    pub fn avatar_initial(&self) -> char {
        self.name.chars().next().and_then(|c| c.to_uppercase().next()).unwrap_or('U')
    }

    pub fn heading(&self) -> &str {
        if self.name.is_empty() { "User Name" } else { &self.name }
    }
}

/// Saved values plus the working copy shown while editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileEditor {
    saved: ProfileData,
    draft: ProfileData,
    editing: bool,
}

impl ProfileEditor {
    pub fn new(data: ProfileData) -> Self {
        Self { draft: data.clone(), saved: data, editing: false }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Values on screen: the draft while editing, the saved copy otherwise.
    pub fn shown(&self) -> &ProfileData {
        if self.editing { &self.draft } else { &self.saved }
    }

    pub fn start_edit(&mut self) {
        self.draft = self.saved.clone();
        self.editing = true;
    }

    /// Header Edit / Cancel button.
    pub fn toggle_edit(&mut self) {
        if self.editing {
            self.cancel();
        } else {
            self.start_edit();
        }
    }

    /// Edits are ignored unless editing.
    pub fn set(&mut self, field: ProfileField, value: String) {
        if self.editing {
            self.draft.set(field, value);
        }
    }

    /// Drop the draft and return to the last saved values.
    pub fn cancel(&mut self) {
        self.draft = self.saved.clone();
        self.editing = false;
    }

    /// Commit the draft.
    pub fn save(&mut self) -> &ProfileData {
        if self.editing {
            self.saved = self.draft.clone();
            self.editing = false;
        }
        &self.saved
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let nav = use_nav();
    let editor = RwSignal::new(ProfileEditor::new(nav.state.with_untracked(|s| ProfileData::for_session(s.session()))));
    let editing = move || editor.with(ProfileEditor::is_editing);

    let on_save = move |_| {
        let saved = editor.try_update(|e| e.save().clone());
        if let Some(saved) = saved {
            match serde_json::to_string(&saved) {
                Ok(json) => leptos::logging::log!("profile updated: {json}"),
                Err(e) => leptos::logging::error!("profile did not serialize: {e}"),
            }
        }
    };

    view! {
        <div class="profile">
            <header class="page-header">
                <button
                    class="page-header__back"
                    aria-label="Back to dashboard"
                    on:click=move |_| nav.run(|state| state.navigate_to(ViewId::Dashboard))
                >
                    "←"
                </button>
                <h1 class="page-title shimmer">"Profile Settings"</h1>
                <button class="btn" on:click=move |_| editor.update(ProfileEditor::toggle_edit)>
                    {move || if editing() { "✕ Cancel" } else { "✎ Edit" }}
                </button>
            </header>

            <section class="profile__avatar-section">
                <div class="profile__avatar">{move || editor.with(|e| e.shown().avatar_initial().to_string())}</div>
                <div class="profile__avatar-info">
                    <h2>{move || editor.with(|e| e.shown().heading().to_owned())}</h2>
                    <p>"Recipe Enthusiast"</p>
                </div>
                <Show when=editing>
                    <button class="btn btn--small">"Change Photo"</button>
                </Show>
            </section>

            <section class="profile__details">
                <div class="profile__grid">
                    <DetailRow editor=editor field=ProfileField::Name label="👤 Full Name" kind="text"/>
                    <DetailRow editor=editor field=ProfileField::Email label="✉ Email Address" kind="email"/>
                    <DetailRow editor=editor field=ProfileField::Phone label="☎ Phone Number" kind="tel"/>
                    <DetailRow editor=editor field=ProfileField::Location label="📍 Location" kind="text"/>
                    <div class="profile__item">
                        <div class="profile__label">"📅 Member Since"</div>
                        <div class="profile__value">{move || editor.with(|e| e.shown().join_date.clone())}</div>
                    </div>
                </div>
                <div class="profile__bio">
                    <div class="profile__label">"About Me"</div>
                    <Show
                        when=editing
                        fallback=move || view! { <div class="profile__value">{move || editor.with(|e| e.shown().bio.clone())}</div> }
                    >
                        <textarea
                            class="form-textarea"
                            rows="4"
                            placeholder="Tell us about yourself and your cooking journey..."
                            prop:value=move || editor.with(|e| e.shown().bio.clone())
                            on:input=move |ev| editor.update(|e| e.set(ProfileField::Bio, event_target_value(&ev)))
                        ></textarea>
                    </Show>
                </div>
            </section>

            <Show when=editing>
                <div class="profile__edit-actions">
                    <button class="btn" on:click=move |_| editor.update(ProfileEditor::cancel)>"Cancel Changes"</button>
                    <button class="btn btn--primary" on:click=on_save>"💾 Save Changes"</button>
                </div>
            </Show>

            <section class="profile__stats">
                <h3>"My Recipe Stats"</h3>
                <div class="stats-grid">
                    {PROFILE_STATS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stat-card">
                                    <div class="stat-card__value">{value}</div>
                                    <div class="stat-card__label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="profile__preferences">
                <h3>"Preferences"</h3>
                <div class="preference-list">
                    {PREFERENCES
                        .into_iter()
                        .map(|label| {
                            view! {
                                <div class="preference-item">
                                    <div class="preference-item__label">{label}</div>
                                    <label class="toggle">
                                        <input type="checkbox" checked=true/>
                                        <span class="toggle__slider"></span>
                                    </label>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn DetailRow(editor: RwSignal<ProfileEditor>, field: ProfileField, label: &'static str, kind: &'static str) -> impl IntoView {
    let editing = move || editor.with(ProfileEditor::is_editing);
    let value = move || editor.with(|e| e.shown().get(field).to_owned());

    view! {
        <div class="profile__item">
            <div class="profile__label">{label}</div>
            <Show when=editing fallback=move || view! { <div class="profile__value">{value}</div> }>
                <input
                    class="form-input"
                    type=kind
                    prop:value=value
                    on:input=move |ev| editor.update(|e| e.set(field, event_target_value(&ev)))
                />
            </Show>
        </div>
    }
}
