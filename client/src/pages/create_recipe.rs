//! Create-recipe form with growable ingredient and step lists.
//!
//! Publishing only logs the draft as JSON and returns to the dashboard;
//! nothing is stored.

#[cfg(test)]
#[path = "create_recipe_test.rs"]
mod create_recipe_test;

use leptos::prelude::*;
use serde::Serialize;
use shell::view::ViewId;

use crate::state::nav::use_nav;

pub const DIFFICULTIES: [(&str, &str); 3] = [("easy", "Easy"), ("medium", "Medium"), ("hard", "Hard")];

pub const CATEGORIES: [(&str, &str); 5] = [
    ("appetizer", "Appetizer"),
    ("main-course", "Main Course"),
    ("dessert", "Dessert"),
    ("drink", "Drink"),
    ("snack", "Snack"),
];

/// Which growable list an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Ingredients,
    Steps,
}

/// Everything the form collects. Both lists always hold at least one row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub difficulty: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            servings: String::new(),
            difficulty: "easy".to_owned(),
            category: "main-course".to_owned(),
            ingredients: vec![String::new()],
            steps: vec![String::new()],
        }
    }
}

impl RecipeDraft {
    fn list(&self, kind: ListKind) -> &Vec<String> {
        match kind {
            ListKind::Ingredients => &self.ingredients,
            ListKind::Steps => &self.steps,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Ingredients => &mut self.ingredients,
            ListKind::Steps => &mut self.steps,
        }
    }

    pub fn len(&self, kind: ListKind) -> usize {
        self.list(kind).len()
    }

    pub fn row(&self, kind: ListKind, index: usize) -> &str {
        self.list(kind).get(index).map_or("", String::as_str)
    }

    pub fn push_row(&mut self, kind: ListKind) {
        self.list_mut(kind).push(String::new());
    }

    /// Remove row `index`. The last remaining row is never removed.
    pub fn remove_row(&mut self, kind: ListKind, index: usize) {
        let list = self.list_mut(kind);
        if list.len() > 1 && index < list.len() {
            list.remove(index);
        }
    }

    pub fn set_row(&mut self, kind: ListKind, index: usize, value: String) {
        if let Some(row) = self.list_mut(kind).get_mut(index) {
            *row = value;
        }
    }

    pub fn can_remove(&self, kind: ListKind) -> bool {
        self.len(kind) > 1
    }

    /// The title is the only required field.
    pub fn is_publishable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[component]
pub fn CreateRecipePage() -> impl IntoView {
    let nav = use_nav();
    let draft = RwSignal::new(RecipeDraft::default());
    let back = move || nav.run(|state| state.navigate_to(ViewId::Dashboard));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = draft.get_untracked();
        if !snapshot.is_publishable() {
            leptos::logging::warn!("recipe not published: title is required");
            return;
        }
        match serde_json::to_string(&snapshot) {
            Ok(json) => leptos::logging::log!("recipe data: {json}"),
            Err(e) => leptos::logging::error!("recipe draft did not serialize: {e}"),
        }
        back();
    };

    let text_input = move |label: &'static str, placeholder: &'static str, get: fn(&RecipeDraft) -> &String, set: fn(&mut RecipeDraft, String)| {
        view! {
            <div class="form-group">
                <label class="form-label">{label}</label>
                <input
                    class="form-input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || draft.with(|d| get(d).clone())
                    on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="create-recipe">
            <header class="page-header">
                <button class="page-header__back" aria-label="Back to dashboard" on:click=move |_| back()>"←"</button>
                <h1 class="page-title shimmer">"Create New Recipe"</h1>
            </header>

            <form class="recipe-form" on:submit=on_submit>
                <div class="recipe-form__upload">
                    <span class="recipe-form__upload-icon">"📷"</span>
                    <p>"Add Recipe Photo"</p>
                    <span>"Click to upload an image (JPG, PNG)"</span>
                </div>

                <div class="form-group">
                    <label class="form-label">"Recipe Title *"</label>
                    <input
                        class="form-input"
                        type="text"
                        required=true
                        placeholder="Enter a delicious recipe title..."
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label class="form-label">"Description"</label>
                    <textarea
                        class="form-textarea"
                        rows="3"
                        placeholder="Describe your recipe, its origin, or what makes it special..."
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-row">
                    {text_input("⏱ Prep Time", "15 mins", |d| &d.prep_time, |d, v| d.prep_time = v)}
                    {text_input("⏱ Cook Time", "30 mins", |d| &d.cook_time, |d, v| d.cook_time = v)}
                    {text_input("👥 Servings", "4", |d| &d.servings, |d, v| d.servings = v)}
                </div>

                <div class="form-row">
                    <SelectField
                        label="Difficulty Level"
                        options=&DIFFICULTIES
                        draft=draft
                        get=|d| &d.difficulty
                        set=|d, v| d.difficulty = v
                    />
                    <SelectField
                        label="Category"
                        options=&CATEGORIES
                        draft=draft
                        get=|d| &d.category
                        set=|d, v| d.category = v
                    />
                </div>

                <RowList draft=draft kind=ListKind::Ingredients/>
                <RowList draft=draft kind=ListKind::Steps/>

                <div class="form-actions">
                    <button type="button" class="btn" on:click=move |_| back()>"Cancel"</button>
                    <button type="submit" class="btn btn--primary">"Publish Recipe"</button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn SelectField(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    draft: RwSignal<RecipeDraft>,
    get: fn(&RecipeDraft) -> &String,
    set: fn(&mut RecipeDraft, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <select
                class="form-select"
                prop:value=move || draft.with(|d| get(d).clone())
                on:change=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|&(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn RowList(draft: RwSignal<RecipeDraft>, kind: ListKind) -> impl IntoView {
    let (label, add_label, placeholder) = match kind {
        ListKind::Ingredients => ("Ingredients *", "Add Ingredient", "e.g., 1 cup flour"),
        ListKind::Steps => ("Instructions *", "Add Step", "Describe this step in detail..."),
    };
    let count = Memo::new(move |_| draft.with(|d| d.len(kind)));
    let removable = move || draft.with(|d| d.can_remove(kind));

    view! {
        <div class="form-group">
            <div class="form-group__header">
                <label class="form-label">{label}</label>
                <button type="button" class="btn btn--small" on:click=move |_| draft.update(|d| d.push_row(kind))>
                    "＋ " {add_label}
                </button>
            </div>
            <div class="row-list">
                {move || {
                    (0..count.get())
                        .map(|index| {
                            view! {
                                <div class="row-list__item">
                                    <Show when=move || kind == ListKind::Steps>
                                        <span class="row-list__number">{index + 1}</span>
                                    </Show>
                                    <input
                                        class="form-input"
                                        type="text"
                                        placeholder=placeholder
                                        prop:value=move || draft.with(|d| d.row(kind, index).to_owned())
                                        on:input=move |ev| draft.update(|d| d.set_row(kind, index, event_target_value(&ev)))
                                    />
                                    <Show when=removable>
                                        <button
                                            type="button"
                                            class="row-list__remove"
                                            aria-label="Remove"
                                            on:click=move |_| draft.update(|d| d.remove_row(kind, index))
                                        >
                                            "✕"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
