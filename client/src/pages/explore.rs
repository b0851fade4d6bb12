//! Explore page: searchable grid of curated recipes.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use leptos::prelude::*;

use crate::util::fixtures::{EXPLORE_CATEGORIES, ExploreRecipe, search_explore};

/// Heading of the result count line, e.g. `3 recipes` or `1 recipe`.
pub fn result_count_label(count: usize) -> String {
    if count == 1 { "1 recipe".to_owned() } else { format!("{count} recipes") }
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let term = RwSignal::new(String::new());
    let category = RwSignal::new(EXPLORE_CATEGORIES[0]);
    let results = Memo::new(move |_| term.with(|t| search_explore(t)));

    view! {
        <div class="explore">
            <section class="explore__search">
                <h1 class="page-title shimmer">"Explore Recipes"</h1>
                <p class="page-subtitle">"Browse through our collection of amazing recipes"</p>
                <div class="search-bar">
                    <span class="search-bar__icon">"🔍"</span>
                    <input
                        class="search-bar__input"
                        type="text"
                        placeholder="Search recipes, ingredients, or cuisines..."
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                    <button class="search-bar__filter">"⚙ Filters"</button>
                </div>
                <div class="category-tags">
                    {EXPLORE_CATEGORIES
                        .into_iter()
                        .map(|name| {
                            view! {
                                <button
                                    class="category-tag"
                                    class:category-tag--active=move || category.get() == name
                                    on:click=move |_| category.set(name)
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="explore__count">{move || result_count_label(results.with(Vec::len))}</p>
            </section>

            <div class="recipe-grid">
                <For each=move || results.get() key=|recipe| recipe.id let:recipe>
                    <ExploreCard recipe=recipe/>
                </For>
            </div>
        </div>
    }
}

#[component]
fn ExploreCard(recipe: ExploreRecipe) -> impl IntoView {
    let favorite = RwSignal::new(false);

    view! {
        <article class="recipe-card">
            <div class="recipe-card__image">
                <span class="recipe-card__emoji">{recipe.image}</span>
                <button
                    class="recipe-card__like"
                    class:recipe-card__like--liked=move || favorite.get()
                    aria-label="Save to favorites"
                    on:click=move |_| favorite.update(|f| *f = !*f)
                >
                    "♥"
                </button>
            </div>
            <div class="recipe-card__info">
                <h3 class="recipe-card__title">{recipe.title}</h3>
                <div class="recipe-card__metrics">
                    <span>"⭐ " {format!("{:.1}", recipe.rating)}</span>
                    <span>"👤 " {recipe.chef}</span>
                    <span>"⏱ " {recipe.time}</span>
                </div>
            </div>
        </article>
    }
}
