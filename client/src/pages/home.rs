//! Home page: hero, featured carousel, filterable recipe grid, feature cards.
//!
//! Recipes are generated once the page is live in the browser. The server
//! renders an empty grid so the random selection never has to match across
//! the hydration boundary.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use shell::view::ViewId;

use crate::components::carousel::RecipeCarousel;
use crate::components::loading_spinner::LoadingSpinner;
use crate::state::nav::use_nav;
use crate::util::fixtures::{Filter, HOME_RECIPE_COUNT, Recipe, filter_recipes, generate_home_recipes, toggle_like};

/// Icon, title and blurb of one feature card.
pub const FEATURES: [(&str, &str, &str); 3] = [
    ("🍳", "Discover Recipes", "Browse through thousands of delicious recipes from home cooks worldwide"),
    ("📸", "Share Your Creations", "Upload your favorite recipes and share them with our community"),
    ("❤️", "Save Favorites", "Keep track of recipes you love and organize them into collections"),
];

/// JSON line logged when a recipe card is opened.
pub fn recipe_log_line(recipe: &Recipe) -> String {
    match serde_json::to_string(recipe) {
        Ok(json) => format!("recipe clicked: {json}"),
        Err(e) => format!("recipe clicked: #{} ({e})", recipe.id),
    }
}

fn random_source() -> impl FnMut() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random
    }
    #[cfg(not(feature = "hydrate"))]
    {
        crate::util::fixtures::stepped_source(0.377)
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = use_nav();
    let recipes = RwSignal::new(Vec::<Recipe>::new());
    let filter = RwSignal::new(Filter::All);

    Effect::new(move |_| {
        recipes.set(generate_home_recipes(HOME_RECIPE_COUNT, random_source()));
    });

    let open_recipe = Callback::new(move |recipe: Recipe| {
        leptos::logging::log!("{}", recipe_log_line(&recipe));
        nav.run(|state| state.navigate_to(ViewId::Explore));
    });
    let visible = move || recipes.with(|all| filter_recipes(all, filter.get()));

    view! {
        <div class="home">
            <section class="home__hero">
                <h1 class="home__title shimmer">"Welcome to MonsoonRecipes"</h1>
                <p class="home__subtitle">"Discover amazing culinary experiences from around the world"</p>
                <div class="home__actions">
                    <button class="btn btn--primary" on:click=move |_| nav.run(|s| s.navigate_to(ViewId::Explore))>
                        "Start Exploring"
                    </button>
                    <button class="btn" on:click=move |_| nav.run(|s| s.navigate_to(ViewId::Search))>
                        "Search Recipes"
                    </button>
                </div>
            </section>

            <section class="home__featured">
                <RecipeCarousel recipes=recipes on_select=open_recipe/>
            </section>

            <section class="home__recipes">
                <header class="section-header">
                    <h2 class="section-header__title">"👨‍🍳 Featured Recipes"</h2>
                    <p class="section-header__subtitle">"Handpicked recipes from our community"</p>
                </header>

                <div class="filter-tabs" role="tablist">
                    {Filter::TABS
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="filter-tab"
                                    class:filter-tab--active=move || filter.get() == tab
                                    role="tab"
                                    aria-selected=move || (filter.get() == tab).to_string()
                                    on:click=move |_| filter.set(tab)
                                >
                                    <span>{tab.icon()}</span>
                                    <span>{tab.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || recipes.with(|all| !all.is_empty()) fallback=|| view! { <LoadingSpinner/> }>
                    <div class="recipe-grid">
                        <For each=visible key=|recipe| (recipe.id, recipe.is_liked) let:recipe>
                            <RecipeCard recipe=recipe recipes=recipes on_open=open_recipe/>
                        </For>
                    </div>
                </Show>
            </section>

            <section class="home__features">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, blurb)| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-card__icon">{icon}</div>
                                <h3 class="feature-card__title">{title}</h3>
                                <p class="feature-card__text">{blurb}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}

#[component]
fn RecipeCard(recipe: Recipe, recipes: RwSignal<Vec<Recipe>>, on_open: Callback<Recipe>) -> impl IntoView {
    let id = recipe.id;
    let liked = recipe.is_liked;
    let opened = recipe.clone();

    view! {
        <article class="recipe-card" on:click=move |_| on_open.run(opened.clone())>
            <div class="recipe-card__image">
                <span class="recipe-card__emoji">{recipe.cuisine_emoji()}</span>
                <span class="recipe-card__badge">
                    {recipe.category.icon()} " " {recipe.category.as_str()}
                </span>
                <button
                    class="recipe-card__like"
                    class:recipe-card__like--liked=liked
                    aria-pressed=liked.to_string()
                    aria-label="Like recipe"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        recipes.update(|all| toggle_like(all, id));
                    }
                >
                    "♥"
                </button>
            </div>
            <div class="recipe-card__info">
                <h3 class="recipe-card__title">{recipe.title}</h3>
                <div class="recipe-card__metrics">
                    <span>"⭐ " {recipe.rating_label()}</span>
                    <span>"⏱ " {recipe.time}</span>
                    <span class="recipe-card__difficulty">{recipe.difficulty}</span>
                </div>
                <p class="recipe-card__chef">"by " {recipe.chef}</p>
                <div class="recipe-card__stats">
                    <span>{recipe.views} " views"</span>
                    <span>"♥ " {recipe.likes}</span>
                </div>
            </div>
        </article>
    }
}
