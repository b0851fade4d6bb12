//! Dashboard page: stats, recent recipes, quick actions and activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where a successful sign-in lands. Everything shown is fixture
//! data; only the greeting depends on the session.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use shell::session::Session;
use shell::view::ViewId;

use crate::state::nav::use_nav;
use crate::util::fixtures::{DASHBOARD_STATS, RECENT_ACTIVITY, RECENT_RECIPES};

/// Greeting headline: `Welcome back, <first name>!`, `Chef` without a name.
pub fn welcome_title(session: Option<&Session>) -> String {
    let name = session.and_then(Session::first_name).unwrap_or("Chef");
    format!("Welcome back, {name}!")
}

/// Quick-action buttons: icon, label, target view.
pub const QUICK_ACTIONS: [(&str, &str, ViewId); 3] = [
    ("📖", "Browse Recipes", ViewId::Explore),
    ("📈", "Trending Now", ViewId::Search),
    ("👥", "Edit Profile", ViewId::Profile),
];

/// Inline style tinting a stat icon with its accent color.
pub fn stat_icon_style(color: &str) -> String {
    format!("background-color: {color}20; color: {color}")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let nav = use_nav();
    let go = move |view: ViewId| nav.run(|state| state.navigate_to(view));

    view! {
        <div class="dashboard">
            <section class="dashboard__welcome">
                <h1 class="dashboard__title shimmer">{move || nav.with(|state| welcome_title(state.session()))}</h1>
                <p class="dashboard__subtitle">"Ready to create something delicious today?"</p>
                <button class="btn btn--primary" on:click=move |_| go(ViewId::CreateRecipe)>
                    "＋ Create New Recipe"
                </button>
            </section>

            <div class="stats-grid">
                {DASHBOARD_STATS
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stat-card">
                                <div class="stat-card__icon" style=stat_icon_style(stat.color)>{stat.icon}</div>
                                <div class="stat-card__info">
                                    <h3 class="stat-card__value">{stat.value}</h3>
                                    <p class="stat-card__label">{stat.label}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="dashboard__grid">
                <section class="dashboard__recent">
                    <header class="section-header section-header--row">
                        <h2>"Recent Recipes"</h2>
                        <button class="btn btn--link" on:click=move |_| go(ViewId::Explore)>"View All"</button>
                    </header>
                    <div class="dashboard__list">
                        {RECENT_RECIPES
                            .into_iter()
                            .map(|recipe| {
                                view! {
                                    <div class="dashboard__item">
                                        <div class="dashboard__item-info">
                                            <h4>{recipe.title}</h4>
                                            <div class="dashboard__item-meta">
                                                <span>{recipe.views} " views"</span>
                                                <span>{recipe.time}</span>
                                            </div>
                                        </div>
                                        <span class=format!("status status--{}", recipe.status.as_str())>
                                            {recipe.status.as_str()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="dashboard__actions">
                    <h2>"Quick Actions"</h2>
                    <div class="dashboard__action-list">
                        {QUICK_ACTIONS
                            .into_iter()
                            .map(|(icon, label, view)| {
                                view! {
                                    <button class="dashboard__action" on:click=move |_| go(view)>
                                        <span>{icon}</span>
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>

            <section class="dashboard__activity">
                <h2>"Recent Activity"</h2>
                <div class="activity-list">
                    {RECENT_ACTIVITY
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="activity-item">
                                    <div class="activity-item__icon">{item.icon}</div>
                                    <div class="activity-item__content">
                                        <p>{item.text}</p>
                                        <span>{item.when}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
