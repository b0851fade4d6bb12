//! Search page: suggestion chips and a simulated search round-trip.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

use crate::util::fixtures::{RECENT_SEARCHES, TRENDING_SEARCHES};

/// How long the searching indicator stays up after a suggestion is picked.
pub const SEARCH_DELAY_MS: u32 = 1_000;

/// Query text plus the searching indicator.
///
/// Every started search gets a sequence number; only the latest one may clear
/// the indicator, so a slow timer from an earlier pick cannot hide it early.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub searching: bool,
    seq: u64,
}

impl SearchState {
    /// Typing replaces the query without a simulated search.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Start a simulated search for `query`. Returns its sequence number.
    pub fn begin(&mut self, query: &str) -> u64 {
        self.query = query.to_owned();
        self.searching = true;
        self.seq += 1;
        self.seq
    }

    /// Finish search `seq`. Stale sequence numbers are ignored.
    pub fn finish(&mut self, seq: u64) {
        if seq == self.seq {
            self.searching = false;
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.searching = false;
        self.seq += 1;
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let state = RwSignal::new(SearchState::default());

    let run_search = move |query: &'static str| {
        let seq = state.try_update(|s| s.begin(query)).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DELAY_MS).await;
            state.try_update(|s| s.finish(seq));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    };

    let chips = move |items: &'static [&'static str], trending: bool| {
        items
            .iter()
            .map(|&item| {
                view! {
                    <button
                        class="search-tag"
                        class:search-tag--trending=trending
                        on:click=move |_| run_search(item)
                    >
                        <span>{if trending { "📈" } else { "🕑" }}</span>
                        {item}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="search">
            <header class="search__header">
                <h1 class="page-title shimmer">"Search Recipes"</h1>
                <p class="page-subtitle">"Find exactly what you're craving"</p>
            </header>

            <div class="search-bar">
                <span class="search-bar__icon">"🔍"</span>
                <input
                    class="search-bar__input"
                    type="text"
                    placeholder="Search for recipes, ingredients, or cuisines..."
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                />
                <Show when=move || state.with(SearchState::has_query)>
                    <button class="search-bar__clear" aria-label="Clear search" on:click=move |_| state.update(SearchState::clear)>
                        "✕"
                    </button>
                </Show>
            </div>

            <Show
                when=move || state.with(SearchState::has_query)
                fallback=move || {
                    view! {
                        <div class="search__suggestions">
                            <section class="search__group">
                                <h3 class="search__group-title">"🕑 Recent Searches"</h3>
                                <div class="search__tags">{chips(&RECENT_SEARCHES, false)}</div>
                            </section>
                            <section class="search__group">
                                <h3 class="search__group-title">"📈 Trending Now"</h3>
                                <div class="search__tags">{chips(&TRENDING_SEARCHES, true)}</div>
                            </section>
                        </div>
                    }
                }
            >
                <div class="search__results">
                    <div class="search__results-header">
                        <h3>{move || format!("Search Results for \"{}\"", state.with(|s| s.query.clone()))}</h3>
                        <Show when=move || state.with(|s| s.searching)>
                            <div class="search__spinner"></div>
                        </Show>
                    </div>
                    <div class="search__empty">
                        <div class="search__empty-icon">"🔍"</div>
                        <p>"Search functionality will be implemented here..."</p>
                        <p>"Try searching for popular items like \"pasta\", \"cake\", or \"salad\""</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
