use super::*;

fn recipes() -> Vec<Recipe> {
    generate_home_recipes(HOME_RECIPE_COUNT, stepped_source(0.137))
}

// =============================================================
// generate_home_recipes
// =============================================================

#[test]
fn generates_requested_count_with_sequential_ids() {
    let recipes = recipes();
    assert_eq!(recipes.len(), 12);
    let ids: Vec<u32> = recipes.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<_>>());
}

#[test]
fn generated_values_stay_in_range() {
    for recipe in recipes() {
        assert!((4.0..=5.0).contains(&recipe.rating), "rating {}", recipe.rating);
        assert!((50..550).contains(&recipe.likes));
        assert!((100..2100).contains(&recipe.views));
        assert!(!recipe.is_liked);
        assert!(RECIPE_NAMES.contains(&recipe.title));
    }
}

#[test]
fn extreme_random_values_pick_list_ends() {
    let low = generate_home_recipes(1, || 0.0);
    assert_eq!(low[0].title, RECIPE_NAMES[0]);
    assert_eq!(low[0].category, Category::Trending);
    assert_eq!(low[0].likes, 50);
    assert!((low[0].rating - 4.0).abs() < f64::EPSILON);

    let high = generate_home_recipes(1, || 0.999_999);
    assert_eq!(high[0].title, "Chicken Tikka Masala");
    assert_eq!(high[0].category, Category::Featured);
    assert_eq!(high[0].likes, 549);
    assert_eq!(high[0].views, 2099);
}

#[test]
fn stepped_source_is_deterministic() {
    let a: Vec<f64> = {
        let mut next = stepped_source(0.3);
        (0..5).map(|_| next()).collect()
    };
    let b: Vec<f64> = {
        let mut next = stepped_source(0.3);
        (0..5).map(|_| next()).collect()
    };
    assert_eq!(a, b);
    assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
}

#[test]
fn emoji_and_rating_label() {
    let recipe = &generate_home_recipes(1, || 0.0)[0];
    assert_eq!(recipe.cuisine_emoji(), "🍝");
    assert_eq!(recipe.rating_label(), "4.0");
}

// =============================================================
// filter_recipes / toggle_like
// =============================================================

#[test]
fn all_filter_keeps_everything() {
    let recipes = recipes();
    assert_eq!(filter_recipes(&recipes, Filter::All).len(), recipes.len());
}

#[test]
fn category_filter_keeps_only_that_category() {
    let recipes = recipes();
    let total: usize = Category::ALL.iter().map(|c| filter_recipes(&recipes, Filter::Only(*c)).len()).sum();
    assert_eq!(total, recipes.len());
    for recipe in filter_recipes(&recipes, Filter::Only(Category::New)) {
        assert_eq!(recipe.category, Category::New);
    }
}

#[test]
fn toggle_like_twice_restores_counter() {
    let mut recipes = recipes();
    let before = recipes[3].likes;
    toggle_like(&mut recipes, 4);
    assert!(recipes[3].is_liked);
    assert_eq!(recipes[3].likes, before + 1);
    toggle_like(&mut recipes, 4);
    assert!(!recipes[3].is_liked);
    assert_eq!(recipes[3].likes, before);
}

#[test]
fn toggle_like_unknown_id_is_ignored() {
    let mut recipes = recipes();
    let before = recipes.clone();
    toggle_like(&mut recipes, 99);
    assert_eq!(recipes, before);
}

#[test]
fn filter_tab_labels() {
    let labels: Vec<&str> = Filter::TABS.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["All", "Trending", "Popular", "New", "Featured"]);
}

// =============================================================
// search_explore
// =============================================================

#[test]
fn blank_term_lists_every_explore_recipe() {
    assert_eq!(search_explore("  ").len(), EXPLORE_RECIPES.len());
}

#[test]
fn term_matches_title_or_chef_case_insensitively() {
    let titles: Vec<&str> = search_explore("CAKE").iter().map(|r| r.title).collect();
    assert_eq!(titles, ["Chocolate Lava Cake"]);
    let by_chef: Vec<u32> = search_explore("yuki").iter().map(|r| r.id).collect();
    assert_eq!(by_chef, [6]);
    assert!(search_explore("lasagna").is_empty());
}
