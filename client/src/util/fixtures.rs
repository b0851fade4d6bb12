//! Static recipe data shown by the pages.
//!
//! Nothing here comes from a server. Home recipes are generated from a random
//! source so each visit shuffles the grid; every other list is fixed.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use serde::Serialize;

/// Number of recipes generated for the home grid and carousel.
pub const HOME_RECIPE_COUNT: usize = 12;

const RECIPE_NAMES: &[&str] = &[
    "Spicy Thai Basil Stir Fry",
    "Creamy Mushroom Risotto",
    "BBQ Glazed Salmon",
    "Mediterranean Quinoa Salad",
    "Chocolate Lava Cake",
    "Classic Caesar Salad",
    "Beef Bourguignon",
    "Vegetarian Tacos",
    "Lemon Herb Chicken",
    "Pasta Carbonara",
    "Indian Butter Chicken",
    "Fresh Caprese Salad",
    "Korean Bibimbap",
    "Chicken Tikka Masala",
];

const CHEF_NAMES: &[&str] = &[
    "Chef Maria",
    "Chef David",
    "Chef Lin",
    "Chef Sofia",
    "Chef Mike",
    "Chef Yuki",
    "Chef Antonio",
    "Chef Priya",
    "Chef Carlos",
    "Chef Emma",
    "Chef Hassan",
    "Chef Anna",
];

const CUISINES: &[&str] = &["🍝 Italian", "🍛 Asian", "🥗 Healthy", "🍖 Comfort", "🍰 Dessert", "🍣 Fusion"];
const COOK_TIMES: &[&str] = &["15 mins", "20 mins", "25 mins", "30 mins", "35 mins", "45 mins"];
const DIFFICULTIES: &[&str] = &["Easy", "Medium", "Hard"];
const DESCRIPTION: &str = "A delicious and flavorful recipe perfect for any occasion";

// =============================================================================
// Home recipes
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Trending,
    Popular,
    New,
    Featured,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Trending, Self::Popular, Self::New, Self::Featured];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Popular => "popular",
            Self::New => "new",
            Self::Featured => "featured",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Trending => "📈",
            Self::Popular => "⭐",
            Self::New => "✨",
            Self::Featured => "🏆",
        }
    }
}

/// Home page filter tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const TABS: [Filter; 5] = [
        Self::All,
        Self::Only(Category::Trending),
        Self::Only(Category::Popular),
        Self::Only(Category::New),
        Self::Only(Category::Featured),
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(Category::Trending) => "Trending",
            Self::Only(Category::Popular) => "Popular",
            Self::Only(Category::New) => "New",
            Self::Only(Category::Featured) => "Featured",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::All => "🍽️",
            Self::Only(category) => category.icon(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recipe {
    pub id: u32,
    pub title: &'static str,
    pub chef: &'static str,
    /// One decimal place, 4.0 through 5.0.
    pub rating: f64,
    pub time: &'static str,
    pub cuisine: &'static str,
    pub difficulty: &'static str,
    pub category: Category,
    pub likes: u32,
    pub views: u32,
    pub description: &'static str,
    pub is_liked: bool,
}

impl Recipe {
    /// Leading emoji of the cuisine label.
    pub fn cuisine_emoji(&self) -> &'static str {
        self.cuisine.split(' ').next().unwrap_or_default()
    }

    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Build `count` home recipes. `random` yields values in `[0, 1)`.
pub fn generate_home_recipes(count: usize, mut random: impl FnMut() -> f64) -> Vec<Recipe> {
    (1..=count)
        .map(|id| Recipe {
            id: u32::try_from(id).unwrap_or(u32::MAX),
            title: pick(RECIPE_NAMES, random()),
            chef: pick(CHEF_NAMES, random()),
            rating: ((4.0 + random()) * 10.0).round() / 10.0,
            time: pick(COOK_TIMES, random()),
            cuisine: pick(CUISINES, random()),
            difficulty: pick(DIFFICULTIES, random()),
            category: Category::ALL[scaled_index(Category::ALL.len(), random())],
            likes: 50 + scaled_u32(500, random()),
            views: 100 + scaled_u32(2000, random()),
            description: DESCRIPTION,
            is_liked: false,
        })
        .collect()
}

/// Deterministic stand-in for `Math.random` used when rendering on the server
/// and in tests.
pub fn stepped_source(step: f64) -> impl FnMut() -> f64 {
    let mut value = 0.0_f64;
    move || {
        value = (value + step).fract();
        value
    }
}

/// Recipes shown under `filter`.
pub fn filter_recipes(recipes: &[Recipe], filter: Filter) -> Vec<Recipe> {
    recipes.iter().filter(|recipe| filter.matches(recipe.category)).cloned().collect()
}

/// Flip the like flag of recipe `id` and adjust its counter. Unknown ids are ignored.
pub fn toggle_like(recipes: &mut [Recipe], id: u32) {
    if let Some(recipe) = recipes.iter_mut().find(|recipe| recipe.id == id) {
        recipe.likes = if recipe.is_liked { recipe.likes.saturating_sub(1) } else { recipe.likes + 1 };
        recipe.is_liked = !recipe.is_liked;
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scaled_index(len: usize, random: f64) -> usize {
    let scaled = (random.clamp(0.0, 1.0) * len as f64).floor() as usize;
    scaled.min(len.saturating_sub(1))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_u32(span: u32, random: f64) -> u32 {
    ((random.clamp(0.0, 1.0) * f64::from(span)).floor() as u32).min(span.saturating_sub(1))
}

fn pick(list: &[&'static str], random: f64) -> &'static str {
    list.get(scaled_index(list.len(), random)).copied().unwrap_or_default()
}

// =============================================================================
// Explore
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExploreRecipe {
    pub id: u32,
    pub title: &'static str,
    pub chef: &'static str,
    pub rating: f64,
    pub time: &'static str,
    pub image: &'static str,
}

pub const EXPLORE_RECIPES: [ExploreRecipe; 6] = [
    ExploreRecipe { id: 1, title: "Spicy Pasta Arrabbiata", chef: "Chef Maria", rating: 4.8, time: "25 min", image: "🍝" },
    ExploreRecipe { id: 2, title: "Chocolate Lava Cake", chef: "Chef David", rating: 4.9, time: "35 min", image: "🍰" },
    ExploreRecipe { id: 3, title: "Thai Green Curry", chef: "Chef Lin", rating: 4.7, time: "40 min", image: "🍛" },
    ExploreRecipe { id: 4, title: "Mediterranean Salad", chef: "Chef Sofia", rating: 4.6, time: "15 min", image: "🥗" },
    ExploreRecipe { id: 5, title: "BBQ Pulled Pork", chef: "Chef Mike", rating: 4.8, time: "3 hours", image: "🍖" },
    ExploreRecipe { id: 6, title: "Fresh Sushi Rolls", chef: "Chef Yuki", rating: 4.9, time: "45 min", image: "🍣" },
];

pub const EXPLORE_CATEGORIES: [&str; 6] = ["All", "Breakfast", "Lunch", "Dinner", "Desserts", "Quick & Easy"];

/// Explore recipes whose title or chef contains `term`, ignoring case.
/// A blank term matches everything.
pub fn search_explore(term: &str) -> Vec<ExploreRecipe> {
    let needle = term.trim().to_lowercase();
    EXPLORE_RECIPES
        .iter()
        .filter(|recipe| {
            needle.is_empty()
                || recipe.title.to_lowercase().contains(&needle)
                || recipe.chef.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}

// =============================================================================
// Search suggestions
// =============================================================================

pub const RECENT_SEARCHES: [&str; 4] = ["Pasta recipes", "Chocolate cake", "Healthy salads", "Quick breakfast"];

pub const TRENDING_SEARCHES: [&str; 5] =
    ["Air fryer recipes", "Keto dinner", "Vegan desserts", "One pot meals", "Gluten free bread"];

// =============================================================================
// Dashboard
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub color: &'static str,
}

pub const DASHBOARD_STATS: [Stat; 4] = [
    Stat { icon: "📖", label: "My Recipes", value: "12", color: "#667eea" },
    Stat { icon: "❤️", label: "Favorites", value: "34", color: "#e74c3c" },
    Stat { icon: "📈", label: "Views", value: "1.2K", color: "#2ecc71" },
    Stat { icon: "👥", label: "Followers", value: "89", color: "#f39c12" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishStatus {
    Published,
    Draft,
}

impl PublishStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentRecipe {
    pub id: u32,
    pub title: &'static str,
    pub views: &'static str,
    pub time: &'static str,
    pub status: PublishStatus,
}

pub const RECENT_RECIPES: [RecentRecipe; 3] = [
    RecentRecipe { id: 1, title: "Spicy Pasta Arrabbiata", views: "234", time: "2 hours ago", status: PublishStatus::Published },
    RecentRecipe { id: 2, title: "Chocolate Lava Cake", views: "456", time: "1 day ago", status: PublishStatus::Published },
    RecentRecipe { id: 3, title: "Thai Green Curry", views: "123", time: "3 days ago", status: PublishStatus::Draft },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub icon: &'static str,
    pub text: &'static str,
    pub when: &'static str,
}

pub const RECENT_ACTIVITY: [Activity; 3] = [
    Activity { icon: "📝", text: "You created \"Spicy Pasta Arrabbiata\"", when: "2 hours ago" },
    Activity { icon: "❤️", text: "Sarah liked your \"Chocolate Lava Cake\"", when: "5 hours ago" },
    Activity { icon: "👀", text: "Your \"Thai Green Curry\" reached 100 views", when: "1 day ago" },
];
