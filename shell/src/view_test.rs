use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn from_str_accepts_every_registered_id() {
    for view in ViewId::REGISTERED {
        assert_eq!(view.as_str().parse::<ViewId>(), Ok(view));
    }
}

#[test]
fn from_str_rejects_unknown_and_not_found_marker() {
    assert_eq!("recipes".parse::<ViewId>(), Err(UnknownView("recipes".to_owned())));
    assert!("notFound".parse::<ViewId>().is_err());
    assert!("".parse::<ViewId>().is_err());
}

#[test]
fn from_str_is_case_sensitive() {
    assert!("createrecipe".parse::<ViewId>().is_err());
    assert_eq!("createRecipe".parse::<ViewId>(), Ok(ViewId::CreateRecipe));
}

#[test]
fn unknown_view_error_message_names_the_id() {
    let err = "bogus".parse::<ViewId>().unwrap_err();
    assert_eq!(err.to_string(), "unknown view id: \"bogus\"");
}

#[test]
fn resolve_degrades_to_not_found() {
    assert_eq!(ViewId::resolve("dashboard"), ViewId::Dashboard);
    assert_eq!(ViewId::resolve("nope"), ViewId::NotFound);
    assert_eq!(ViewId::resolve("notFound"), ViewId::NotFound);
}

// =============================================================
// Paths
// =============================================================

#[test]
fn root_path_is_home() {
    assert_eq!(ViewId::from_path("/"), ViewId::Home);
    assert_eq!(ViewId::from_path(""), ViewId::Home);
    assert_eq!(ViewId::Home.path(), "/");
}

#[test]
fn from_path_round_trips_registered_views() {
    for view in ViewId::REGISTERED {
        assert_eq!(ViewId::from_path(view.path()), view);
    }
}

#[test]
fn from_path_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(ViewId::from_path("/search?q=pasta"), ViewId::Search);
    assert_eq!(ViewId::from_path("/explore#top"), ViewId::Explore);
    assert_eq!(ViewId::from_path("/profile/"), ViewId::Profile);
}

#[test]
fn from_path_unmatched_is_not_found() {
    assert_eq!(ViewId::from_path("/recipes/42"), ViewId::NotFound);
    assert_eq!(ViewId::from_path("/404"), ViewId::NotFound);
}

// =============================================================
// Links
// =============================================================

#[test]
fn guest_links_exclude_dashboard() {
    assert_eq!(nav_links(false), &[ViewId::Explore, ViewId::Home, ViewId::Search]);
}

#[test]
fn user_links_append_dashboard() {
    assert_eq!(
        nav_links(true),
        &[ViewId::Explore, ViewId::Home, ViewId::Search, ViewId::Dashboard]
    );
}

#[test]
fn not_found_is_not_registered() {
    assert!(!ViewId::NotFound.is_registered());
    assert!(ViewId::REGISTERED.iter().all(|v| v.is_registered()));
}

#[test]
fn serde_uses_camel_case_ids() {
    let json = serde_json::to_string(&ViewId::CreateRecipe).unwrap();
    assert_eq!(json, "\"createRecipe\"");
    let back: ViewId = serde_json::from_str("\"dashboard\"").unwrap();
    assert_eq!(back, ViewId::Dashboard);
}
