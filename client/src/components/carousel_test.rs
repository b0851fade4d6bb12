use super::*;
use crate::util::fixtures::{generate_home_recipes, stepped_source};

#[test]
fn transform_moves_track_left() {
    assert_eq!(track_transform(600.0), "translate3d(-600.000px, 0, 0)");
    assert_eq!(track_transform(0.5), "translate3d(-0.500px, 0, 0)");
}

#[test]
fn scale_classes_are_distinct() {
    assert_eq!(scale_class(ItemScale::Neutral), "carousel__tile");
    assert!(scale_class(ItemScale::Expanded).ends_with("--expanded"));
    assert!(scale_class(ItemScale::Shrunk).ends_with("--shrunk"));
}

#[test]
fn layout_tiles_every_recipe_and_starts_one_period_in() {
    let recipes = generate_home_recipes(3, stepped_source(0.21));
    let config = CarouselConfig::default();
    let layout = layout_track(config, &recipes);
    assert_eq!(layout.tiles.len(), 3 * config.tile_count);
    assert!((layout.start_offset - 3.0 * config.item_width).abs() < 1e-9);
    assert_eq!(layout.tiles[4].source_index, 1);
    assert_eq!(layout.tiles[4].item, recipes[1]);
}

#[test]
fn layout_of_nothing_is_empty() {
    let layout = layout_track::<Recipe>(CarouselConfig::default(), &[]);
    assert!(layout.tiles.is_empty());
    assert!(layout.start_offset.abs() < f64::EPSILON);
}
