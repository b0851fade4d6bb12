//! Featured-recipe carousel host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The loop itself lives in `shell::carousel`. This component renders the
//! tiled track, hands the engine a transform-based scroll surface and a
//! `requestAnimationFrame` scheduler, and forwards pointer events.
//!
//! DESIGN
//! ======
//! Tiles are laid out from a pure `CarouselTrack` in every build so server
//! and client markup agree. The live `Carousel` exists only in the browser,
//! is created once the track element mounts, and is torn down with the
//! component. Item scales are recomputed on focus changes, not per frame.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;
use shell::carousel::{CarouselConfig, CarouselTrack, ItemScale, Tile, TileId};

use crate::util::fixtures::Recipe;

#[cfg(feature = "hydrate")]
use shell::carousel::{Carousel, ScrollSurface};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// CSS transform placing the track at `offset`.
pub fn track_transform(offset: f64) -> String {
    format!("translate3d({:.3}px, 0, 0)", -offset)
}

pub fn scale_class(scale: ItemScale) -> &'static str {
    match scale {
        ItemScale::Neutral => "carousel__tile",
        ItemScale::Expanded => "carousel__tile carousel__tile--expanded",
        ItemScale::Shrunk => "carousel__tile carousel__tile--shrunk",
    }
}

/// Static layout of a track before the loop starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackLayout<T> {
    pub tiles: Vec<Tile<T>>,
    pub start_offset: f64,
}

/// Tiles and starting offset for `items`. Empty when the track cannot start.
pub fn layout_track<T: Clone>(config: CarouselConfig, items: &[T]) -> TrackLayout<T> {
    let mut track = CarouselTrack::new(config);
    if !track.initialize(items) {
        return TrackLayout { tiles: Vec::new(), start_offset: 0.0 };
    }
    TrackLayout { tiles: track.tiles().to_vec(), start_offset: track.scroll_offset() }
}

#[cfg(feature = "hydrate")]
struct TransformSurface {
    el: web_sys::HtmlElement,
}

#[cfg(feature = "hydrate")]
impl ScrollSurface for TransformSurface {
    fn is_attached(&self) -> bool {
        self.el.is_connected()
    }

    fn set_scroll_offset(&self, offset: f64) {
        if let Err(e) = self.el.style().set_property("transform", &track_transform(offset)) {
            leptos::logging::warn!("carousel transform failed: {e:?}");
        }
    }
}

/// Handle shared by the pointer handlers.
#[derive(Clone, Copy)]
struct Engine {
    #[cfg(feature = "hydrate")]
    carousel: StoredValue<Option<Carousel<Recipe>>, LocalStorage>,
    container: NodeRef<leptos::html::Div>,
    scales: RwSignal<Vec<ItemScale>>,
}

impl Engine {
    fn pointer_enter(self) {
        #[cfg(feature = "hydrate")]
        self.with(Carousel::on_pointer_enter_surface);
    }

    fn pointer_leave(self) {
        #[cfg(feature = "hydrate")]
        self.with(Carousel::on_pointer_leave_surface);
        self.refresh_scales();
    }

    fn focus(self, tile: Option<TileId>) {
        #[cfg(feature = "hydrate")]
        {
            let width = self.container.get_untracked().map(|el| f64::from(el.client_width()));
            self.with(|c| {
                c.set_viewport_width(width);
                c.on_item_focus_change(tile);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (tile, self.container);
        }
        self.refresh_scales();
    }

    fn refresh_scales(self) {
        #[cfg(feature = "hydrate")]
        {
            let mut next = Vec::new();
            self.with(|c| {
                next = c.with_track(|track| track.tiles().iter().map(|tile| track.item_scale(tile.id)).collect());
            });
            self.scales.set(next);
        }
    }

    fn scale(self, tile: TileId) -> ItemScale {
        self.scales.with(|scales| scales.get(tile.0).copied().unwrap_or_default())
    }

    #[cfg(feature = "hydrate")]
    fn with(self, f: impl FnOnce(&Carousel<Recipe>)) {
        self.carousel.try_with_value(|slot| {
            if let Some(carousel) = slot {
                f(carousel);
            }
        });
    }
}

/// Auto-scrolling strip of recipe cards.
#[component]
pub fn RecipeCarousel(
    #[prop(into)] recipes: Signal<Vec<Recipe>>,
    on_select: Callback<Recipe>,
    #[prop(optional)] config: Option<CarouselConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let container = NodeRef::<leptos::html::Div>::new();
    let track_ref = NodeRef::<leptos::html::Div>::new();
    let layout = Memo::new(move |_| layout_track(config, &recipes.get()));
    let engine = Engine {
        #[cfg(feature = "hydrate")]
        carousel: StoredValue::new_local(None),
        container,
        scales: RwSignal::new(Vec::new()),
    };

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let items = recipes.get();
            let Some(track_el) = track_ref.get() else {
                return;
            };
            let width = container.get_untracked().map(|el| f64::from(el.client_width()));
            engine.carousel.update_value(|slot| {
                let carousel = slot.get_or_insert_with(|| {
                    let carousel = Carousel::new(config, Rc::new(crate::util::raf::RafScheduler::new()));
                    carousel.attach_surface(Rc::new(TransformSurface { el: track_el.into() }));
                    carousel
                });
                carousel.set_viewport_width(width);
                if !carousel.initialize(&items) {
                    leptos::logging::log!("carousel idle: {} items", items.len());
                }
            });
            engine.refresh_scales();
        });
        on_cleanup(move || {
            engine.carousel.try_update_value(|slot| {
                if let Some(carousel) = slot.take() {
                    carousel.teardown();
                }
            });
        });
    }

    let initial_transform = move || layout.with(|l| track_transform(l.start_offset));
    let tile_width = format!("width: {}px", config.item_width);

    view! {
        <div
            class="carousel"
            node_ref=container
            on:pointerenter=move |_| engine.pointer_enter()
            on:pointerleave=move |_| engine.pointer_leave()
        >
            <div class="carousel__track" node_ref=track_ref style:transform=initial_transform>
                {move || {
                    let tile_width = tile_width.clone();
                    layout
                        .get()
                        .tiles
                        .into_iter()
                        .map(|tile| {
                            let id = tile.id;
                            let recipe = tile.item.clone();
                            view! {
                                <div
                                    class=move || scale_class(engine.scale(id))
                                    style=tile_width.clone()
                                    aria-hidden=(tile.copy != 1).then_some("true")
                                    on:pointerenter=move |_| engine.focus(Some(id))
                                    on:pointerleave=move |_| engine.focus(None)
                                    on:click=move |_| on_select.run(recipe.clone())
                                >
                                    <div class="carousel__image">{tile.item.cuisine_emoji()}</div>
                                    <div class="carousel__info">
                                        <h3 class="carousel__title">{tile.item.title}</h3>
                                        <p class="carousel__meta">
                                            <span>"⭐ " {tile.item.rating_label()}</span>
                                            <span>"⏱ " {tile.item.time}</span>
                                        </p>
                                        <p class="carousel__chef">"by " {tile.item.chef}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
