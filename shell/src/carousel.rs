//! Continuous carousel: a seamlessly looping, frame-driven auto-scroller.
//!
//! The finite item list is tiled [`CAROUSEL_TILE_COUNT`] times into a virtual
//! track. Scrolling starts one tile period in, so there is a full copy of
//! buffer on either side, and every frame advances the offset by the current
//! speed. Once the offset reaches two periods it is pulled back by exactly one
//! period *before* it is committed to the surface. Because every copy is
//! identical, `offset mod period` is all the viewer ever sees, and the wrap is
//! invisible.
//!
//! Speed rules:
//! - pointer over the surface: hover speed
//! - pointer on an item: zero (the item expands, visible neighbours shrink)
//! - pointer elsewhere: cruise speed
//!
//! [`CarouselTrack`] is the pure state machine. [`Carousel`] binds a track to
//! a [`FrameScheduler`] and a [`ScrollSurface`] and owns the frame loop.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::consts::{
    CAROUSEL_CRUISE_SPEED, CAROUSEL_HOVER_SPEED, CAROUSEL_ITEM_WIDTH_PX, CAROUSEL_SPEED_EASING, CAROUSEL_TILE_COUNT,
};
use crate::frame::{FrameHandle, FrameScheduler};
use crate::geom::Rect;

/// Speeds closer than this to their target snap onto it.
const SPEED_SNAP_EPSILON: f64 = 1e-3;

/// Tunables for a carousel track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Scroll distance occupied by one item, gap included.
    pub item_width: f64,
    /// Number of copies of the source list in the track.
    pub tile_count: usize,
    pub cruise_speed: f64,
    pub hover_speed: f64,
    /// Fraction of the gap to the target speed closed per frame, in `(0, 1]`.
    pub speed_easing: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: CAROUSEL_ITEM_WIDTH_PX,
            tile_count: CAROUSEL_TILE_COUNT,
            cruise_speed: CAROUSEL_CRUISE_SPEED,
            hover_speed: CAROUSEL_HOVER_SPEED,
            speed_easing: CAROUSEL_SPEED_EASING,
        }
    }
}

/// Unique id of one tiled entry: `copy * source_len + source_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

/// One entry of the tiled track.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<T> {
    pub id: TileId,
    pub copy: usize,
    pub source_index: usize,
    pub item: T,
}

/// Visual size state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemScale {
    #[default]
    Neutral,
    Expanded,
    Shrunk,
}

/// Pure carousel state: tiles, offset, speed and pointer focus.
#[derive(Debug, Clone)]
pub struct CarouselTrack<T> {
    config: CarouselConfig,
    tiles: Vec<Tile<T>>,
    source_len: usize,
    tile_period: f64,
    scroll_offset: f64,
    speed: f64,
    surface_hovered: bool,
    focused: Option<TileId>,
    running: bool,
    viewport_width: Option<f64>,
    wraps: u64,
}

impl<T: Clone> CarouselTrack<T> {
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            tiles: Vec::new(),
            source_len: 0,
            tile_period: 0.0,
            scroll_offset: 0.0,
            speed: 0.0,
            surface_hovered: false,
            focused: None,
            running: false,
            viewport_width: None,
            wraps: 0,
        }
    }

    /// Build the tiled track and start running from the middle of it.
    ///
    /// Returns `false` (and leaves the track stopped) when `items` is empty or
    /// the configured geometry cannot produce a positive period.
    pub fn initialize(&mut self, items: &[T]) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let period = items.len() as f64 * self.config.item_width;
        if items.is_empty() || self.config.tile_count == 0 || !(period.is_finite() && period > 0.0) {
            self.running = false;
            return false;
        }

        let len = items.len();
        self.tiles = (0..self.config.tile_count)
            .flat_map(|copy| {
                items.iter().enumerate().map(move |(index, item)| Tile {
                    id: TileId(copy * len + index),
                    copy,
                    source_index: index,
                    item: item.clone(),
                })
            })
            .collect();
        self.source_len = len;
        self.tile_period = period;
        self.scroll_offset = period;
        self.surface_hovered = false;
        self.focused = None;
        self.speed = self.target_speed();
        self.wraps = 0;
        self.running = true;
        true
    }

    /// Advance one frame. Returns the offset to commit, or `None` when stopped.
    pub fn step(&mut self) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.speed = self.eased_speed();
        self.scroll_offset += self.speed;
        let limit = 2.0 * self.tile_period;
        while self.scroll_offset >= limit {
            self.scroll_offset -= self.tile_period;
            self.wraps += 1;
        }
        Some(self.scroll_offset)
    }

    /// Stop advancing. Idempotent.
    pub fn halt(&mut self) {
        self.running = false;
    }

    pub fn on_pointer_enter_surface(&mut self) {
        self.surface_hovered = true;
    }

    /// Leaving the surface also leaves any item on it.
    pub fn on_pointer_leave_surface(&mut self) {
        self.surface_hovered = false;
        self.focused = None;
    }

    /// Focus a tile, or clear focus with `None`. Unknown ids clear focus.
    pub fn on_item_focus_change(&mut self, tile: Option<TileId>) {
        self.focused = tile.filter(|id| id.0 < self.tiles.len());
    }

    pub fn set_viewport_width(&mut self, width: Option<f64>) {
        self.viewport_width = width.filter(|w| w.is_finite() && *w > 0.0);
    }

    /// Speed the track is heading towards under the current pointer state.
    #[must_use]
    pub fn target_speed(&self) -> f64 {
        let speed = if self.focused.is_some() {
            0.0
        } else if self.surface_hovered {
            self.config.hover_speed
        } else {
            self.config.cruise_speed
        };
        speed.max(0.0)
    }

    fn eased_speed(&self) -> f64 {
        let target = self.target_speed();
        let easing = self.config.speed_easing;
        if easing >= 1.0 || easing <= 0.0 {
            return target;
        }
        let next = self.speed + (target - self.speed) * easing;
        if (target - next).abs() < SPEED_SNAP_EPSILON { target } else { next }
    }

    /// Whether a tile intersects the visible window `[0, viewport)` at the
    /// current offset. With no known viewport every tile counts as visible.
    #[must_use]
    pub fn is_visible(&self, tile: TileId) -> bool {
        if tile.0 >= self.tiles.len() {
            return false;
        }
        let Some(viewport) = self.viewport_width else {
            return true;
        };
        #[allow(clippy::cast_precision_loss)]
        let start = tile.0 as f64 * self.config.item_width - self.scroll_offset;
        Rect::new(0.0, 0.0, viewport, 0.0).overlaps_x(start, start + self.config.item_width)
    }

    #[must_use]
    pub fn item_scale(&self, tile: TileId) -> ItemScale {
        match self.focused {
            None => ItemScale::Neutral,
            Some(focused) if focused == tile => ItemScale::Expanded,
            Some(_) if self.is_visible(tile) => ItemScale::Shrunk,
            Some(_) => ItemScale::Neutral,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn tiles(&self) -> &[Tile<T>] {
        &self.tiles
    }

    #[must_use]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    #[must_use]
    pub fn tile_period(&self) -> f64 {
        self.tile_period
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// What the viewer sees: the offset within one period.
    #[must_use]
    pub fn rendered_offset(&self) -> f64 {
        if self.tile_period > 0.0 { self.scroll_offset.rem_euclid(self.tile_period) } else { 0.0 }
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn focused(&self) -> Option<TileId> {
        self.focused
    }

    #[must_use]
    pub fn is_surface_hovered(&self) -> bool {
        self.surface_hovered
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of wrap corrections applied since initialization.
    #[must_use]
    pub fn wraps(&self) -> u64 {
        self.wraps
    }

    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        self.config
    }
}

/// Host scroll container the carousel drives.
pub trait ScrollSurface {
    /// Whether the surface is still mounted.
    fn is_attached(&self) -> bool;
    /// Commit a scroll offset to the visible surface.
    fn set_scroll_offset(&self, offset: f64);
}

struct LoopState<T> {
    track: CarouselTrack<T>,
    surface: Option<Rc<dyn ScrollSurface>>,
    pending: Option<FrameHandle>,
    torn_down: bool,
}

/// A carousel track driven by a frame scheduler.
///
/// Dropping the carousel tears it down.
pub struct Carousel<T: Clone + 'static> {
    shared: Rc<RefCell<LoopState<T>>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl<T: Clone + 'static> Carousel<T> {
    #[must_use]
    pub fn new(config: CarouselConfig, scheduler: Rc<dyn FrameScheduler>) -> Self {
        let state = LoopState { track: CarouselTrack::new(config), surface: None, pending: None, torn_down: false };
        Self { shared: Rc::new(RefCell::new(state)), scheduler }
    }

    /// Bind the scroll surface that frame steps commit to.
    pub fn attach_surface(&self, surface: Rc<dyn ScrollSurface>) {
        self.shared.borrow_mut().surface = Some(surface);
    }

    /// Forget the surface. The next scheduled frame self-cancels.
    pub fn detach_surface(&self) {
        self.shared.borrow_mut().surface = None;
    }

    /// Build the track from `items` and start the frame loop.
    ///
    /// Empty lists are a no-op, as is any call after [`Self::teardown`].
    /// Re-initializing a running carousel restarts it from the middle tile.
    pub fn initialize(&self, items: &[T]) -> bool {
        let (stale, surface, offset) = {
            let mut state = self.shared.borrow_mut();
            if state.torn_down || !state.track.initialize(items) {
                return false;
            }
            (state.pending.take(), state.surface.clone(), state.track.scroll_offset())
        };
        if let Some(handle) = stale {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(surface) = surface.filter(|s| s.is_attached()) {
            surface.set_scroll_offset(offset);
        }
        schedule_next(&self.shared, &self.scheduler);
        true
    }

    pub fn on_pointer_enter_surface(&self) {
        self.shared.borrow_mut().track.on_pointer_enter_surface();
    }

    pub fn on_pointer_leave_surface(&self) {
        self.shared.borrow_mut().track.on_pointer_leave_surface();
    }

    pub fn on_item_focus_change(&self, tile: Option<TileId>) {
        self.shared.borrow_mut().track.on_item_focus_change(tile);
    }

    pub fn set_viewport_width(&self, width: Option<f64>) {
        self.shared.borrow_mut().track.set_viewport_width(width);
    }

    /// Cancel the outstanding frame and stop for good. Idempotent.
    pub fn teardown(&self) {
        let pending = {
            let mut state = self.shared.borrow_mut();
            state.torn_down = true;
            state.track.halt();
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel_frame(handle);
        }
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.shared.borrow().torn_down
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.borrow().track.is_running()
    }

    /// Whether a frame callback is currently scheduled.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.shared.borrow().pending.is_some()
    }

    /// Read the track under a short borrow.
    pub fn with_track<R>(&self, read: impl FnOnce(&CarouselTrack<T>) -> R) -> R {
        read(&self.shared.borrow().track)
    }
}

impl<T: Clone + 'static> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn schedule_next<T: Clone + 'static>(shared: &Rc<RefCell<LoopState<T>>>, scheduler: &Rc<dyn FrameScheduler>) {
    let weak = Rc::downgrade(shared);
    let next_scheduler = Rc::clone(scheduler);
    let handle = scheduler.request_frame(Box::new(move |_ts| run_frame(&weak, &next_scheduler)));
    if handle.is_none() {
        log::debug!("carousel: host cannot schedule frames, loop stopped");
    }
    shared.borrow_mut().pending = handle;
}

fn run_frame<T: Clone + 'static>(weak: &Weak<RefCell<LoopState<T>>>, scheduler: &Rc<dyn FrameScheduler>) {
    // Carousel already dropped: stale frame.
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let (surface, offset) = {
        let mut state = shared.borrow_mut();
        state.pending = None;
        if state.torn_down || !state.track.is_running() {
            return;
        }
        let Some(surface) = state.surface.clone().filter(|s| s.is_attached()) else {
            log::debug!("carousel: surface detached, cancelling frame loop");
            state.track.halt();
            return;
        };
        let Some(offset) = state.track.step() else {
            return;
        };
        (surface, offset)
    };
    surface.set_scroll_offset(offset);
    schedule_next(&shared, scheduler);
}
