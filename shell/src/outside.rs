//! Outside-interaction detector for open overlays.
//!
//! Regions are registered per overlay and flagged open or closed as the
//! overlay mounts and unmounts. A pointer-down is classified against the open
//! regions only; a closed region never claims a target. Classification happens
//! on pointer-down, so a drag that starts inside a region and ends elsewhere
//! still counts as inside.

#[cfg(test)]
#[path = "outside_test.rs"]
mod outside_test;

use crate::geom::{Point, Rect};

/// A container that can decide whether an interaction target lies within it.
///
/// The browser host implements this for DOM elements (`Node::contains`);
/// headless code uses [`Rect`] against a [`Point`].
pub trait Region<T: ?Sized> {
    fn contains(&self, target: &T) -> bool;
}

impl Region<Point> for Rect {
    fn contains(&self, target: &Point) -> bool {
        Rect::contains(self, *target)
    }
}

/// Result of classifying a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown<K> {
    /// The target lies inside the open region registered under this key.
    Inside(K),
    /// The target lies outside every open region.
    Outside,
}

impl<K> PointerDown<K> {
    #[must_use]
    pub fn is_outside(&self) -> bool {
        matches!(self, Self::Outside)
    }

    /// The key of the region that contains the target, if any.
    pub fn inside(self) -> Option<K> {
        match self {
            Self::Inside(key) => Some(key),
            Self::Outside => None,
        }
    }
}

struct Entry<K, R> {
    key: K,
    region: R,
    open: bool,
}

/// Registry of overlay regions keyed by `K`.
pub struct OutsideDetector<K, R> {
    entries: Vec<Entry<K, R>>,
}

impl<K, R> Default for OutsideDetector<K, R> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: Copy + PartialEq, R> OutsideDetector<K, R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the region for `key`. New regions start closed.
    pub fn register(&mut self, key: K, region: R) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.region = region;
            return;
        }
        self.entries.push(Entry { key, region, open: false });
    }

    /// Remove the region for `key`. Returns whether it was registered.
    pub fn unregister(&mut self, key: K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        self.entries.len() != before
    }

    /// Mark a region open (mounted) or closed. Unknown keys are ignored.
    pub fn set_open(&mut self, key: K, open: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.open = open;
        }
    }

    #[must_use]
    pub fn is_open(&self, key: K) -> bool {
        self.entries.iter().any(|e| e.key == key && e.open)
    }

    /// Keys of every region currently participating in detection.
    pub fn open_keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().filter(|e| e.open).map(|e| e.key)
    }

    /// Classify a pointer-down target against the open regions.
    ///
    /// Regions are checked in registration order; the first open region that
    /// contains the target wins.
    pub fn pointer_down<T: ?Sized>(&self, target: &T) -> PointerDown<K>
    where
        R: Region<T>,
    {
        self.entries
            .iter()
            .filter(|e| e.open)
            .find(|e| e.region.contains(target))
            .map_or(PointerDown::Outside, |e| PointerDown::Inside(e.key))
    }
}
