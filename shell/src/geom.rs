//! Plain geometry shared by hit regions and carousel visibility.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in viewport (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in viewport space.
///
/// `width` / `height` are never negative; constructors normalize them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width: width.max(0.0), height: height.max(0.0) }
    }

    /// Whether `pt` lies inside the rectangle. Edges count as inside.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }

    /// Whether the horizontal span `[start, end)` overlaps this rectangle's span.
    #[must_use]
    pub fn overlaps_x(&self, start: f64, end: f64) -> bool {
        start < self.x + self.width && end > self.x
    }
}
