//! Geometry primitives: points, sizes, rectangles, and the canvas bounds clamp.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas space, logical pixels, top-left origin.
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

/// A width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle, stored as top-left corner plus size.
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
        Self { x, y, width, height }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Grow the rectangle by `amount` on every side.
    #[must_use]
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
        }
    }

    /// Whether two rectangles overlap with positive area. Rectangles that
    /// merely share an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The drawing surface: the full virtual canvas plus the sub-region in
/// which newly created items are placed.
///
/// The placement area is typically the initially visible viewport; a drag
/// may move an item anywhere on the full canvas afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Full virtual surface extent.
    pub size: Size,
    /// Region within which new items are positioned.
    pub placement_area: Size,
}

impl Canvas {
    #[must_use]
    pub fn new(size: Size, placement_area: Size) -> Self {
        Self { size, placement_area }
    }
}

/// Clamp a position so an item of `item_size` lies fully inside
/// `canvas_size`.
///
/// `x` becomes `max(0, min(x, canvas.width - item.width))`, symmetric for
/// `y`. Applied once at the end of a drag gesture, never to intermediate
/// drag frames.
#[must_use]
pub fn clamp_position(position: Point, canvas_size: Size, item_size: Size) -> Point {
    Point {
        x: position.x.min(canvas_size.width - item_size.width).max(0.0),
        y: position.y.min(canvas_size.height - item_size.height).max(0.0),
    }
}
