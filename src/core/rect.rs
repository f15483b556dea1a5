//! Axis-aligned rectangles.
//!
//! Obstacles, walls, and the vehicle itself are all AABBs for collision
//! purposes; the intersection test here is the single collision primitive
//! the whole core builds on.

use serde::{Deserialize, Serialize};

use super::Point2;

/// Axis-aligned bounding box, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Create a new rect from its top-left corner and extents.
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of this rect.
    #[inline]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// AABB overlap test with strict inequalities.
    ///
    /// Rects that merely share an edge or corner do NOT intersect; a
    /// vehicle flush against a wall is not colliding with it.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Whether a point lies inside this rect (strict on the far edges).
    #[inline]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Clearance between two rects: the shortest distance separating their
    /// boundaries, or `0.0` if they touch or overlap.
    pub fn clearance(&self, other: &Rect) -> f64 {
        let gap_x = (other.x - (self.x + self.width)).max(self.x - (other.x + other.width));
        let gap_y = (other.y - (self.y + self.height)).max(self.y - (other.y + other.height));
        match (gap_x > 0.0, gap_y > 0.0) {
            (true, true) => (gap_x * gap_x + gap_y * gap_y).sqrt(),
            (true, false) => gap_x,
            (false, true) => gap_y,
            (false, false) => 0.0,
        }
    }
}
