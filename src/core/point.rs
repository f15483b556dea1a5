//! Point and displacement types for the arena coordinate frame.
//!
//! The arena uses a screen-style frame: the origin is the top-left corner,
//! X grows to the right, Y grows downward. A `Point2` doubles as a position
//! and as a displacement; strategies return displacements that the driver
//! adds to the current position.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Real-valued 2D position or displacement.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    /// X coordinate (rightward)
    pub x: f64,
    /// Y coordinate (downward)
    pub y: f64,
}

impl Point2 {
    /// Origin / zero displacement.
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance (avoids the sqrt).
    #[inline]
    pub fn distance_squared(&self, other: &Point2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Length (magnitude) of this point as a vector from the origin.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Normalize to unit length.
    ///
    /// A zero-length vector normalizes to `(0, 0)` rather than failing;
    /// callers treat that as "no preferred direction".
    #[inline]
    pub fn normalize(&self) -> Point2 {
        let len = self.length();
        if len > 0.0 {
            Point2::new(self.x / len, self.y / len)
        } else {
            Point2::ZERO
        }
    }

    /// Unit vector pointing from `self` toward `to`.
    ///
    /// Returns `(0, 0)` when the points coincide.
    #[inline]
    pub fn direction_to(&self, to: &Point2) -> Point2 {
        (*to - *self).normalize()
    }

    /// Angle from this point to another (radians, measured from +X).
    #[inline]
    pub fn angle_to(&self, other: &Point2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Unit vector for a heading angle (radians, measured from +X).
    #[inline]
    pub fn from_angle(angle: f64) -> Point2 {
        Point2::new(angle.cos(), angle.sin())
    }

    /// Dot product with another point (as vectors).
    #[inline]
    pub fn dot(&self, other: &Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate this vector 90 degrees counter-clockwise in the arena frame.
    #[inline]
    pub fn perpendicular(&self) -> Point2 {
        Point2::new(-self.y, self.x)
    }
}

impl Add for Point2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Point2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point2::new(-self.x, -self.y)
    }
}

/// Smallest signed difference between two angles, in `[-PI, PI]`.
#[inline]
pub fn angle_diff(a: f64, b: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let mut d = (a - b) % TAU;
    if d > PI {
        d -= TAU;
    } else if d < -PI {
        d += TAU;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-9);
        assert!((a.distance_squared(&b) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(Point2::ZERO.normalize(), Point2::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Point2::new(10.0, -10.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_direction_to() {
        let from = Point2::new(1.0, 1.0);
        let to = Point2::new(1.0, 5.0);
        let dir = from.direction_to(&to);
        assert!((dir.x - 0.0).abs() < 1e-9);
        assert!((dir.y - 1.0).abs() < 1e-9);

        // Coincident points have no direction
        assert_eq!(from.direction_to(&from), Point2::ZERO);
    }

    #[test]
    fn test_perpendicular() {
        let v = Point2::new(1.0, 0.0);
        let p = v.perpendicular();
        assert!((v.dot(&p)).abs() < 1e-9);
    }

    #[test]
    fn test_angle_diff_wraps() {
        use std::f64::consts::PI;
        assert!((angle_diff(0.1, -0.1) - 0.2).abs() < 1e-9);
        // Difference across the +/-PI seam takes the short way around
        assert!((angle_diff(PI - 0.1, -PI + 0.1) + 0.2).abs() < 1e-9);
    }
}
