//! Signed tile positions: [`Point`].

use std::fmt;
use std::ops::{Add, Sub};

use crate::coord::Coordinate;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer tile position. X grows east, Y grows north.
///
/// Used for both world positions and positions local to a search window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared euclidean distance to `other`.
    #[inline]
    pub const fn distance_squared(self, other: Self) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Coordinate> for Point {
    #[inline]
    fn from(c: Coordinate) -> Self {
        Self::new(c.x(), c.y())
    }
}

impl From<Point> for Coordinate {
    #[inline]
    fn from(p: Point) -> Self {
        Coordinate::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Point::new(3, 4);
        let b = Point::new(1, -2);
        assert_eq!(a + b, Point::new(4, 2));
        assert_eq!(a - b, Point::new(2, 6));
        assert_eq!(a.shift(-3, -4), Point::ZERO);
    }

    #[test]
    fn distance_squared_is_symmetric() {
        let a = Point::new(3200, 3200);
        let b = Point::new(3203, 3196);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(b.distance_squared(a), 25);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(-1, 7).to_string(), "(-1, 7)");
    }

    #[test]
    fn coordinate_conversion() {
        let p = Point::new(3222, 3218);
        let c: Coordinate = p.into();
        assert_eq!(Point::from(c), p);
    }
}
