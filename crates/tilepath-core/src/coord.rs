//! Packed route coordinates: [`Coordinate`].

use std::fmt;

/// A tile coordinate packed into a single `u32`.
///
/// `x` lives in the low 16 bits and `y` in the high 16 bits. Construction
/// masks each axis to 16 bits, so values outside `0..=65535` wrap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate(u32);

impl Coordinate {
    /// Pack `(x, y)` into a coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(((x as u32) & 0xFFFF) | (((y as u32) & 0xFFFF) << 16))
    }

    /// Reinterpret a raw packed value.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// The raw packed value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn x(self) -> i32 {
        (self.0 & 0xFFFF) as i32
    }

    #[inline]
    pub const fn y(self) -> i32 {
        ((self.0 >> 16) & 0xFFFF) as i32
    }

    /// Return a coordinate moved by (dx, dy).
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x() + dx, self.y() + dy)
    }

    #[inline]
    pub const fn translate_x(self, dx: i32) -> Self {
        self.translate(dx, 0)
    }

    #[inline]
    pub const fn translate_y(self, dy: i32) -> Self {
        self.translate(0, dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coordinate_round_trip() {
        let c = Coordinate::new(3222, 3218);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
