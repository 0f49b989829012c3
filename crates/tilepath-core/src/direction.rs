//! Compass directions: [`Direction`] for movement and [`DirectionFlag`] for
//! back-pointers stored in search maps.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// DirectionFlag
// ---------------------------------------------------------------------------

/// Bitmask of cardinal directions. Diagonals are unions of two cardinals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionFlag(pub u32);

impl DirectionFlag {
    pub const NONE: Self = Self(0);
    pub const NORTH: Self = Self(0x1);
    pub const EAST: Self = Self(0x2);
    pub const SOUTH: Self = Self(0x4);
    pub const WEST: Self = Self(0x8);
    pub const NORTH_EAST: Self = Self(Self::NORTH.0 | Self::EAST.0);
    pub const SOUTH_EAST: Self = Self(Self::SOUTH.0 | Self::EAST.0);
    pub const SOUTH_WEST: Self = Self(Self::SOUTH.0 | Self::WEST.0);
    pub const NORTH_WEST: Self = Self(Self::NORTH.0 | Self::WEST.0);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The unit step described by this flag. North is +y, east is +x.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        let dx = if self.contains(Self::EAST) {
            1
        } else if self.contains(Self::WEST) {
            -1
        } else {
            0
        };
        let dy = if self.contains(Self::NORTH) {
            1
        } else if self.contains(Self::SOUTH) {
            -1
        } else {
            0
        };
        (dx, dy)
    }
}

impl BitOr for DirectionFlag {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for DirectionFlag {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight compass directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// Neighbour visiting order of the breadth-first search.
    pub const SEARCH_ORDER: [Direction; 8] = [
        Direction::West,
        Direction::East,
        Direction::South,
        Direction::North,
        Direction::SouthWest,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    #[inline]
    pub const fn flag(self) -> DirectionFlag {
        match self {
            Direction::North => DirectionFlag::NORTH,
            Direction::East => DirectionFlag::EAST,
            Direction::South => DirectionFlag::SOUTH,
            Direction::West => DirectionFlag::WEST,
            Direction::NorthEast => DirectionFlag::NORTH_EAST,
            Direction::SouthEast => DirectionFlag::SOUTH_EAST,
            Direction::SouthWest => DirectionFlag::SOUTH_WEST,
            Direction::NorthWest => DirectionFlag::NORTH_WEST,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    #[inline]
    pub const fn dx(self) -> i32 {
        self.flag().delta().0
    }

    #[inline]
    pub const fn dy(self) -> i32 {
        self.flag().delta().1
    }

    /// The vertical component of a diagonal, or `None` for a cardinal.
    #[inline]
    pub const fn vertical(self) -> Option<Direction> {
        match self {
            Direction::NorthEast | Direction::NorthWest => Some(Direction::North),
            Direction::SouthEast | Direction::SouthWest => Some(Direction::South),
            _ => None,
        }
    }

    /// The horizontal component of a diagonal, or `None` for a cardinal.
    #[inline]
    pub const fn horizontal(self) -> Option<Direction> {
        match self {
            Direction::NorthEast | Direction::SouthEast => Some(Direction::East),
            Direction::NorthWest | Direction::SouthWest => Some(Direction::West),
            _ => None,
        }
    }

    /// Compass direction from `(src_x, src_y)` toward `(dest_x, dest_y)`.
    ///
    /// Returns `None` when both points coincide.
    pub fn toward(src_x: i32, src_y: i32, dest_x: i32, dest_y: i32) -> Option<Direction> {
        use std::cmp::Ordering::*;
        match (dest_x.cmp(&src_x), dest_y.cmp(&src_y)) {
            (Equal, Equal) => None,
            (Equal, Less) => Some(Direction::South),
            (Equal, Greater) => Some(Direction::North),
            (Less, Equal) => Some(Direction::West),
            (Greater, Equal) => Some(Direction::East),
            (Greater, Greater) => Some(Direction::NorthEast),
            (Greater, Less) => Some(Direction::SouthEast),
            (Less, Greater) => Some(Direction::NorthWest),
            (Less, Less) => Some(Direction::SouthWest),
        }
    }
}
