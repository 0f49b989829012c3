//! Collision strategies decide whether a tile's flags permit movement given
//! the composite blocking mask of a move.

use crate::flag;

/// Decides whether movement onto a tile is allowed.
pub trait CollisionStrategy {
    /// `tile_flag` is the flag of the tile being tested, `block_flag` the
    /// composite mask for the direction of travel.
    fn can_move(&self, tile_flag: u32, block_flag: u32) -> bool;
}

/// Movement is allowed when the tile carries none of the blocking bits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalBlockFlagCollision;

impl CollisionStrategy for NormalBlockFlagCollision {
    #[inline]
    fn can_move(&self, tile_flag: u32, block_flag: u32) -> bool {
        (tile_flag & block_flag) == 0
    }
}

/// Movement requires `required` to be present, and ignores it as a blocker.
///
/// With `FLOOR` as the required bit this models actors that may only travel
/// over water-style tiles. A zero mask behaves like
/// [`NormalBlockFlagCollision`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InverseBlockFlagCollision(pub u32);

impl CollisionStrategy for InverseBlockFlagCollision {
    #[inline]
    fn can_move(&self, tile_flag: u32, block_flag: u32) -> bool {
        let required = self.0;
        if required == 0 {
            return (tile_flag & block_flag) == 0;
        }
        let flag = block_flag & !required;
        (tile_flag & flag) == 0 && (tile_flag & required) != 0
    }
}

/// Shared strategy instances.
pub struct CollisionStrategies;

impl CollisionStrategies {
    pub const NORMAL: NormalBlockFlagCollision = NormalBlockFlagCollision;
    pub const SWIM: InverseBlockFlagCollision = InverseBlockFlagCollision(flag::FLOOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::*;

    #[test]
    fn normal_blocks_on_any_shared_bit() {
        let c = CollisionStrategies::NORMAL;
        assert!(c.can_move(0, BLOCK_WEST));
        assert!(!c.can_move(OBJECT, BLOCK_WEST));
        assert!(!c.can_move(WALL_EAST, BLOCK_WEST));
        assert!(c.can_move(WALL_WEST, BLOCK_WEST));
    }

    #[test]
    fn swim_requires_floor() {
        let c = CollisionStrategies::SWIM;
        assert!(!c.can_move(0, BLOCK_WEST));
        assert!(c.can_move(FLOOR, BLOCK_WEST));
        assert!(!c.can_move(FLOOR | OBJECT, BLOCK_WEST));
        assert!(!c.can_move(FLOOR | WALL_EAST, BLOCK_WEST));
    }

    #[test]
    fn inverse_with_zero_mask_is_normal() {
        let inverse = InverseBlockFlagCollision(0);
        let normal = NormalBlockFlagCollision;
        for tile in [0, OBJECT, FLOOR, WALL_EAST, WALL_WEST | FLOOR_DECORATION] {
            assert_eq!(
                inverse.can_move(tile, BLOCK_WEST),
                normal.can_move(tile, BLOCK_WEST)
            );
        }
    }
}
