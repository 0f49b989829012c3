//! Per-tile collision flag bits and the composite masks used by movement
//! checks.
//!
//! A flag grid stores one `u32` per tile. The low byte holds the eight
//! directional wall/corner bits, followed by the object bit, a parallel tier
//! of projectile blockers, floor bits and a tier of routing hints.

// ---------------------------------------------------------------------------
// Walls and objects
// ---------------------------------------------------------------------------

pub const CORNER_NORTH_WEST: u32 = 0x1;
pub const WALL_NORTH: u32 = 0x2;
pub const CORNER_NORTH_EAST: u32 = 0x4;
pub const WALL_EAST: u32 = 0x8;
pub const CORNER_SOUTH_EAST: u32 = 0x10;
pub const WALL_SOUTH: u32 = 0x20;
pub const CORNER_SOUTH_WEST: u32 = 0x40;
pub const WALL_WEST: u32 = 0x80;
pub const OBJECT: u32 = 0x100;

// ---------------------------------------------------------------------------
// Projectile blockers
// ---------------------------------------------------------------------------

pub const CORNER_NORTH_WEST_PROJECTILE_BLOCKER: u32 = 0x200;
pub const WALL_NORTH_PROJECTILE_BLOCKER: u32 = 0x400;
pub const CORNER_NORTH_EAST_PROJECTILE_BLOCKER: u32 = 0x800;
pub const WALL_EAST_PROJECTILE_BLOCKER: u32 = 0x1000;
pub const CORNER_SOUTH_EAST_PROJECTILE_BLOCKER: u32 = 0x2000;
pub const WALL_SOUTH_PROJECTILE_BLOCKER: u32 = 0x4000;
pub const CORNER_SOUTH_WEST_PROJECTILE_BLOCKER: u32 = 0x8000;
pub const WALL_WEST_PROJECTILE_BLOCKER: u32 = 0x10000;
pub const OBJECT_PROJECTILE_BLOCKER: u32 = 0x20000;

// ---------------------------------------------------------------------------
// Floor
// ---------------------------------------------------------------------------

pub const FLOOR_DECORATION: u32 = 0x40000;
pub const UNKNOWN_BIT_20: u32 = 0x80000;
/// Bit 21 (0x100000) is unused by route finding.
pub const FLOOR: u32 = 0x200000;

// ---------------------------------------------------------------------------
// Hints
// ---------------------------------------------------------------------------

pub const CORNER_NORTH_WEST_HINT: u32 = 0x400000;
pub const WALL_NORTH_HINT: u32 = 0x800000;
pub const CORNER_NORTH_EAST_HINT: u32 = 0x1000000;
pub const WALL_EAST_HINT: u32 = 0x2000000;
pub const CORNER_SOUTH_EAST_HINT: u32 = 0x4000000;
pub const WALL_SOUTH_HINT: u32 = 0x8000000;
pub const CORNER_SOUTH_WEST_HINT: u32 = 0x10000000;
pub const WALL_WEST_HINT: u32 = 0x20000000;
pub const OBJECT_HINT: u32 = 0x40000000;

// ---------------------------------------------------------------------------
// Composite movement masks
// ---------------------------------------------------------------------------

/// Bits that block movement into a tile regardless of direction.
pub const BLOCK_TILE: u32 =
    OBJECT | FLOOR_DECORATION | UNKNOWN_BIT_20 | FLOOR | CORNER_NORTH_EAST_HINT;

/// Entering a tile from its east side.
pub const BLOCK_WEST: u32 = WALL_EAST | BLOCK_TILE;
/// Entering a tile from its west side.
pub const BLOCK_EAST: u32 = WALL_WEST | BLOCK_TILE;
/// Entering a tile from its north side.
pub const BLOCK_SOUTH: u32 = WALL_NORTH | BLOCK_TILE;
/// Entering a tile from its south side.
pub const BLOCK_NORTH: u32 = WALL_SOUTH | BLOCK_TILE;

pub const BLOCK_SOUTH_WEST: u32 = WALL_NORTH | CORNER_NORTH_EAST | WALL_EAST | BLOCK_TILE;
pub const BLOCK_SOUTH_EAST: u32 = CORNER_NORTH_WEST | WALL_NORTH | WALL_WEST | BLOCK_TILE;
pub const BLOCK_NORTH_WEST: u32 = WALL_EAST | CORNER_SOUTH_EAST | WALL_SOUTH | BLOCK_TILE;
pub const BLOCK_NORTH_EAST: u32 = WALL_SOUTH | CORNER_SOUTH_WEST | WALL_WEST | BLOCK_TILE;

/// Interior tiles of the west edge of a large footprint moving west.
pub const BLOCK_NORTH_AND_SOUTH_EAST: u32 =
    WALL_NORTH | CORNER_NORTH_EAST | WALL_EAST | CORNER_SOUTH_EAST | WALL_SOUTH | BLOCK_TILE;
/// Interior tiles of the east edge of a large footprint moving east.
pub const BLOCK_NORTH_AND_SOUTH_WEST: u32 =
    CORNER_NORTH_WEST | WALL_NORTH | WALL_SOUTH | CORNER_SOUTH_WEST | WALL_WEST | BLOCK_TILE;
/// Interior tiles of the south edge of a large footprint moving south.
pub const BLOCK_NORTH_EAST_AND_WEST: u32 =
    CORNER_NORTH_WEST | WALL_NORTH | CORNER_NORTH_EAST | WALL_EAST | WALL_WEST | BLOCK_TILE;
/// Interior tiles of the north edge of a large footprint moving north.
pub const BLOCK_SOUTH_EAST_AND_WEST: u32 =
    WALL_EAST | CORNER_SOUTH_EAST | WALL_SOUTH | CORNER_SOUTH_WEST | WALL_WEST | BLOCK_TILE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_tile_value() {
        assert_eq!(BLOCK_TILE, 0x12c0100);
    }

    #[test]
    fn cardinal_masks() {
        assert_eq!(BLOCK_NORTH, 0x12c0120);
        assert_eq!(BLOCK_SOUTH, 0x12c0102);
        assert_eq!(BLOCK_WEST, 0x12c0108);
        assert_eq!(BLOCK_EAST, 0x12c0180);
    }

    #[test]
    fn diagonal_masks_contain_both_cardinals() {
        assert_eq!(BLOCK_SOUTH_WEST & BLOCK_SOUTH, BLOCK_SOUTH);
        assert_eq!(BLOCK_SOUTH_WEST & BLOCK_WEST, BLOCK_WEST);
        assert_eq!(BLOCK_NORTH_EAST & BLOCK_NORTH, BLOCK_NORTH);
        assert_eq!(BLOCK_NORTH_EAST & BLOCK_EAST, BLOCK_EAST);
    }

    #[test]
    fn tiers_do_not_overlap() {
        let walls = 0xFF;
        let projectile = 0x1FE00;
        let hints = 0x7FC00000;
        assert_eq!(walls & projectile, 0);
        assert_eq!(projectile & hints, 0);
        assert_eq!(OBJECT & (walls | projectile | hints), 0);
        assert_eq!(FLOOR & (walls | projectile | hints), 0);
    }
}
