//! Single-step movement tests for square footprints.
//!
//! A footprint of side `size` anchored at its south-west tile `(x, y)` may
//! step in a direction when every tile it newly enters permits the move. The
//! tiles on the leading corners are tested against the diagonal masks and the
//! tiles between them against the edge masks.

use tilepath_core::flag::*;
use tilepath_core::{CollisionStrategy, Direction, FlagGrid};

/// Whether the footprint stays inside the window after stepping.
#[inline]
pub(crate) fn fits(map_size: i32, x: i32, y: i32, size: i32, dir: Direction) -> bool {
    let limit = map_size - size;
    let x_ok = match dir.dx() {
        -1 => x > 0,
        1 => x < limit,
        _ => true,
    };
    let y_ok = match dir.dy() {
        -1 => y > 0,
        1 => y < limit,
        _ => true,
    };
    x_ok && y_ok
}

/// Step test for a footprint of any size, dispatching on `size`.
///
/// Callers check [`fits`] first.
#[inline]
pub(crate) fn can_step(
    grid: &FlagGrid<'_>,
    collision: &dyn CollisionStrategy,
    x: i32,
    y: i32,
    size: i32,
    dir: Direction,
) -> bool {
    match size {
        1 => step_1(grid, collision, x, y, dir),
        2 => step_2(grid, collision, x, y, dir),
        _ => step_n(grid, collision, x, y, size, dir),
    }
}

pub(crate) fn step_1(
    grid: &FlagGrid<'_>,
    c: &dyn CollisionStrategy,
    x: i32,
    y: i32,
    dir: Direction,
) -> bool {
    let ok = |tx: i32, ty: i32, mask: u32| c.can_move(grid.at(tx, ty), mask);
    match dir {
        Direction::West => ok(x - 1, y, BLOCK_WEST),
        Direction::East => ok(x + 1, y, BLOCK_EAST),
        Direction::South => ok(x, y - 1, BLOCK_SOUTH),
        Direction::North => ok(x, y + 1, BLOCK_NORTH),
        Direction::SouthWest => {
            ok(x - 1, y - 1, BLOCK_SOUTH_WEST)
                && ok(x - 1, y, BLOCK_WEST)
                && ok(x, y - 1, BLOCK_SOUTH)
        }
        Direction::SouthEast => {
            ok(x + 1, y - 1, BLOCK_SOUTH_EAST)
                && ok(x + 1, y, BLOCK_EAST)
                && ok(x, y - 1, BLOCK_SOUTH)
        }
        Direction::NorthWest => {
            ok(x - 1, y + 1, BLOCK_NORTH_WEST)
                && ok(x - 1, y, BLOCK_WEST)
                && ok(x, y + 1, BLOCK_NORTH)
        }
        Direction::NorthEast => {
            ok(x + 1, y + 1, BLOCK_NORTH_EAST)
                && ok(x + 1, y, BLOCK_EAST)
                && ok(x, y + 1, BLOCK_NORTH)
        }
    }
}

pub(crate) fn step_2(
    grid: &FlagGrid<'_>,
    c: &dyn CollisionStrategy,
    x: i32,
    y: i32,
    dir: Direction,
) -> bool {
    let ok = |tx: i32, ty: i32, mask: u32| c.can_move(grid.at(tx, ty), mask);
    match dir {
        Direction::West => ok(x - 1, y, BLOCK_SOUTH_WEST) && ok(x - 1, y + 1, BLOCK_NORTH_WEST),
        Direction::East => ok(x + 2, y, BLOCK_SOUTH_EAST) && ok(x + 2, y + 1, BLOCK_NORTH_EAST),
        Direction::South => ok(x, y - 1, BLOCK_SOUTH_WEST) && ok(x + 1, y - 1, BLOCK_SOUTH_EAST),
        Direction::North => ok(x, y + 2, BLOCK_NORTH_WEST) && ok(x + 1, y + 2, BLOCK_NORTH_EAST),
        Direction::SouthWest => {
            ok(x - 1, y, BLOCK_NORTH_WEST)
                && ok(x - 1, y - 1, BLOCK_SOUTH_WEST)
                && ok(x, y - 1, BLOCK_SOUTH_EAST)
        }
        Direction::SouthEast => {
            ok(x + 1, y - 1, BLOCK_SOUTH_WEST)
                && ok(x + 2, y - 1, BLOCK_SOUTH_EAST)
                && ok(x + 2, y, BLOCK_NORTH_EAST)
        }
        Direction::NorthWest => {
            ok(x - 1, y + 1, BLOCK_SOUTH_WEST)
                && ok(x - 1, y + 2, BLOCK_NORTH_WEST)
                && ok(x, y + 2, BLOCK_NORTH_EAST)
        }
        Direction::NorthEast => {
            ok(x + 1, y + 2, BLOCK_NORTH_WEST)
                && ok(x + 2, y + 2, BLOCK_NORTH_EAST)
                && ok(x + 2, y + 1, BLOCK_SOUTH_EAST)
        }
    }
}

pub(crate) fn step_n(
    grid: &FlagGrid<'_>,
    c: &dyn CollisionStrategy,
    x: i32,
    y: i32,
    size: i32,
    dir: Direction,
) -> bool {
    let ok = |tx: i32, ty: i32, mask: u32| c.can_move(grid.at(tx, ty), mask);
    let s = size;
    let mut inner = 1..s - 1;
    match dir {
        Direction::West => {
            ok(x - 1, y, BLOCK_SOUTH_WEST)
                && ok(x - 1, y + s - 1, BLOCK_NORTH_WEST)
                && inner.all(|i| ok(x - 1, y + i, BLOCK_NORTH_AND_SOUTH_EAST))
        }
        Direction::East => {
            ok(x + s, y, BLOCK_SOUTH_EAST)
                && ok(x + s, y + s - 1, BLOCK_NORTH_EAST)
                && inner.all(|i| ok(x + s, y + i, BLOCK_NORTH_AND_SOUTH_WEST))
        }
        Direction::South => {
            ok(x, y - 1, BLOCK_SOUTH_WEST)
                && ok(x + s - 1, y - 1, BLOCK_SOUTH_EAST)
                && inner.all(|i| ok(x + i, y - 1, BLOCK_NORTH_EAST_AND_WEST))
        }
        Direction::North => {
            ok(x, y + s, BLOCK_NORTH_WEST)
                && ok(x + s - 1, y + s, BLOCK_NORTH_EAST)
                && inner.all(|i| ok(x + i, y + s, BLOCK_SOUTH_EAST_AND_WEST))
        }
        Direction::SouthWest => {
            ok(x - 1, y + s - 2, BLOCK_NORTH_WEST)
                && ok(x - 1, y - 1, BLOCK_SOUTH_WEST)
                && ok(x + s - 2, y - 1, BLOCK_SOUTH_EAST)
                && inner.all(|i| {
                    ok(x - 1, y + i - 1, BLOCK_SOUTH_EAST_AND_WEST)
                        && ok(x + i - 1, y - 1, BLOCK_NORTH_EAST_AND_WEST)
                })
        }
        Direction::SouthEast => {
            ok(x + 1, y - 1, BLOCK_SOUTH_WEST)
                && ok(x + s, y - 1, BLOCK_SOUTH_EAST)
                && ok(x + s, y + s - 2, BLOCK_NORTH_EAST)
                && inner.all(|i| {
                    ok(x + s, y + i - 1, BLOCK_NORTH_AND_SOUTH_WEST)
                        && ok(x + i + 1, y - 1, BLOCK_NORTH_EAST_AND_WEST)
                })
        }
        Direction::NorthWest => {
            ok(x - 1, y + 1, BLOCK_SOUTH_WEST)
                && ok(x - 1, y + s, BLOCK_NORTH_WEST)
                && ok(x, y + s, BLOCK_NORTH_EAST)
                && inner.all(|i| {
                    ok(x - 1, y + i + 1, BLOCK_NORTH_AND_SOUTH_EAST)
                        && ok(x + i - 1, y + s, BLOCK_SOUTH_EAST_AND_WEST)
                })
        }
        Direction::NorthEast => {
            ok(x + 1, y + s, BLOCK_NORTH_WEST)
                && ok(x + s, y + s, BLOCK_NORTH_EAST)
                && ok(x + s, y + 1, BLOCK_SOUTH_EAST)
                && inner.all(|i| {
                    ok(x + i + 1, y + s, BLOCK_SOUTH_EAST_AND_WEST)
                        && ok(x + s, y + i + 1, BLOCK_NORTH_AND_SOUTH_WEST)
                })
        }
    }
}
