use tilepath_core::FlagGrid;
use tilepath_core::flag::{
    BLOCK_EAST, BLOCK_NORTH, BLOCK_SOUTH, BLOCK_WEST, WALL_EAST, WALL_NORTH, WALL_SOUTH, WALL_WEST,
};

use super::ReachQuery;

// ---------------------------------------------------------------------------
// Side access tables
// ---------------------------------------------------------------------------

/// How a wall tile may be approached from one side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Access {
    /// Reachable whenever the actor stands on that side.
    Open,
    /// Reachable unless the actor's tile carries any of these bits.
    Unless(u32),
    Closed,
}

/// Approach rules for each side of a wall tile. A side names where the
/// actor stands relative to the wall.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Sides {
    pub(crate) west: Access,
    pub(crate) north: Access,
    pub(crate) east: Access,
    pub(crate) south: Access,
}

use Access::{Closed, Open, Unless};

const fn sides(west: Access, north: Access, east: Access, south: Access) -> Sides {
    Sides {
        west,
        north,
        east,
        south,
    }
}

// Straight walls (shape 0): open along the face, guarded along the ends.
const STRAIGHT_ROT0: Sides = sides(Open, Unless(BLOCK_NORTH), Closed, Unless(BLOCK_SOUTH));
const STRAIGHT_ROT1: Sides = sides(Unless(BLOCK_WEST), Open, Unless(BLOCK_EAST), Closed);
const STRAIGHT_ROT2: Sides = sides(Closed, Unless(BLOCK_NORTH), Open, Unless(BLOCK_SOUTH));
// Single-tile actors test the north/south masks on the east/west ends here.
const STRAIGHT_ROT3_SINGLE: Sides = sides(Unless(BLOCK_NORTH), Closed, Unless(BLOCK_SOUTH), Open);
const STRAIGHT_ROT3_LARGE: Sides = sides(Unless(BLOCK_WEST), Closed, Unless(BLOCK_EAST), Open);

// Corner walls (shape 2): two open faces.
const CORNER_ROT0: Sides = sides(Open, Open, Unless(BLOCK_EAST), Unless(BLOCK_SOUTH));
const CORNER_ROT1: Sides = sides(Unless(BLOCK_WEST), Open, Open, Unless(BLOCK_SOUTH));
const CORNER_ROT2: Sides = sides(Unless(BLOCK_WEST), Unless(BLOCK_NORTH), Open, Open);
const CORNER_ROT3: Sides = sides(Open, Unless(BLOCK_NORTH), Unless(BLOCK_EAST), Open);

// Omni walls (shape 9): every side, guarded by the facing wall bit.
const OMNI_SINGLE: Sides = sides(
    Unless(WALL_EAST),
    Unless(WALL_SOUTH),
    Unless(WALL_WEST),
    Unless(WALL_NORTH),
);
const OMNI_LARGE: Sides = sides(
    Unless(BLOCK_WEST),
    Unless(BLOCK_NORTH),
    Unless(BLOCK_EAST),
    Unless(BLOCK_SOUTH),
);

fn wall_sides(shape: i32, rotation: i32, single: bool) -> Option<Sides> {
    let s = match (shape, rotation) {
        (0, 0) => STRAIGHT_ROT0,
        (0, 1) => STRAIGHT_ROT1,
        (0, 2) => STRAIGHT_ROT2,
        (0, 3) if single => STRAIGHT_ROT3_SINGLE,
        (0, 3) => STRAIGHT_ROT3_LARGE,
        (2, 0) => CORNER_ROT0,
        (2, 1) => CORNER_ROT1,
        (2, 2) => CORNER_ROT2,
        (2, 3) => CORNER_ROT3,
        (9, _) if single => OMNI_SINGLE,
        (9, _) => OMNI_LARGE,
        _ => return None,
    };
    Some(s)
}

/// Test each side of the target tile against the actor's footprint.
///
/// The flag tested is that of the footprint tile touching the target.
pub(crate) fn reach_sides(grid: &FlagGrid<'_>, q: &ReachQuery, sides: &Sides) -> bool {
    let size = q.src_size;
    let east = q.src_x + size - 1;
    let north = q.src_y + size - 1;
    let spans_y = q.src_y <= q.dest_y && north >= q.dest_y;
    let spans_x = q.src_x <= q.dest_x && east >= q.dest_x;

    let permits = |access: Access, x: i32, y: i32| match access {
        Open => true,
        Unless(mask) => grid.at(x, y) & mask == 0,
        Closed => false,
    };

    (q.src_x == q.dest_x - size && spans_y && permits(sides.west, east, q.dest_y))
        || (q.src_y == q.dest_y + 1 && spans_x && permits(sides.north, q.dest_x, q.src_y))
        || (q.src_x == q.dest_x + 1 && spans_y && permits(sides.east, q.src_x, q.dest_y))
        || (q.src_y == q.dest_y - size && spans_x && permits(sides.south, q.dest_x, north))
}

/// Whether the actor can interact with a wall of the given shape (0, 1, 2,
/// 3 or 9) and rotation at `(dest_x, dest_y)`.
///
/// Shapes 1 and 3 classify as walls but have no approach sides, so only
/// standing on the wall tile reaches them.
pub fn reach_wall(grid: &FlagGrid<'_>, q: &ReachQuery) -> bool {
    if q.footprint_covers_dest() {
        return true;
    }
    match wall_sides(q.shape, q.rotation, q.src_size == 1) {
        Some(sides) => reach_sides(grid, q, &sides),
        None => false,
    }
}
