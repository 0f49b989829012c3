use tilepath_core::FlagGrid;
use tilepath_core::flag::{WALL_EAST, WALL_NORTH, WALL_SOUTH, WALL_WEST};

use super::ReachQuery;
use super::wall::{Access, Sides, reach_sides};

use Access::{Closed, Unless};

const FROM_WEST: Access = Unless(WALL_EAST);
const FROM_NORTH: Access = Unless(WALL_SOUTH);
const FROM_EAST: Access = Unless(WALL_WEST);
const FROM_SOUTH: Access = Unless(WALL_NORTH);

/// Diagonal decorations (shapes 6 and 7), indexed by rotation.
const DIAGONAL: [Sides; 4] = [
    Sides {
        west: Closed,
        north: Closed,
        east: FROM_EAST,
        south: FROM_SOUTH,
    },
    Sides {
        west: FROM_WEST,
        north: Closed,
        east: Closed,
        south: FROM_SOUTH,
    },
    Sides {
        west: FROM_WEST,
        north: FROM_NORTH,
        east: Closed,
        south: Closed,
    },
    Sides {
        west: Closed,
        north: FROM_NORTH,
        east: FROM_EAST,
        south: Closed,
    },
];

/// Free-standing decorations (shape 8).
const ALL_SIDES: Sides = Sides {
    west: FROM_WEST,
    north: FROM_NORTH,
    east: FROM_EAST,
    south: FROM_SOUTH,
};

/// Whether the actor can interact with a wall decoration of the given shape
/// and rotation at `(dest_x, dest_y)`.
///
/// Shape 7 faces the opposite way to shape 6 for the same rotation.
pub fn reach_wall_deco(grid: &FlagGrid<'_>, q: &ReachQuery) -> bool {
    if q.footprint_covers_dest() {
        return true;
    }
    let sides = match q.shape {
        6 | 7 => {
            let rot = if q.shape == 7 { (q.rotation + 2) & 0x3 } else { q.rotation };
            match usize::try_from(rot).ok().and_then(|r| DIAGONAL.get(r)) {
                Some(s) => *s,
                None => return false,
            }
        }
        8 => ALL_SIDES,
        _ => return false,
    };
    reach_sides(grid, q, &sides)
}
