use tilepath_core::FlagGrid;
use tilepath_core::flag::{WALL_EAST, WALL_NORTH, WALL_SOUTH, WALL_WEST};

use super::ReachQuery;

const ACCESS_NORTH: u32 = 0x1;
const ACCESS_EAST: u32 = 0x2;
const ACCESS_SOUTH: u32 = 0x4;
const ACCESS_WEST: u32 = 0x8;

/// Whether the actor stands inside or next to the `dest_width`×`dest_height`
/// rectangle anchored at `(dest_x, dest_y)` with no wall between them.
///
/// Sides whose bit is set in `access_bit_mask` cannot be approached from.
pub fn reach_rectangle(grid: &FlagGrid<'_>, q: &ReachQuery) -> bool {
    if q.src_size > 1 {
        overlaps(q) || reach_rectangle_n(grid, q)
    } else {
        reach_rectangle_1(grid, q)
    }
}

fn overlaps(q: &ReachQuery) -> bool {
    if q.src_x >= q.dest_x + q.dest_width || q.src_x + q.src_size <= q.dest_x {
        return false;
    }
    q.src_y < q.dest_y + q.dest_height && q.dest_y < q.src_y + q.src_size
}

#[inline]
fn open(grid: &FlagGrid<'_>, x: i32, y: i32, wall: u32) -> bool {
    grid.at(x, y) & wall == 0
}

fn reach_rectangle_1(grid: &FlagGrid<'_>, q: &ReachQuery) -> bool {
    let (sx, sy) = (q.src_x, q.src_y);
    let east = q.dest_x + q.dest_width - 1;
    let north = q.dest_y + q.dest_height - 1;
    let in_x = (q.dest_x..=east).contains(&sx);
    let in_y = (q.dest_y..=north).contains(&sy);
    let mask = q.access_bit_mask;

    if in_x && in_y {
        return true;
    }
    if sx == q.dest_x - 1 && in_y && open(grid, sx, sy, WALL_EAST) && mask & ACCESS_WEST == 0 {
        return true;
    }
    if sx == east + 1 && in_y && open(grid, sx, sy, WALL_WEST) && mask & ACCESS_EAST == 0 {
        return true;
    }
    if sy + 1 == q.dest_y && in_x && open(grid, sx, sy, WALL_NORTH) && mask & ACCESS_SOUTH == 0 {
        return true;
    }
    sy == north + 1 && in_x && open(grid, sx, sy, WALL_SOUTH) && mask & ACCESS_NORTH == 0
}

fn reach_rectangle_n(grid: &FlagGrid<'_>, q: &ReachQuery) -> bool {
    let (sx, sy) = (q.src_x, q.src_y);
    let src_east = sx + q.src_size;
    let src_north = sy + q.src_size;
    let dest_east = q.dest_x + q.dest_width;
    let dest_north = q.dest_y + q.dest_height;
    let mask = q.access_bit_mask;

    if (q.dest_x..dest_east).contains(&sx) {
        let min_east = src_east.min(dest_east);
        if q.dest_y == src_north && mask & ACCESS_SOUTH == 0 {
            return (sx..min_east).any(|x| open(grid, x, src_north - 1, WALL_NORTH));
        } else if dest_north == sy && mask & ACCESS_NORTH == 0 {
            return (sx..min_east).any(|x| open(grid, x, sy, WALL_SOUTH));
        }
    } else if (q.dest_x + 1..=dest_east).contains(&src_east) {
        if q.dest_y == src_north && mask & ACCESS_SOUTH == 0 {
            return (q.dest_x..src_east).any(|x| open(grid, x, src_north - 1, WALL_NORTH));
        } else if sy == dest_north && mask & ACCESS_NORTH == 0 {
            return (q.dest_x..src_east).any(|x| open(grid, x, sy, WALL_NORTH));
        }
    } else if (q.dest_y..dest_north).contains(&sy) {
        let min_north = src_north.min(dest_north);
        if src_east == q.dest_x && mask & ACCESS_WEST == 0 {
            return (sy..min_north).any(|y| open(grid, src_east - 1, y, WALL_EAST));
        } else if dest_east == sx && mask & ACCESS_EAST == 0 {
            return (sy..min_north).any(|y| open(grid, sx, y, WALL_WEST));
        }
    } else if (q.dest_y + 1..=dest_north).contains(&src_north) {
        if q.dest_x == src_east && mask & ACCESS_WEST == 0 {
            return (q.dest_y..src_north).any(|y| open(grid, src_east - 1, y, WALL_EAST));
        } else if dest_east == sx && mask & ACCESS_EAST == 0 {
            return (q.dest_y..src_north).any(|y| open(grid, sx, y, WALL_WEST));
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: usize = 16;

    fn query(src: (i32, i32), src_size: i32, dest: (i32, i32), w: i32, h: i32) -> ReachQuery {
        ReachQuery {
            src_x: src.0,
            src_y: src.1,
            src_size,
            dest_x: dest.0,
            dest_y: dest.1,
            dest_width: w,
            dest_height: h,
            shape: 10,
            ..Default::default()
        }
    }

    #[test]
    fn single_tile_sides() {
        let flags = vec![0u32; SIZE * SIZE];
        let grid = FlagGrid::new(&flags, SIZE);
        // 2x2 rectangle at (5, 5)
        assert!(reach_rectangle(&grid, &query((4, 5), 1, (5, 5), 2, 2)));
        assert!(reach_rectangle(&grid, &query((7, 6), 1, (5, 5), 2, 2)));
        assert!(reach_rectangle(&grid, &query((5, 4), 1, (5, 5), 2, 2)));
        assert!(reach_rectangle(&grid, &query((6, 7), 1, (5, 5), 2, 2)));
        assert!(reach_rectangle(&grid, &query((6, 6), 1, (5, 5), 2, 2)));
        // diagonal corner is not adjacent
        assert!(!reach_rectangle(&grid, &query((4, 4), 1, (5, 5), 2, 2)));
        assert!(!reach_rectangle(&grid, &query((3, 5), 1, (5, 5), 2, 2)));
    }

    #[test]
    fn single_tile_wall_blocks_side() {
        let mut flags = vec![0u32; SIZE * SIZE];
        flags[5 * SIZE + 4] = WALL_EAST;
        let grid = FlagGrid::new(&flags, SIZE);
        assert!(!reach_rectangle(&grid, &query((4, 5), 1, (5, 5), 1, 1)));
        // a wall on another side of the actor tile does not matter
        flags[5 * SIZE + 4] = WALL_WEST;
        let grid = FlagGrid::new(&flags, SIZE);
        assert!(reach_rectangle(&grid, &query((4, 5), 1, (5, 5), 1, 1)));
    }

    #[test]
    fn access_mask_blocks_side() {
        let flags = vec![0u32; SIZE * SIZE];
        let grid = FlagGrid::new(&flags, SIZE);
        let mut q = query((4, 5), 1, (5, 5), 1, 1);
        q.access_bit_mask = ACCESS_WEST;
        assert!(!reach_rectangle(&grid, &q));
        q.access_bit_mask = ACCESS_EAST | ACCESS_NORTH | ACCESS_SOUTH;
        assert!(reach_rectangle(&grid, &q));
    }

    #[test]
    fn large_actor_overlap_and_edges() {
        let flags = vec![0u32; SIZE * SIZE];
        let grid = FlagGrid::new(&flags, SIZE);
        // overlapping footprints
        assert!(reach_rectangle(&grid, &query((4, 4), 2, (5, 5), 1, 1)));
        // 2x2 actor directly west of 1x1 target
        assert!(reach_rectangle(&grid, &query((3, 5), 2, (5, 5), 1, 1)));
        // directly south
        assert!(reach_rectangle(&grid, &query((5, 3), 2, (5, 5), 1, 1)));
        // directly north
        assert!(reach_rectangle(&grid, &query((5, 6), 2, (5, 5), 1, 1)));
        // directly east
        assert!(reach_rectangle(&grid, &query((6, 5), 2, (5, 5), 1, 1)));
        // one tile gap
        assert!(!reach_rectangle(&grid, &query((2, 5), 2, (5, 5), 1, 1)));
    }

    #[test]
    fn large_actor_north_edge_aligned_west() {
        let mut flags = vec![0u32; SIZE * SIZE];
        // actor 2x2 at (5, 6) on the north edge of a 2x2 target at (5, 4)
        flags[6 * SIZE + 5] = WALL_SOUTH;
        flags[6 * SIZE + 6] = WALL_SOUTH;
        let grid = FlagGrid::new(&flags, SIZE);
        assert!(!reach_rectangle(&grid, &query((5, 6), 2, (5, 4), 2, 2)));
        flags[6 * SIZE + 6] = WALL_NORTH;
        let grid = FlagGrid::new(&flags, SIZE);
        assert!(reach_rectangle(&grid, &query((5, 6), 2, (5, 4), 2, 2)));
    }

    #[test]
    fn large_actor_north_edge_overhanging_west() {
        let mut flags = vec![0u32; SIZE * SIZE];
        // actor 2x2 at (4, 6) overhangs the west side of a 2x2 target at (5, 4);
        // only (5, 6) is tested and against its north wall
        flags[6 * SIZE + 5] = WALL_NORTH;
        let grid = FlagGrid::new(&flags, SIZE);
        assert!(!reach_rectangle(&grid, &query((4, 6), 2, (5, 4), 2, 2)));
        flags[6 * SIZE + 5] = WALL_SOUTH;
        let grid = FlagGrid::new(&flags, SIZE);
        assert!(reach_rectangle(&grid, &query((4, 6), 2, (5, 4), 2, 2)));
    }

    #[test]
    fn large_actor_edge_fully_walled() {
        let mut flags = vec![0u32; SIZE * SIZE];
        // 2x2 actor at (3, 5) west of 1x1 target at (5, 5): east column x=4
        flags[5 * SIZE + 4] = WALL_EAST;
        let grid = FlagGrid::new(&flags, SIZE);
        assert!(!reach_rectangle(&grid, &query((3, 5), 2, (5, 5), 1, 1)));
    }
}
