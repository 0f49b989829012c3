//! Line-of-fire validation by fixed-point ray marching.

use tilepath_core::flag::{
    OBJECT_PROJECTILE_BLOCKER, WALL_EAST_PROJECTILE_BLOCKER, WALL_NORTH_PROJECTILE_BLOCKER,
    WALL_SOUTH_PROJECTILE_BLOCKER, WALL_WEST_PROJECTILE_BLOCKER,
};
use tilepath_core::{FlagGrid, Point};

use crate::config::{ConfigError, SearchConfig};
use crate::route::Route;

const BLOCKED_NORTH: u32 = OBJECT_PROJECTILE_BLOCKER | WALL_NORTH_PROJECTILE_BLOCKER;
const BLOCKED_EAST: u32 = OBJECT_PROJECTILE_BLOCKER | WALL_EAST_PROJECTILE_BLOCKER;
const BLOCKED_SOUTH: u32 = OBJECT_PROJECTILE_BLOCKER | WALL_SOUTH_PROJECTILE_BLOCKER;
const BLOCKED_WEST: u32 = OBJECT_PROJECTILE_BLOCKER | WALL_WEST_PROJECTILE_BLOCKER;

const SCALE: u32 = 16;
const HALF_TILE: i32 = (1 << SCALE) / 2;

#[inline]
fn scale_up(tiles: i32) -> i32 {
    tiles << SCALE
}

#[inline]
fn scale_down(scaled: i32) -> i32 {
    ((scaled as u32) >> SCALE) as i32
}

/// Corner of the footprint `[a, a + size)` nearest to `b` along one axis.
#[inline]
fn nearest(a: i32, b: i32, size: i32) -> i32 {
    let far = a + size.max(1) - 1;
    if a >= b {
        a
    } else if far <= b {
        far
    } else {
        b
    }
}

/// Checks whether a projectile can travel between two footprints.
#[derive(Clone, Copy, Debug)]
pub struct ProjectileValidator {
    search_map_size: usize,
}

impl Default for ProjectileValidator {
    fn default() -> Self {
        Self {
            search_map_size: SearchConfig::default().search_map_size,
        }
    }
}

impl ProjectileValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the window size of `config` applies to the validator.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            search_map_size: config.search_map_size,
        })
    }

    pub fn search_map_size(&self) -> usize {
        self.search_map_size
    }

    pub fn is_valid(
        &self,
        flags: &[u32],
        src: Point,
        dest: Point,
        src_size: i32,
        dest_width: i32,
        dest_height: i32,
    ) -> bool {
        self.ray_cast(flags, src, dest, src_size, dest_width, dest_height)
            .success
    }

    /// March a ray from the corner of the source footprint nearest the
    /// target to the corner of the target nearest the source.
    ///
    /// The returned route carries no coordinates; only `success` is
    /// meaningful. A ray that leaves the flag window counts as blocked.
    ///
    /// # Panics
    ///
    /// Panics if `flags.len()` is not the square of the window size.
    pub fn ray_cast(
        &self,
        flags: &[u32],
        src: Point,
        dest: Point,
        src_size: i32,
        dest_width: i32,
        dest_height: i32,
    ) -> Route {
        let grid = FlagGrid::new(flags, self.search_map_size);
        let half = self.search_map_size as i32 / 2;
        let base = src.shift(-half, -half);
        let local_src = src - base;
        let local_dest = dest - base;

        let start = Point::new(
            nearest(local_src.x, local_dest.x, src_size),
            nearest(local_src.y, local_dest.y, src_size),
        );
        let end = Point::new(
            nearest(local_dest.x, local_src.x, dest_width),
            nearest(local_dest.y, local_src.y, dest_height),
        );
        if start == end {
            return Route::new(Vec::new(), false, true);
        }
        if !grid.contains(end.x, end.y) {
            log::trace!("ray target {end} lies outside the window");
            return Route::failure();
        }

        let delta = end - start;
        let travel_east = delta.x >= 0;
        let travel_north = delta.y >= 0;
        let x_flags = if travel_east { BLOCKED_WEST } else { BLOCKED_EAST };
        let y_flags = if travel_north { BLOCKED_SOUTH } else { BLOCKED_NORTH };

        let blocked = |x: i32, y: i32, mask: u32| match grid.get(Point::new(x, y)) {
            Some(flag) => flag & mask != 0,
            None => true,
        };

        if delta.x.abs() > delta.y.abs() {
            let offset_x = if travel_east { 1 } else { -1 };
            let offset_y = if travel_north { 0 } else { -1 };
            let mut scaled_y = scale_up(start.y) + HALF_TILE + offset_y;
            let tangent = scale_up(delta.y) / delta.x.abs();

            let mut x = start.x;
            while x != end.x {
                x += offset_x;
                let y = scale_down(scaled_y);
                if blocked(x, y, x_flags) {
                    log::trace!("ray from {start} to {end} blocked at ({x}, {y})");
                    return Route::failure();
                }
                scaled_y += tangent;
                let next_y = scale_down(scaled_y);
                if next_y != y && blocked(x, next_y, y_flags) {
                    log::trace!("ray from {start} to {end} blocked at ({x}, {next_y})");
                    return Route::failure();
                }
            }
        } else {
            let offset_x = if travel_east { 0 } else { -1 };
            let offset_y = if travel_north { 1 } else { -1 };
            let mut scaled_x = scale_up(start.x) + HALF_TILE + offset_x;
            let tangent = scale_up(delta.x) / delta.y.abs();

            let mut y = start.y;
            while y != end.y {
                y += offset_y;
                let x = scale_down(scaled_x);
                if blocked(x, y, y_flags) {
                    log::trace!("ray from {start} to {end} blocked at ({x}, {y})");
                    return Route::failure();
                }
                scaled_x += tangent;
                let next_x = scale_down(scaled_x);
                if next_x != x && blocked(next_x, y, x_flags) {
                    log::trace!("ray from {start} to {end} blocked at ({next_x}, {y})");
                    return Route::failure();
                }
            }
        }
        Route::new(Vec::new(), false, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::Direction;
    use tilepath_core::flag::OBJECT;

    const MAP: usize = 128;
    const HALF: i32 = 64;

    fn src() -> Point {
        Point::new(3200, 3200)
    }

    fn set(flags: &mut [u32], dx: i32, dy: i32, flag: u32) {
        let x = (HALF + dx) as usize;
        let y = (HALF + dy) as usize;
        flags[y * MAP + x] = flag;
    }

    fn valid(flags: &[u32], dest: Point) -> bool {
        ProjectileValidator::new().is_valid(flags, src(), dest, 1, 0, 0)
    }

    #[test]
    fn clear_path() {
        let flags = vec![0u32; MAP * MAP];
        assert!(valid(&flags, src().shift(3, 0)));
        assert!(valid(&flags, src().shift(-7, 4)));
        assert!(valid(&flags, src().shift(5, -5)));
    }

    #[test]
    fn same_tile_is_valid() {
        let flags = vec![0u32; MAP * MAP];
        let route = ProjectileValidator::new().ray_cast(&flags, src(), src(), 1, 0, 0);
        assert!(route.success);
        assert!(route.is_empty());
    }

    #[test]
    fn facing_wall_blocks() {
        let cases = [
            (Direction::North, WALL_SOUTH_PROJECTILE_BLOCKER),
            (Direction::South, WALL_NORTH_PROJECTILE_BLOCKER),
            (Direction::East, WALL_WEST_PROJECTILE_BLOCKER),
            (Direction::West, WALL_EAST_PROJECTILE_BLOCKER),
        ];
        for (dir, flag) in cases {
            let mut flags = vec![0u32; MAP * MAP];
            set(&mut flags, dir.dx(), dir.dy(), flag);
            let dest = src().shift(dir.dx() * 6, dir.dy() * 6);
            assert!(!valid(&flags, dest), "{dir:?}");
        }
    }

    #[test]
    fn trailing_wall_does_not_block() {
        let mut flags = vec![0u32; MAP * MAP];
        set(&mut flags, 1, 0, WALL_EAST_PROJECTILE_BLOCKER);
        assert!(valid(&flags, src().shift(6, 0)));
    }

    #[test]
    fn object_blocker_stops_diagonal() {
        let mut flags = vec![0u32; MAP * MAP];
        set(&mut flags, 2, 2, OBJECT_PROJECTILE_BLOCKER);
        assert!(!valid(&flags, src().shift(4, 4)));
        assert!(valid(&flags, src().shift(4, -4)));
    }

    #[test]
    fn movement_object_does_not_block() {
        let mut flags = vec![0u32; MAP * MAP];
        set(&mut flags, 2, 0, OBJECT);
        assert!(valid(&flags, src().shift(4, 0)));
    }

    #[test]
    fn leaving_window_is_blocked() {
        let flags = vec![0u32; MAP * MAP];
        assert!(!valid(&flags, src().shift(80, 3)));
    }

    #[test]
    fn distant_target_is_blocked() {
        let flags = vec![0u32; MAP * MAP];
        assert!(!valid(&flags, src().shift(40_000, 1)));
        assert!(!valid(&flags, src().shift(-3, -50_000)));
        assert!(!valid(&flags, Point::new(i32::MAX / 2, 3200)));
    }

    #[test]
    fn large_source_fires_from_nearest_edge() {
        let mut flags = vec![0u32; MAP * MAP];
        // a 3-wide source fires from its east column, past the wall
        set(&mut flags, 2, 0, WALL_WEST_PROJECTILE_BLOCKER);
        let v = ProjectileValidator::new();
        assert!(v.is_valid(&flags, src(), src().shift(6, 0), 3, 0, 0));
        assert!(!v.is_valid(&flags, src(), src().shift(6, 0), 2, 0, 0));
    }

    #[test]
    fn nearest_corner() {
        assert_eq!(nearest(10, 5, 3), 10);
        assert_eq!(nearest(10, 20, 3), 12);
        assert_eq!(nearest(10, 11, 3), 11);
        assert_eq!(nearest(10, 20, 0), 10);
    }
}
