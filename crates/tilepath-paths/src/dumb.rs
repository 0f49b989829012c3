//! Greedy step-toward-target walker.

use tilepath_core::{Coordinate, Direction, FlagGrid};

use crate::config::{ConfigError, SearchConfig};
use crate::reach::{ReachQuery, reach_rectangle};
use crate::request::PathRequest;
use crate::route::Route;
use crate::step::{can_step, fits};

/// Walks straight toward the target one tile at a time, sliding along
/// obstacles when a diagonal is blocked. Cheap and allocation-light, for
/// movement that should not route around obstacles.
#[derive(Clone, Copy, Debug)]
pub struct DumbPathFinder {
    search_map_size: usize,
}

impl Default for DumbPathFinder {
    fn default() -> Self {
        Self {
            search_map_size: SearchConfig::default().search_map_size,
        }
    }
}

impl DumbPathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the window size of `config` applies to this finder.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            search_map_size: config.search_map_size,
        })
    }

    pub fn search_map_size(&self) -> usize {
        self.search_map_size
    }

    /// Walk from `req.src` toward `req.dest`.
    ///
    /// The walk succeeds on the exact target tile, or beside the target
    /// rectangle when `req.dest_width` or `req.dest_height` is non-zero.
    /// Shape, rotation, access mask, turn limit and reach strategy of the
    /// request are not used. Stepping out of the window counts as blocked.
    ///
    /// # Panics
    ///
    /// Panics if `flags.len()` is not the square of the window size or if
    /// `req.src_size < 1`.
    pub fn find_path(&self, flags: &[u32], req: &PathRequest<'_>) -> Route {
        assert!(req.src_size >= 1, "source size must be at least 1");
        let grid = FlagGrid::new(flags, self.search_map_size);
        let map_size = self.search_map_size as i32;
        let size = req.src_size;

        let half = map_size / 2;
        let base = req.src.shift(-half, -half);
        let dest = req.dest - base;
        let (mut x, mut y) = (half, half);

        let blocked = |x: i32, y: i32, dir: Direction| {
            !fits(map_size, x, y, size, dir) || !can_step(&grid, req.collision, x, y, size, dir)
        };

        let mut coords = Vec::new();
        let mut success = false;
        for _ in 0..self.search_map_size * self.search_map_size {
            if self.reached(&grid, req, x, y, dest.x, dest.y) {
                success = true;
                break;
            }
            let Some(dir) = Direction::toward(x, y, dest.x, dest.y) else {
                break;
            };
            let step = if !blocked(x, y, dir) {
                Some(dir)
            } else {
                dir.vertical()
                    .filter(|&v| !blocked(x, y, v))
                    .or_else(|| dir.horizontal().filter(|&h| !blocked(x, y, h)))
            };
            let Some(step) = step else {
                break;
            };
            x += step.dx();
            y += step.dy();
            coords.push(Coordinate::new(x + base.x, y + base.y));
        }
        Route::new(coords, false, success)
    }

    fn reached(
        &self,
        grid: &FlagGrid<'_>,
        req: &PathRequest<'_>,
        x: i32,
        y: i32,
        dest_x: i32,
        dest_y: i32,
    ) -> bool {
        if req.dest_width == 0 && req.dest_height == 0 {
            return x == dest_x && y == dest_y;
        }
        let query = ReachQuery {
            src_x: x,
            src_y: y,
            src_size: req.src_size,
            dest_x,
            dest_y,
            dest_width: req.dest_width,
            dest_height: req.dest_height,
            ..Default::default()
        };
        reach_rectangle(grid, &query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::flag::{FLOOR, OBJECT};
    use tilepath_core::{CollisionStrategies, Point};

    const MAP: usize = 128;
    const HALF: i32 = 64;

    fn src() -> Point {
        Point::new(3200, 3200)
    }

    fn empty_flags() -> Vec<u32> {
        vec![0u32; MAP * MAP]
    }

    fn set(flags: &mut [u32], dx: i32, dy: i32, flag: u32) {
        let x = (HALF + dx) as usize;
        let y = (HALF + dy) as usize;
        flags[y * MAP + x] = flag;
    }

    fn coord(p: Point) -> Coordinate {
        p.into()
    }

    #[test]
    fn reach_empty_tile() {
        let pf = DumbPathFinder::new();
        let flags = empty_flags();
        let dest = src().shift(1, 0);
        let route = pf.find_path(&flags, &PathRequest::new(src(), dest));
        assert!(route.success);
        assert!(!route.alternative);
        assert_eq!(route.len(), 1);
        assert_eq!(route.last(), Some(&coord(dest)));
    }

    #[test]
    fn fail_occupied_tile() {
        let pf = DumbPathFinder::new();
        let mut flags = empty_flags();
        set(&mut flags, 1, 0, FLOOR);
        let route = pf.find_path(&flags, &PathRequest::new(src(), src().shift(1, 0)));
        assert!(route.failed());
        assert!(route.is_empty());
    }

    #[test]
    fn fully_blocked_by_object() {
        let pf = DumbPathFinder::new();
        let mut flags = empty_flags();
        set(&mut flags, 1, 0, OBJECT);
        let route = pf.find_path(&flags, &PathRequest::new(src(), src().shift(2, 0)));
        assert!(route.failed());
        assert!(route.is_empty());
    }

    #[test]
    fn partially_blocked_by_object() {
        let pf = DumbPathFinder::new();
        let mut flags = empty_flags();
        set(&mut flags, 2, 0, OBJECT);
        let dest = src().shift(3, 0);
        let route = pf.find_path(&flags, &PathRequest::new(src(), dest));
        assert!(route.failed());
        assert_eq!(route.coords(), &[coord(src().shift(1, 0))]);
    }

    #[test]
    fn reach_rect_object() {
        for (w, h) in [(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)] {
            let pf = DumbPathFinder::new();
            let mut flags = empty_flags();
            let dx = 3 + w;
            for y in 0..h {
                for x in 0..w {
                    set(&mut flags, dx + x, y, OBJECT);
                }
            }
            let req = PathRequest::new(src(), src().shift(dx, 0)).with_dest_size(w, h);
            let route = pf.find_path(&flags, &req);
            assert!(route.success, "{w}x{h}");
            assert!(!route.alternative, "{w}x{h}");
            assert_eq!(route.last(), Some(&coord(src().shift(dx - 1, 0))), "{w}x{h}");
        }
    }

    #[test]
    fn blocked_diagonal_slides_vertically_first() {
        let pf = DumbPathFinder::new();
        let mut flags = empty_flags();
        set(&mut flags, 1, 1, OBJECT);
        let dest = src().shift(3, 3);
        let route = pf.find_path(&flags, &PathRequest::new(src(), dest));
        assert!(route.success);
        assert_eq!(route.first(), Some(&coord(src().shift(0, 1))));
        assert_eq!(route.last(), Some(&coord(dest)));
    }

    #[test]
    fn blocked_diagonal_and_vertical_slides_horizontally() {
        let pf = DumbPathFinder::new();
        let mut flags = empty_flags();
        set(&mut flags, 1, 1, OBJECT);
        set(&mut flags, 0, 1, OBJECT);
        let dest = src().shift(3, 3);
        let route = pf.find_path(&flags, &PathRequest::new(src(), dest));
        assert_eq!(route.first(), Some(&coord(src().shift(1, 0))));
    }

    #[test]
    fn inverse_floor_collision() {
        let pf = DumbPathFinder::new();
        let mut flags = empty_flags();
        let swim = CollisionStrategies::SWIM;
        set(&mut flags, 1, 0, FLOOR);
        set(&mut flags, 2, 0, FLOOR);
        let dest = src().shift(2, 0);
        let req = PathRequest::new(src(), dest).with_collision(&swim);
        let route = pf.find_path(&flags, &req);
        assert!(route.success);
        assert_eq!(route.last(), Some(&coord(dest)));

        set(&mut flags, 1, 0, 0);
        let route = pf.find_path(&flags, &req);
        assert!(route.failed());
        assert!(route.is_empty());
    }

    #[test]
    fn leaving_the_window_is_blocked() {
        let pf = DumbPathFinder::new();
        let flags = empty_flags();
        let route = pf.find_path(&flags, &PathRequest::new(src(), src().shift(100, 0)));
        assert!(route.failed());
        assert_eq!(route.len(), (HALF - 1) as usize);
        assert_eq!(route.last(), Some(&coord(src().shift(HALF - 1, 0))));
    }

    #[test]
    fn large_actor_walks() {
        let pf = DumbPathFinder::new();
        let flags = empty_flags();
        let dest = src().shift(-4, 6);
        let req = PathRequest::new(src(), dest).with_src_size(3);
        let route = pf.find_path(&flags, &req);
        assert!(route.success);
        assert_eq!(route.len(), 6);
        assert_eq!(route.last(), Some(&coord(dest)));
    }

    #[test]
    fn source_is_destination() {
        let pf = DumbPathFinder::new();
        let flags = empty_flags();
        let route = pf.find_path(&flags, &PathRequest::new(src(), src()));
        assert!(route.success);
        assert!(route.is_empty());
    }
}
