//! Breadth-first route finder with closest-approach fallback.

use tilepath_core::{CollisionStrategy, Coordinate, Direction, DirectionFlag, FlagGrid, Point};

use crate::config::{ConfigError, SearchConfig};
use crate::reach::ReachQuery;
use crate::request::PathRequest;
use crate::ring::RingBuffer;
use crate::route::Route;
use crate::search::{SOURCE_DIRECTION, SearchMaps};
use crate::step::{fits, step_1, step_2, step_n};

/// Only tiles within this many steps of the source qualify as a fallback.
const MAX_ALTERNATIVE_DISTANCE: u32 = 100;
/// Search radius around the target for the fallback tile.
const ALTERNATIVE_RADIUS: i32 = 10;
/// Above any squared distance inside the fallback radius.
const MAX_ALTERNATIVE_COST: i32 = 1000;

/// Shortest-route finder over a square window centred on the source.
///
/// The finder owns its scratch maps and frontier buffer so that repeated
/// searches allocate only the returned route.
pub struct SmartPathFinder {
    config: SearchConfig,
    maps: SearchMaps,
    ring: RingBuffer,
}

impl Default for SmartPathFinder {
    fn default() -> Self {
        Self::from_valid_config(SearchConfig::default())
    }
}

impl SmartPathFinder {
    /// Create a finder with the default 128×128 window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with custom settings.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SearchConfig) -> Self {
        log::debug!(
            "smart path finder: {}x{} window, ring buffer {}",
            config.search_map_size,
            config.search_map_size,
            config.ring_buffer_size
        );
        Self {
            maps: SearchMaps::new(config.search_map_size),
            ring: RingBuffer::new(config.ring_buffer_size),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Side length of the search window.
    pub fn search_map_size(&self) -> usize {
        self.config.search_map_size
    }

    /// Clear the direction and distance maps.
    ///
    /// Finders built with `reset_on_search` off keep the visits of earlier
    /// searches; call this before a search whose window they would shadow.
    pub fn reset(&mut self) {
        self.maps.reset();
    }

    /// Find a route from `req.src` toward `req.dest`.
    ///
    /// `flags` covers the window centred on the source: local `(0, 0)` is
    /// world `src - search_map_size / 2` on both axes.
    ///
    /// When the target cannot be reached and `req.move_near` is set, the
    /// route leads to the closest reachable tile near the target and is
    /// marked `alternative`. The route is cut after `req.max_turns + 1`
    /// straight segments.
    ///
    /// # Panics
    ///
    /// Panics if `flags.len()` is not the square of the window size or if
    /// `req.src_size < 1`.
    pub fn find_path(&mut self, flags: &[u32], req: &PathRequest<'_>) -> Route {
        assert_eq!(
            flags.len(),
            self.maps.len(),
            "flag slice length must match the search window"
        );
        assert!(req.src_size >= 1, "source size must be at least 1");

        let grid = FlagGrid::new(flags, self.config.search_map_size);
        if self.config.reset_on_search {
            self.maps.reset();
        }
        self.ring.clear();

        let half = (self.config.search_map_size / 2) as i32;
        let base = req.src.shift(-half, -half);
        let local_src = req.src - base;
        let local_dest = req.dest - base;

        self.maps.seed(local_src.x, local_src.y);
        self.ring.push(local_src.x, local_src.y);

        let query = ReachQuery {
            src_x: local_src.x,
            src_y: local_src.y,
            src_size: req.src_size,
            dest_x: local_dest.x,
            dest_y: local_dest.y,
            dest_width: req.dest_width,
            dest_height: req.dest_height,
            shape: req.obj_shape,
            rotation: req.obj_rot,
            access_bit_mask: req.access_bit_mask,
        };

        let size = req.src_size;
        let reached = match size {
            1 => self.expand(&grid, req, query, step_1),
            2 => self.expand(&grid, req, query, step_2),
            _ => self.expand(&grid, req, query, |g, c, x, y, d| {
                step_n(g, c, x, y, size, d)
            }),
        };

        let (end, found) = match reached {
            Some(end) => (end, true),
            None if !req.move_near => {
                log::debug!("no route from {} to {}", req.src, req.dest);
                return Route::failure();
            }
            None => match self.closest_approach(local_src, local_dest) {
                Some(end) => {
                    log::debug!(
                        "no route from {} to {}, falling back to {}",
                        req.src,
                        req.dest,
                        end + base
                    );
                    (end, false)
                }
                None => {
                    log::debug!("no route or fallback from {} to {}", req.src, req.dest);
                    return Route::failure();
                }
            },
        };

        let coords = self.backtrace(end, local_src, base, req.max_turns);
        log::trace!(
            "route from {} to {}: {} steps, alternative={}",
            req.src,
            req.dest,
            coords.len(),
            !found
        );
        Route::new(coords, !found, true)
    }

    /// Breadth-first expansion until the reach test succeeds. Returns the
    /// local tile that reached the target.
    fn expand<F>(
        &mut self,
        grid: &FlagGrid<'_>,
        req: &PathRequest<'_>,
        mut query: ReachQuery,
        step: F,
    ) -> Option<Point>
    where
        F: Fn(&FlagGrid<'_>, &dyn CollisionStrategy, i32, i32, Direction) -> bool,
    {
        let map_size = self.config.search_map_size as i32;
        let size = query.src_size;

        while let Some((x, y)) = self.ring.pop() {
            query.src_x = x;
            query.src_y = y;
            if req.reach.reached(grid, &query) {
                return Some(Point::new(x, y));
            }

            let next_distance = self.maps.distance(x, y) + 1;
            for dir in Direction::SEARCH_ORDER {
                if !fits(map_size, x, y, size, dir) {
                    continue;
                }
                let (nx, ny) = (x + dir.dx(), y + dir.dy());
                if self.maps.direction(nx, ny) != 0 || !step(grid, req.collision, x, y, dir) {
                    continue;
                }
                self.ring.push(nx, ny);
                self.maps.visit(nx, ny, dir.opposite().flag(), next_distance);
            }
        }
        None
    }

    /// Closest visited tile to `dest` within the fallback radius, by squared
    /// euclidean distance and then by fewest steps from the source.
    fn closest_approach(&self, src: Point, dest: Point) -> Option<Point> {
        let map_size = self.config.search_map_size as i32;
        let mut lowest_cost = MAX_ALTERNATIVE_COST;
        let mut lowest_distance = MAX_ALTERNATIVE_DISTANCE;
        let mut best = None;

        for x in dest.x - ALTERNATIVE_RADIUS..=dest.x + ALTERNATIVE_RADIUS {
            for y in dest.y - ALTERNATIVE_RADIUS..=dest.y + ALTERNATIVE_RADIUS {
                if !(0..map_size).contains(&x) || !(0..map_size).contains(&y) {
                    continue;
                }
                let distance = self.maps.distance(x, y);
                if distance >= MAX_ALTERNATIVE_DISTANCE {
                    continue;
                }
                let p = Point::new(x, y);
                let cost = p.distance_squared(dest);
                if cost < lowest_cost || (cost == lowest_cost && distance < lowest_distance) {
                    best = Some(p);
                    lowest_cost = cost;
                    lowest_distance = distance;
                }
            }
        }
        best.filter(|&p| p != src)
    }

    /// Follow back-pointers from `end` to `src` and keep the first
    /// `max_turns + 1` straight segments, in travel order.
    fn backtrace(&self, end: Point, src: Point, base: Point, max_turns: usize) -> Vec<Coordinate> {
        let mut steps: Vec<(Coordinate, u32)> = Vec::new();
        let (mut x, mut y) = (end.x, end.y);
        for _ in 0..self.maps.len() {
            if x == src.x && y == src.y {
                break;
            }
            let dir = self.maps.direction(x, y);
            // stale maps from an earlier search without reset
            if dir == 0 || dir == SOURCE_DIRECTION {
                break;
            }
            steps.push((Coordinate::new(x + base.x, y + base.y), dir));
            let (dx, dy) = DirectionFlag(dir).delta();
            x += dx;
            y += dy;
        }
        steps.reverse();

        let max_segments = max_turns.saturating_add(1);
        let mut coords = Vec::with_capacity(steps.len());
        let mut segments = 0;
        let mut current = None;
        for (coord, dir) in steps.iter().copied() {
            if current != Some(dir) {
                segments += 1;
                if segments > max_segments {
                    log::debug!(
                        "route cut to {} of {} steps after {} turns",
                        coords.len(),
                        steps.len(),
                        max_turns
                    );
                    break;
                }
                current = Some(dir);
            }
            coords.push(coord);
        }
        coords
    }
}
