use tilepath_core::{CollisionStrategy, NormalBlockFlagCollision, Point};

use crate::reach::{DefaultReachStrategy, ReachStrategy};

/// Default number of straight segments after which a route is cut.
pub const DEFAULT_MAX_TURNS: usize = 24;

/// Parameters of a single route search, in world coordinates.
///
/// Built with [`PathRequest::new`] and refined with the `with_*` methods:
///
/// ```
/// use tilepath_core::Point;
/// use tilepath_paths::PathRequest;
///
/// let req = PathRequest::new(Point::new(3200, 3200), Point::new(3210, 3204))
///     .with_dest_size(2, 2)
///     .with_shape(10, 0);
/// assert_eq!(req.src_size, 1);
/// ```
#[derive(Clone, Copy)]
pub struct PathRequest<'a> {
    pub src: Point,
    pub dest: Point,
    /// Side length of the moving actor's square footprint. Must be at least 1.
    pub src_size: i32,
    pub dest_width: i32,
    pub dest_height: i32,
    pub obj_rot: i32,
    /// Target object shape; -1 means the exact destination tile.
    pub obj_shape: i32,
    /// Fall back to the closest reachable tile when the target is unreachable.
    pub move_near: bool,
    pub access_bit_mask: u32,
    pub max_turns: usize,
    pub collision: &'a dyn CollisionStrategy,
    pub reach: &'a dyn ReachStrategy,
}

impl<'a> PathRequest<'a> {
    pub fn new(src: Point, dest: Point) -> Self {
        Self {
            src,
            dest,
            src_size: 1,
            dest_width: 0,
            dest_height: 0,
            obj_rot: 0,
            obj_shape: -1,
            move_near: true,
            access_bit_mask: 0,
            max_turns: DEFAULT_MAX_TURNS,
            collision: &NormalBlockFlagCollision,
            reach: &DefaultReachStrategy,
        }
    }

    pub fn with_src_size(mut self, size: i32) -> Self {
        self.src_size = size;
        self
    }

    pub fn with_dest_size(mut self, width: i32, height: i32) -> Self {
        self.dest_width = width;
        self.dest_height = height;
        self
    }

    pub fn with_shape(mut self, shape: i32, rotation: i32) -> Self {
        self.obj_shape = shape;
        self.obj_rot = rotation;
        self
    }

    pub fn with_move_near(mut self, move_near: bool) -> Self {
        self.move_near = move_near;
        self
    }

    pub fn with_access_bit_mask(mut self, mask: u32) -> Self {
        self.access_bit_mask = mask;
        self
    }

    pub fn with_max_turns(mut self, turns: usize) -> Self {
        self.max_turns = turns;
        self
    }

    pub fn with_collision(mut self, collision: &'a dyn CollisionStrategy) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_reach(mut self, reach: &'a dyn ReachStrategy) -> Self {
        self.reach = reach;
        self
    }
}

impl std::fmt::Debug for PathRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathRequest")
            .field("src", &self.src)
            .field("dest", &self.dest)
            .field("src_size", &self.src_size)
            .field("dest_width", &self.dest_width)
            .field("dest_height", &self.dest_height)
            .field("obj_rot", &self.obj_rot)
            .field("obj_shape", &self.obj_shape)
            .field("move_near", &self.move_near)
            .field("access_bit_mask", &self.access_bit_mask)
            .field("max_turns", &self.max_turns)
            .finish_non_exhaustive()
    }
}
