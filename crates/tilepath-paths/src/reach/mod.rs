//! "Reached" predicates: whether an actor standing at a position can
//! interact with a target wall, wall decoration or rectangular object.
//!
//! The route finders use a [`ReachStrategy`] as their termination test; the
//! same predicates are exposed for standalone interaction-range checks.

mod rectangle;
mod wall;
mod wall_deco;

pub use rectangle::reach_rectangle;
pub use wall::reach_wall;
pub use wall_deco::reach_wall_deco;

use tilepath_core::FlagGrid;

/// Actor and target geometry for a reach test, in local window coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachQuery {
    pub src_x: i32,
    pub src_y: i32,
    /// Side length of the actor's square footprint.
    pub src_size: i32,
    pub dest_x: i32,
    pub dest_y: i32,
    pub dest_width: i32,
    pub dest_height: i32,
    /// Object shape id; selects the [`ExitStrategy`].
    pub shape: i32,
    pub rotation: i32,
    /// Blocked approach sides of a rectangle: 0x1 north, 0x2 east, 0x4
    /// south, 0x8 west.
    pub access_bit_mask: u32,
}

impl ReachQuery {
    /// Whether the target lies under the actor's footprint.
    #[inline]
    pub(crate) fn footprint_covers_dest(&self) -> bool {
        let east = self.src_x + self.src_size - 1;
        let north = self.src_y + self.src_size - 1;
        (self.src_x..=east).contains(&self.dest_x) && (self.src_y..=north).contains(&self.dest_y)
    }
}

/// Decides whether the actor described by a query has reached its target.
pub trait ReachStrategy {
    fn reached(&self, grid: &FlagGrid<'_>, query: &ReachQuery) -> bool;
}

// ---------------------------------------------------------------------------
// Exit strategies
// ---------------------------------------------------------------------------

/// Which boundary test applies to an object shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitStrategy {
    Wall,
    WallDecoration,
    Rectangle,
    /// Only the exact target tile counts.
    None,
}

impl ExitStrategy {
    pub const fn for_shape(shape: i32) -> Self {
        match shape {
            0..=3 | 9 => ExitStrategy::Wall,
            4..=8 => ExitStrategy::WallDecoration,
            10 | 11 | 22 => ExitStrategy::Rectangle,
            _ => ExitStrategy::None,
        }
    }
}

/// Exact tile match first, then the boundary test selected by the shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultReachStrategy;

impl ReachStrategy for DefaultReachStrategy {
    fn reached(&self, grid: &FlagGrid<'_>, query: &ReachQuery) -> bool {
        if query.src_x == query.dest_x && query.src_y == query.dest_y {
            return true;
        }
        match ExitStrategy::for_shape(query.shape) {
            ExitStrategy::Wall => reach_wall(grid, query),
            ExitStrategy::WallDecoration => reach_wall_deco(grid, query),
            ExitStrategy::Rectangle => reach_rectangle(grid, query),
            ExitStrategy::None => false,
        }
    }
}
