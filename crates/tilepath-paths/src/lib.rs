//! Route finding for actors on a tile grid with per-tile collision flags.
//!
//! The caller supplies a square window of [`flag`](tilepath_core::flag) words
//! centred on the source tile together with absolute world coordinates. Three
//! searches operate on that window:
//!
//! - **Smart** breadth-first routing with closest-tile fallback
//!   ([`SmartPathFinder::find_path`])
//! - **Dumb** greedy step-toward-target walking ([`DumbPathFinder::find_path`])
//! - **Projectile** line-of-fire checks ([`ProjectileValidator::is_valid`])
//!
//! Whether a route has arrived is decided by a [`ReachStrategy`]; the default
//! one understands exact tiles, rectangles, walls and wall decorations.
//!
//! [`SmartPathFinder`] owns its search buffers and reuses them between calls,
//! so a long-lived finder allocates only the returned [`Route`].

mod config;
mod dumb;
mod projectile;
pub mod reach;
mod request;
mod ring;
mod route;
mod search;
mod smart;
mod step;

pub use config::{ConfigError, DEFAULT_RING_BUFFER_SIZE, DEFAULT_SEARCH_MAP_SIZE, SearchConfig};
pub use dumb::DumbPathFinder;
pub use projectile::ProjectileValidator;
pub use reach::{
    DefaultReachStrategy, ExitStrategy, ReachQuery, ReachStrategy, reach_rectangle, reach_wall,
    reach_wall_deco,
};
pub use request::{DEFAULT_MAX_TURNS, PathRequest};
pub use route::Route;
pub use search::UNVISITED_DISTANCE;
pub use smart::SmartPathFinder;
