//! **tilepath-core**: shared types for the tile-grid pathfinding engine.
//!
//! This crate provides the coordinate model ([`Point`], [`Coordinate`]), the
//! per-tile collision [`flag`] bits and their composite movement masks,
//! compass [`Direction`]s, the borrowed [`FlagGrid`] window and the
//! [`CollisionStrategy`] family that interprets flags during movement.

pub mod collision;
pub mod coord;
pub mod direction;
pub mod flag;
pub mod geom;
pub mod grid;

pub use collision::{
    CollisionStrategies, CollisionStrategy, InverseBlockFlagCollision, NormalBlockFlagCollision,
};
pub use coord::Coordinate;
pub use direction::{Direction, DirectionFlag};
pub use geom::Point;
pub use grid::FlagGrid;
