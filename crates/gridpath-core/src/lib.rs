//! **gridpath-core** — core types for grid pathfinding.
//!
//! This crate provides the foundational types used by `gridpath-paths`:
//! geometry primitives, cells with endpoint roles, the fixed-size grid, the
//! caller-facing grid configuration, and the error taxonomy.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Role};
pub use config::GridConfig;
pub use error::{ConfigError, Error, Result};
pub use geom::{Point, Range};
pub use grid::Grid;
