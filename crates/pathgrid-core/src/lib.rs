//! **pathgrid-core** — the occupancy grid shared by every search strategy.
//!
//! This crate provides the coordinate type [`Cell`], the square [`Grid`]
//! with its fixed start/goal corners and static wall pattern, the run
//! [`SearchConfig`], and the [`ObstacleInjector`] that walls random cells
//! between search steps.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod obstacle;

pub use config::{SearchConfig, WallSegment};
pub use error::ConfigError;
pub use geom::{Cell, Direction, Range};
pub use grid::{CellKind, CellState, Grid};
pub use obstacle::ObstacleInjector;
