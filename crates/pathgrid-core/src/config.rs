//! Run configuration exposed to the driving collaborator.

use std::ops::Range as StdRange;

use crate::error::ConfigError;
use crate::geom::{Cell, Range};

/// Default grid side length.
pub const DEFAULT_SIDE: i32 = 20;
/// Largest accepted grid side length.
pub const MAX_SIDE: i32 = 4096;
/// Default per-step probability of injecting a dynamic wall.
pub const DEFAULT_OBSTACLE_PROBABILITY: f64 = 0.015;
/// Default bound for depth-limited and iterative-deepening search.
pub const DEFAULT_DEPTH_LIMIT: usize = 15;

/// A vertical run of static wall cells: column `col`, rows `rows`
/// (end exclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSegment {
    pub col: i32,
    pub rows: StdRange<i32>,
}

impl WallSegment {
    /// The segment as a one-column [`Range`].
    pub fn range(&self) -> Range {
        Range::new(self.rows.start, self.col, self.rows.end, self.col + 1)
    }
}

impl Default for WallSegment {
    fn default() -> Self {
        Self {
            col: 10,
            rows: 5..15,
        }
    }
}

/// Everything a run needs besides the choice of algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Grid side length `N`.
    pub side: i32,
    /// Probability `p` that a dynamic wall is attempted before a step.
    pub obstacle_probability: f64,
    /// Depth limit for depth-limited search and the last iterative-deepening
    /// round.
    pub depth_limit: usize,
    /// Static obstacle pattern, reapplied on every reset.
    pub static_wall: Option<WallSegment>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            obstacle_probability: DEFAULT_OBSTACLE_PROBABILITY,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            static_wall: Some(WallSegment::default()),
        }
    }
}

impl SearchConfig {
    /// A config for an open `side × side` grid: no static wall, no dynamic
    /// obstacles.
    pub fn open(side: i32) -> Self {
        Self {
            side,
            obstacle_probability: 0.0,
            static_wall: None,
            ..Self::default()
        }
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side <= 0 {
            return Err(ConfigError::NonPositiveSide(self.side));
        }
        if self.side < 2 {
            return Err(ConfigError::SideTooSmall(self.side));
        }
        if self.side > MAX_SIDE {
            return Err(ConfigError::SideTooLarge(self.side));
        }
        if self.depth_limit == 0 {
            return Err(ConfigError::NonPositiveDepthLimit);
        }
        if !(0.0..=1.0).contains(&self.obstacle_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.obstacle_probability));
        }
        if let Some(wall) = &self.static_wall {
            if wall.rows.is_empty() {
                return Err(ConfigError::WallPatternEmpty);
            }
        }
        Ok(())
    }

    /// Start cell: the top-left corner.
    pub fn start(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Goal cell: the bottom-right corner.
    pub fn goal(&self) -> Cell {
        Cell::new(self.side - 1, self.side - 1)
    }
}
