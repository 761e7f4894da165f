//! Stochastic dynamic-wall injection between search steps.

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::geom::Cell;
use crate::grid::Grid;

/// Converts a random empty cell into a dynamic wall with a fixed per-call
/// probability.
///
/// Start and goal are always protected; extra cells can be protected per
/// call with [`maybe_add_obstacle_excluding`](Self::maybe_add_obstacle_excluding).
#[derive(Debug, Clone)]
pub struct ObstacleInjector<R: Rng> {
    pub rng: R,
    probability: f64,
}

impl ObstacleInjector<ThreadRng> {
    /// Injector driven by the thread-local RNG.
    pub fn from_config(config: &SearchConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> ObstacleInjector<R> {
    /// Injector using the given RNG and the config's probability.
    pub fn with_rng(config: &SearchConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rng,
            probability: config.obstacle_probability,
        })
    }

    /// Per-call probability of attempting an injection.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// With probability `p`, pick a uniformly random cell and wall it if it
    /// is empty and not start or goal. Returns the walled cell, if any.
    pub fn maybe_add_obstacle(&mut self, grid: &mut Grid) -> Option<Cell> {
        self.maybe_add_obstacle_excluding(grid, &[])
    }

    /// Like [`maybe_add_obstacle`](Self::maybe_add_obstacle), additionally
    /// leaving every cell in `protected` untouched.
    pub fn maybe_add_obstacle_excluding(
        &mut self,
        grid: &mut Grid,
        protected: &[Cell],
    ) -> Option<Cell> {
        if !self.rng.random_bool(self.probability) {
            return None;
        }
        let side = grid.side();
        let target = Cell::new(self.rng.random_range(0..side), self.rng.random_range(0..side));
        if protected.contains(&target) || !grid.place_dynamic_wall(target) {
            return None;
        }
        log::trace!("dynamic wall injected at {target}");
        Some(target)
    }
}
