//! The step loop tying a strategy, the grid and the obstacle injector
//! together.
//!
//! [`StepDriver`] is pull-based: each [`advance`](StepDriver::advance) call
//! injects at most one dynamic wall and then performs exactly one strategy
//! step. Pacing, rendering and cancellation belong to the caller, which can
//! stop calling `advance` at any point.

use std::collections::HashSet;

use pathgrid_core::{Cell, CellKind, ConfigError, Grid, ObstacleInjector, SearchConfig};
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::algorithm::Algorithm;
use crate::reconstruct::Route;
use crate::traits::{Mark, SearchStrategy, StepResult};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Rendering classification of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    #[default]
    Empty,
    Wall,
    DynamicWall,
    Start,
    Goal,
    Frontier,
    BackwardFrontier,
    Explored,
    Path,
}

/// What the visualization collaborator sees between two steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    side: i32,
    markers: Vec<Marker>,
    status: String,
    steps: usize,
}

impl Snapshot {
    pub fn side(&self) -> i32 {
        self.side
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Steps performed when the snapshot was taken.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Marker at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Cell) -> Option<Marker> {
        if c.row < 0 || c.col < 0 || c.row >= self.side || c.col >= self.side {
            return None;
        }
        let idx = c.row as usize * self.side as usize + c.col as usize;
        self.markers.get(idx).copied()
    }

    /// Markers row by row. A snapshot with no cells has no rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Marker]> {
        self.markers.chunks(self.side.max(1) as usize)
    }

    /// Number of cells carrying `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.markers.iter().filter(|&&m| m == marker).count()
    }
}

// ---------------------------------------------------------------------------
// Outcome / Observer
// ---------------------------------------------------------------------------

/// Where a run stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Searching,
    Found { route: Route, steps: usize },
    NoPath { steps: usize },
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Searching)
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Outcome::Found { route, .. } => Some(route),
            _ => None,
        }
    }
}

/// Receives progress from [`StepDriver::run`].
pub trait Observer {
    /// Called after every step that leaves the search running.
    fn on_step(&mut self, _snapshot: &Snapshot) {}

    /// Called once when the run ends, with the final snapshot (route
    /// included on success).
    fn on_finished(&mut self, _outcome: &Outcome, _snapshot: &Snapshot) {}
}

impl Observer for () {}

// ---------------------------------------------------------------------------
// StepDriver
// ---------------------------------------------------------------------------

/// Drives one search run over its own grid.
pub struct StepDriver<R: Rng> {
    config: SearchConfig,
    algorithm: Algorithm,
    grid: Grid,
    injector: ObstacleInjector<R>,
    strategy: Box<dyn SearchStrategy>,
    steps: usize,
    outcome: Outcome,
}

impl StepDriver<ThreadRng> {
    /// Driver using the thread-local RNG for obstacle injection.
    pub fn new(config: SearchConfig, algorithm: Algorithm) -> Result<Self, ConfigError> {
        Self::with_rng(config, algorithm, rand::rng())
    }
}

impl<R: Rng> StepDriver<R> {
    /// Validate `config`, build a freshly reset grid and a new strategy.
    pub fn with_rng(
        config: SearchConfig,
        algorithm: Algorithm,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let grid = Grid::new(&config)?;
        let injector = ObstacleInjector::with_rng(&config, rng)?;
        let strategy = algorithm.build(&grid, &config);
        log::debug!(
            "starting {algorithm} on a {0}x{0} grid (p = {1})",
            config.side,
            config.obstacle_probability
        );
        Ok(Self {
            config,
            algorithm,
            grid,
            injector,
            strategy,
            steps: 0,
            outcome: Outcome::Searching,
        })
    }

    /// Reset the grid and start the same algorithm over.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.strategy = self.algorithm.build(&self.grid, &self.config);
        self.steps = 0;
        self.outcome = Outcome::Searching;
        log::debug!("{} reset", self.algorithm);
    }

    /// Inject at most one dynamic wall, then perform one strategy step.
    ///
    /// Once the run is over this is a no-op returning the final outcome.
    pub fn advance(&mut self) -> &Outcome {
        if self.outcome.is_terminal() {
            return &self.outcome;
        }
        self.injector.maybe_add_obstacle(&mut self.grid);
        debug_assert!(
            self.grid.kind(self.grid.start()) == Some(CellKind::Start)
                && self.grid.kind(self.grid.goal()) == Some(CellKind::Goal),
            "start or goal was overwritten"
        );
        let result = self.strategy.step(&mut self.grid);
        self.steps += 1;
        match result {
            StepResult::Continue => {}
            StepResult::GoalFound(terminal) => {
                let route = self.strategy.route(terminal);
                log::debug!(
                    "{} reached the goal after {} steps: {} moves, cost {:.3}",
                    self.algorithm,
                    self.steps,
                    route.moves(),
                    route.cost()
                );
                self.outcome = Outcome::Found {
                    route,
                    steps: self.steps,
                };
            }
            StepResult::Exhausted => {
                log::debug!("{} exhausted after {} steps", self.algorithm, self.steps);
                self.outcome = Outcome::NoPath { steps: self.steps };
            }
        }
        &self.outcome
    }

    /// Advance until the run ends or `max_steps` steps have been taken in
    /// total, reporting to `observer`. Stopping at the cap leaves the run
    /// resumable.
    pub fn run(&mut self, observer: &mut impl Observer, max_steps: Option<usize>) -> &Outcome {
        while !self.outcome.is_terminal() {
            if max_steps.is_some_and(|cap| self.steps >= cap) {
                return &self.outcome;
            }
            if self.advance().is_terminal() {
                break;
            }
            observer.on_step(&self.snapshot());
        }
        observer.on_finished(&self.outcome, &self.snapshot());
        &self.outcome
    }

    /// Classify every cell for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let path: HashSet<Cell> = self
            .outcome
            .route()
            .map(|r| r.interior().iter().copied().collect())
            .unwrap_or_default();
        let markers = self
            .grid
            .iter()
            .map(|(c, state)| match state.kind {
                CellKind::Start => Marker::Start,
                CellKind::Goal => Marker::Goal,
                // A route may run through a cell walled after it was queued.
                _ if path.contains(&c) => Marker::Path,
                CellKind::Wall if state.is_dynamic_wall => Marker::DynamicWall,
                CellKind::Wall => Marker::Wall,
                CellKind::Empty => match self.strategy.mark(c) {
                    Some(Mark::Frontier) => Marker::Frontier,
                    Some(Mark::BackwardFrontier) => Marker::BackwardFrontier,
                    Some(Mark::Explored) => Marker::Explored,
                    None => Marker::Empty,
                },
            })
            .collect();
        Snapshot {
            side: self.grid.side(),
            markers,
            status: self.status(),
            steps: self.steps,
        }
    }

    /// Status line for the current state of the run.
    pub fn status(&self) -> String {
        match &self.outcome {
            Outcome::Searching => self.strategy.status(),
            Outcome::Found { .. } => self.strategy.found_status(),
            Outcome::NoPath { .. } => format!("{} - No path found", self.algorithm.name()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, e.g. to add static walls before the first step.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn strategy(&self) -> &dyn SearchStrategy {
        self.strategy.as_ref()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn driver(config: SearchConfig, algorithm: Algorithm) -> StepDriver<StdRng> {
        StepDriver::with_rng(config, algorithm, StdRng::seed_from_u64(42)).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        steps: usize,
        finished: Option<(Outcome, String)>,
    }

    impl Observer for Recorder {
        fn on_step(&mut self, snapshot: &Snapshot) {
            self.steps += 1;
            assert_eq!(snapshot.steps(), self.steps);
        }

        fn on_finished(&mut self, outcome: &Outcome, snapshot: &Snapshot) {
            self.finished = Some((outcome.clone(), snapshot.status().to_string()));
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = SearchConfig {
            obstacle_probability: -1.0,
            ..SearchConfig::default()
        };
        let err =
            StepDriver::with_rng(cfg, Algorithm::BreadthFirst, StdRng::seed_from_u64(0)).err();
        assert_eq!(err, Some(ConfigError::ProbabilityOutOfRange(-1.0)));
    }

    #[test]
    fn run_reports_every_step_and_the_route() {
        let mut d = driver(SearchConfig::open(5), Algorithm::BreadthFirst);
        let mut rec = Recorder::default();
        let outcome = d.run(&mut rec, None).clone();
        let Outcome::Found { route, steps } = &outcome else {
            panic!("expected a route, got {outcome:?}");
        };
        assert_eq!(route.moves(), 4);
        assert_eq!(rec.steps + 1, *steps);
        let (finished, status) = rec.finished.unwrap();
        assert_eq!(finished, outcome);
        assert_eq!(status, "BFS - Path Found!");

        let snap = d.snapshot();
        assert_eq!(snap.count(Marker::Path), 3);
        assert_eq!(snap.at(Cell::new(2, 2)), Some(Marker::Path));
        assert_eq!(snap.at(Cell::new(0, 0)), Some(Marker::Start));
        assert_eq!(snap.at(Cell::new(4, 4)), Some(Marker::Goal));
        assert_eq!(snap.at(Cell::new(5, 0)), None);
    }

    #[test]
    fn advance_after_the_end_is_a_no_op() {
        let mut d = driver(SearchConfig::open(3), Algorithm::UniformCost);
        d.run(&mut (), None);
        let steps = d.steps();
        assert!(d.advance().is_terminal());
        assert_eq!(d.steps(), steps);
    }

    #[test]
    fn step_cap_leaves_run_resumable() {
        let mut d = driver(SearchConfig::default(), Algorithm::BreadthFirst);
        assert_eq!(d.run(&mut (), Some(10)), &Outcome::Searching);
        assert_eq!(d.steps(), 10);
        assert_eq!(d.status(), "BFS - Searching...");
        assert!(d.run(&mut (), None).is_terminal());
    }

    #[test]
    fn full_row_wall_means_no_path() {
        let mut d = driver(SearchConfig::open(6), Algorithm::DepthFirst);
        for col in 0..6 {
            d.grid_mut().add_static_wall(Cell::new(3, col));
        }
        assert!(matches!(d.run(&mut (), None), Outcome::NoPath { .. }));
        assert_eq!(d.status(), "DFS - No path found");
        assert_eq!(d.snapshot().count(Marker::Wall), 6);
    }

    #[test]
    fn snapshot_marks_frontier_explored_and_dynamic_walls() {
        let cfg = SearchConfig {
            obstacle_probability: 1.0,
            ..SearchConfig::open(8)
        };
        let mut d = driver(cfg, Algorithm::Bidirectional);
        for _ in 0..3 {
            d.advance();
        }
        let snap = d.snapshot();
        assert!(snap.count(Marker::DynamicWall) >= 1);
        assert!(snap.count(Marker::Explored) >= 1);
        assert!(snap.count(Marker::Frontier) >= 1);
        assert!(snap.count(Marker::BackwardFrontier) >= 1);
        assert_eq!(snap.count(Marker::Start), 1);
        assert_eq!(snap.count(Marker::Goal), 1);
        assert_eq!(snap.rows().count(), 8);
    }

    #[test]
    fn route_through_a_walled_frontier_cell_is_painted_as_path() {
        let mut d = driver(SearchConfig::open(3), Algorithm::BreadthFirst);
        d.grid_mut().add_static_wall(Cell::new(1, 0));
        d.grid_mut().add_static_wall(Cell::new(1, 1));
        // Expanding the start queues (0, 1) only; wall it before it pops.
        d.advance();
        assert!(d.grid_mut().place_dynamic_wall(Cell::new(0, 1)));

        let outcome = d.run(&mut (), None).clone();
        let route = outcome.route().expect("goal is reachable through (0, 1)");
        assert_eq!(route.interior(), &[Cell::new(0, 1), Cell::new(1, 2)]);

        let snap = d.snapshot();
        assert_eq!(snap.at(Cell::new(0, 1)), Some(Marker::Path));
        assert_eq!(snap.at(Cell::new(1, 2)), Some(Marker::Path));
        assert_eq!(snap.count(Marker::Path), route.interior().len());
        assert_eq!(snap.count(Marker::DynamicWall), 0);
        assert_eq!(snap.at(Cell::new(1, 1)), Some(Marker::Wall));
    }

    #[test]
    fn reset_restarts_the_same_algorithm() {
        let cfg = SearchConfig {
            obstacle_probability: 1.0,
            ..SearchConfig::default()
        };
        let mut d = driver(cfg, Algorithm::DepthLimited);
        for _ in 0..20 {
            d.advance();
        }
        d.reset();
        assert_eq!(d.steps(), 0);
        assert_eq!(d.outcome(), &Outcome::Searching);
        assert_eq!(d.grid().count(CellKind::Wall), 10);
        assert_eq!(d.strategy().algorithm(), Algorithm::DepthLimited);
        assert_eq!(d.status(), "DLS - Searching (Limit: 15)...");
    }
}
