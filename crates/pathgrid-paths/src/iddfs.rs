use pathgrid_core::{Cell, Grid};

use crate::algorithm::Algorithm;
use crate::dls::DepthLimited;
use crate::reconstruct::Route;
use crate::traits::{Mark, SearchStrategy, StepResult};

/// Iterative deepening: depth-limited rounds with limits `1..=max_limit`.
///
/// When a round exhausts, the grid is reset (clearing every dynamic wall)
/// and a fresh round starts one level deeper. Rounds share nothing, so a
/// shallow success in one obstacle roll says nothing about the next.
#[derive(Debug, Clone)]
pub struct IterativeDeepening {
    round: DepthLimited,
    max_limit: usize,
    found_depth: Option<usize>,
}

impl IterativeDeepening {
    pub fn new(start: Cell, goal: Cell, max_limit: usize) -> Self {
        Self {
            round: DepthLimited::new(start, goal, 1),
            max_limit,
            found_depth: None,
        }
    }

    /// Limit of the round in progress.
    pub fn current_limit(&self) -> usize {
        self.round.limit()
    }

    /// Limit of the round that reached the goal.
    pub fn found_depth(&self) -> Option<usize> {
        self.found_depth
    }
}

impl SearchStrategy for IterativeDeepening {
    fn algorithm(&self) -> Algorithm {
        Algorithm::IterativeDeepening
    }

    fn step(&mut self, grid: &mut Grid) -> StepResult {
        match self.round.step(grid) {
            StepResult::Exhausted if self.round.limit() < self.max_limit => {
                let limit = self.round.limit() + 1;
                log::debug!("IDDFS: no path within depth {}, deepening to {limit}", limit - 1);
                grid.reset();
                self.round = DepthLimited::new(grid.start(), grid.goal(), limit);
                StepResult::Continue
            }
            StepResult::GoalFound(c) => {
                self.found_depth = Some(self.round.limit());
                StepResult::GoalFound(c)
            }
            other => other,
        }
    }

    fn route(&self, terminal: Cell) -> Route {
        self.round.route(terminal)
    }

    fn mark(&self, c: Cell) -> Option<Mark> {
        self.round.mark(c)
    }

    fn visited_len(&self) -> usize {
        self.round.visited_len()
    }

    fn frontier_len(&self) -> usize {
        self.round.frontier_len()
    }

    fn status(&self) -> String {
        format!("IDDFS - Depth {}...", self.round.limit())
    }

    fn found_status(&self) -> String {
        format!("IDDFS - Path Found (Depth {})!", self.round.limit())
    }
}
