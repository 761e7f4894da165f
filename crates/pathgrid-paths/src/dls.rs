use pathgrid_core::{Cell, Grid};

use crate::algorithm::Algorithm;
use crate::reconstruct::Route;
use crate::state::SearchState;
use crate::traits::{Mark, SearchStrategy, StepResult};

/// Depth-first search that only expands entries shallower than `limit`.
///
/// Exhaustion does not mean the goal is unreachable, only that it is not
/// reachable within the bound along the paths this search committed to.
#[derive(Debug, Clone)]
pub struct DepthLimited {
    state: SearchState,
    stack: Vec<(Cell, usize)>,
    limit: usize,
    deepest_expansion: Option<usize>,
}

impl DepthLimited {
    pub fn new(start: Cell, goal: Cell, limit: usize) -> Self {
        Self {
            state: SearchState::new(start, goal),
            stack: vec![(start, 0)],
            limit,
            deepest_expansion: None,
        }
    }

    /// The depth bound.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Depth of the deepest entry expanded so far.
    pub fn deepest_expansion(&self) -> Option<usize> {
        self.deepest_expansion
    }
}

impl SearchStrategy for DepthLimited {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthLimited
    }

    fn step(&mut self, grid: &mut Grid) -> StepResult {
        let Some((current, depth)) = self.stack.pop() else {
            return StepResult::Exhausted;
        };
        if current == self.state.goal {
            return StepResult::GoalFound(current);
        }

        if depth < self.limit {
            self.deepest_expansion = self.deepest_expansion.max(Some(depth));
            let mut nbuf = std::mem::take(&mut self.state.nbuf);
            nbuf.clear();
            grid.neighbors_into(current, &mut nbuf);
            for &n in nbuf.iter() {
                if self.state.discover(n, current) {
                    self.stack.push((n, depth + 1));
                }
            }
            self.state.nbuf = nbuf;
        }

        self.state.explored.insert(current);
        StepResult::Continue
    }

    fn route(&self, terminal: Cell) -> Route {
        self.state.route(terminal)
    }

    fn mark(&self, c: Cell) -> Option<Mark> {
        self.state.mark(c)
    }

    fn visited_len(&self) -> usize {
        self.state.visited.len()
    }

    fn frontier_len(&self) -> usize {
        self.stack.len()
    }

    fn status(&self) -> String {
        format!("DLS - Searching (Limit: {})...", self.limit)
    }
}
