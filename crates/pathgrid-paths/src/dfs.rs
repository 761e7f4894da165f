use pathgrid_core::{Cell, Grid};

use crate::algorithm::Algorithm;
use crate::reconstruct::Route;
use crate::state::SearchState;
use crate::traits::{Mark, SearchStrategy, StepResult};

/// Depth-first search over a LIFO stack. Neighbors are pushed in direction
/// order, so the last emitted neighbor is expanded next.
#[derive(Debug, Clone)]
pub struct DepthFirst {
    state: SearchState,
    stack: Vec<Cell>,
}

impl DepthFirst {
    pub fn new(start: Cell, goal: Cell) -> Self {
        Self {
            state: SearchState::new(start, goal),
            stack: vec![start],
        }
    }
}

impl SearchStrategy for DepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthFirst
    }

    fn step(&mut self, grid: &mut Grid) -> StepResult {
        let Some(current) = self.stack.pop() else {
            return StepResult::Exhausted;
        };
        if current == self.state.goal {
            return StepResult::GoalFound(current);
        }

        let mut nbuf = std::mem::take(&mut self.state.nbuf);
        nbuf.clear();
        grid.neighbors_into(current, &mut nbuf);
        for &n in nbuf.iter() {
            if self.state.discover(n, current) {
                self.stack.push(n);
            }
        }
        self.state.nbuf = nbuf;

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
}
