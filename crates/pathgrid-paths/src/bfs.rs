use std::collections::VecDeque;

use pathgrid_core::{Cell, Grid};

use crate::algorithm::Algorithm;
use crate::reconstruct::Route;
use crate::state::SearchState;
use crate::traits::{Mark, SearchStrategy, StepResult};

/// Breadth-first search over a FIFO queue seeded with the start cell.
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    state: SearchState,
    queue: VecDeque<Cell>,
}

impl BreadthFirst {
    pub fn new(start: Cell, goal: Cell) -> Self {
        Self {
            state: SearchState::new(start, goal),
            queue: VecDeque::from([start]),
        }
    }

    /// Whether `c` has been discovered.
    pub fn is_visited(&self, c: Cell) -> bool {
        self.state.visited.contains(&c)
    }
}

impl SearchStrategy for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn step(&mut self, grid: &mut Grid) -> StepResult {
        let Some(current) = self.queue.pop_front() else {
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
                self.queue.push_back(n);
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
        self.queue.len()
    }
}
