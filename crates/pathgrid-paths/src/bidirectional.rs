use std::collections::{HashSet, VecDeque};

use pathgrid_core::{Cell, Grid};

use crate::algorithm::Algorithm;
use crate::reconstruct::{ParentMap, Route, reconstruct_meeting};
use crate::traits::{Mark, SearchStrategy, StepResult};

/// One breadth-first half of a bidirectional search.
#[derive(Debug, Clone)]
struct Side {
    queue: VecDeque<Cell>,
    visited: HashSet<Cell>,
    explored: HashSet<Cell>,
    parent: ParentMap,
}

impl Side {
    fn new(root: Cell) -> Self {
        Self {
            queue: VecDeque::from([root]),
            visited: HashSet::from([root]),
            explored: HashSet::new(),
            parent: ParentMap::new(),
        }
    }

    fn expand(&mut self, current: Cell, grid: &Grid, nbuf: &mut Vec<Cell>) {
        nbuf.clear();
        grid.neighbors_into(current, nbuf);
        for &n in nbuf.iter() {
            if self.visited.insert(n) {
                self.parent.insert(n, current);
                self.queue.push_back(n);
            }
        }
        self.explored.insert(current);
    }
}

/// Two breadth-first searches, one rooted at the start and one at the goal,
/// advanced in round-robin. Each step pops one cell from each side that
/// still has work; popping a cell the other side has discovered ends the
/// search at that meeting cell.
#[derive(Debug, Clone)]
pub struct Bidirectional {
    start: Cell,
    goal: Cell,
    forward: Side,
    backward: Side,
    meeting: Option<Cell>,
    nbuf: Vec<Cell>,
}

impl Bidirectional {
    pub fn new(start: Cell, goal: Cell) -> Self {
        Self {
            start,
            goal,
            forward: Side::new(start),
            backward: Side::new(goal),
            meeting: None,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Whether the start-rooted side has discovered `c`.
    pub fn forward_visited(&self, c: Cell) -> bool {
        self.forward.visited.contains(&c)
    }

    /// Whether the goal-rooted side has discovered `c`.
    pub fn backward_visited(&self, c: Cell) -> bool {
        self.backward.visited.contains(&c)
    }

    /// Cell where the two frontiers met.
    pub fn meeting(&self) -> Option<Cell> {
        self.meeting
    }
}

impl SearchStrategy for Bidirectional {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bidirectional
    }

    fn step(&mut self, grid: &mut Grid) -> StepResult {
        if self.forward.queue.is_empty() && self.backward.queue.is_empty() {
            return StepResult::Exhausted;
        }
        let mut nbuf = std::mem::take(&mut self.nbuf);

        if let Some(current) = self.forward.queue.pop_front() {
            if self.backward.visited.contains(&current) {
                self.meeting = Some(current);
                self.nbuf = nbuf;
                return StepResult::GoalFound(current);
            }
            self.forward.expand(current, grid, &mut nbuf);
        }

        if let Some(current) = self.backward.queue.pop_front() {
            if self.forward.visited.contains(&current) {
                self.meeting = Some(current);
                self.nbuf = nbuf;
                return StepResult::GoalFound(current);
            }
            self.backward.expand(current, grid, &mut nbuf);
        }

        self.nbuf = nbuf;
        StepResult::Continue
    }

    fn route(&self, terminal: Cell) -> Route {
        let interior = reconstruct_meeting(
            &self.forward.parent,
            &self.backward.parent,
            terminal,
            self.start,
            self.goal,
        );
        Route::new(self.start, self.goal, interior)
    }

    fn mark(&self, c: Cell) -> Option<Mark> {
        if self.forward.explored.contains(&c) || self.backward.explored.contains(&c) {
            Some(Mark::Explored)
        } else if self.forward.visited.contains(&c) {
            Some(Mark::Frontier)
        } else if self.backward.visited.contains(&c) {
            Some(Mark::BackwardFrontier)
        } else {
            None
        }
    }

    fn visited_len(&self) -> usize {
        self.forward.visited.union(&self.backward.visited).count()
    }

    fn frontier_len(&self) -> usize {
        self.forward.queue.len() + self.backward.queue.len()
    }
}
