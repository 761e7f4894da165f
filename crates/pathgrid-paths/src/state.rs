use std::collections::HashSet;

use pathgrid_core::Cell;

use crate::reconstruct::{ParentMap, Route, reconstruct};
use crate::traits::Mark;

/// Visited/parent bookkeeping shared by the single-source strategies.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    pub(crate) start: Cell,
    pub(crate) goal: Cell,
    pub(crate) visited: HashSet<Cell>,
    pub(crate) explored: HashSet<Cell>,
    pub(crate) parent: ParentMap,
    /// Scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Cell>,
}

impl SearchState {
    pub(crate) fn new(start: Cell, goal: Cell) -> Self {
        Self {
            start,
            goal,
            visited: HashSet::from([start]),
            explored: HashSet::new(),
            parent: ParentMap::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Record `n` as discovered from `from`. Returns `false` if it was
    /// already visited.
    #[inline]
    pub(crate) fn discover(&mut self, n: Cell, from: Cell) -> bool {
        if !self.visited.insert(n) {
            return false;
        }
        self.parent.insert(n, from);
        true
    }

    pub(crate) fn route(&self, terminal: Cell) -> Route {
        Route::new(self.start, self.goal, reconstruct(&self.parent, terminal, self.start))
    }

    pub(crate) fn mark(&self, c: Cell) -> Option<Mark> {
        if self.explored.contains(&c) {
            Some(Mark::Explored)
        } else if self.visited.contains(&c) {
            Some(Mark::Frontier)
        } else {
            None
        }
    }
}
