//! Route reconstruction from parent maps.

use std::collections::HashMap;

use pathgrid_core::Cell;

use crate::cost::path_cost;

/// Back-pointer from each discovered cell to the cell it was reached from.
pub type ParentMap = HashMap<Cell, Cell>;

/// Walk `terminal` back through `parents` and return the cells strictly
/// between `start` and `terminal`, in start-to-terminal order.
///
/// Neither `start` nor `terminal` is included. A terminal with no parent
/// entry yields an empty route.
pub fn reconstruct(parents: &ParentMap, terminal: Cell, start: Cell) -> Vec<Cell> {
    let mut path = walk_back(parents, terminal, start);
    path.reverse();
    path
}

/// Route through the meeting cell of a bidirectional search.
///
/// Concatenates the forward chain (start to `meeting`, via `forward`), the
/// meeting cell itself, and the backward chain (`meeting` to goal, via
/// `backward`). Start and goal are excluded.
pub fn reconstruct_meeting(
    forward: &ParentMap,
    backward: &ParentMap,
    meeting: Cell,
    start: Cell,
    goal: Cell,
) -> Vec<Cell> {
    let mut path = reconstruct(forward, meeting, start);
    if meeting != start && meeting != goal {
        path.push(meeting);
    }
    path.extend(walk_back(backward, meeting, goal));
    path
}

/// Ancestors of `from`, nearest first, skipping `root`.
fn walk_back(parents: &ParentMap, from: Cell, root: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut current = from;
    while let Some(&p) = parents.get(&current) {
        debug_assert_ne!(p, current, "parent map contains a self-loop at {current}");
        debug_assert!(path.len() <= parents.len(), "parent map contains a cycle");
        current = p;
        if current != root {
            path.push(current);
        }
    }
    path
}

/// The route of a successful run, bracketed by its start and goal.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    start: Cell,
    goal: Cell,
    interior: Vec<Cell>,
}

impl Route {
    pub fn new(start: Cell, goal: Cell, interior: Vec<Cell>) -> Self {
        Self {
            start,
            goal,
            interior,
        }
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Cells between start and goal: the part a renderer paints as path.
    pub fn interior(&self) -> &[Cell] {
        &self.interior
    }

    /// Full start-to-goal sequence.
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.interior.len() + 2);
        cells.push(self.start);
        cells.extend_from_slice(&self.interior);
        if self.goal != self.start {
            cells.push(self.goal);
        }
        cells
    }

    /// Number of moves from start to goal.
    pub fn moves(&self) -> usize {
        self.cells().len() - 1
    }

    /// Total edge cost from start to goal.
    pub fn cost(&self) -> f64 {
        path_cost(&self.cells())
    }
}
