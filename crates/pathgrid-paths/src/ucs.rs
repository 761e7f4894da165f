use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use pathgrid_core::{Cell, Grid};

use crate::algorithm::Algorithm;
use crate::cost::edge_cost;
use crate::reconstruct::{ParentMap, Route, reconstruct};
use crate::traits::{Mark, SearchStrategy, StepResult};

/// Priority-queue entry ordered by `(cost, seq)`, smallest first.
///
/// `seq` is the insertion counter, so equal costs pop in FIFO order and
/// coordinates never take part in the comparison.
#[derive(Debug, Clone, Copy)]
struct Entry {
    cost: f64,
    seq: u64,
    cell: Cell,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest entry first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform-cost (Dijkstra) search with 1.0 orthogonal and √2 diagonal
/// moves.
///
/// A cell may sit in the heap several times; entries whose cost is above
/// the cell's best known cost are skipped when popped.
#[derive(Debug, Clone)]
pub struct UniformCost {
    start: Cell,
    goal: Cell,
    open: BinaryHeap<Entry>,
    seq: u64,
    cost_so_far: HashMap<Cell, f64>,
    parent: ParentMap,
    explored: HashSet<Cell>,
    nbuf: Vec<Cell>,
}

impl UniformCost {
    pub fn new(start: Cell, goal: Cell) -> Self {
        let mut ucs = Self {
            start,
            goal,
            open: BinaryHeap::new(),
            seq: 0,
            cost_so_far: HashMap::from([(start, 0.0)]),
            parent: ParentMap::new(),
            explored: HashSet::new(),
            nbuf: Vec::with_capacity(8),
        };
        ucs.push(start, 0.0);
        ucs
    }

    /// Best known path cost to `c`.
    pub fn cost_of(&self, c: Cell) -> Option<f64> {
        self.cost_so_far.get(&c).copied()
    }

    fn push(&mut self, cell: Cell, cost: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.open.push(Entry { cost, seq, cell });
    }

    /// Pop the cheapest entry that still carries its cell's best cost.
    fn pop_fresh(&mut self) -> Option<(Cell, f64)> {
        while let Some(Entry { cost, cell, .. }) = self.open.pop() {
            if self.cost_so_far.get(&cell).is_some_and(|&best| cost > best) {
                continue;
            }
            return Some((cell, cost));
        }
        None
    }
}

impl SearchStrategy for UniformCost {
    fn algorithm(&self) -> Algorithm {
        Algorithm::UniformCost
    }

    fn step(&mut self, grid: &mut Grid) -> StepResult {
        let Some((current, current_cost)) = self.pop_fresh() else {
            return StepResult::Exhausted;
        };
        if current == self.goal {
            return StepResult::GoalFound(current);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        grid.neighbors_into(current, &mut nbuf);
        for &n in nbuf.iter() {
            let new_cost = current_cost + edge_cost(current, n);
            let improves = match self.cost_so_far.get(&n) {
                Some(&known) => new_cost < known,
                None => true,
            };
            if improves {
                self.cost_so_far.insert(n, new_cost);
                self.parent.insert(n, current);
                self.push(n, new_cost);
            }
        }
        self.nbuf = nbuf;

        self.explored.insert(current);
        StepResult::Continue
    }

    fn route(&self, terminal: Cell) -> Route {
        Route::new(self.start, self.goal, reconstruct(&self.parent, terminal, self.start))
    }

    fn mark(&self, c: Cell) -> Option<Mark> {
        if self.explored.contains(&c) {
            Some(Mark::Explored)
        } else if self.cost_so_far.contains_key(&c) {
            Some(Mark::Frontier)
        } else {
            None
        }
    }

    fn visited_len(&self) -> usize {
        self.cost_so_far.len()
    }

    fn frontier_len(&self) -> usize {
        self.open.len()
    }
}
