use pathgrid_core::{Cell, Grid};

use crate::algorithm::Algorithm;
use crate::reconstruct::Route;

/// Outcome of a single [`SearchStrategy::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// More work remains.
    Continue,
    /// The search reached its terminal cell: the goal, or the meeting cell
    /// of a bidirectional search.
    GoalFound(Cell),
    /// The frontier ran dry without reaching the goal.
    Exhausted,
}

impl StepResult {
    /// Whether no further steps should be requested.
    pub fn is_terminal(self) -> bool {
        !matches!(self, StepResult::Continue)
    }
}

/// Search-state classification of a cell, for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Discovered, not yet expanded.
    Frontier,
    /// Discovered by the goal-rooted side of a bidirectional search only.
    BackwardFrontier,
    /// Popped from the frontier.
    Explored,
}

/// A search advanced one discovery step at a time.
///
/// Strategies read the grid through [`Grid::neighbors`] at expansion time;
/// they never re-check frontier entries against walls added after they
/// were enqueued.
pub trait SearchStrategy {
    /// Which variant this is.
    fn algorithm(&self) -> Algorithm;

    /// Perform one pop-and-expand cycle.
    ///
    /// Only iterative deepening mutates `grid`, resetting it before each
    /// deeper round.
    fn step(&mut self, grid: &mut Grid) -> StepResult;

    /// Rebuild the route ending at the cell reported by
    /// [`StepResult::GoalFound`].
    fn route(&self, terminal: Cell) -> Route;

    /// Classify `c` for rendering. Start and goal are left to the grid.
    fn mark(&self, c: Cell) -> Option<Mark>;

    /// Number of discovered cells.
    fn visited_len(&self) -> usize;

    /// Number of entries waiting in the frontier.
    fn frontier_len(&self) -> usize;

    /// Status line shown while the search runs.
    fn status(&self) -> String {
        format!("{} - Searching...", self.algorithm().name())
    }

    /// Status line shown once the goal is reached.
    fn found_status(&self) -> String {
        format!("{} - Path Found!", self.algorithm().name())
    }
}
