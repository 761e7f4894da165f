//! The occupancy grid searched by every strategy.
//!
//! [`Grid`] owns one [`CellState`] per coordinate of an `N × N` square and
//! the static wall pattern that [`Grid::reset`] reinstates. Start is always
//! `(0, 0)` and Goal `(N - 1, N - 1)`.

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::geom::{Cell, Direction, Range};

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
}

/// Mutable per-cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellState {
    pub kind: CellKind,
    /// Set only for walls added by the obstacle injector.
    pub is_dynamic_wall: bool,
}

impl CellState {
    const EMPTY: Self = Self {
        kind: CellKind::Empty,
        is_dynamic_wall: false,
    };
}

/// A square occupancy grid with exactly one start and one goal.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<CellState>,
    side: i32,
    start: Cell,
    goal: Cell,
    /// Cells turned into walls on every reset.
    static_walls: Vec<Cell>,
}

impl Grid {
    /// Build a freshly reset grid from a validated config.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let side = config.side;
        let bounds = Range::square(side);
        let start = config.start();
        let goal = config.goal();
        let static_walls = match &config.static_wall {
            Some(wall) => bounds
                .intersect(wall.range())
                .iter()
                .filter(|&c| c != start && c != goal)
                .collect(),
            None => Vec::new(),
        };
        let mut grid = Self {
            cells: vec![CellState::EMPTY; bounds.len()],
            side,
            start,
            goal,
            static_walls,
        };
        grid.reset();
        Ok(grid)
    }

    /// Reinitialize every cell to empty, reapply the static wall pattern and
    /// re-seed start and goal. Dynamic walls are gone afterwards.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::EMPTY);
        for i in 0..self.static_walls.len() {
            let idx = self.index(self.static_walls[i]);
            self.cells[idx].kind = CellKind::Wall;
        }
        let (s, g) = (self.index(self.start), self.index(self.goal));
        self.cells[s].kind = CellKind::Start;
        self.cells[g].kind = CellKind::Goal;
    }

    /// Side length `N`.
    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Bounding range `[0, N) × [0, N)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.side)
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether `c` is start or goal. Neither may ever become a wall.
    #[inline]
    pub fn is_protected(&self, c: Cell) -> bool {
        c == self.start || c == self.goal
    }

    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds().contains(c)
    }

    /// State of the cell at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Cell) -> Option<CellState> {
        if !self.contains(c) {
            return None;
        }
        Some(self.cells[self.index(c)])
    }

    /// Kind of the cell at `c`, or `None` if out of bounds.
    pub fn kind(&self, c: Cell) -> Option<CellKind> {
        self.at(c).map(|s| s.kind)
    }

    /// Whether `c` holds a wall. Out-of-bounds cells are not walls.
    pub fn is_wall(&self, c: Cell) -> bool {
        self.kind(c) == Some(CellKind::Wall)
    }

    /// Whether `c` holds a wall placed by the obstacle injector.
    pub fn is_dynamic_wall(&self, c: Cell) -> bool {
        self.at(c).is_some_and(|s| s.kind == CellKind::Wall && s.is_dynamic_wall)
    }

    /// Append the in-bounds, non-wall neighbors of `c` to `buf`, in
    /// [`Direction::ALL`] order. The caller clears `buf`.
    pub fn neighbors_into(&self, c: Cell, buf: &mut Vec<Cell>) {
        for d in Direction::ALL {
            let n = c + d;
            if self.contains(n) && !self.is_wall(n) {
                buf.push(n);
            }
        }
    }

    /// The up-to-8 in-bounds, non-wall neighbors of `c`, evaluated against
    /// the grid as it is now.
    pub fn neighbors(&self, c: Cell) -> Vec<Cell> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(c, &mut buf);
        buf
    }

    /// Turn an empty cell into a dynamic wall. Returns `false` (and changes
    /// nothing) if `c` is out of bounds, protected or not empty.
    pub fn place_dynamic_wall(&mut self, c: Cell) -> bool {
        if self.is_protected(c) || self.kind(c) != Some(CellKind::Empty) {
            return false;
        }
        let idx = self.index(c);
        self.cells[idx] = CellState {
            kind: CellKind::Wall,
            is_dynamic_wall: true,
        };
        true
    }

    /// Add `c` to the static wall pattern and wall it immediately. The wall
    /// survives every later [`reset`](Self::reset). Start, goal and
    /// out-of-bounds cells are refused.
    pub fn add_static_wall(&mut self, c: Cell) -> bool {
        if self.is_protected(c) || !self.contains(c) {
            return false;
        }
        if !self.static_walls.contains(&c) {
            self.static_walls.push(c);
        }
        let idx = self.index(c);
        self.cells[idx] = CellState {
            kind: CellKind::Wall,
            is_dynamic_wall: false,
        };
        true
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|s| s.kind == kind).count()
    }

    /// Iterate over `(Cell, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    #[inline]
    fn index(&self, c: Cell) -> usize {
        c.row as usize * self.side as usize + c.col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WallSegment;

    fn open(side: i32) -> Grid {
        Grid::new(&SearchConfig::open(side)).unwrap()
    }

    #[test]
    fn reset_seeds_start_goal_and_static_wall() {
        let g = Grid::new(&SearchConfig::default()).unwrap();
        assert_eq!(g.kind(Cell::new(0, 0)), Some(CellKind::Start));
        assert_eq!(g.kind(Cell::new(19, 19)), Some(CellKind::Goal));
        for row in 5..15 {
            assert!(g.is_wall(Cell::new(row, 10)));
            assert!(!g.is_dynamic_wall(Cell::new(row, 10)));
        }
        assert!(!g.is_wall(Cell::new(4, 10)));
        assert!(!g.is_wall(Cell::new(15, 10)));
        assert_eq!(g.count(CellKind::Wall), 10);
        assert_eq!(g.count(CellKind::Start), 1);
        assert_eq!(g.count(CellKind::Goal), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SearchConfig {
            side: 0,
            ..SearchConfig::default()
        };
        assert_eq!(Grid::new(&cfg).unwrap_err(), ConfigError::NonPositiveSide(0));
    }

    #[test]
    fn static_wall_is_clipped_and_skips_protected_cells() {
        let cfg = SearchConfig {
            side: 6,
            static_wall: Some(WallSegment {
                col: 5,
                rows: 0..10,
            }),
            ..SearchConfig::open(6)
        };
        let g = Grid::new(&cfg).unwrap();
        // Column 5 rows 0..6, minus the goal at (5, 5).
        assert_eq!(g.count(CellKind::Wall), 5);
        assert_eq!(g.kind(Cell::new(5, 5)), Some(CellKind::Goal));
    }

    #[test]
    fn neighbors_in_direction_order() {
        let g = open(5);
        assert_eq!(
            g.neighbors(Cell::new(2, 2)),
            vec![
                Cell::new(1, 2),
                Cell::new(2, 3),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(1, 3),
                Cell::new(3, 1),
            ]
        );
        assert_eq!(
            g.neighbors(Cell::new(0, 0)),
            vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }

    #[test]
    fn neighbors_see_walls_added_later() {
        let mut g = open(5);
        let c = Cell::new(2, 2);
        assert_eq!(g.neighbors(c).len(), 8);
        assert!(g.place_dynamic_wall(Cell::new(1, 2)));
        assert!(g.is_dynamic_wall(Cell::new(1, 2)));
        let ns = g.neighbors(c);
        assert_eq!(ns.len(), 7);
        assert!(!ns.contains(&Cell::new(1, 2)));
    }

    #[test]
    fn dynamic_wall_refuses_protected_and_occupied() {
        let mut g = Grid::new(&SearchConfig::default()).unwrap();
        assert!(!g.place_dynamic_wall(g.start()));
        assert!(!g.place_dynamic_wall(g.goal()));
        assert!(!g.place_dynamic_wall(Cell::new(5, 10)));
        assert!(!g.place_dynamic_wall(Cell::new(-1, 3)));
        assert!(!g.is_dynamic_wall(Cell::new(5, 10)));
    }

    #[test]
    fn reset_clears_dynamic_but_keeps_static_walls() {
        let mut g = open(5);
        assert!(g.add_static_wall(Cell::new(2, 0)));
        assert!(!g.add_static_wall(g.goal()));
        assert!(g.place_dynamic_wall(Cell::new(3, 3)));
        g.reset();
        assert!(g.is_wall(Cell::new(2, 0)));
        assert!(!g.is_wall(Cell::new(3, 3)));
        assert_eq!(g.count(CellKind::Wall), 1);
    }

    #[test]
    fn iter_is_row_major() {
        let g = open(3);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 9);
        assert_eq!(items[0].0, Cell::new(0, 0));
        assert_eq!(items[0].1.kind, CellKind::Start);
        assert_eq!(items[8].0, Cell::new(2, 2));
        assert_eq!(items[8].1.kind, CellKind::Goal);
        assert_eq!(items[1].0, Cell::new(0, 1));
    }
}
