use pathgrid_core::Cell;

/// Cost of an orthogonal move.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal move.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Cost of moving from `from` to the adjacent cell `to`.
#[inline]
pub fn edge_cost(from: Cell, to: Cell) -> f64 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Total edge cost along a sequence of adjacent cells.
pub fn path_cost(cells: &[Cell]) -> f64 {
    cells.windows(2).map(|w| edge_cost(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_costs() {
        let c = Cell::new(2, 2);
        assert_eq!(edge_cost(c, Cell::new(2, 3)), 1.0);
        assert_eq!(edge_cost(c, Cell::new(1, 2)), 1.0);
        assert!((edge_cost(c, Cell::new(3, 3)) - 1.414).abs() < 1e-3);
    }

    #[test]
    fn path_costs() {
        assert_eq!(path_cost(&[]), 0.0);
        assert_eq!(path_cost(&[Cell::new(0, 0)]), 0.0);
        let p = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 2)];
        assert!((path_cost(&p) - (DIAGONAL_COST + 1.0)).abs() < 1e-9);
    }
}
