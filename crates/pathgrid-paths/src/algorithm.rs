use std::fmt;
use std::str::FromStr;

use pathgrid_core::{Grid, SearchConfig};

use crate::bfs::BreadthFirst;
use crate::bidirectional::Bidirectional;
use crate::dfs::DepthFirst;
use crate::dls::DepthLimited;
use crate::iddfs::IterativeDeepening;
use crate::traits::SearchStrategy;
use crate::ucs::UniformCost;

/// The interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    DepthLimited,
    IterativeDeepening,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::UniformCost,
        Algorithm::DepthLimited,
        Algorithm::IterativeDeepening,
        Algorithm::Bidirectional,
    ];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "BFS",
            Algorithm::DepthFirst => "DFS",
            Algorithm::UniformCost => "UCS",
            Algorithm::DepthLimited => "DLS",
            Algorithm::IterativeDeepening => "IDDFS",
            Algorithm::Bidirectional => "Bidirectional",
        }
    }

    /// Whether the variant gives up at a depth bound even when a longer
    /// path exists.
    pub fn is_depth_bounded(self) -> bool {
        matches!(self, Algorithm::DepthLimited | Algorithm::IterativeDeepening)
    }

    /// Build a fresh strategy rooted at the grid's start and goal.
    pub fn build(self, grid: &Grid, config: &SearchConfig) -> Box<dyn SearchStrategy> {
        let (start, goal) = (grid.start(), grid.goal());
        match self {
            Algorithm::BreadthFirst => Box::new(BreadthFirst::new(start, goal)),
            Algorithm::DepthFirst => Box::new(DepthFirst::new(start, goal)),
            Algorithm::UniformCost => Box::new(UniformCost::new(start, goal)),
            Algorithm::DepthLimited => Box::new(DepthLimited::new(start, goal, config.depth_limit)),
            Algorithm::IterativeDeepening => {
                Box::new(IterativeDeepening::new(start, goal, config.depth_limit))
            }
            Algorithm::Bidirectional => Box::new(Bidirectional::new(start, goal)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm `{}` (expected bfs, dfs, ucs, dls, iddfs or bidirectional)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Algorithm::UniformCost),
            "dls" | "depth-limited" => Ok(Algorithm::DepthLimited),
            "iddfs" | "iterative-deepening" => Ok(Algorithm::IterativeDeepening),
            "bidirectional" | "bidi" => Ok(Algorithm::Bidirectional),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}


/// Properties every variant must satisfy on static grids.
#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::dls::DepthLimited;
    use crate::driver::{Outcome, StepDriver};
    use crate::iddfs::IterativeDeepening;
    use crate::reconstruct::Route;
    use crate::traits::StepResult;
    use pathgrid_core::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn static_config() -> SearchConfig {
        SearchConfig {
            obstacle_probability: 0.0,
            ..SearchConfig::default()
        }
    }

    fn solve(config: &SearchConfig, algorithm: Algorithm, walls: &[Cell]) -> Outcome {
        let mut d =
            StepDriver::with_rng(config.clone(), algorithm, StdRng::seed_from_u64(1)).unwrap();
        for &w in walls {
            d.grid_mut().add_static_wall(w);
        }
        d.run(&mut (), None).clone()
    }

    fn route_of(outcome: &Outcome) -> &Route {
        outcome.route().expect("expected the goal to be reached")
    }

    fn assert_valid(route: &Route, grid: &Grid) {
        let cells = route.cells();
        assert_eq!(cells[0], grid.start());
        assert_eq!(cells[cells.len() - 1], grid.goal());
        for w in cells.windows(2) {
            assert_eq!(w[0].chebyshev(w[1]), 1, "{} and {} are not adjacent", w[0], w[1]);
        }
        for c in route.interior() {
            assert!(!grid.is_wall(*c));
        }
    }

    #[test]
    fn unbounded_variants_reach_a_connected_goal() {
        let cfg = static_config();
        let grid = Grid::new(&cfg).unwrap();
        for alg in Algorithm::ALL.into_iter().filter(|a| !a.is_depth_bounded()) {
            let outcome = solve(&cfg, alg, &[]);
            assert_valid(route_of(&outcome), &grid);
        }
    }

    #[test]
    fn depth_bounded_variants_give_up_on_a_distant_goal() {
        // The default goal is 19 moves away, beyond the default bound of 15.
        let cfg = static_config();
        for alg in [Algorithm::DepthLimited, Algorithm::IterativeDeepening] {
            assert!(matches!(solve(&cfg, alg, &[]), Outcome::NoPath { .. }), "{alg}");
        }
    }

    #[test]
    fn every_variant_succeeds_on_a_small_open_grid() {
        let cfg = SearchConfig::open(6);
        let grid = Grid::new(&cfg).unwrap();
        for alg in Algorithm::ALL {
            let outcome = solve(&cfg, alg, &[]);
            assert_valid(route_of(&outcome), &grid);
        }
    }

    #[test]
    fn uniform_cost_is_never_costlier_than_breadth_first() {
        // A vertical bar at col 4 and a horizontal bar on row 6 force a
        // detour but leave the goal reachable.
        let walls: Vec<Cell> = (2..9)
            .map(|r| Cell::new(r, 4))
            .chain((5..10).map(|c| Cell::new(6, c)))
            .collect();
        let cfg = SearchConfig::open(12);
        for extra in [&[][..], &walls[..]] {
            let mut grid = Grid::new(&cfg).unwrap();
            for &w in extra {
                grid.add_static_wall(w);
            }
            let bfs = solve(&cfg, Algorithm::BreadthFirst, extra);
            let ucs = solve(&cfg, Algorithm::UniformCost, extra);
            assert!(matches!(bfs, Outcome::Found { .. }), "BFS: {bfs:?}");
            assert!(matches!(ucs, Outcome::Found { .. }), "UCS: {ucs:?}");
            assert_valid(route_of(&bfs), &grid);
            assert_valid(route_of(&ucs), &grid);
            assert!(route_of(&ucs).cost() <= route_of(&bfs).cost() + 1e-9);
        }
    }

    #[test]
    fn default_wall_plus_extra_walls_can_seal_the_goal() {
        // On a 12x12 grid the default wall clips to col 10, rows 5..12; with
        // a bar on row 6 from col 6 to the edge the goal pocket is closed.
        let mut cfg = static_config();
        cfg.side = 12;
        let walls: Vec<Cell> = (6..12).map(|c| Cell::new(6, c)).collect();
        for alg in [Algorithm::BreadthFirst, Algorithm::UniformCost] {
            assert!(matches!(solve(&cfg, alg, &walls), Outcome::NoPath { .. }), "{alg}");
        }
    }

    #[test]
    fn open_five_by_five_scenario() {
        let cfg = SearchConfig::open(5);
        let bfs = solve(&cfg, Algorithm::BreadthFirst, &[]);
        assert_eq!(route_of(&bfs).moves(), 4);
        let ucs = solve(&cfg, Algorithm::UniformCost, &[]);
        assert!((route_of(&ucs).cost() - 5.657).abs() < 1e-3);
    }

    #[test]
    fn full_row_wall_exhausts_every_variant() {
        let cfg = SearchConfig::open(7);
        let wall: Vec<Cell> = (0..7).map(|c| Cell::new(3, c)).collect();
        for alg in Algorithm::ALL {
            assert!(matches!(solve(&cfg, alg, &wall), Outcome::NoPath { .. }), "{alg}");
        }
    }

    #[test]
    fn iterative_deepening_depth_matches_first_successful_depth_limit() {
        let walls: Vec<Cell> = (0..6).map(|r| Cell::new(r, 3)).collect();
        let cfg = SearchConfig::open(8);

        let first_dls_success = (1..=15).find(|&limit| {
            let mut grid = Grid::new(&cfg).unwrap();
            for &w in &walls {
                grid.add_static_wall(w);
            }
            let mut dls = DepthLimited::new(grid.start(), grid.goal(), limit);
            loop {
                match dls.step(&mut grid) {
                    StepResult::Continue => {}
                    r => break matches!(r, StepResult::GoalFound(_)),
                }
            }
        });

        let mut grid = Grid::new(&cfg).unwrap();
        for &w in &walls {
            grid.add_static_wall(w);
        }
        let mut id = IterativeDeepening::new(grid.start(), grid.goal(), 15);
        while !id.step(&mut grid).is_terminal() {}

        assert!(first_dls_success.is_some());
        assert_eq!(id.found_depth(), first_dls_success);
    }
}
