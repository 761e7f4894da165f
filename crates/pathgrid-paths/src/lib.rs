//! Step-wise path search strategies over a [`pathgrid_core::Grid`].
//!
//! Every strategy implements [`SearchStrategy`] and advances one
//! pop-and-expand cycle per [`step`](SearchStrategy::step) call:
//!
//! - **Breadth-first** ([`BreadthFirst`]) over a FIFO queue
//! - **Depth-first** ([`DepthFirst`]) over a LIFO stack
//! - **Uniform-cost** ([`UniformCost`]) with 1.0 / √2 move costs
//! - **Depth-limited** ([`DepthLimited`]) with a fixed depth bound
//! - **Iterative deepening** ([`IterativeDeepening`]) over bounds `1..=limit`
//! - **Bidirectional** ([`Bidirectional`]) breadth-first from both ends
//!
//! [`StepDriver`] runs the loop the visualization side needs: inject a
//! dynamic obstacle, step, snapshot, and rebuild the route on success.

mod algorithm;
mod bfs;
mod bidirectional;
mod cost;
mod dfs;
mod dls;
mod driver;
mod iddfs;
mod reconstruct;
mod state;
mod traits;
mod ucs;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use bfs::BreadthFirst;
pub use bidirectional::Bidirectional;
pub use cost::{DIAGONAL_COST, ORTHOGONAL_COST, edge_cost, path_cost};
pub use dfs::DepthFirst;
pub use dls::DepthLimited;
pub use driver::{Marker, Observer, Outcome, Snapshot, StepDriver};
pub use iddfs::IterativeDeepening;
pub use reconstruct::{ParentMap, Route, reconstruct, reconstruct_meeting};
pub use traits::{Mark, SearchStrategy, StepResult};
