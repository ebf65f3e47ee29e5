//! A* search on 8-directional grids.
//!
//! Cardinal steps cost 10 and diagonal steps cost 14. The search is driven
//! by [`SearchEngine`], which owns the [`Grid`](gridpath_core::Grid) it runs
//! on and exposes both a run-to-completion call and a single-step API:
//!
//! - [`SearchEngine::start_search`] runs to a terminal [`SearchState`]
//! - [`SearchEngine::step`] finalizes one cell at a time
//! - [`SearchEngine::cell_states`] tags every cell for display
//!
//! Building blocks are public for callers that want to drive their own loop:
//!
//! | Type | Role |
//! |---|---|
//! | [`Frontier`] | open set, min-`f` first, latest insertion wins ties |
//! | [`VisitedSet`] | closed set keyed by flat cell index |
//! | [`Node`] | per-cell `g`/`h`/`f`/parent |
//! | [`PathReconstructor`] | parent-chain walk producing a [`Path`] |
//!
//! Behaviour is tuned through [`SearchOptions`]. The defaults keep the scaled
//! Manhattan heuristic and unconditional parent overwrite, which terminate
//! but do not guarantee an optimal path; [`SearchOptions::optimal`] switches
//! to the octile heuristic with improve-only relaxation.

mod distance;
mod engine;
mod frontier;
mod node;
mod options;
mod reconstruct;
mod state;
mod visited;

pub use distance::{CARDINAL_COST, DIAGONAL_COST, Heuristic, manhattan, move_cost, octile};
pub use engine::{SearchEngine, SearchReport, SearchState};
pub use frontier::{Frontier, FrontierEntry};
pub use node::{Node, UNREACHABLE};
pub use options::{PathCost, Relaxation, SearchOptions};
pub use reconstruct::{Path, PathReconstructor};
pub use state::CellState;
pub use visited::VisitedSet;
