//! The A* driver.
//!
//! [`SearchEngine`] owns the [`Grid`] for the duration of one search, plus a
//! flat [`Node`] array indexed like the grid's cells, the [`Frontier`] and
//! the [`VisitedSet`]. The loop is iterative; each call to
//! [`step`](SearchEngine::step) finalizes at most one cell.

use std::fmt;

use gridpath_core::{ConfigError, Grid, Point, Result, Role};
use log::{debug, trace, warn};

use crate::distance::{CARDINAL_COST, manhattan, move_cost};
use crate::frontier::{Frontier, FrontierEntry};
use crate::node::Node;
use crate::options::{PathCost, Relaxation, SearchOptions};
use crate::reconstruct::{Path, PathReconstructor};
use crate::state::CellState;
use crate::visited::VisitedSet;

/// Lifecycle of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchState {
    Ready,
    Running,
    /// The goal was popped and a path reconstructed.
    Succeeded,
    /// The frontier ran dry: no route exists.
    Failed,
    /// The step budget ran out before either outcome.
    Exhausted,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SearchState::Succeeded | SearchState::Failed | SearchState::Exhausted
        )
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchState::Ready => "ready",
            SearchState::Running => "running",
            SearchState::Succeeded => "succeeded",
            SearchState::Failed => "failed",
            SearchState::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Summary of a finished (or interrupted) search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub state: SearchState,
    pub path: Option<Path>,
    /// Cells finalized (added to the visited set).
    pub expanded: usize,
    /// Frontier pops, stale duplicates included.
    pub pops: usize,
}

impl SearchReport {
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.state == SearchState::Succeeded
    }
}

/// A* search over one [`Grid`].
pub struct SearchEngine {
    grid: Grid,
    start: Point,
    goal: Point,
    options: SearchOptions,
    nodes: Vec<Node>,
    frontier: Frontier,
    visited: VisitedSet,
    on_path: Vec<bool>,
    path: Option<Path>,
    state: SearchState,
    pops: usize,
    // scratch buffer for neighbour queries
    nbuf: Vec<Point>,
}

impl SearchEngine {
    /// Take ownership of `grid` with default options.
    ///
    /// Fails with `InvalidConfiguration` if the start or goal is unset or
    /// blocked, or if the cells do not fill the grid bounds.
    pub fn new(grid: Grid) -> Result<Self> {
        Self::with_options(grid, SearchOptions::default())
    }

    pub fn with_options(grid: Grid, options: SearchOptions) -> Result<Self> {
        let (start, goal) = grid.endpoints()?;
        if grid.len() != grid.bounds().len() {
            return Err(ConfigError::Shape {
                bounds: grid.bounds(),
                cells: grid.len(),
            }
            .into());
        }
        if grid.is_blocked(start) {
            return Err(ConfigError::StartBlocked(start).into());
        }
        if grid.is_blocked(goal) {
            return Err(ConfigError::GoalBlocked(goal).into());
        }
        let rng = grid.bounds();
        let len = grid.len();
        Ok(Self {
            grid,
            start,
            goal,
            options,
            nodes: vec![Node::default(); len],
            frontier: Frontier::new(),
            visited: VisitedSet::new(rng),
            on_path: vec![false; len],
            path: None,
            state: SearchState::Ready,
            pops: 0,
            nbuf: Vec::with_capacity(8),
        })
    }

    /// Run until a terminal state and report the outcome.
    ///
    /// Calling this again after the search has ended returns the same report
    /// without doing any work.
    pub fn start_search(&mut self) -> Result<SearchReport> {
        while !self.state.is_terminal() {
            self.step()?;
        }
        Ok(self.report())
    }

    /// Advance by one step: pop stale entries until a fresh cell is found,
    /// finalize it, and either finish on the goal or expand its neighbours.
    ///
    /// A `Ready` engine is initialized first. On a terminal engine this is a
    /// no-op.
    pub fn step(&mut self) -> Result<SearchState> {
        match self.state {
            SearchState::Ready => self.begin(),
            SearchState::Running => {}
            terminal => return Ok(terminal),
        }

        loop {
            if self.options.step_budget.is_some_and(|budget| self.pops >= budget) {
                warn!(
                    "search {} -> {} stopped after {} pops (budget spent)",
                    self.start, self.goal, self.pops
                );
                self.state = SearchState::Exhausted;
                return Ok(self.state);
            }

            let Some(FrontierEntry { pos, f, .. }) = self.frontier.pop_min_f() else {
                debug!(
                    "search {} -> {} failed: frontier empty after {} expansions",
                    self.start,
                    self.goal,
                    self.visited.len()
                );
                self.state = SearchState::Failed;
                return Ok(self.state);
            };
            self.pops += 1;

            if !self.visited.add(pos) {
                trace!("skip stale entry {pos} (f={f})");
                continue;
            }
            trace!("pop {pos} (f={f})");

            if pos == self.goal {
                self.finish()?;
                return Ok(self.state);
            }

            self.expand(pos);
            return Ok(self.state);
        }
    }

    fn begin(&mut self) {
        let h = self.options.heuristic.estimate(self.start, self.goal);
        let si = self.idx(self.start);
        self.nodes[si].update(0, h, None);
        self.frontier.insert(self.start, h);
        self.state = SearchState::Running;
        debug!(
            "search {} -> {} on {} grid, {} blocked, {:?}",
            self.start,
            self.goal,
            self.grid.bounds(),
            self.grid.blocked_count(),
            self.options
        );
    }

    fn expand(&mut self, cur: Point) {
        let opts = self.options;
        let cur_g = self.nodes[self.idx(cur)].g;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend(self.grid.neighbors8(cur));

        for &np in nbuf.iter() {
            if self.grid.is_blocked(np) || self.visited.contains(np) {
                continue;
            }
            let g = match opts.path_cost {
                PathCost::Accumulated => cur_g + move_cost(cur, np),
                PathCost::StartOffset => manhattan(self.start, np) * CARDINAL_COST,
            };
            let ni = self.idx(np);
            let n = &mut self.nodes[ni];
            if opts.relaxation == Relaxation::ImproveOnly && n.is_discovered() && g >= n.g {
                continue;
            }
            let h = opts.heuristic.estimate(np, self.goal);
            n.update(g, h, Some(cur));
            self.frontier.insert(np, n.f);
        }

        self.nbuf = nbuf;
    }

    fn finish(&mut self) -> Result<()> {
        let path = PathReconstructor::new(&self.grid, &self.nodes).reconstruct(self.goal)?;
        for &p in path.interior() {
            let i = self.idx(p);
            self.on_path[i] = true;
        }
        debug!(
            "search {} -> {} succeeded: {} cells, cost {}, {} expansions, {} pops",
            self.start,
            self.goal,
            path.len(),
            path.cost(),
            self.visited.len(),
            self.pops
        );
        self.path = Some(path);
        self.state = SearchState::Succeeded;
        Ok(())
    }

    // Only called with points already known to be inside the grid.
    #[inline]
    fn idx(&self, p: Point) -> usize {
        self.grid.bounds().index(p).unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn succeeded(&self) -> bool {
        self.state == SearchState::Succeeded
    }

    /// The reconstructed path, once the search has succeeded.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn report(&self) -> SearchReport {
        SearchReport {
            state: self.state,
            path: self.path.clone(),
            expanded: self.visited.len(),
            pops: self.pops,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give the grid back, discarding all search state.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search bookkeeping of the cell at `p`.
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.grid.bounds().index(p).map(|i| &self.nodes[i])
    }

    pub fn is_visited(&self, p: Point) -> bool {
        self.visited.contains(p)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn visited(&self) -> impl Iterator<Item = Point> + '_ {
        self.visited.iter()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Frontier contents in pop order, duplicates included.
    pub fn frontier_snapshot(&self) -> Vec<FrontierEntry> {
        self.frontier.snapshot()
    }

    /// Display tag of the cell at `p`, or `None` outside the grid.
    pub fn cell_state(&self, p: Point) -> Option<CellState> {
        let i = self.grid.bounds().index(p)?;
        let cell = self.grid.at(p)?;
        let state = match cell.role {
            Role::Start => CellState::Start,
            Role::Goal => CellState::Goal,
            Role::None if cell.blocked => CellState::Blocked,
            Role::None if self.on_path[i] => CellState::OnPath,
            Role::None if self.visited.contains(p) => CellState::Visited,
            Role::None => CellState::Free,
        };
        Some(state)
    }

    /// Row-major `(Point, CellState)` pairs for every cell.
    pub fn cell_states(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.grid
            .bounds()
            .iter()
            .filter_map(|p| self.cell_state(p).map(|s| (p, s)))
    }
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("state", &self.state)
            .field("options", &self.options)
            .field("visited", &self.visited.len())
            .field("frontier", &self.frontier.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Heuristic;
    use gridpath_core::{ConfigError, Error, GridConfig};

    fn engine(rows: i32, cols: i32, start: Point, goal: Point, blocked: &[Point]) -> SearchEngine {
        let grid = GridConfig::new(rows, cols, start, goal)
            .build(blocked.iter().copied())
            .unwrap();
        SearchEngine::new(grid).unwrap()
    }

    #[test]
    fn requires_endpoints() {
        let err = SearchEngine::new(Grid::new(3, 3)).unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration(ConfigError::MissingStart));
    }

    #[test]
    fn first_step_initializes_start() {
        let mut e = engine(3, 3, Point::rc(0, 0), Point::rc(2, 2), &[]);
        assert_eq!(e.state(), SearchState::Ready);
        assert_eq!(e.step().unwrap(), SearchState::Running);
        let s = e.node(Point::rc(0, 0)).unwrap();
        assert_eq!((s.g, s.h, s.f, s.parent), (0, 40, 40, None));
        assert!(e.is_visited(Point::rc(0, 0)));
        // right, down-right, down
        assert_eq!(e.frontier_len(), 3);
        let snap = e.frontier_snapshot();
        assert_eq!(snap[0].pos, Point::rc(1, 1));
        assert_eq!(snap[0].f, 34);
    }

    #[test]
    fn diagonal_route_on_open_3x3() {
        let mut e = engine(3, 3, Point::rc(0, 0), Point::rc(2, 2), &[]);
        let report = e.start_search().unwrap();
        assert!(report.succeeded());
        let path = report.path.unwrap();
        assert_eq!(
            path.points(),
            &[Point::rc(0, 0), Point::rc(1, 1), Point::rc(2, 2)]
        );
        assert_eq!(path.cost(), 28);
        assert_eq!(report.expanded, 3);
    }

    #[test]
    fn overwrite_replaces_better_parent() {
        // After (1,1) is expanded, its neighbour (0,1) is re-reached with a
        // worse cost (24 > 10) and the overwrite keeps it anyway.
        let mut e = engine(3, 3, Point::rc(0, 0), Point::rc(2, 2), &[]);
        e.step().unwrap();
        e.step().unwrap();
        let n = e.node(Point::rc(0, 1)).unwrap();
        assert_eq!(n.g, 24);
        assert_eq!(n.parent, Some(Point::rc(1, 1)));
    }

    #[test]
    fn improve_only_keeps_better_parent() {
        let grid = GridConfig::new(3, 3, Point::rc(0, 0), Point::rc(2, 2))
            .build([])
            .unwrap();
        let opts = SearchOptions::default().with_relaxation(Relaxation::ImproveOnly);
        let mut e = SearchEngine::with_options(grid, opts).unwrap();
        e.step().unwrap();
        e.step().unwrap();
        let n = e.node(Point::rc(0, 1)).unwrap();
        assert_eq!(n.g, 10);
        assert_eq!(n.parent, Some(Point::rc(0, 0)));
    }

    #[test]
    fn start_offset_cost_ignores_route() {
        let grid = GridConfig::new(3, 3, Point::rc(0, 0), Point::rc(2, 2))
            .build([])
            .unwrap();
        let opts = SearchOptions::default().with_path_cost(PathCost::StartOffset);
        let mut e = SearchEngine::with_options(grid, opts).unwrap();
        e.step().unwrap();
        assert_eq!(e.node(Point::rc(1, 1)).unwrap().g, 20);
        let report = e.start_search().unwrap();
        assert!(report.succeeded());
        assert_eq!(report.path.unwrap().goal(), Some(Point::rc(2, 2)));
    }

    #[test]
    fn enclosed_start_fails() {
        let walls = [Point::rc(0, 1), Point::rc(1, 0), Point::rc(1, 1)];
        let mut e = engine(5, 5, Point::rc(0, 0), Point::rc(4, 4), &walls);
        let report = e.start_search().unwrap();
        assert_eq!(report.state, SearchState::Failed);
        assert_eq!(report.path, None);
        assert_eq!(report.expanded, 1);
        assert_eq!(e.path(), None);
    }

    #[test]
    fn terminal_engine_is_idempotent() {
        let mut e = engine(4, 4, Point::rc(0, 0), Point::rc(3, 3), &[]);
        let first = e.start_search().unwrap();
        let pops = e.report().pops;
        assert_eq!(e.step().unwrap(), SearchState::Succeeded);
        let second = e.start_search().unwrap();
        assert_eq!(first, second);
        assert_eq!(e.report().pops, pops);
    }

    #[test]
    fn budget_exhausts_search() {
        let grid = GridConfig::default().build([]).unwrap();
        let opts = SearchOptions::default().with_step_budget(3);
        let mut e = SearchEngine::with_options(grid, opts).unwrap();
        let report = e.start_search().unwrap();
        assert_eq!(report.state, SearchState::Exhausted);
        assert_eq!(report.pops, 3);
        assert!(report.path.is_none());
        assert!(e.state().is_terminal());
    }

    #[test]
    fn zero_budget_never_pops() {
        let grid = GridConfig::default().build([]).unwrap();
        let opts = SearchOptions::default().with_step_budget(0);
        let mut e = SearchEngine::with_options(grid, opts).unwrap();
        assert_eq!(e.step().unwrap(), SearchState::Exhausted);
        assert_eq!(e.frontier_len(), 1);
    }

    #[test]
    fn cell_states_after_success() {
        let mut e = engine(3, 3, Point::rc(0, 0), Point::rc(2, 2), &[Point::rc(0, 2)]);
        e.start_search().unwrap();
        assert_eq!(e.cell_state(Point::rc(0, 0)), Some(CellState::Start));
        assert_eq!(e.cell_state(Point::rc(2, 2)), Some(CellState::Goal));
        assert_eq!(e.cell_state(Point::rc(1, 1)), Some(CellState::OnPath));
        assert_eq!(e.cell_state(Point::rc(0, 2)), Some(CellState::Blocked));
        assert_eq!(e.cell_state(Point::rc(2, 0)), Some(CellState::Free));
        assert_eq!(e.cell_state(Point::rc(3, 0)), None);
        let states: Vec<_> = e.cell_states().collect();
        assert_eq!(states.len(), 9);
        assert_eq!(
            states.iter().filter(|(_, s)| *s == CellState::OnPath).count(),
            1
        );
    }

    #[test]
    fn visited_cells_are_tagged() {
        // Wall across column 1 except the bottom row forces a detour.
        let walls = [Point::rc(0, 1), Point::rc(1, 1)];
        let mut e = engine(3, 3, Point::rc(0, 0), Point::rc(0, 2), &walls);
        let report = e.start_search().unwrap();
        assert!(report.succeeded());
        let path = report.path.unwrap();
        assert!(path.contains(Point::rc(2, 1)));
        for (p, s) in e.cell_states() {
            if s == CellState::Visited {
                assert!(e.is_visited(p));
                assert!(!path.contains(p));
            }
        }
        assert_eq!(e.visited().count(), e.visited_count());
    }

    #[test]
    fn octile_finds_optimal_detour() {
        let walls = [Point::rc(1, 1), Point::rc(1, 2), Point::rc(1, 3)];
        let grid = GridConfig::new(4, 5, Point::rc(0, 2), Point::rc(3, 2))
            .build(walls)
            .unwrap();
        let mut e = SearchEngine::with_options(grid, SearchOptions::optimal()).unwrap();
        let path = e.start_search().unwrap().path.unwrap();
        // (0,2) -> (0,3) -> (1,4) -> (2,3) -> (3,2): 10 + 14 + 14 + 14
        assert_eq!(path.cost(), 52);
        assert_eq!(e.options().heuristic, Heuristic::Octile);
    }

    #[test]
    fn into_grid_returns_untouched_grid() {
        let grid = GridConfig::new(3, 3, Point::rc(0, 0), Point::rc(2, 2))
            .build([Point::rc(1, 0)])
            .unwrap();
        let copy = grid.clone();
        let mut e = SearchEngine::new(grid).unwrap();
        e.start_search().unwrap();
        assert_eq!(e.grid(), &copy);
        assert_eq!(e.into_grid(), copy);
    }

    #[test]
    fn report_state_display() {
        assert_eq!(SearchState::Succeeded.to_string(), "succeeded");
        assert!(!SearchState::Running.is_terminal());
        assert!(SearchState::Failed.is_terminal());
    }
}
