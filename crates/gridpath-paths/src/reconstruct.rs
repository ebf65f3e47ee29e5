//! Turning parent links into a [`Path`].

use gridpath_core::{Error, Grid, Point, Result, Role};

use crate::distance::move_cost;
use crate::node::Node;

/// A route from start to goal, both endpoints included.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
}

impl Path {
    /// Build a path from consecutive neighbouring points. The cost is the sum
    /// of the step costs.
    pub fn from_points(points: Vec<Point>) -> Self {
        let cost = points.windows(2).map(|w| move_cost(w[0], w[1])).sum();
        Self { points, cost }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total movement cost (10 per cardinal step, 14 per diagonal step).
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Cells strictly between the endpoints.
    pub fn interior(&self) -> &[Point] {
        match self.points.len() {
            0..=2 => &[],
            n => &self.points[1..n - 1],
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Walks parent links from the goal back to the start.
pub struct PathReconstructor<'a> {
    grid: &'a Grid,
    nodes: &'a [Node],
}

impl<'a> PathReconstructor<'a> {
    /// `nodes` must be indexed like the grid's cells.
    pub fn new(grid: &'a Grid, nodes: &'a [Node]) -> Self {
        Self { grid, nodes }
    }

    /// Follow parents from `goal` until a start-role cell is reached.
    ///
    /// Returns [`Error::BrokenChain`] if a non-start cell has no parent, a
    /// link leaves the grid, or the chain is longer than the grid has cells
    /// (a cycle).
    pub fn reconstruct(&self, goal: Point) -> Result<Path> {
        let limit = self.grid.len();
        let mut points = vec![goal];
        let mut cur = goal;
        loop {
            let Some(cell) = self.grid.at(cur) else {
                return Err(Error::BrokenChain { at: cur });
            };
            if cell.role == Role::Start {
                break;
            }
            let parent = self
                .grid
                .bounds()
                .index(cur)
                .and_then(|i| self.nodes.get(i))
                .and_then(|n| n.parent);
            let Some(parent) = parent else {
                return Err(Error::BrokenChain { at: cur });
            };
            if points.len() >= limit {
                return Err(Error::BrokenChain { at: cur });
            }
            points.push(parent);
            cur = parent;
        }
        points.reverse();
        Ok(Path::from_points(points))
    }
}
