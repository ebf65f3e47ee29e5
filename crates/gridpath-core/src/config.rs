//! Grid dimensions and endpoints supplied by the caller.

use crate::error::Result;
use crate::geom::Point;
use crate::grid::Grid;

/// Dimensions and endpoints of a search grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub goal: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 15,
            start: Point::rc(0, 0),
            goal: Point::rc(14, 14),
        }
    }
}

impl GridConfig {
    pub fn new(rows: i32, cols: i32, start: Point, goal: Point) -> Self {
        Self {
            rows,
            cols,
            start,
            goal,
        }
    }

    pub fn cell_count(&self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    /// Build a grid with the configured endpoints and the given obstacles.
    ///
    /// Endpoints are placed before obstacles, so an obstacle set that covers
    /// the start or goal is rejected rather than silently accepted.
    pub fn build<I>(&self, obstacles: I) -> Result<Grid>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut grid = Grid::new(self.rows, self.cols);
        grid.set_start(self.start)?;
        grid.set_goal(self.goal)?;
        grid.set_blocked(obstacles)?;
        Ok(grid)
    }
}
