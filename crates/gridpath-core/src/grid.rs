//! The [`Grid`] type — a fixed-size 2D array of [`Cell`]s with one start and
//! one goal.
//!
//! All setup calls validate eagerly: a call that returns an error leaves the
//! grid exactly as it was.

use crate::cell::{Cell, Role};
use crate::error::{ConfigError, Error, Result};
use crate::geom::{Point, Range};

/// A `rows × cols` grid of [`Cell`]s.
///
/// With the `serde` feature, deserialization replays the setup checks, so a
/// decoded grid satisfies the same invariants as one built in code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    bounds: Range,
    cells: Vec<Cell>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Grid {
    /// Create a new grid with every cell free. Negative dimensions are
    /// clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::new(0, 0, cols.max(0), rows.max(0));
        Self {
            bounds,
            cells: vec![Cell::FREE; bounds.len()],
            start: None,
            goal: None,
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Read the cell at `p`, or `None` if `p` is outside the grid.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is blocked. Out-of-bounds points count as blocked.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p).is_none_or(|c| c.blocked)
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Both endpoints, or the configuration error naming the missing one.
    pub fn endpoints(&self) -> Result<(Point, Point)> {
        let start = self.start.ok_or(ConfigError::MissingStart)?;
        let goal = self.goal.ok_or(ConfigError::MissingGoal)?;
        Ok((start, goal))
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.blocked).count()
    }

    /// Flat index of `p`, or [`Error::InvalidCoordinate`].
    pub fn index_of(&self, p: Point) -> Result<usize> {
        self.bounds.index(p).ok_or(Error::InvalidCoordinate {
            point: p,
            bounds: self.bounds,
        })
    }

    /// Mark every coordinate in `coords` impassable.
    ///
    /// The batch is checked as a whole first: an out-of-bounds coordinate
    /// yields [`Error::InvalidCoordinate`], and a coordinate naming the start
    /// or goal yields [`ConfigError::BlockedEndpoint`]. On error no cell is
    /// modified.
    pub fn set_blocked<I>(&mut self, coords: I) -> Result<()>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut idxs = Vec::new();
        for p in coords {
            let i = self.index_of(p)?;
            if self.cells[i].is_endpoint() {
                return Err(ConfigError::BlockedEndpoint(p).into());
            }
            idxs.push(i);
        }
        for i in idxs {
            self.cells[i].blocked = true;
        }
        Ok(())
    }

    /// Make the start cell `p`. A previous start reverts to a plain cell.
    pub fn set_start(&mut self, p: Point) -> Result<()> {
        let i = self.index_of(p)?;
        if self.cells[i].blocked {
            return Err(ConfigError::StartBlocked(p).into());
        }
        if self.goal == Some(p) {
            return Err(ConfigError::StartIsGoal(p).into());
        }
        self.assign(Role::Start, p, i);
        Ok(())
    }

    /// Make the goal cell `p`. A previous goal reverts to a plain cell.
    pub fn set_goal(&mut self, p: Point) -> Result<()> {
        let i = self.index_of(p)?;
        if self.cells[i].blocked {
            return Err(ConfigError::GoalBlocked(p).into());
        }
        if self.start == Some(p) {
            return Err(ConfigError::StartIsGoal(p).into());
        }
        self.assign(Role::Goal, p, i);
        Ok(())
    }

    fn assign(&mut self, role: Role, p: Point, i: usize) {
        let slot = match role {
            Role::Start => &mut self.start,
            Role::Goal => &mut self.goal,
            Role::None => return,
        };
        if let Some(old) = slot.replace(p) {
            if let Some(oi) = self.bounds.index(old) {
                self.cells[oi].role = Role::None;
            }
        }
        self.cells[i].role = role;
    }

    /// Up to eight in-bounds neighbours of `p` (cardinal and diagonal), in
    /// the clockwise order of [`Point::neighbors_8`]. No wraparound.
    pub fn neighbors8(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_8()
            .into_iter()
            .filter(move |&n| self.bounds.contains(n))
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    bounds: Range,
    cells: Vec<Cell>,
    start: Option<Point>,
    goal: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let RawGrid {
            bounds,
            cells,
            start,
            goal,
        } = raw;
        if bounds.min != Point::ZERO
            || bounds.width() < 0
            || bounds.height() < 0
            || cells.len() != bounds.len()
        {
            return Err(ConfigError::Shape {
                bounds,
                cells: cells.len(),
            }
            .into());
        }
        let mut grid = Grid::new(bounds.height(), bounds.width());
        grid.set_blocked(
            bounds
                .iter()
                .zip(&cells)
                .filter(|(_, c)| c.blocked)
                .map(|(p, _)| p),
        )?;
        if let Some(p) = start {
            grid.set_start(p)?;
        }
        if let Some(p) = goal {
            grid.set_goal(p)?;
        }
        if let Some(((p, _), _)) = grid
            .iter()
            .zip(&cells)
            .find(|((_, rebuilt), stored)| rebuilt.role != stored.role)
        {
            return Err(ConfigError::RoleMismatch(p).into());
        }
        Ok(grid)
    }
}
