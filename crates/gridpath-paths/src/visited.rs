//! The closed set.

use gridpath_core::{Point, Range};

/// Cells that have been popped and finalized, keyed by flat index.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    rng: Range,
    marks: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// An empty set covering `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            marks: vec![false; rng.len()],
            count: 0,
        }
    }

    /// Whether `p` has been finalized. Points outside the range never are.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.index(p).is_some_and(|i| self.marks[i])
    }

    /// Insert `p`. Returns `false` if it was already present or lies outside
    /// the range.
    pub fn add(&mut self, p: Point) -> bool {
        let Some(i) = self.rng.index(p) else {
            return false;
        };
        if self.marks[i] {
            return false;
        }
        self.marks[i] = true;
        self.count += 1;
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.marks.fill(false);
        self.count = 0;
    }

    /// Visited points in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m)
            .map(|(i, _)| self.rng.point(i))
    }
}
