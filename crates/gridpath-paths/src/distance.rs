use gridpath_core::Point;

/// Cost of a horizontal or vertical step.
pub const CARDINAL_COST: i32 = 10;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Octile distance: the exact cost of an unobstructed 8-directional route.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diag = dx.min(dy);
    DIAGONAL_COST * diag + CARDINAL_COST * (dx.max(dy) - diag)
}

/// Cost of a single step between adjacent cells.
///
/// `from` and `to` must be neighbours; diagonal steps cost
/// [`DIAGONAL_COST`], everything else [`CARDINAL_COST`].
#[inline]
pub fn move_cost(from: Point, to: Point) -> i32 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

/// Remaining-cost estimate used to order the frontier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// `(|dcol| + |drow|) * 10`.
    ///
    /// Ignores that a diagonal step covers a row and a column for 14, so it
    /// can overestimate and the returned path is not guaranteed optimal.
    #[default]
    Manhattan,
    /// [`octile`] distance. Admissible and consistent for 10/14 costs.
    Octile,
    /// Always 0, which turns the search into Dijkstra's algorithm.
    Zero,
}

impl Heuristic {
    /// Estimate the cost from `from` to `goal`.
    #[inline]
    pub fn estimate(self, from: Point, goal: Point) -> i32 {
        match self {
            Heuristic::Manhattan => manhattan(from, goal) * CARDINAL_COST,
            Heuristic::Octile => octile(from, goal),
            Heuristic::Zero => 0,
        }
    }

    /// Whether the estimate never exceeds the true remaining cost.
    pub fn is_admissible(self) -> bool {
        !matches!(self, Heuristic::Manhattan)
    }
}
