//! Error taxonomy shared by grid setup and path reconstruction.

use thiserror::Error;

use crate::geom::{Point, Range};

/// Convenient result alias for gridpath operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
///
/// Configuration errors are raised eagerly while the grid is being set up,
/// before any search step runs. A search that finds no route is *not* an
/// error; it ends in the `Failed` state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A coordinate lies outside the grid.
    #[error("coordinate {point} is outside the {bounds} grid")]
    InvalidCoordinate { point: Point, bounds: Range },

    /// Start/goal/obstacle assignments contradict each other.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// Parent links did not lead back to the start cell.
    ///
    /// This is an internal invariant violation, never a consequence of input.
    #[error("broken parent chain at {at}")]
    BrokenChain { at: Point },
}

/// Reasons for [`Error::InvalidConfiguration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("start cell {0} is blocked")]
    StartBlocked(Point),

    #[error("goal cell {0} is blocked")]
    GoalBlocked(Point),

    #[error("start and goal are the same cell {0}")]
    StartIsGoal(Point),

    /// An obstacle batch tried to block the start or goal cell.
    #[error("cannot block endpoint cell {0}")]
    BlockedEndpoint(Point),

    #[error("no start cell has been set")]
    MissingStart,

    #[error("no goal cell has been set")]
    MissingGoal,

    /// Stored cells do not fill the grid bounds.
    #[error("{cells} cells do not fill a {bounds} grid")]
    Shape { bounds: Range, cells: usize },

    /// A cell's role disagrees with the recorded start and goal.
    #[error("cell {0} carries the wrong endpoint role")]
    RoleMismatch(Point),
}

impl Error {
    /// Whether this error was caused by caller input rather than a defect.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::BrokenChain { .. })
    }
}
