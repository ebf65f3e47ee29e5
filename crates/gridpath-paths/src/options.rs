use crate::distance::Heuristic;

/// What to do when an unvisited cell is reached again from a new parent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Relaxation {
    /// Always take the latest parent and cost, even if worse.
    #[default]
    Overwrite,
    /// Only take the new parent if it strictly lowers `g`.
    ImproveOnly,
}

/// How `g` is computed for a newly reached cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PathCost {
    /// `g(parent) + step cost`.
    #[default]
    Accumulated,
    /// Manhattan offset from the start times 10, regardless of the route.
    StartOffset,
}

/// Tuning knobs for [`SearchEngine`](crate::SearchEngine).
///
/// The defaults reproduce the classic board behaviour: scaled Manhattan
/// heuristic, unconditional overwrite on rediscovery, accumulated `g`, no
/// step limit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    pub heuristic: Heuristic,
    pub relaxation: Relaxation,
    pub path_cost: PathCost,
    /// Maximum number of frontier pops before giving up.
    pub step_budget: Option<usize>,
}

impl SearchOptions {
    /// Octile heuristic with improve-only relaxation: returns optimal paths.
    pub fn optimal() -> Self {
        Self {
            heuristic: Heuristic::Octile,
            relaxation: Relaxation::ImproveOnly,
            ..Self::default()
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    pub fn with_path_cost(mut self, path_cost: PathCost) -> Self {
        self.path_cost = path_cost;
        self
    }

    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = Some(budget);
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn options_from_partial_json() {
        let opts: SearchOptions =
            serde_json::from_str(r#"{"heuristic": "octile", "step_budget": 500}"#).unwrap();
        assert_eq!(opts.heuristic, Heuristic::Octile);
        assert_eq!(opts.relaxation, Relaxation::Overwrite);
        assert_eq!(opts.step_budget, Some(500));
    }
}
