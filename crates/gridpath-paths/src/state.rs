use std::fmt;

/// Display tag of a cell after (or during) a search.
///
/// When several apply, the first matching tag wins in this order:
/// `Start`/`Goal`, `Blocked`, `OnPath`, `Visited`, `Free`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellState {
    Free,
    Blocked,
    Start,
    Goal,
    Visited,
    OnPath,
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellState::Free => "free",
            CellState::Blocked => "blocked",
            CellState::Start => "start",
            CellState::Goal => "goal",
            CellState::Visited => "visited",
            CellState::OnPath => "on_path",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(CellState::OnPath.to_string(), "on_path");
        assert_eq!(CellState::Free.to_string(), "free");
    }
}
