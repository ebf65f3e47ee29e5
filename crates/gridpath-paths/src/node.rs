use gridpath_core::Point;

/// Sentinel cost meaning "not discovered yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-cell search bookkeeping.
///
/// `parent` is a back-pointer by coordinate into the same grid. It never
/// owns anything and is only followed during path reconstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Cost of the best known route from the start.
    pub g: i32,
    /// Estimated remaining cost to the goal.
    pub h: i32,
    /// `g + h`, the expansion priority.
    pub f: i32,
    pub parent: Option<Point>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            parent: None,
        }
    }
}

impl Node {
    /// Whether the search has assigned a cost to this cell.
    #[inline]
    pub fn is_discovered(&self) -> bool {
        self.g != UNREACHABLE
    }

    /// Overwrite the cost fields and parent in one go.
    #[inline]
    pub(crate) fn update(&mut self, g: i32, h: i32, parent: Option<Point>) {
        self.g = g;
        self.h = h;
        self.f = g + h;
        self.parent = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_undiscovered() {
        let n = Node::default();
        assert!(!n.is_discovered());
        assert_eq!(n.parent, None);
    }

    #[test]
    fn update_sets_f() {
        let mut n = Node::default();
        n.update(24, 30, Some(Point::rc(1, 1)));
        assert!(n.is_discovered());
        assert_eq!(n.f, 54);
        assert_eq!(n.parent, Some(Point::rc(1, 1)));
    }
}
