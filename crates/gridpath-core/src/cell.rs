//! The [`Cell`] type — traversability plus the endpoint role of one grid square.

/// Endpoint role of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    None,
    Start,
    Goal,
}

/// A grid square: impassable or not, and whether it is the start or goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub blocked: bool,
    pub role: Role,
}

impl Cell {
    /// A free, role-less cell.
    pub const FREE: Self = Self {
        blocked: false,
        role: Role::None,
    };

    /// Set the blocked flag (builder).
    #[inline]
    pub const fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Set the role (builder).
    #[inline]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Whether a path may pass through this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !self.blocked
    }

    #[inline]
    pub fn is_endpoint(self) -> bool {
        self.role != Role::None
    }
}
