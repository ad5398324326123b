/// Conflict-resolution policy applied during rebase.
///
/// During a rebase the commits being replayed are "theirs" from git's point
/// of view, so keeping local work means resolving with `-X theirs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Stop on conflicts for manual resolution.
    Manual,
    /// Resolve conflicts in favor of local commits.
    LocalWins,
    /// Resolve conflicts in favor of the remote branch.
    RemoteWins,
}

impl SyncStrategy {
    /// All strategies in menu order.
    pub const ALL: [Self; 3] = [Self::Manual, Self::LocalWins, Self::RemoteWins];

    /// Map a menu choice to a strategy; anything but "1"/"2"/"3" is `None`.
    #[must_use]
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Manual),
            "2" => Some(Self::LocalWins),
            "3" => Some(Self::RemoteWins),
            _ => None,
        }
    }

    /// Menu key for this strategy.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Manual => "1",
            Self::LocalWins => "2",
            Self::RemoteWins => "3",
        }
    }

    /// Human-readable label shown in the menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manual => "Safe mode (manual conflict resolution)",
            Self::LocalWins => "Local wins (override remote on conflicts)",
            Self::RemoteWins => "Remote wins (override local on conflicts)",
        }
    }

    /// Extra flags passed to `git rebase`.
    #[must_use]
    pub const fn rebase_flags(self) -> &'static [&'static str] {
        match self {
            Self::Manual => &[],
            Self::LocalWins => &["-X", "theirs"],
            Self::RemoteWins => &["-X", "ours"],
        }
    }
}
