//! ID types for NBA stats provider entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for provider player IDs (`PERSON_ID` / `PLAYER_ID`).
///
/// Keeps player IDs from being mixed up with team IDs when building
/// provider queries.
///
/// # Examples
///
/// ```rust
/// use nba_xpt::PlayerId;
///
/// let lebron = PlayerId::new(2544);
/// assert_eq!(lebron.as_u64(), 2544);
/// assert_eq!(lebron.to_string(), "2544");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for provider team IDs (`TEAM_ID`).
///
/// The provider reports `0` for aggregate rows that span several teams,
/// so a zero ID never identifies a real team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

impl TeamId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether this ID refers to an actual franchise.
    pub fn is_real_team(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
