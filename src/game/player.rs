use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Mark;

/// A participant: an id plus the mark it plays. Two players are the same
/// player when both fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: i64,
    mark: Mark,
}

impl Player {
    pub fn new(id: i64, mark: Mark) -> Self {
        Player { id, mark }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Same player with a different id
    pub fn with_id(self, id: i64) -> Self {
        Player { id, ..self }
    }

    /// Same player with a different mark
    pub fn with_mark(self, mark: Mark) -> Self {
        Player { mark, ..self }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} ({})", self.id, self.mark.name())
    }
}
