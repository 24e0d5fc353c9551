use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{GameEngine, GameStatus, MoveOutcome, Player};

/// Cloneable handle to one [`GameEngine`] for use across threads.
///
/// Each call holds a single lock for its whole duration, so the status and
/// turn checks in [`GameEngine::make_move`] are atomic with the update that
/// follows them.
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedGame {
    pub fn new(engine: GameEngine) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // The engine only mutates after all validation passes, so a poisoned
    // lock still guards a consistent game.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn make_move(&self, player: Player, column: i32) -> MoveOutcome {
        self.lock().make_move(player, column)
    }

    pub fn status(&self) -> GameStatus {
        self.lock().status()
    }

    pub fn current_player(&self) -> Player {
        self.lock().current_player()
    }

    pub fn winner(&self) -> Option<Player> {
        self.lock().winner()
    }

    /// Copy of the engine as it is right now
    pub fn snapshot(&self) -> GameEngine {
        self.lock().clone()
    }
}
