//! Core Connect Four game logic: board and placement rules, players, and the
//! turn-enforcing engine.

mod board;
mod moves;
mod player;
mod shared;
mod state;

pub use board::{Axis, Board, Direction, Mark, COLS, ROWS, WIN_LENGTH};
pub use moves::MoveRecord;
pub use player::Player;
pub use shared::SharedGame;
pub use state::{GameEngine, GameStatus, MoveOutcome};
