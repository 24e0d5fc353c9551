use std::fmt;

use tracing::{debug, info, instrument};

use super::{Board, Player};

/// Lifecycle of a game. `Win` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Win,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::Win => "WIN",
            GameStatus::Draw => "DRAW",
        })
    }
}

/// Result of asking the engine to make a move. Every rejection is an
/// ordinary value; `Display` renders the message shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Tile placed, game continues, turn passed.
    Valid,
    /// The acting player is not the one whose turn it is.
    NotYourTurn,
    /// Column full or outside the board.
    CannotPlace,
    /// The game already ended.
    GameInactive,
    /// The move won the game for the player with this id.
    Winner(i64),
    /// The move filled the board without a win.
    Draw,
}

impl MoveOutcome {
    /// The player-facing message for this outcome
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True if this move ended the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Winner(_) | MoveOutcome::Draw)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Valid => f.write_str("Move was valid"),
            MoveOutcome::NotYourTurn => f.write_str("Player cannot make a move."),
            MoveOutcome::CannotPlace => f.write_str("Cannot place tile in column."),
            MoveOutcome::GameInactive => f.write_str("Game is no longer ACTIVE"),
            MoveOutcome::Winner(id) => write!(f, "Game Ended. Winner is {id}"),
            MoveOutcome::Draw => f.write_str("Game Ended in Draw."),
        }
    }
}

/// Turn and status bookkeeping for one game between two fixed players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    player_one: Player,
    player_two: Player,
    current: Player,
    status: GameStatus,
    winner: Option<Player>,
}

impl GameEngine {
    /// New game on an empty 6x7 board; `player_one` moves first
    pub fn new(player_one: Player, player_two: Player) -> Self {
        Self::with_board(player_one, player_two, Board::new())
    }

    /// New game on a prepared board, e.g. to resume a position
    pub fn with_board(player_one: Player, player_two: Player, board: Board) -> Self {
        GameEngine {
            board,
            player_one,
            player_two,
            current: player_one,
            status: GameStatus::InProgress,
            winner: None,
        }
    }

    pub fn player_one(&self) -> Player {
        self.player_one
    }

    pub fn player_two(&self) -> Player {
        self.player_two
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winning player, only while the status is `Win`
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Win => self.winner,
            _ => None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play `player`'s mark into `column`.
    ///
    /// Rejections leave the game untouched: a finished game, an out-of-turn
    /// player, and a full or nonexistent column are reported in that order.
    /// A placement that both completes a line and fills the board is a win.
    #[instrument(skip(self, player), fields(player = player.id()))]
    pub fn make_move(&mut self, player: Player, column: i32) -> MoveOutcome {
        if self.status != GameStatus::InProgress {
            debug!(status = %self.status, "move after game end");
            return MoveOutcome::GameInactive;
        }

        if player != self.current {
            debug!(current = self.current.id(), "move out of turn");
            return MoveOutcome::NotYourTurn;
        }

        let record = self.board.make_move(player.mark(), column);
        if !record.is_success() {
            debug!("column unavailable");
            return MoveOutcome::CannotPlace;
        }

        if self.board.check_win(&record) {
            self.status = GameStatus::Win;
            self.winner = Some(self.current);
            info!(winner = self.current.id(), "game won");
            return MoveOutcome::Winner(self.current.id());
        }

        if self.board.check_draw() {
            self.status = GameStatus::Draw;
            info!("game drawn");
            return MoveOutcome::Draw;
        }

        self.current = if self.current == self.player_one {
            self.player_two
        } else {
            self.player_one
        };
        MoveOutcome::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Mark;

    fn players() -> (Player, Player) {
        (Player::new(1, Mark::Red), Player::new(2, Mark::Yellow))
    }

    #[test]
    fn test_initial_state() {
        let (p1, p2) = players();
        let engine = GameEngine::new(p1, p2);

        assert_eq!(engine.current_player(), p1);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.player_one(), p1);
        assert_eq!(engine.player_two(), p2);
        assert_eq!(engine.winner(), None);
        assert!(!engine.is_terminal());
    }

    #[test]
    fn test_valid_moves_alternate() {
        let (p1, p2) = players();
        let mut engine = GameEngine::new(p1, p2);

        for _ in 0..2 {
            assert_eq!(engine.make_move(p1, 0), MoveOutcome::Valid);
            assert_eq!(engine.current_player(), p2);
            assert_eq!(engine.make_move(p2, 1), MoveOutcome::Valid);
            assert_eq!(engine.current_player(), p1);
        }
        assert_eq!(engine.board().filled(), 4);
    }

    #[test]
    fn test_equal_player_value_may_move() {
        let (p1, p2) = players();
        let mut engine = GameEngine::new(p1, p2);
        let same_as_p1 = Player::new(1, Mark::Red);
        assert_eq!(engine.make_move(same_as_p1, 3), MoveOutcome::Valid);
    }

    #[test]
    fn test_out_of_turn_changes_nothing() {
        let (p1, p2) = players();
        let mut engine = GameEngine::new(p1, p2);

        assert_eq!(engine.make_move(p1, 0), MoveOutcome::Valid);
        let before = engine.clone();

        let outcome = engine.make_move(p1, 0);
        assert_eq!(outcome, MoveOutcome::NotYourTurn);
        assert_eq!(outcome.message(), "Player cannot make a move.");
        assert_eq!(engine, before);
    }

    #[test]
    fn test_stranger_cannot_move() {
        let (p1, p2) = players();
        let mut engine = GameEngine::new(p1, p2);
        let impostor = Player::new(1, Mark::Yellow);
        assert_eq!(engine.make_move(impostor, 0), MoveOutcome::NotYourTurn);
        assert_eq!(engine.board().filled(), 0);
    }

    #[test]
    fn test_invalid_column_keeps_turn() {
        let (p1, p2) = players();
        let mut engine = GameEngine::new(p1, p2);

        let outcome = engine.make_move(p1, -1);
        assert_eq!(outcome, MoveOutcome::CannotPlace);
        assert_eq!(outcome.message(), "Cannot place tile in column.");
        assert_eq!(engine.make_move(p1, 8), MoveOutcome::CannotPlace);
        assert_eq!(engine.current_player(), p1);

        assert_eq!(engine.make_move(p1, 0), MoveOutcome::Valid);
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let (p1, p2) = players();
        let mut engine = GameEngine::new(p1, p2);
        // Alternating in one column never lines up four
        for i in 0..6 {
            let player = if i % 2 == 0 { p1 } else { p2 };
            assert_eq!(engine.make_move(player, 2), MoveOutcome::Valid);
        }

        assert_eq!(engine.make_move(p1, 2), MoveOutcome::CannotPlace);
        assert_eq!(engine.current_player(), p1);
        assert_eq!(engine.make_move(p1, 3), MoveOutcome::Valid);
    }

    #[test]
    fn test_vertical_win() {
        let (p1, p2) = players();
        let mut engine = GameEngine::new(p1, p2);

        for _ in 0..3 {
            assert_eq!(engine.make_move(p1, 0), MoveOutcome::Valid);
            assert_eq!(engine.make_move(p2, 1), MoveOutcome::Valid);
        }

        let outcome = engine.make_move(p1, 0);
        assert_eq!(outcome, MoveOutcome::Winner(1));
        assert_eq!(outcome.message(), "Game Ended. Winner is 1");
        assert_eq!(engine.status(), GameStatus::Win);
        assert_eq!(engine.winner(), Some(p1));
        assert_eq!(engine.current_player(), p1);
    }

    #[test]
    fn test_terminal_game_rejects_moves() {
        let (p1, p2) = players();
        let mut engine = GameEngine::new(p1, p2);
        for _ in 0..3 {
            engine.make_move(p1, 0);
            engine.make_move(p2, 1);
        }
        engine.make_move(p1, 0);
        let finished = engine.clone();

        for (player, column) in [(p1, 0), (p2, 1), (p2, 6), (p1, -3)] {
            let outcome = engine.make_move(player, column);
            assert_eq!(outcome, MoveOutcome::GameInactive);
            assert_eq!(outcome.message(), "Game is no longer ACTIVE");
        }
        assert_eq!(engine, finished);
    }

    #[test]
    fn test_win_takes_precedence_over_draw() {
        let (p1, p2) = players();
        let r = Some(Mark::Red);
        let y = Some(Mark::Yellow);
        // Red at (0,6) completes column 6 and fills the last cell
        let grid = vec![
            vec![y, y, y, r, y, y, None],
            vec![r, r, r, y, r, r, r],
            vec![y, y, y, r, y, y, r],
            vec![r, r, r, y, r, r, r],
            vec![y, y, y, r, y, y, y],
            vec![r, r, r, y, r, r, r],
        ];
        let board = Board::from_grid(grid).unwrap();
        assert_eq!(board.filled(), 41);
        let mut engine = GameEngine::with_board(p1, p2, board);

        let outcome = engine.make_move(p1, 6);
        assert!(engine.board().check_draw());
        assert_eq!(outcome, MoveOutcome::Winner(1));
        assert_eq!(engine.status(), GameStatus::Win);
        assert_eq!(engine.winner(), Some(p1));
    }

    #[test]
    fn test_draw_on_last_cell() {
        let (p1, p2) = players();
        let r = Some(Mark::Red);
        let y = Some(Mark::Yellow);
        let grid = vec![
            vec![y, y, y, r, y, y, None],
            vec![r, r, r, y, r, r, r],
            vec![y, y, y, r, y, y, y],
            vec![r, r, r, y, r, r, r],
            vec![y, y, y, r, y, y, y],
            vec![r, r, r, y, r, r, r],
        ];
        let board = Board::from_grid(grid).unwrap();
        // Yellow to move
        let mut engine = GameEngine::with_board(p2, p1, board);

        let outcome = engine.make_move(p2, 6);
        assert_eq!(outcome, MoveOutcome::Draw);
        assert_eq!(outcome.message(), "Game Ended in Draw.");
        assert_eq!(engine.status(), GameStatus::Draw);
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_outcome_is_terminal() {
        assert!(MoveOutcome::Winner(3).is_terminal());
        assert!(MoveOutcome::Draw.is_terminal());
        assert!(!MoveOutcome::Valid.is_terminal());
        assert!(!MoveOutcome::CannotPlace.is_terminal());
    }
}
