use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::board_view::render_board;
use crate::error::ConsoleError;
use crate::game::{GameEngine, GameStatus};

pub const INVALID_INPUT_MESSAGE: &str = "Please enter a column number.";

/// Line-oriented front end: reads a column per line and prints the engine's
/// reply verbatim.
pub struct ConsoleApp {
    engine: GameEngine,
}

impl ConsoleApp {
    pub fn new(engine: GameEngine) -> Self {
        ConsoleApp { engine }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Main application loop. Returns when the game ends or input runs out.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<(), ConsoleError> {
        let mut line = String::new();

        while self.engine.status() == GameStatus::InProgress {
            write!(output, "{}", render_board(self.engine.board()))?;
            let current = self.engine.current_player();
            write!(
                output,
                "Player {}, enter column (0-{}): ",
                current.id(),
                self.engine.board().cols() - 1
            )?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("input closed before the game ended");
                writeln!(output)?;
                return Ok(());
            }

            let Ok(column) = line.trim().parse::<i32>() else {
                debug!(input = line.trim(), "not a column number");
                writeln!(output, "{INVALID_INPUT_MESSAGE}")?;
                continue;
            };

            let outcome = self.engine.make_move(current, column);
            writeln!(output, "{outcome}")?;
        }

        write!(output, "{}", render_board(self.engine.board()))?;
        output.flush()?;
        Ok(())
    }
}
