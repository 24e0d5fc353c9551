use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use super::moves::MoveRecord;
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-mark cells in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// A player's piece. An empty cell is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Red,
    Yellow,
}

impl Mark {
    /// Get the opposing mark
    pub fn other(self) -> Mark {
        match self {
            Mark::Red => Mark::Yellow,
            Mark::Yellow => Mark::Red,
        }
    }

    /// Mark name for display
    pub fn name(self) -> &'static str {
        match self {
            Mark::Red => "Red",
            Mark::Yellow => "Yellow",
        }
    }

    /// Single-character symbol used in text rendering
    pub fn symbol(self) -> char {
        match self {
            Mark::Red => 'R',
            Mark::Yellow => 'Y',
        }
    }
}

/// A step on the grid, in rows and columns. Passed by value everywhere, so a
/// probe can never alter the direction its caller holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub row: i32,
    pub col: i32,
}

impl Direction {
    pub const fn new(row: i32, col: i32) -> Self {
        Direction { row, col }
    }

    /// The same line walked the other way.
    pub const fn reversed(self) -> Self {
        Direction {
            row: -self.row,
            col: -self.col,
        }
    }
}

/// The four lines a win can lie along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Down and to the right as rows grow.
    Diagonal,
    /// Up and to the right as rows shrink.
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Unit step in the positive sense of this axis
    pub const fn direction(self) -> Direction {
        match self {
            Axis::Horizontal => Direction::new(0, 1),
            Axis::Vertical => Direction::new(1, 0),
            Axis::Diagonal => Direction::new(1, 1),
            Axis::AntiDiagonal => Direction::new(-1, 1),
        }
    }
}

/// Connect Four grid. Row 0 is the top, row `rows - 1` is the bottom where
/// tiles land first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells.
    cells: Vec<Option<Mark>>,
    filled: usize,
}

impl Board {
    /// Create a new empty 6x7 board
    pub fn new() -> Self {
        Board {
            rows: ROWS,
            cols: COLS,
            cells: vec![None; ROWS * COLS],
            filled: 0,
        }
    }

    /// Create an empty board of the given size
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyGrid);
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
            filled: 0,
        })
    }

    /// Build a board from a pre-populated grid, indexed `grid[row][col]`.
    ///
    /// The fill count is recounted from the grid. The grid must be
    /// rectangular and every mark must rest on a filled cell or the bottom row.
    pub fn from_grid(grid: Vec<Vec<Option<Mark>>>) -> Result<Self, BoardError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in grid.into_iter().enumerate() {
            if line.len() != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        let board = Board {
            rows,
            cols,
            filled: cells.iter().filter(|cell| cell.is_some()).count(),
            cells,
        };

        for row in 0..rows - 1 {
            for col in 0..cols {
                if board.get(row, col).is_some() && board.get(row + 1, col).is_none() {
                    return Err(BoardError::FloatingTile { row, col });
                }
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Get the cell at a specific position; out-of-range positions are empty
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Copy of the grid, indexed `[row][col]`
    pub fn grid(&self) -> Vec<Vec<Option<Mark>>> {
        self.cells.chunks(self.cols).map(<[_]>::to_vec).collect()
    }

    /// Lowest empty row in `column`, or `None` if the column is full or does
    /// not exist.
    pub fn last_available(&self, column: i32) -> Option<usize> {
        let col = usize::try_from(column).ok().filter(|&c| c < self.cols)?;
        (0..self.rows).rev().find(|&row| self.get(row, col).is_none())
    }

    /// Drop `mark` into `column`. A full or nonexistent column yields an
    /// unsuccessful record and leaves the board untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn make_move(&mut self, mark: Mark, column: i32) -> MoveRecord {
        let Some(row) = self.last_available(column) else {
            trace!("no landing row");
            return MoveRecord::rejected(mark, column);
        };

        // last_available only succeeds for an in-range, non-negative column
        let col = column as usize;
        self.cells[row * self.cols + col] = Some(mark);
        self.filled += 1;
        MoveRecord::placed(mark, row, col)
    }

    /// Check if the placement described by `record` completed a line of four
    /// or more.
    pub fn check_win(&self, record: &MoveRecord) -> bool {
        let Some(position) = record.landing() else {
            return false;
        };

        Axis::ALL.iter().any(|axis| {
            let direction = axis.direction();
            let count = 1
                + self.tile_count(direction, record.mark(), true, position)
                + self.tile_count(direction, record.mark(), false, position);
            count >= WIN_LENGTH
        })
    }

    /// Count consecutive cells holding `mark` when stepping from `position`
    /// along `direction` (or against it when `positive` is false). At most
    /// `WIN_LENGTH` steps are taken; the starting cell is not counted.
    pub fn tile_count(
        &self,
        direction: Direction,
        mark: Mark,
        positive: bool,
        position: (usize, usize),
    ) -> usize {
        let step = if positive {
            direction
        } else {
            direction.reversed()
        };

        let (mut row, mut col) = (position.0 as i64, position.1 as i64);
        let mut count = 0;
        for _ in 0..WIN_LENGTH {
            row += i64::from(step.row);
            col += i64::from(step.col);
            if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
                break;
            }
            if self.get(row as usize, col as usize) != Some(mark) {
                break;
            }
            count += 1;
        }
        count
    }

    /// Check if the board is completely full
    pub fn check_draw(&self) -> bool {
        self.filled == self.rows * self.cols
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = self.get(row, col).map_or('.', Mark::symbol);
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
