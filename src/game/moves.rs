use super::board::Mark;

/// Outcome of one placement attempt on a [`Board`](super::Board).
///
/// A failed attempt has row `-1` and keeps the column it was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    mark: Mark,
    row: i32,
    column: i32,
    success: bool,
}

impl MoveRecord {
    pub(crate) fn placed(mark: Mark, row: usize, column: usize) -> Self {
        MoveRecord {
            mark,
            row: row as i32,
            column: column as i32,
            success: true,
        }
    }

    pub(crate) fn rejected(mark: Mark, column: i32) -> Self {
        MoveRecord {
            mark,
            row: -1,
            column,
            success: false,
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    /// `(row, column)` of the attempt
    pub fn position(&self) -> (i32, i32) {
        (self.row, self.column)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Cell the tile landed in, if it was placed
    pub fn landing(&self) -> Option<(usize, usize)> {
        if !self.success {
            return None;
        }
        Some((self.row as usize, self.column as usize))
    }
}
