use crate::game::{Board, Mark};

/// Render the board with a column ruler above it, e.g.
///
/// ```text
///  0 1 2 3 4 5 6
/// |. . . . . . .|
/// |. . . R . . .|
/// +-------------+
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push(' ');
    for col in 0..board.cols() {
        if col > 0 {
            out.push(' ');
        }
        // Columns past 9 show their last digit
        out.push_str(&(col % 10).to_string());
    }
    out.push('\n');

    for row in 0..board.rows() {
        out.push('|');
        for col in 0..board.cols() {
            if col > 0 {
                out.push(' ');
            }
            out.push(board.get(row, col).map_or('.', Mark::symbol));
        }
        out.push_str("|\n");
    }

    out.push('+');
    out.push_str(&"-".repeat(board.cols() * 2 - 1));
    out.push_str("+\n");
    out
}
