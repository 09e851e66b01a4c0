//! Plain-text board renderer.
//!
//! Rows are printed from `y = 3` down to `y = 0`, one cell per square.

use std::fmt;

use crate::board_state::board::Board;
use crate::board_state::board_types::{Position, SquareLabel, BOARD_HEIGHT, BOARD_WIDTH};

/// Render the board as an ASCII grid with `W`, `B` and blank cells.
pub fn render_board(board: &Board) -> String {
    let separator = format!("+{}", "---+".repeat(BOARD_WIDTH as usize));
    let mut out = String::new();

    out.push_str(&separator);
    out.push('\n');

    for y in (0..BOARD_HEIGHT).rev() {
        for x in 0..BOARD_WIDTH {
            out.push_str("| ");
            out.push(label_char(board.square_label(Position::new(x, y))));
            out.push(' ');
        }
        out.push_str("|\n");
        out.push_str(&separator);
        out.push('\n');
    }

    out
}

fn label_char(label: SquareLabel) -> char {
    match label {
        SquareLabel::White => 'W',
        SquareLabel::Black => 'B',
        SquareLabel::Empty => ' ',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board_state::board::Board;

    #[test]
    fn default_board_renders_columns() {
        let expected = "\
+---+---+---+---+---+
| W |   |   |   | B |
+---+---+---+---+---+
| W |   |   |   | B |
+---+---+---+---+---+
| W |   |   |   | B |
+---+---+---+---+---+
| W |   |   |   | B |
+---+---+---+---+---+
";
        assert_eq!(render_board(&Board::default()), expected);
    }

    #[test]
    fn top_row_is_highest_y() {
        let board = Board::default().next_boards_for(true)[3];
        let rendered = board.to_string();
        let rows: Vec<&str> = rendered.lines().collect();
        // White moved (0, 3) -> (1, 2), so row y = 2 is the second cell row.
        assert_eq!(rows[1], "|   |   |   |   | B |");
        assert_eq!(rows[3], "| W | W |   |   | B |");
    }
}
