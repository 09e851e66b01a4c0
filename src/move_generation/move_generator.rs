use crate::board_state::board::Board;
use crate::board_state::board_types::Color;

/// Source of successor boards for the search and counting routines.
pub trait MoveGenerator {
    fn next_boards(&self, board: &Board, mover: Color) -> Vec<Board>;
}

/// The puzzle's rules: non-capturing bishops that avoid threatened squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct BishopMoveGenerator;

impl MoveGenerator for BishopMoveGenerator {
    #[inline]
    fn next_boards(&self, board: &Board, mover: Color) -> Vec<Board> {
        board.next_boards(mover)
    }
}
