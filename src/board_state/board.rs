//! Packed board representation for the four bishops puzzle.
//!
//! A `Board` is a single 40-bit occupancy record: bits `0..20` hold the white
//! pieces and bits `20..40` hold the black pieces, one bit per square. The
//! record doubles as the state key the search engine hashes on.

use crate::board_state::board_types::*;
use crate::move_generation::next_boards::generate_next_boards;

const BLACK_SHIFT: u32 = SQUARE_COUNT as u32;
const SIDE_MASK: u64 = FULL_MASK as u64;

/// One arrangement of four white and four black bishops.
///
/// Boards are immutable; moving a piece produces a new `Board`. The side to
/// move is not part of the board and is supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    key: u64,
}

impl Default for Board {
    /// White fills the `x = 0` column, black fills the `x = 4` column.
    fn default() -> Self {
        let white = [0, 1, 2, 3].map(|y| Position::new(0, y));
        let black = [0, 1, 2, 3].map(|y| Position::new(BOARD_WIDTH - 1, y));
        Self::new(white, black)
    }
}

impl Board {
    /// Build a board from both sides' pieces.
    ///
    /// Panics if any square appears twice, within one side or across sides.
    pub fn new(white: PiecesPosition, black: PiecesPosition) -> Self {
        let mut seen: SquareMask = 0;
        let mut place = |pieces: &PiecesPosition| -> SquareMask {
            let mut side: SquareMask = 0;
            for pos in pieces {
                let bit = pos.mask();
                assert!(seen & bit == 0, "square {pos} is occupied twice");
                seen |= bit;
                side |= bit;
            }
            side
        };

        let white_mask = place(&white);
        let black_mask = place(&black);
        Self::from_occupancy(white_mask, black_mask)
    }

    /// Reinterpret a key produced by [`Board::to_key`]. No validation.
    #[inline]
    pub const fn from_key(key: u64) -> Self {
        Self { key }
    }

    #[inline]
    pub(crate) fn from_occupancy(white: SquareMask, black: SquareMask) -> Self {
        debug_assert_eq!(white & black, 0, "white and black share a square");
        Self {
            key: (white as u64) | ((black as u64) << BLACK_SHIFT),
        }
    }

    #[inline]
    pub const fn to_key(self) -> u64 {
        self.key
    }

    /// The 20-bit sub-record of one side.
    #[inline]
    pub fn occupancy(self, color: Color) -> SquareMask {
        match color {
            Color::White => (self.key & SIDE_MASK) as SquareMask,
            Color::Black => ((self.key >> BLACK_SHIFT) & SIDE_MASK) as SquareMask,
        }
    }

    #[inline]
    pub fn occupancy_all(self) -> SquareMask {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    /// Decode one side into four positions sorted by square index.
    ///
    /// Panics if the side does not hold exactly four pieces.
    pub fn pieces(self, color: Color) -> PiecesPosition {
        let mask = self.occupancy(color);
        assert_eq!(
            mask.count_ones() as usize,
            PIECES_PER_SIDE,
            "{color} must have exactly {PIECES_PER_SIDE} pieces, board key {:#x}",
            self.key
        );

        let mut out = [Position { x: 0, y: 0 }; PIECES_PER_SIDE];
        for (slot, sq) in out.iter_mut().zip(mask_squares(mask)) {
            *slot = Position::from_index(sq);
        }
        out
    }

    #[inline]
    pub fn white_positions(self) -> PiecesPosition {
        self.pieces(Color::White)
    }

    #[inline]
    pub fn black_positions(self) -> PiecesPosition {
        self.pieces(Color::Black)
    }

    pub fn square_label(self, pos: Position) -> SquareLabel {
        let bit = pos.mask();
        if self.occupancy(Color::White) & bit != 0 {
            SquareLabel::White
        } else if self.occupancy(Color::Black) & bit != 0 {
            SquareLabel::Black
        } else {
            SquareLabel::Empty
        }
    }

    /// Same squares with the colors exchanged.
    #[inline]
    pub fn swapped(self) -> Self {
        Self::from_occupancy(self.occupancy(Color::Black), self.occupancy(Color::White))
    }

    /// Every board reachable by one legal move of `mover`.
    pub fn next_boards(&self, mover: Color) -> Vec<Board> {
        let mut out = Vec::with_capacity(16);
        generate_next_boards(*self, mover, &mut out);
        out
    }

    #[inline]
    pub fn next_boards_for(&self, white_to_move: bool) -> Vec<Board> {
        self.next_boards(Color::from_white_to_move(white_to_move))
    }
}
