//! Value types shared by the board model: squares, sides, and masks.
//!
//! The board is a fixed 5x4 grid. Squares are indexed `5 * y + x`, so a whole
//! side fits in the low 20 bits of a `SquareMask`.

use std::fmt;

pub const BOARD_WIDTH: u8 = 5;
pub const BOARD_HEIGHT: u8 = 4;
pub const SQUARE_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);
pub const PIECES_PER_SIDE: usize = 4;

/// One bit per square, `1 << (5 * y + x)`. Only the low 20 bits are used.
pub type SquareMask = u32;

pub const FULL_MASK: SquareMask = (1 << SQUARE_COUNT) - 1;

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Panics when the coordinates fall outside the 5x4 board.
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        assert!(
            x < BOARD_WIDTH && y < BOARD_HEIGHT,
            "position ({x}, {y}) is outside the {BOARD_WIDTH}x{BOARD_HEIGHT} board"
        );
        Self { x, y }
    }

    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        if (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        BOARD_WIDTH * self.y + self.x
    }

    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < SQUARE_COUNT, "square index {index} out of range");
        Self {
            x: index % BOARD_WIDTH,
            y: index / BOARD_WIDTH,
        }
    }

    #[inline]
    pub const fn mask(self) -> SquareMask {
        1 << self.index()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// All four pieces of one side.
pub type PiecesPosition = [Position; PIECES_PER_SIDE];

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn from_white_to_move(white_to_move: bool) -> Self {
        if white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Occupant of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareLabel {
    White,
    Black,
    Empty,
}

/// Iterate the set square indices of a mask in increasing order.
#[inline]
pub fn mask_squares(mut mask: SquareMask) -> impl Iterator<Item = u8> {
    std::iter::from_fn(move || {
        if mask == 0 {
            None
        } else {
            let sq = mask.trailing_zeros() as u8;
            mask &= mask - 1;
            Some(sq)
        }
    })
}
