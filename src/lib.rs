//! Crate root module declarations for the four bishops puzzle solver.
//!
//! Four white and four black bishops start on opposite edges of a 5x4 board
//! and must trade places, moving alternately and never onto a square the
//! other side attacks. This crate exposes the packed board model, move
//! generation, breadth-first shortest-path search, and a text renderer.

pub mod board_state {
    pub mod board;
    pub mod board_types;
}

pub mod moves {
    pub mod bishop_moves;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod next_boards;
    pub mod perft;
    pub mod playout;
}

pub mod search {
    pub mod search_errors;
    pub mod shortest_path;
}

pub mod utils {
    pub mod render_board;
}
