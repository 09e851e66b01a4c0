//! Random alternating playouts.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board_state::board::Board;
use crate::board_state::board_types::Color;
use crate::move_generation::move_generator::MoveGenerator;

/// Play up to `max_plies` uniformly random moves, alternating sides.
///
/// The returned sequence starts with `start`. It ends early when the side to
/// move has no legal move.
pub fn random_playout<G: MoveGenerator, R: Rng + ?Sized>(
    generator: &G,
    start: &Board,
    first_mover: Color,
    max_plies: usize,
    rng: &mut R,
) -> Vec<Board> {
    let mut line = Vec::with_capacity(max_plies + 1);
    line.push(*start);

    let mut board = *start;
    let mut mover = first_mover;
    for _ in 0..max_plies {
        let children = generator.next_boards(&board, mover);
        let Some(next) = children.choose(rng) else {
            log::debug!("{mover} has no move after {} plies", line.len() - 1);
            break;
        };
        board = *next;
        mover = mover.opposite();
        line.push(board);
    }

    line
}
