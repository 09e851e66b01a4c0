//! Move-tree and state-space counting.
//!
//! `perft` counts leaves of the alternating move tree to a fixed depth and is
//! the regression fixture for move generation. `count_reachable` walks the
//! deduplicated (board, mover) graph to its full extent.

use std::collections::HashSet;

use crate::board_state::board::Board;
use crate::board_state::board_types::Color;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::shortest_path::node_key;

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, mover: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let children = generator.next_boards(board, mover);
    if depth == 1 {
        return children.len() as u64;
    }

    children
        .iter()
        .map(|child| perft(generator, child, mover.opposite(), depth - 1))
        .sum()
}

/// Leaf counts for every depth `1..=max_depth`.
pub fn perft_table<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    mover: Color,
    max_depth: u8,
) -> Vec<u64> {
    (1..=max_depth)
        .map(|depth| perft(generator, board, mover, depth))
        .collect()
}

/// Number of distinct (board, mover) nodes reachable from `start`, itself included.
pub fn count_reachable<G: MoveGenerator>(generator: &G, start: &Board, first_mover: Color) -> usize {
    let mut count = 0usize;
    for_each_reachable(generator, start, first_mover, |_, _| count += 1);
    count
}

/// Visit every distinct (board, mover) node reachable from `start` once, in
/// breadth-first order.
pub fn for_each_reachable<G: MoveGenerator>(
    generator: &G,
    start: &Board,
    first_mover: Color,
    mut f: impl FnMut(&Board, Color),
) {
    let mut seen = HashSet::<u64>::new();
    seen.insert(node_key(start, first_mover));

    let mut frontier = vec![(*start, first_mover)];
    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();
        for (board, mover) in frontier {
            f(&board, mover);
            let next_mover = mover.opposite();
            for child in generator.next_boards(&board, mover) {
                if seen.insert(node_key(&child, next_mover)) {
                    next_frontier.push((child, next_mover));
                }
            }
        }
        frontier = next_frontier;
    }
}
