//! Successor generation for one side's bishop moves.
//!
//! A bishop may not land on a threatened square: one occupied by the enemy or
//! reachable by an enemy bishop on the following move. Pieces never capture.

use crate::board_state::board::Board;
use crate::board_state::board_types::{mask_squares, Color};
use crate::moves::bishop_moves::{push_bishop_targets, threatened_squares};

/// Append every board reachable by one move of `mover` to `out`.
///
/// Ordering: pieces by increasing square index, then directions
/// `(-1,-1), (-1,+1), (+1,-1), (+1,+1)`, then distance.
pub fn generate_next_boards(board: Board, mover: Color, out: &mut Vec<Board>) {
    let mine = board.occupancy(mover);
    let theirs = board.occupancy(mover.opposite());
    let threatened = threatened_squares(theirs);
    let occupied = board.occupancy_all();

    let mut targets = Vec::<u8>::with_capacity(12);
    for from in mask_squares(mine) {
        let from_bit = 1u32 << from;
        let rest = mine & !from_bit;

        targets.clear();
        push_bishop_targets(from, occupied & !from_bit, &mut targets);

        for &to in &targets {
            let to_bit = 1u32 << to;
            if threatened & to_bit != 0 {
                continue;
            }

            let moved = rest | to_bit;
            out.push(match mover {
                Color::White => Board::from_occupancy(moved, theirs),
                Color::Black => Board::from_occupancy(theirs, moved),
            });
        }
    }
}

/// Assert that `after` follows from `before` by one legal move of `mover`.
#[cfg(test)]
pub(crate) fn assert_legal_move(before: Board, after: Board, mover: Color) {
    use crate::board_state::board_types::{Position, PIECES_PER_SIDE};
    use crate::moves::bishop_moves::MAX_BISHOP_STEP;

    let theirs = before.occupancy(mover.opposite());
    assert_eq!(after.occupancy(mover.opposite()), theirs, "{mover} moved an enemy piece");
    for color in [Color::White, Color::Black] {
        assert_eq!(after.occupancy(color).count_ones() as usize, PIECES_PER_SIDE);
    }
    assert_eq!(after.occupancy(Color::White) & after.occupancy(Color::Black), 0);

    let vacated = before.occupancy(mover) & !after.occupancy(mover);
    let landed = after.occupancy(mover) & !before.occupancy(mover);
    assert_eq!(vacated.count_ones(), 1, "{mover} must move exactly one piece");
    assert_eq!(landed.count_ones(), 1, "{mover} must move exactly one piece");
    assert_eq!(landed & threatened_squares(theirs), 0, "{mover} landed on a threatened square");

    let from = Position::from_index(vacated.trailing_zeros() as u8);
    let to = Position::from_index(landed.trailing_zeros() as u8);
    let dx = to.x as i32 - from.x as i32;
    let dy = to.y as i32 - from.y as i32;
    let distance = dx.abs();
    assert!(distance == dy.abs() && (1..=MAX_BISHOP_STEP).contains(&distance), "{from} -> {to} is not a bishop move");

    let occupied = before.occupancy_all();
    for step in 1..distance {
        let between = Position::try_new(from.x as i32 + dx.signum() * step, from.y as i32 + dy.signum() * step)
            .expect("squares between two board squares are on the board");
        assert_eq!(occupied & between.mask(), 0, "{from} -> {to} jumps over {between}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::board_types::{Position, PiecesPosition};
    use crate::move_generation::move_generator::BishopMoveGenerator;
    use crate::move_generation::perft::for_each_reachable;

    fn diagonal_board() -> Board {
        Board::new(
            [(0, 0), (1, 1), (2, 2), (3, 3)].map(|(x, y)| Position::new(x, y)),
            [(4, 3), (3, 2), (2, 1), (1, 0)].map(|(x, y)| Position::new(x, y)),
        )
    }

    fn as_points(pieces: PiecesPosition) -> Vec<(u8, u8)> {
        pieces.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn default_start_has_four_moves_per_side() {
        let board = Board::default();
        assert_eq!(board.next_boards(Color::White).len(), 4);
        assert_eq!(board.next_boards(Color::Black).len(), 4);
    }

    #[test]
    fn default_start_white_moves_in_generation_order() {
        let next = Board::default().next_boards(Color::White);
        let got: Vec<Vec<(u8, u8)>> = next.iter().map(|b| as_points(b.white_positions())).collect();
        assert_eq!(
            got,
            vec![
                vec![(0, 1), (1, 1), (0, 2), (0, 3)],
                vec![(0, 0), (0, 2), (1, 2), (0, 3)],
                vec![(0, 0), (0, 1), (1, 1), (0, 3)],
                vec![(0, 0), (0, 1), (0, 2), (1, 2)],
            ]
        );
        for b in &next {
            assert_eq!(b.black_positions(), Board::default().black_positions());
        }
    }

    #[test]
    fn diagonal_board_moves() {
        let board = diagonal_board();
        let white = board.next_boards(Color::White);
        assert_eq!(white.len(), 6);
        assert_eq!(as_points(white[0].white_positions()), vec![(0, 0), (0, 2), (2, 2), (3, 3)]);
        assert_eq!(as_points(white[4].white_positions()), vec![(0, 0), (4, 0), (1, 1), (3, 3)]);
        assert_eq!(board.next_boards(Color::Black).len(), 6);
    }

    #[test]
    fn boolean_mover_flag_matches_color() {
        let board = diagonal_board();
        assert_eq!(board.next_boards_for(true), board.next_boards(Color::White));
        assert_eq!(board.next_boards_for(false), board.next_boards(Color::Black));
    }

    #[test]
    fn generation_is_order_stable() {
        let board = diagonal_board();
        assert_eq!(board.next_boards(Color::Black), board.next_boards(Color::Black));
    }

    #[test]
    fn successors_move_exactly_one_piece_legally() {
        let board = diagonal_board();
        for mover in [Color::White, Color::Black] {
            for next in board.next_boards(mover) {
                assert_legal_move(board, next, mover);
            }
        }
    }

    #[test]
    fn own_piece_in_the_way_ends_the_ray() {
        // (0,0) sits behind (1,1) on the long diagonal and has no other ray.
        let board = Board::new(
            [(0, 0), (1, 1), (0, 2), (0, 3)].map(|(x, y)| Position::new(x, y)),
            [(4, 0), (4, 1), (4, 2), (4, 3)].map(|(x, y)| Position::new(x, y)),
        );
        for next in board.next_boards(Color::White) {
            assert_ne!(next.occupancy(Color::White) & Position::new(0, 0).mask(), 0);
            assert_legal_move(board, next, Color::White);
        }
    }

    #[test]
    fn every_reachable_successor_is_a_clear_bishop_move() {
        let mut checked = 0usize;
        for_each_reachable(&BishopMoveGenerator, &Board::default(), Color::White, |board, mover| {
            for next in board.next_boards(mover) {
                assert_legal_move(*board, next, mover);
                checked += 1;
            }
        });
        assert!(checked > 0);
    }
}
