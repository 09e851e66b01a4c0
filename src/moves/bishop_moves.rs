//! Bishop ray generation for the 5x4 board.
//!
//! Bishops travel at most three squares along a diagonal. Two views are
//! provided: unobstructed reach tables used for the threat set, and an ordered
//! ray walk that stops at the first occupied square, used for move targets.

use crate::board_state::board_types::{
    mask_squares, Position, SquareMask, BOARD_HEIGHT, BOARD_WIDTH, SQUARE_COUNT,
};

pub const MAX_BISHOP_STEP: i32 = 3;

/// Diagonal directions in generation order.
pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares reachable from each square ignoring every piece on the board.
pub const BISHOP_RAYS: [SquareMask; SQUARE_COUNT] = generate_bishop_rays();

/// Enemy squares plus every square an enemy bishop could reach next move.
///
/// Threat rays pass through pieces of either side.
#[inline]
pub fn threatened_squares(enemy: SquareMask) -> SquareMask {
    mask_squares(enemy).fold(enemy, |acc, sq| acc | BISHOP_RAYS[sq as usize])
}

/// Push the move targets of a bishop on `square` into `out`.
///
/// Targets are ordered by direction (see [`BISHOP_DIRECTIONS`]) and then by
/// distance. A ray ends before the first square set in `occupancy`.
pub fn push_bishop_targets(square: u8, occupancy: SquareMask, out: &mut Vec<u8>) {
    let sq = square as i32;
    for (x_step, y_step) in BISHOP_DIRECTIONS {
        trace_ray(sq, x_step, y_step, occupancy, out);
    }
}

fn trace_ray(square: i32, x_step: i32, y_step: i32, occupancy: SquareMask, out: &mut Vec<u8>) {
    let width = BOARD_WIDTH as i32;
    let mut x = (square % width) + x_step;
    let mut y = (square / width) + y_step;
    let mut steps = 1;

    while steps <= MAX_BISHOP_STEP {
        let Some(target) = Position::try_new(x, y) else {
            break;
        };
        if (occupancy & target.mask()) != 0 {
            break;
        }
        out.push(target.index());

        x += x_step;
        y += y_step;
        steps += 1;
    }
}

const fn generate_bishop_rays() -> [SquareMask; SQUARE_COUNT] {
    let mut table = [0; SQUARE_COUNT];
    let mut sq = 0usize;

    while sq < SQUARE_COUNT {
        let sq_i = sq as i32;
        let mut rays = 0;

        rays |= trace_ray_const(sq_i, 1, 1);
        rays |= trace_ray_const(sq_i, -1, 1);
        rays |= trace_ray_const(sq_i, 1, -1);
        rays |= trace_ray_const(sq_i, -1, -1);

        table[sq] = rays;
        sq += 1;
    }

    table
}

const fn trace_ray_const(square: i32, x_step: i32, y_step: i32) -> SquareMask {
    let width = BOARD_WIDTH as i32;
    let height = BOARD_HEIGHT as i32;
    let mut x = (square % width) + x_step;
    let mut y = (square / width) + y_step;
    let mut steps = 1;
    let mut attacks = 0;

    while steps <= MAX_BISHOP_STEP && x >= 0 && x < width && y >= 0 && y < height {
        attacks |= 1u32 << (y * width + x);
        x += x_step;
        y += y_step;
        steps += 1;
    }

    attacks
}
