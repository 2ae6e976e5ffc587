use std::cmp::Reverse;

use cozy_chess::{Move, Square};

use crate::board::cozy::Position;

const CAPTURE: i32 = 10;
const CHECK: i32 = 5;
const CENTER_PAWN_PUSH: i32 = 3;
const CENTER_LANDING: i32 = 2;

const CENTER_PAWN_SQUARES: [Square; 4] = [Square::E2, Square::D2, Square::E7, Square::D7];
const CENTER_SQUARES: [Square; 4] = [Square::E4, Square::D4, Square::E5, Square::D5];

/// Cheap ordering priority for `mv`; the first matching rule wins.
pub fn move_priority(pos: &Position, mv: Move) -> i32 {
    if pos.is_capture(mv) {
        CAPTURE
    } else if pos.gives_check(mv) {
        CHECK
    } else if CENTER_PAWN_SQUARES.contains(&mv.from) {
        CENTER_PAWN_PUSH
    } else if CENTER_SQUARES.contains(&mv.to) {
        CENTER_LANDING
    } else {
        0
    }
}

/// Stable sort by priority: highest first for the maximizing side, lowest first otherwise.
pub fn order_moves(pos: &Position, moves: &mut [Move], maximizing: bool) {
    if maximizing {
        moves.sort_by_cached_key(|&m| Reverse(move_priority(pos, m)));
    } else {
        moves.sort_by_cached_key(|&m| move_priority(pos, m));
    }
}
