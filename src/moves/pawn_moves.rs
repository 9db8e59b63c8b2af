//! Pawn movement rule.
//!
//! Forward steps need an empty landing square. The double step from the start
//! row only inspects the landing square; the square passed over is not
//! checked. Captures are one row forward and one column sideways onto an
//! opposing piece. There is no en-passant.

use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Board, Color, Square};

pub fn pawn_move_is_valid(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let direction = color.pawn_direction();
    let target = board.piece_at(to);

    if from.col == to.col {
        if to.row == from.row + direction && target.is_none() {
            return true;
        }
        if from.row == pawn_start_row(color)
            && to.row == from.row + 2 * direction
            && target.is_none()
        {
            return true;
        }
    }

    (from.col - to.col).abs() == 1
        && to.row == from.row + direction
        && target.is_some_and(|piece| piece.color != color)
}
