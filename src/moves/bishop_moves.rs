use crate::game_state::chess_types::{Board, Color, Square};
use crate::move_generation::legal_move_shared::is_path_clear;

/// Equal row and column displacement with every square strictly between empty.
#[inline]
pub fn bishop_move_is_valid(board: &Board, from: Square, to: Square, _color: Color) -> bool {
    if (from.row - to.row).abs() != (from.col - to.col).abs() {
        return false;
    }
    is_path_clear(board, from, to)
}
