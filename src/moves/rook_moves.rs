use crate::game_state::chess_types::{Board, Color, Square};
use crate::move_generation::legal_move_shared::is_path_clear;

/// Same row or same column with every square strictly between empty.
#[inline]
pub fn rook_move_is_valid(board: &Board, from: Square, to: Square, _color: Color) -> bool {
    if from.row != to.row && from.col != to.col {
        return false;
    }
    is_path_clear(board, from, to)
}
