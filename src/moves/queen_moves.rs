use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

/// A queen move is any rook move or bishop move.
#[inline]
pub fn queen_move_is_valid(board: &Board, from: Square, to: Square, color: Color) -> bool {
    rook_move_is_valid(board, from, to, color) || bishop_move_is_valid(board, from, to, color)
}
