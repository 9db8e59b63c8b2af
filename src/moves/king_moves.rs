//! King movement rule: one square in any direction.
//!
//! The rule accepts `from == to`; the null move is filtered upstream because
//! the source square always holds a friendly piece.

use crate::game_state::chess_types::{Board, Color, Square};

#[inline]
pub fn king_move_is_valid(_board: &Board, from: Square, to: Square, _color: Color) -> bool {
    (from.row - to.row).abs() <= 1 && (from.col - to.col).abs() <= 1
}
