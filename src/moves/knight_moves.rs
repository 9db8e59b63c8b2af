//! Knight movement rule. Knights jump, so occupancy between the endpoints is
//! never consulted.

use crate::game_state::chess_types::{Board, Color, Square};

#[inline]
pub fn knight_move_is_valid(_board: &Board, from: Square, to: Square, _color: Color) -> bool {
    let row_diff = (from.row - to.row).abs();
    let col_diff = (from.col - to.col).abs();
    (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
}
