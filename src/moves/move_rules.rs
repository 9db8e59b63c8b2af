//! Piece-kind to movement-rule dispatch table.
//!
//! The rule set is closed: every `PieceKind` maps to exactly one rule
//! function and the match below is checked for exhaustiveness.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::king_moves::king_move_is_valid;
use crate::moves::knight_moves::knight_move_is_valid;
use crate::moves::pawn_moves::pawn_move_is_valid;
use crate::moves::queen_moves::queen_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

/// Geometry and occupancy rule for one piece kind.
///
/// Callers have already established that `from` holds a piece of `color`,
/// that `to` is on the board and that `to` is not held by `color`.
pub type MoveRule = fn(&Board, Square, Square, Color) -> bool;

impl PieceKind {
    #[inline]
    pub fn move_rule(self) -> MoveRule {
        match self {
            PieceKind::Pawn => pawn_move_is_valid,
            PieceKind::Knight => knight_move_is_valid,
            PieceKind::Bishop => bishop_move_is_valid,
            PieceKind::Rook => rook_move_is_valid,
            PieceKind::Queen => queen_move_is_valid,
            PieceKind::King => king_move_is_valid,
        }
    }
}
