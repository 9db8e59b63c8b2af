//! Canonical chess-rule constants.
//!
//! Static literals describing the starting layout and the rows that carry
//! rule meaning (pawn home rows and promotion rows).

use crate::game_state::chess_types::{Color, PieceKind};

/// Side length of the board.
pub const BOARD_SIZE: i8 = 8;

/// Back-rank order from column 0 to column 7, identical for both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard starting position as a piece-placement field, row 0 first.
pub const STARTING_POSITION_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Row holding the back rank of `color`.
#[inline]
pub const fn home_row(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row a pawn of `color` may double-step from.
#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Pawns promote on either edge row regardless of color.
#[inline]
pub const fn is_promotion_row(row: i8) -> bool {
    row == 0 || row == BOARD_SIZE - 1
}
