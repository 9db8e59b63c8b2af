//! Pseudo-legal move validation and attack queries.
//!
//! "Legal" in this crate means consistent with the piece's movement pattern
//! and the board occupancy. Whether the move leaves the mover's own king in
//! check is not considered.

use crate::chess_errors::MoveRejected;
use crate::game_state::chess_types::{Board, Color, PieceKind, Square};

/// Check a from→to request for `player`, reporting the first failed precondition.
///
/// Order: source occupied, source owned by `player`, destination on the
/// board, destination not friendly, piece rule.
pub fn classify_move(
    board: &Board,
    from: Square,
    to: Square,
    player: Color,
) -> Result<(), MoveRejected> {
    let piece = board.piece_at(from).ok_or(MoveRejected::EmptySource(from))?;

    if piece.color != player {
        return Err(MoveRejected::OpponentPiece(from, piece.color));
    }

    if !to.is_on_board() {
        return Err(MoveRejected::OutOfBounds(to));
    }

    if board.piece_at(to).is_some_and(|target| target.color == piece.color) {
        return Err(MoveRejected::FriendlyFireBlocked(to));
    }

    if !(piece.kind.move_rule())(board, from, to, piece.color) {
        return Err(MoveRejected::PieceRuleViolation(from, to));
    }

    Ok(())
}

#[inline]
pub fn is_legal_move(board: &Board, from: Square, to: Square, player: Color) -> bool {
    classify_move(board, from, to, player).is_ok()
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces()
        .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
        .map(|(square, _)| square)
}

/// True when any piece of `attacker_color` has a pseudo-legal move onto `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker_color)
        .any(|(from, _)| is_legal_move(board, from, square, attacker_color))
}

/// A board without a king of `color` is reported as not in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}
