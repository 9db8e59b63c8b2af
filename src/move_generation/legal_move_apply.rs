//! Move application and take-back on a whole `GameState`.
//!
//! `apply_move` assumes the request already passed validation; it never
//! re-checks the piece rules. Both functions build a new state from a clone,
//! so the input state is never partially modified.

use crate::chess_errors::MoveRejected;
use crate::game_state::chess_rules::is_promotion_row;
use crate::game_state::chess_types::*;

/// Piece that ends up on `to`: pawns reaching either edge row become queens.
#[inline]
pub fn resulting_piece(piece: Piece, to: Square) -> Piece {
    if piece.kind == PieceKind::Pawn && is_promotion_row(to.row) {
        Piece::new(PieceKind::Queen, piece.color)
    } else {
        piece
    }
}

pub fn apply_move(game_state: &GameState, from: Square, to: Square) -> Result<GameState, MoveRejected> {
    let piece = game_state
        .board
        .piece_at(from)
        .ok_or(MoveRejected::EmptySource(from))?;
    let captured_piece = game_state.board.piece_at(to);

    let mut next = game_state.clone();
    next.selection = None;

    let record = MoveRecord {
        from,
        to,
        piece,
        captured_piece,
    };

    if let Some(victim) = captured_piece {
        next.captured_pieces.of_mut(victim.color).push(victim);

        // Terminal: the mover keeps the turn and no status evaluation runs.
        if victim.kind == PieceKind::King {
            next.board = game_state.board.with_move(from, to, piece);
            next.move_history.push(record);
            next.status = GameStatus::KingCaptured {
                winner: piece.color,
            };
            return Ok(next);
        }
    }

    next.board = game_state.board.with_move(from, to, resulting_piece(piece, to));
    next.move_history.push(record);
    next.current_player = game_state.current_player.opposite();
    next.status = next.evaluate_status();

    Ok(next)
}

/// Reverse the last history entry and re-evaluate the status.
///
/// The mover of the undone move is to play again, which also holds after a
/// king capture because that move never passed the turn.
pub fn undo_move(game_state: &GameState) -> Result<GameState, MoveRejected> {
    let mut next = game_state.clone();
    let record = next.move_history.pop().ok_or(MoveRejected::NothingToUndo)?;

    next.board.set(record.from, Some(record.piece));
    next.board.set(record.to, record.captured_piece);

    if let Some(victim) = record.captured_piece {
        next.captured_pieces.of_mut(victim.color).pop();
    }

    next.selection = None;
    next.current_player = record.piece.color;
    next.status = next.evaluate_status();

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_placement;

    fn game(placement: &str, to_move: Color) -> GameState {
        let board = parse_placement(placement).expect("placement should parse");
        GameState::from_position(board, to_move)
    }

    #[test]
    fn white_pawn_promotes_on_row_zero() {
        let start = game("4k3/P7/8/8/8/8/8/4K3", Color::White);
        let next = apply_move(&start, Square::new(1, 0), Square::new(0, 0)).expect("apply");

        assert_eq!(
            next.board.piece_at(Square::new(0, 0)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        let record = next.last_move().expect("history entry");
        assert_eq!(record.piece, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(record.captured_piece, None);
        assert!(next.captured_pieces.black.is_empty());
    }

    #[test]
    fn black_pawn_promotes_on_row_seven_with_capture() {
        let start = game("4k3/8/8/8/8/8/6p1/4K2R", Color::Black);
        let next = apply_move(&start, Square::new(6, 6), Square::new(7, 7)).expect("apply");

        assert_eq!(
            next.board.piece_at(Square::new(7, 7)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            next.captured_pieces.white,
            vec![Piece::new(PieceKind::Rook, Color::White)]
        );
        assert_eq!(next.current_player, Color::White);
    }

    #[test]
    fn promotion_is_not_tied_to_the_pawn_color() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(resulting_piece(pawn, Square::new(7, 3)).kind, PieceKind::Queen);
        assert_eq!(resulting_piece(pawn, Square::new(3, 3)).kind, PieceKind::Pawn);
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        assert_eq!(resulting_piece(rook, Square::new(7, 3)), rook);
    }

    #[test]
    fn king_capture_ends_the_game_without_passing_the_turn() {
        let start = game("4k3/8/8/8/8/8/8/4R1K1", Color::White);
        let next = apply_move(&start, Square::new(7, 4), Square::new(0, 4)).expect("apply");

        assert_eq!(next.status, GameStatus::KingCaptured { winner: Color::White });
        assert_eq!(next.current_player, Color::White);
        assert_eq!(
            next.board.piece_at(Square::new(0, 4)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(next.board.piece_at(Square::new(7, 4)), None);
        assert_eq!(
            next.captured_pieces.black,
            vec![Piece::new(PieceKind::King, Color::Black)]
        );
        assert_eq!(next.move_history.len(), 1);
    }

    #[test]
    fn pawn_that_captures_a_king_on_edge_row_is_not_promoted() {
        let start = game("3k4/4P3/8/8/8/8/8/4K3", Color::White);
        let next = apply_move(&start, Square::new(1, 4), Square::new(0, 3)).expect("apply");
        assert_eq!(
            next.board.piece_at(Square::new(0, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn undo_reverses_capture_and_promotion() {
        let start = game("4k3/8/8/8/8/8/6p1/4K2R", Color::Black);
        let next = apply_move(&start, Square::new(6, 6), Square::new(7, 7)).expect("apply");
        let back = undo_move(&next).expect("undo");
        assert_eq!(back, start);
    }

    #[test]
    fn undo_after_king_capture_reopens_the_game() {
        let start = game("4k3/8/8/8/8/8/8/4R1K1", Color::White);
        let over = apply_move(&start, Square::new(7, 4), Square::new(0, 4)).expect("apply");
        let back = undo_move(&over).expect("undo");
        assert_eq!(back, start);
        assert_eq!(back.current_player, Color::White);
    }
}
