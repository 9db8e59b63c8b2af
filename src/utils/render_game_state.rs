//! Terminal-oriented Unicode board renderer.
//!
//! Text presentation of the engine's read-only state for the text host, tests
//! and diagnostics. Row 0 (rank 8) is printed at the top.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::Selection;

/// Render the board alone.
pub fn render_board(board: &Board) -> String {
    render_with_marks(board, None)
}

/// Render board, side to move, status, captured pieces and the selection.
///
/// Quiet destinations of the selection are shown as `+`, capture
/// destinations keep their piece and get a `!` suffix instead of a space.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_with_marks(&game_state.board, game_state.selection.as_ref());

    out.push('\n');
    out.push_str(&format!("To move: {}\n", game_state.current_player));
    out.push_str(&format!("Status: {}\n", game_state.status));
    for color in [Color::White, Color::Black] {
        let captured: String = game_state
            .captured_pieces
            .of(color)
            .iter()
            .map(|piece| piece_to_unicode(*piece))
            .collect();
        out.push_str(&format!("Captured {color}: {captured}\n"));
    }
    if let Some(selection) = &game_state.selection {
        out.push_str(&format!("Selected: {}\n", selection.square));
    }

    out
}

fn render_with_marks(board: &Board, selection: Option<&Selection>) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8i8 {
            let sq = Square::new(row, col);
            let quiet = selection.is_some_and(|s| s.destinations.quiet.contains(&sq));
            let capture = selection.is_some_and(|s| s.destinations.captures.contains(&sq));

            match board.piece_at(sq) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None if quiet => out.push('+'),
                None => out.push('·'),
            }

            out.push(if capture { '!' } else { ' ' });
        }

        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
