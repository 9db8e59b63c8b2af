use crate::game_state::chess_types::*;

/// Placement field for `board`, row 0 first; inverse of `parse_placement`.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8i8 {
        let mut empty_count = 0u8;

        for col in 0..8i8 {
            if let Some(piece) = board.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
