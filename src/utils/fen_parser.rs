//! Piece-placement parser.
//!
//! Reads the placement field of a FEN string into a [`Board`]. The first
//! slash-separated segment is row 0 (Black's home rank). Only piece layout is
//! read here; side to move is supplied separately by the caller.

use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<Board, String> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(format!("Placement must contain 8 rows, got {}", rows.len()));
    }

    let mut board = Board::empty();

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in placement"))?;

            if col >= 8 {
                return Err(format!("Row {row} has too many columns"));
            }

            board.set(Square::new(row as i8, col as i8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(format!("Row {row} does not sum to 8 columns"));
        }
    }

    Ok(board)
}

/// Parse `w` / `b` (or `white` / `black`).
pub fn parse_side_to_move(side: &str) -> Result<Color, String> {
    match side.to_ascii_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => Err(format!("Invalid side to move: {side}")),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
