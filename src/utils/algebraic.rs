//! Square-name conversions.
//!
//! Files `a`..`h` map to columns 0..7. Rank `8` is row 0 (Black's home rank)
//! and rank `1` is row 7, so `e2` is White's king pawn at (6, 4).

use crate::game_state::chess_types::Square;

/// Convert a square name (for example: "e4") to board coordinates.
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid square name: {square}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid rank: {}", rank as char));
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Ok(Square::new(row, col))
}

/// Convert board coordinates to a square name (for example: "e4").
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !square.is_on_board() {
        return Err(format!("Square out of bounds: {square}"));
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'1' + (7 - square.row) as u8);
    Ok(format!("{file_char}{rank_char}"))
}
