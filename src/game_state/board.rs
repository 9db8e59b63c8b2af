//! Mailbox board model.
//!
//! An 8×8 grid of optional pieces. The board is plain data: reads go through
//! [`Board::piece_at`], and the only write path used by the game is the pure
//! [`Board::with_move`], which yields a new board for real and hypothetical
//! moves alike.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{home_row, pawn_start_row, BACK_RANK};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = home_row(color) as usize;
            let pawns = pawn_start_row(color) as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Piece on `square`, or `None` for empty and off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }

    /// New board with `from` cleared and `to` holding `resulting_piece`.
    pub fn with_move(&self, from: Square, to: Square, resulting_piece: Piece) -> Board {
        let mut next = *self;
        next.set(from, None);
        next.set(to, Some(resulting_piece));
        next
    }

    /// Place or clear a square while building a position. Off-board writes are ignored.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_on_board() {
            self.squares[square.row as usize][square.col as usize] = piece;
        }
    }

    /// All occupied squares with their pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color == color).count()
    }
}

/// Free-function form of [`Board::initial`].
#[inline]
pub fn initial_board() -> Board {
    Board::initial()
}
