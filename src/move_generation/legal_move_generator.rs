//! Destination enumeration and move-existence queries.
//!
//! Brute force over the 8×8 grid: the board is small and every candidate goes
//! through the same [`is_legal_move`] check used for real requests.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Board, Color, Square};
use crate::move_generation::legal_move_checks::is_legal_move;

/// Legal destinations of one piece, split for highlighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destinations {
    /// Empty destination squares.
    pub quiet: Vec<Square>,
    /// Destinations holding an opposing piece.
    pub captures: Vec<Square>,
}

impl Destinations {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }

    /// All destinations: quiet first, then captures.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.quiet.iter().chain(self.captures.iter()).copied()
    }
}

/// All legal destinations of the piece on `from`, in row-major order.
pub fn legal_destinations(board: &Board, from: Square, player: Color) -> Destinations {
    let mut out = Destinations::default();
    for to in Square::all() {
        if !is_legal_move(board, from, to, player) {
            continue;
        }
        if board.piece_at(to).is_some() {
            out.captures.push(to);
        } else {
            out.quiet.push(to);
        }
    }
    out
}

/// True as soon as one legal move for `color` is found.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| Square::all().any(|to| is_legal_move(board, from, to, color)))
}

/// Every legal (from, to) pair for `color`, row-major by source then destination.
pub fn legal_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        out.extend(legal_destinations(board, from, color).iter().map(|to| (from, to)));
    }
    out
}
