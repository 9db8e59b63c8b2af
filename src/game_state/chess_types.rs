//! Core value types shared by the board model, rule evaluator and game state.
//!
//! Everything here is a small `Copy` value. Squares use signed coordinates so
//! that out-of-range requests coming from a host can be represented and
//! rejected instead of panicking on an index.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White marches toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece. Promotion replaces the value rather than editing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Board coordinate. Row 0 is Black's home rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Row-major iteration over all 64 squares, starting at (0, 0).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Game status as seen by the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    KingCaptured { winner: Color },
}

impl GameStatus {
    /// Checkmate, stalemate and king capture accept no further moves.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::KingCaptured { .. }
        )
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::KingCaptured { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate, draw"),
            GameStatus::KingCaptured { winner } => write!(f, "king captured, {winner} wins"),
        }
    }
}

/// One applied move. `piece` is the mover before any promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
}

/// Captured pieces grouped by the color of the captured piece, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    #[inline]
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[inline]
    pub fn of_mut(&mut self, color: Color) -> &mut Vec<Piece> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}
