//! Errors returned by the rules engine.
//!
//! `MoveRejected` is the single error type of the game layer. Every variant is
//! an expected outcome of user input rather than a fault: a rejected request
//! leaves the game state exactly as it was, so callers can report the reason
//! and carry on.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, GameStatus, Square};

/// Why a move (or undo) request was refused.
///
/// Variants are listed in the order the move preconditions are evaluated,
/// followed by the state-level refusals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejected {
    /// No piece stands on the source square (this includes off-board sources).
    EmptySource(Square),

    /// The source piece belongs to the other side.
    ///
    /// Payload: (source square, color of the piece found there).
    OpponentPiece(Square, Color),

    /// The destination lies outside the 8×8 grid.
    OutOfBounds(Square),

    /// The destination holds a piece of the mover's own color.
    FriendlyFireBlocked(Square),

    /// The piece cannot reach the destination by its movement pattern, or a
    /// sliding path is obstructed.
    ///
    /// Payload: (from, to).
    PieceRuleViolation(Square, Square),

    /// The game has already ended; carries the terminal status.
    GameAlreadyOver(GameStatus),

    /// Undo was requested with an empty move history.
    NothingToUndo,
}

impl fmt::Display for MoveRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejected::EmptySource(sq) => write!(f, "no piece on {sq}"),
            MoveRejected::OpponentPiece(sq, color) => {
                write!(f, "piece on {sq} belongs to {color}")
            }
            MoveRejected::OutOfBounds(sq) => write!(f, "{sq} is off the board"),
            MoveRejected::FriendlyFireBlocked(sq) => {
                write!(f, "{sq} is occupied by a piece of the same color")
            }
            MoveRejected::PieceRuleViolation(from, to) => {
                write!(f, "piece on {from} cannot move to {to}")
            }
            MoveRejected::GameAlreadyOver(status) => write!(f, "game is over: {status}"),
            MoveRejected::NothingToUndo => write!(f, "no move to undo"),
        }
    }
}

impl Error for MoveRejected {}
