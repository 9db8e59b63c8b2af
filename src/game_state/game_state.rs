//! Game state machine.
//!
//! `GameState` owns the board, the side to move, captured pieces, the move
//! history and the current selection. Move requests are validated against the
//! pseudo-legal rules and either produce a new state or are rejected with the
//! old state untouched. A host keeps one `GameState` and replaces it with the
//! value returned from each successful call.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::chess_errors::MoveRejected;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::classify_move;
use crate::move_generation::legal_move_generator::{legal_destinations, Destinations};
use crate::move_generation::status::evaluate_status;

/// The selected square together with the moves it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub square: Square,
    pub destinations: Destinations,
}

/// What a click on a square did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The game is over or the click had no effect.
    Ignored,
    Selected(Square),
    Deselected,
    Moved(MoveRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub status: GameStatus,
    pub selection: Option<Selection>,
    pub captured_pieces: CapturedPieces,
    pub move_history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self::from_position(Board::initial(), Color::White)
    }

    /// Start from an arbitrary position. Status is evaluated for `current_player`.
    pub fn from_position(board: Board, current_player: Color) -> Self {
        Self {
            status: evaluate_status(&board, current_player),
            board,
            current_player,
            selection: None,
            captured_pieces: CapturedPieces::default(),
            move_history: Vec::new(),
        }
    }

    /// Replace the whole state with a fresh game.
    pub fn reset_game(&mut self) {
        *self = Self::new_game();
        info!("game reset");
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn evaluate_status(&self) -> GameStatus {
        evaluate_status(&self.board, self.current_player)
    }

    #[inline]
    pub fn legal_destinations(&self, from: Square) -> Destinations {
        legal_destinations(&self.board, from, self.current_player)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    /// Select a piece of the side to move.
    ///
    /// With nothing selected, an own piece becomes the selection. Selecting
    /// the already-selected square clears it. Anything else is a no-op, as is
    /// every call once the game is over.
    pub fn select_square(&mut self, square: Square) -> Option<&Selection> {
        if self.is_over() {
            return self.selection.as_ref();
        }

        match self.selection.as_ref().map(|selection| selection.square) {
            Some(selected) if selected == square => {
                self.selection = None;
            }
            Some(_) => {}
            None => {
                let owned = self
                    .board
                    .piece_at(square)
                    .is_some_and(|piece| piece.color == self.current_player);
                if owned {
                    self.selection = Some(Selection {
                        square,
                        destinations: self.legal_destinations(square),
                    });
                }
            }
        }

        self.selection.as_ref()
    }

    /// Validate and play `from`→`to` for the side to move.
    ///
    /// Returns the successor state with the selection cleared. On rejection
    /// `self` is untouched and nothing is recorded.
    pub fn attempt_move(&self, from: Square, to: Square) -> Result<GameState, MoveRejected> {
        if self.is_over() {
            debug!("move {from}->{to} rejected: game already over");
            return Err(MoveRejected::GameAlreadyOver(self.status));
        }

        if let Err(reason) = classify_move(&self.board, from, to, self.current_player) {
            debug!("move {from}->{to} rejected: {reason}");
            return Err(reason);
        }

        let next = apply_move(self, from, to)?;
        if next.is_over() {
            info!("game over after {from}->{to}: {}", next.status);
        }
        Ok(next)
    }

    /// Click-driven flow: select, deselect, move or reselect.
    ///
    /// A click that neither moves nor selects an own piece clears the selection.
    pub fn handle_square_click(&mut self, square: Square) -> ClickOutcome {
        if self.is_over() {
            return ClickOutcome::Ignored;
        }

        let Some(selected) = self.selection.as_ref().map(|selection| selection.square) else {
            return match self.select_square(square) {
                Some(_) => ClickOutcome::Selected(square),
                None => ClickOutcome::Ignored,
            };
        };

        if selected == square {
            self.selection = None;
            return ClickOutcome::Deselected;
        }

        match self.attempt_move(selected, square) {
            Ok(next) => {
                *self = next;
                match self.last_move() {
                    Some(record) => ClickOutcome::Moved(*record),
                    None => ClickOutcome::Ignored,
                }
            }
            Err(_) => {
                self.selection = None;
                match self.select_square(square) {
                    Some(_) => ClickOutcome::Selected(square),
                    None => ClickOutcome::Deselected,
                }
            }
        }
    }

    /// Take back the last move, including a game-ending one.
    pub fn undo_last_move(&self) -> Result<GameState, MoveRejected> {
        let next = undo_move(self)?;
        debug!("undid move, {} to play", next.current_player);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_placement;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn new_game_is_white_to_play() {
        let game = GameState::new_game();
        assert_eq!(game.current_player, Color::White);
        assert_eq!(game.status, GameStatus::Playing);
        assert!(game.selection.is_none());
        assert!(game.move_history.is_empty());
        assert!(game.captured_pieces.white.is_empty() && game.captured_pieces.black.is_empty());
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let mut game = GameState::new_game()
            .attempt_move(sq(6, 4), sq(4, 4))
            .expect("e2e4 should be legal");
        game.reset_game();
        let once = game.clone();
        game.reset_game();
        assert_eq!(game, once);
        assert_eq!(once, GameState::new_game());
    }

    #[test]
    fn rejected_move_leaves_state_identical() {
        let game = GameState::new_game();
        let before = game.clone();

        assert_eq!(
            game.attempt_move(sq(7, 0), sq(5, 0)),
            Err(MoveRejected::PieceRuleViolation(sq(7, 0), sq(5, 0)))
        );
        assert_eq!(
            game.attempt_move(sq(1, 4), sq(3, 4)),
            Err(MoveRejected::OpponentPiece(sq(1, 4), Color::Black))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn select_exposes_quiet_and_capture_destinations() {
        let mut game = GameState::new_game();
        let selection = game.select_square(sq(7, 1)).cloned().expect("knight should select");
        assert_eq!(selection.square, sq(7, 1));
        assert_eq!(selection.destinations.quiet, vec![sq(5, 0), sq(5, 2)]);
        assert!(selection.destinations.captures.is_empty());

        // A second own piece does not replace the selection; the same square toggles it off.
        assert_eq!(game.select_square(sq(6, 0)).map(|s| s.square), Some(sq(7, 1)));
        assert!(game.select_square(sq(7, 1)).is_none());
        assert!(game.select_square(sq(1, 0)).is_none());
    }

    #[test]
    fn click_flow_selects_reselects_and_moves() {
        let mut game = GameState::new_game();

        assert_eq!(game.handle_square_click(sq(4, 4)), ClickOutcome::Ignored);
        assert_eq!(game.handle_square_click(sq(6, 4)), ClickOutcome::Selected(sq(6, 4)));
        assert_eq!(game.handle_square_click(sq(6, 3)), ClickOutcome::Selected(sq(6, 3)));
        assert_eq!(game.handle_square_click(sq(2, 3)), ClickOutcome::Deselected);
        assert!(game.selection.is_none());

        game.handle_square_click(sq(6, 3));
        let outcome = game.handle_square_click(sq(4, 3));
        let ClickOutcome::Moved(record) = outcome else {
            panic!("expected a move, got {outcome:?}");
        };
        assert_eq!(record.from, sq(6, 3));
        assert_eq!(record.to, sq(4, 3));
        assert_eq!(game.current_player, Color::Black);
        assert!(game.selection.is_none());
    }

    #[test]
    fn undo_restores_the_previous_position() {
        let start = GameState::new_game();
        let after = start
            .attempt_move(sq(6, 4), sq(4, 4))
            .expect("e2e4 should be legal");
        let undone = after.undo_last_move().expect("one move to undo");
        assert_eq!(undone, start);

        assert_eq!(start.undo_last_move(), Err(MoveRejected::NothingToUndo));
    }

    #[test]
    fn finished_games_ignore_selection_and_clicks() {
        let captured = GameState::from_position(
            parse_placement("4k3/8/8/8/8/8/8/4R1K1").expect("placement should parse"),
            Color::White,
        )
        .attempt_move(sq(7, 4), sq(0, 4))
        .expect("rook takes king");
        let mated = GameState::from_position(
            parse_placement("krp5/ppN5/pp6/pp6/pp6/pp6/pp6/pp4K1").expect("placement should parse"),
            Color::Black,
        );
        let drawn = GameState::from_position(
            parse_placement("krp5/ppP5/pp6/pp6/pp6/pp6/pp6/pp4K1").expect("placement should parse"),
            Color::Black,
        );

        assert_eq!(captured.status, GameStatus::KingCaptured { winner: Color::White });
        assert_eq!(mated.status, GameStatus::Checkmate { winner: Color::White });
        assert_eq!(drawn.status, GameStatus::Stalemate);

        // (finished game, a piece of the side to move, an empty square)
        for (mut game, own, empty) in [
            (captured, sq(0, 4), sq(4, 4)),
            (mated, sq(0, 0), sq(4, 4)),
            (drawn, sq(0, 0), sq(4, 4)),
        ] {
            let before = game.clone();
            assert_eq!(
                game.board.piece_at(own).map(|piece| piece.color),
                Some(game.current_player)
            );

            assert!(game.select_square(own).is_none());
            assert!(game.selection.is_none());
            assert_eq!(game.handle_square_click(own), ClickOutcome::Ignored);
            assert_eq!(game.handle_square_click(empty), ClickOutcome::Ignored);
            assert_eq!(game, before);
        }
    }
}
