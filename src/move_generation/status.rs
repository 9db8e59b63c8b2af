//! Status evaluation for the player to move.

use crate::game_state::chess_types::{Board, Color, GameStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Classify the position from the point of view of `player`, who is to move.
///
/// Checkmate is credited to the opponent of `player`. King capture is never
/// produced here; it is decided when the capturing move is applied.
pub fn evaluate_status(board: &Board, player: Color) -> GameStatus {
    let king_in_check = is_king_in_check(board, player);
    let any_moves = has_any_legal_move(board, player);

    match (king_in_check, any_moves) {
        (true, false) => GameStatus::Checkmate {
            winner: player.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}

#[cfg(test)]
mod tests {
    use super::evaluate_status;
    use crate::game_state::chess_types::{Board, Color, GameStatus};
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn start_position_is_playing() {
        assert_eq!(evaluate_status(&Board::initial(), Color::White), GameStatus::Playing);
    }

    #[test]
    fn attacked_king_with_moves_is_check() {
        let board = parse_placement("4k3/8/8/8/8/8/8/4R1K1").expect("placement should parse");
        assert_eq!(evaluate_status(&board, Color::Black), GameStatus::Check);
    }

    #[test]
    fn boxed_in_side_is_mated_or_stalemated() {
        let mated = parse_placement("krp5/ppN5/pp6/pp6/pp6/pp6/pp6/pp4K1")
            .expect("placement should parse");
        assert_eq!(
            evaluate_status(&mated, Color::Black),
            GameStatus::Checkmate { winner: Color::White }
        );

        let stuck = parse_placement("krp5/ppP5/pp6/pp6/pp6/pp6/pp6/pp4K1")
            .expect("placement should parse");
        assert_eq!(evaluate_status(&stuck, Color::Black), GameStatus::Stalemate);
    }

    #[test]
    fn side_without_pieces_is_stalemated() {
        let board = parse_placement("8/8/8/8/8/8/8/4K3").expect("placement should parse");
        assert_eq!(evaluate_status(&board, Color::Black), GameStatus::Stalemate);
    }
}
