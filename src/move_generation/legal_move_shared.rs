use crate::game_state::chess_types::{Board, Square};

/// True when every square strictly between `from` and `to` is empty.
///
/// Walks the unit row/column step toward `to`. Adjacent squares have nothing
/// in between and are always clear. Only meaningful for squares sharing a
/// row, column or diagonal; knight moves never call this.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let row_step = (to.row - from.row).signum();
    let col_step = (to.col - from.col).signum();

    let mut current = Square::new(from.row + row_step, from.col + col_step);
    while current != to {
        if board.piece_at(current).is_some() {
            return false;
        }
        current = Square::new(current.row + row_step, current.col + col_step);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::is_path_clear;
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

    #[test]
    fn adjacent_squares_are_always_clear() {
        let board = Board::initial();
        assert!(is_path_clear(&board, Square::new(7, 0), Square::new(6, 0)));
        assert!(is_path_clear(&board, Square::new(7, 2), Square::new(6, 3)));
    }

    #[test]
    fn endpoints_are_excluded_from_the_walk() {
        let mut board = Board::empty();
        let rook = Some(Piece::new(PieceKind::Rook, Color::White));
        board.set(Square::new(0, 0), rook);
        board.set(Square::new(0, 5), rook);
        assert!(is_path_clear(&board, Square::new(0, 0), Square::new(0, 5)));

        board.set(Square::new(0, 3), rook);
        assert!(!is_path_clear(&board, Square::new(0, 0), Square::new(0, 5)));
        assert!(!is_path_clear(&board, Square::new(0, 5), Square::new(0, 0)));
    }

    #[test]
    fn diagonal_walk_checks_every_intermediate_square() {
        let mut board = Board::empty();
        board.set(Square::new(3, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!is_path_clear(&board, Square::new(6, 0), Square::new(1, 5)));
        assert!(is_path_clear(&board, Square::new(6, 0), Square::new(4, 2)));
    }
}
