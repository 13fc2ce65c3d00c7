//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::win::check_winner;
    use crate::{Player, Position};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    fn board_from(marks: [Player; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X O / O X O
        use Player::{O, X};
        let board = board_from([X, O, X, O, X, O, O, X, O]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        use Player::{O, X};
        let board = board_from([X, X, X, O, O, X, O, X, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
