//! Finding a usable move by its squares.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::chess_move::Move;

/// The first usable move of either side from `from` to `to`, or `Move::Null`.
///
/// When several promotions share the squares the queen promotion comes first.
pub fn create_move(board: &Board, from: Square, to: Square) -> Move {
    board
        .all_usable_moves()
        .find(|mv| mv.source() == Some(from) && mv.destination() == Some(to))
        .cloned()
        .unwrap_or(Move::Null)
}

/// Like [`create_move`], but picks the promotion to `kind`.
pub fn create_promotion_move(board: &Board, from: Square, to: Square, kind: PieceKind) -> Move {
    board
        .all_usable_moves()
        .find(|mv| {
            mv.source() == Some(from)
                && mv.destination() == Some(to)
                && mv.promotion_kind() == Some(kind)
        })
        .cloned()
        .unwrap_or(Move::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_moves_for_both_sides() {
        let board = Board::standard_board();
        assert_eq!(create_move(&board, 52, 36).destination(), Some(36));
        assert_eq!(create_move(&board, 12, 28).source(), Some(12));
    }

    #[test]
    fn unknown_squares_give_null() {
        let board = Board::standard_board();
        assert!(create_move(&board, 52, 20).is_null());
        assert!(create_move(&board, 36, 28).is_null());
    }

    #[test]
    fn promotion_lookup_respects_kind() {
        let board = Board::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(create_move(&board, 12, 4).promotion_kind(), Some(PieceKind::Queen));
        assert_eq!(
            create_promotion_move(&board, 12, 4, PieceKind::Rook).promotion_kind(),
            Some(PieceKind::Rook)
        );
        assert!(create_promotion_move(&board, 52, 36, PieceKind::Rook).is_null());
    }
}
