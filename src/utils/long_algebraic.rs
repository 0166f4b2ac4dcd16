//! Long algebraic move text (`e2e4`, `e7e8q`, `e1g1`).

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::chess_move::Move;
use crate::move_generation::move_lookup::{create_move, create_promotion_move};
use crate::utils::algebraic::algebraic_to_square;

/// Resolves `text` against the side to move's usable moves on `board`.
///
/// A promotion without a suffix letter is rejected so that under-promotion
/// is never chosen implicitly.
pub fn long_algebraic_to_move(board: &Board, text: &str) -> ChessResult<Move> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidLongAlgebraic(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_notation(ch) {
            Some(kind @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(kind)
            }
            _ => return Err(ChessError::InvalidLongAlgebraic(text.to_owned())),
        },
    };

    let mv = match promotion {
        Some(kind) => create_promotion_move(board, from, to, kind),
        None => create_move(board, from, to),
    };

    let belongs_to_mover = mv
        .moving_piece()
        .is_some_and(|piece| piece.color() == board.side_to_move());
    if !belongs_to_mover || (mv.is_promotion() && promotion.is_none()) {
        debug!(%text, "no usable move matches");
        return Err(ChessError::MoveNotFound(text.to_owned()));
    }
    Ok(mv)
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}
