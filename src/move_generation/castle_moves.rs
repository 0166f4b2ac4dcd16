//! Castle generation and square-attack queries.
//!
//! Castles are computed after both sides' ordinary moves exist, because a
//! castle is only offered when no square the king crosses is attacked.

use crate::game_state::board::Board;
use crate::game_state::board_builder::BoardBuilder;
use crate::game_state::chess_rules::castle_layout;
use crate::game_state::chess_types::{CastleSide, Color, Square};
use crate::move_generation::chess_move::Move;
use crate::moves::pawn_moves::pawn_attack_squares;
use crate::pieces::piece::Piece;

/// True if `attacker_color` attacks `square`.
///
/// `attacker_moves` are the attacker's pseudo-legal moves on `board`. Pawns
/// are counted by the diagonals they threaten rather than by their pushes.
pub fn is_square_attacked(
    board: &Board,
    square: Square,
    attacker_color: Color,
    attacker_moves: &[Move],
) -> bool {
    let by_move = attacker_moves.iter().any(|mv| {
        mv.destination() == Some(square) && mv.moving_piece().is_some_and(|p| !p.is_pawn())
    });
    by_move
        || board
            .pieces(attacker_color)
            .iter()
            .filter(|piece| piece.is_pawn())
            .any(|pawn| pawn_attack_squares(pawn).any(|target| target == square))
}

/// King and rook of `side` are still unmoved on their home squares.
pub fn has_castle_rights(board: &Board, color: Color, side: CastleSide) -> bool {
    let layout = castle_layout(color, side);
    let king_ready = board
        .piece_at(layout.king_home)
        .is_some_and(|p| p.is_king() && p.color() == color && p.is_first_move());
    let rook_ready = board
        .piece_at(layout.rook_home)
        .is_some_and(|p| p.is_rook() && p.color() == color && p.is_first_move());
    king_ready && rook_ready
}

/// Spends the first move of any king or home rook that can no longer castle.
///
/// A rook keeps its flag only while its king is unmoved at home, and a king
/// keeps its flag only while some home rook is unmoved. Boards settled this
/// way carry exactly the castling state a FEN castling field can express.
pub(crate) fn settle_castle_flags(builder: &mut BoardBuilder) {
    for color in [Color::White, Color::Black] {
        let ready = |builder: &BoardBuilder, square: Square, is_kind: fn(&Piece) -> bool| {
            builder
                .piece_at(square)
                .filter(|p| is_kind(p) && p.color() == color && p.is_first_move())
        };

        let king_home = castle_layout(color, CastleSide::KingSide).king_home;
        let king = ready(builder, king_home, Piece::is_king);
        let mut any_rook = false;
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            let rook_home = castle_layout(color, side).rook_home;
            if let Some(rook) = ready(builder, rook_home, Piece::is_rook) {
                if king.is_some() {
                    any_rook = true;
                } else {
                    builder.set_piece(rook.without_first_move());
                }
            }
        }
        if let (Some(king), false) = (king, any_rook) {
            builder.set_piece(king.without_first_move());
        }
    }
}

/// Castles available to `color`.
///
/// Requires castle rights, a king not in check, empty squares between king
/// and rook, and no square on the king's path attacked by `opponent_moves`.
pub fn calculate_castles(
    board: &Board,
    color: Color,
    in_check: bool,
    opponent_moves: &[Move],
) -> Vec<Move> {
    let mut castles = Vec::new();
    if in_check {
        return castles;
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        if !has_castle_rights(board, color, side) {
            continue;
        }
        let layout = castle_layout(color, side);
        if layout.between.iter().any(|sq| board.piece_at(*sq).is_some()) {
            continue;
        }
        if layout
            .king_path
            .iter()
            .any(|sq| is_square_attacked(board, *sq, color.opposite(), opponent_moves))
        {
            continue;
        }
        let (Some(king), Some(rook)) = (board.piece_at(layout.king_home), board.piece_at(layout.rook_home))
        else {
            continue;
        };
        castles.push(Move::castle(
            king,
            layout.king_destination,
            side,
            rook,
            layout.rook_destination,
        ));
    }

    castles
}
