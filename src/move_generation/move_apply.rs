//! Building the successor board for a move.
//!
//! Every variant follows the same outline: copy all pieces that are not
//! involved, place the moved piece at its destination, hand the turn to the
//! opponent and record the move. The variants differ only in what else they
//! remove, add or remember.

use crate::game_state::board::Board;
use crate::game_state::board_builder::BoardBuilder;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::castle_moves::settle_castle_flags;
use crate::move_generation::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::pieces::piece_cache::PIECE_CACHE;

impl Move {
    /// Stages the board that results from playing this move on `board`.
    ///
    /// # Panics
    ///
    /// Panics on `Move::Null`, which has no successor board.
    pub fn stage(&self, board: &Board) -> BoardBuilder {
        let mut builder = match self {
            Move::Quiet { piece, .. } | Move::PawnJump { piece, .. } => {
                relocate(board, self, piece, &[])
            }
            Move::Attack {
                piece, captured, ..
            }
            | Move::EnPassantAttack {
                piece, captured, ..
            } => relocate(board, self, piece, &[captured.square()]),
            Move::Castle {
                king,
                rook,
                rook_destination,
                ..
            } => {
                let mut builder = relocate(board, self, king, &[rook.square()]);
                builder.set_piece(Piece::new(
                    PieceKind::Rook,
                    rook.color(),
                    *rook_destination,
                    false,
                ));
                builder
            }
            Move::Promotion {
                inner,
                promotion_kind,
            } => {
                let mut builder = inner.stage(board);
                if let (Some(pawn), Some(destination)) = (inner.moving_piece(), inner.destination()) {
                    if let Some(promoted) = PIECE_CACHE.get(*promotion_kind, pawn.color(), destination) {
                        builder.set_piece(promoted);
                    }
                }
                builder.set_move_transition(self.clone());
                builder
            }
            Move::Null => panic!("the null move cannot be applied"),
        };
        settle_castle_flags(&mut builder);
        builder
    }

    /// The board that results from playing this move on `board`.
    ///
    /// No legality check happens here; see
    /// [`Player::apply_move`](crate::game_state::player::Player::apply_move).
    pub fn apply(&self, board: &Board) -> Board {
        self.stage(board).build()
    }
}

// Copies every piece except `mover` and the `vacated` squares, then places
// the moved piece and sets turn, clocks and en-passant state.
fn relocate(board: &Board, mv: &Move, mover: &Piece, vacated: &[Square]) -> BoardBuilder {
    let mut builder = BoardBuilder::new();
    for piece in board.all_pieces() {
        if piece == mover || vacated.contains(&piece.square()) {
            continue;
        }
        builder.set_piece(*piece);
    }
    builder.set_piece(mover.move_piece(mv));

    let mover_color = mover.color();
    builder.set_move_maker(mover_color.opposite());

    let halfmove_clock = if mover.is_pawn() || mv.is_attack() {
        0
    } else {
        board.halfmove_clock().saturating_add(1)
    };
    let fullmove_number = match mover_color {
        Color::White => board.fullmove_number(),
        Color::Black => board.fullmove_number().saturating_add(1),
    };
    builder.set_clocks(halfmove_clock, fullmove_number);

    if mv.is_pawn_jump() {
        builder.set_en_passant_pawn(mover.move_piece(mv));
    }
    builder.set_move_transition(mv.clone());
    builder
}
