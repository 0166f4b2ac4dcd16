//! Ray walking shared by bishops, rooks and queens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::utils::board_utils::{offset_square, FILE_A, FILE_H};

/// Walks each ray in `offsets` from the piece's square.
///
/// A ray stops at the first occupied square, which yields an attack only when
/// held by the other color.
pub fn generate_sliding_moves(piece: &Piece, board: &Board, offsets: &[i8], out: &mut Vec<Move>) {
    for &offset in offsets {
        let mut candidate = piece.square();
        loop {
            if is_edge_exclusion(candidate, offset) {
                break;
            }
            let Some(next) = offset_square(candidate, offset) else {
                break;
            };
            candidate = next;

            match board.piece_at(candidate) {
                None => out.push(Move::quiet(*piece, candidate)),
                Some(occupant) => {
                    if occupant.color() != piece.color() {
                        out.push(Move::attack(*piece, candidate, occupant));
                    }
                    break;
                }
            }
        }
    }
}

/// True when stepping `offset` from `square` would wrap to the opposite edge.
///
/// Also used for king steps, which share the same eight directions.
#[inline]
pub fn is_edge_exclusion(square: Square, offset: i8) -> bool {
    let sq = square as usize;
    (FILE_A[sq] && matches!(offset, -9 | -1 | 7)) || (FILE_H[sq] && matches!(offset, -7 | 1 | 9))
}
