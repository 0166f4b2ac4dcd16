use crate::game_state::board::Board;
use crate::move_generation::chess_move::Move;
use crate::moves::sliding_moves::generate_sliding_moves;
use crate::pieces::piece::Piece;

pub const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];

pub fn generate_rook_moves(rook: &Piece, board: &Board, out: &mut Vec<Move>) {
    generate_sliding_moves(rook, board, &ROOK_OFFSETS, out);
}
