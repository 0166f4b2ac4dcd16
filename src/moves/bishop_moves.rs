use crate::game_state::board::Board;
use crate::move_generation::chess_move::Move;
use crate::moves::sliding_moves::generate_sliding_moves;
use crate::pieces::piece::Piece;

pub const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];

pub fn generate_bishop_moves(bishop: &Piece, board: &Board, out: &mut Vec<Move>) {
    generate_sliding_moves(bishop, board, &BISHOP_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;

    #[test]
    fn bishop_on_d4_sweeps_both_diagonals() {
        let board = Board::from_fen("8/8/8/8/3B3k/8/7K/8 w - - 0 1").expect("FEN should parse");
        let bishop = board.piece_at(35).expect("bishop on d4");
        assert_eq!(bishop.generate_moves(&board).len(), 13);
    }

    #[test]
    fn bishop_stops_on_blockers() {
        // Own pawn on e5 blocks one ray, enemy knight on c3 is capturable.
        let board =
            Board::from_fen("8/8/8/4P3/3B3k/2n5/7K/8 w - - 0 1").expect("FEN should parse");
        let bishop = board.piece_at(35).expect("bishop on d4");
        let moves = bishop.generate_moves(&board);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves.iter().filter(|m| m.is_attack()).count(), 1);
        assert!(moves.iter().all(|m| m.destination() != Some(28)));
    }
}
