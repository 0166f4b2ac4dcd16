use crate::game_state::board::Board;
use crate::move_generation::chess_move::Move;
use crate::moves::sliding_moves::generate_sliding_moves;
use crate::pieces::piece::Piece;

pub const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate_queen_moves(queen: &Piece, board: &Board, out: &mut Vec<Move>) {
    generate_sliding_moves(queen, board, &QUEEN_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let board = Board::from_fen("8/8/8/8/3Q3k/8/7K/8 w - - 0 1");
        // The queen would check h4 along the rank, so that FEN is rejected.
        assert!(board.is_err());

        let board = Board::from_fen("8/8/7k/8/3Q4/8/8/K7 w - - 0 1").expect("FEN should parse");
        let queen = board.piece_at(35).expect("queen on d4");
        // 14 rook squares + 13 bishop squares, minus a1 held by the own king.
        let moves = queen.generate_moves(&board);
        assert_eq!(moves.len(), 26);
        assert!(moves.iter().all(|m| !m.is_attack()));
    }
}
