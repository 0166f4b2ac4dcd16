//! King steps. Castles are computed per player, not here.

use crate::game_state::board::Board;
use crate::move_generation::chess_move::Move;
use crate::moves::sliding_moves::is_edge_exclusion;
use crate::pieces::piece::Piece;
use crate::utils::board_utils::offset_square;

pub const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate_king_moves(king: &Piece, board: &Board, out: &mut Vec<Move>) {
    let from = king.square();
    for offset in KING_OFFSETS {
        if is_edge_exclusion(from, offset) {
            continue;
        }
        let Some(to) = offset_square(from, offset) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(Move::quiet(*king, to)),
            Some(occupant) if occupant.color() != king.color() => {
                out.push(Move::attack(*king, to, occupant));
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;

    #[test]
    fn king_in_corner_has_three_steps() {
        let board = Board::from_fen("K7/8/8/8/8/8/8/7k w - - 0 1").expect("FEN should parse");
        let king = board.piece_at(0).expect("king on a8");
        assert_eq!(king.generate_moves(&board).len(), 3);
    }

    #[test]
    fn king_on_h_file_does_not_wrap() {
        let board = Board::from_fen("8/8/8/7K/8/8/8/k7 w - - 0 1").expect("FEN should parse");
        let king = board.piece_at(31).expect("king on h5");
        let moves = king.generate_moves(&board);
        assert_eq!(moves.len(), 5);
        // a4 and a5 sit one flat index past h5 and h4.
        assert!(moves.iter().all(|m| m.destination() != Some(32)));
    }
}
