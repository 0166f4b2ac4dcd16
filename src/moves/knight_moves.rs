use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::utils::board_utils::{offset_square, FILE_A, FILE_B, FILE_G, FILE_H};

pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn generate_knight_moves(knight: &Piece, board: &Board, out: &mut Vec<Move>) {
    let from = knight.square();
    for offset in KNIGHT_OFFSETS {
        if is_file_exclusion(from, offset) {
            continue;
        }
        let Some(to) = offset_square(from, offset) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(Move::quiet(*knight, to)),
            Some(occupant) if occupant.color() != knight.color() => {
                out.push(Move::attack(*knight, to, occupant));
            }
            Some(_) => {}
        }
    }
}

// Leaps span two files, so the a/b and g/h files each block some offsets.
fn is_file_exclusion(square: Square, offset: i8) -> bool {
    let sq = square as usize;
    (FILE_A[sq] && matches!(offset, -17 | -10 | 6 | 15))
        || (FILE_B[sq] && matches!(offset, -10 | 6))
        || (FILE_G[sq] && matches!(offset, -6 | 10))
        || (FILE_H[sq] && matches!(offset, -15 | -6 | 10 | 17))
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;

    #[test]
    fn knight_in_corner_has_two_leaps() {
        let board = Board::from_fen("N7/8/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let knight = board.piece_at(0).expect("knight on a8");
        let mut targets: Vec<_> = knight
            .generate_moves(&board)
            .iter()
            .filter_map(|m| m.destination())
            .collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![10, 17]);
    }

    #[test]
    fn knight_on_g_file_does_not_wrap() {
        // g4 leaps: e5, e3, f6, f2, h6, h2.
        let board = Board::from_fen("8/8/8/8/6N1/8/8/k3K3 w - - 0 1").expect("FEN should parse");
        let knight = board.piece_at(38).expect("knight on g4");
        assert_eq!(knight.generate_moves(&board).len(), 6);
    }

    #[test]
    fn starting_knights_have_two_moves_each() {
        let board = Board::standard_board();
        for square in [1u8, 6, 57, 62] {
            let knight = board.piece_at(square).expect("knight on its home square");
            assert_eq!(knight.generate_moves(&board).len(), 2);
        }
    }
}
