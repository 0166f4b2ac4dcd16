use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square, PROMOTION_KINDS};
use crate::move_generation::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::utils::board_utils::{offset_square, FILE_A, FILE_H};

/// Single step, double step and the two diagonals, before applying direction.
pub const PAWN_OFFSETS: [i8; 4] = [8, 16, 7, 9];

pub fn generate_pawn_moves(pawn: &Piece, board: &Board, out: &mut Vec<Move>) {
    let color = pawn.color();
    let from = pawn.square();

    for offset in PAWN_OFFSETS {
        let Some(to) = offset_square(from, offset * color.direction()) else {
            continue;
        };

        match offset {
            8 => {
                if board.piece_at(to).is_none() {
                    push_with_promotions(out, color, to, Move::quiet(*pawn, to));
                }
            }
            16 => {
                if !pawn.is_first_move() || !color.is_pawn_home_square(from) {
                    continue;
                }
                let Some(between) = offset_square(from, 8 * color.direction()) else {
                    continue;
                };
                if board.piece_at(between).is_none() && board.piece_at(to).is_none() {
                    out.push(Move::pawn_jump(*pawn, to));
                }
            }
            _ => {
                if is_diagonal_exclusion(from, offset, color) {
                    continue;
                }
                match board.piece_at(to) {
                    Some(occupant) if occupant.color() != color => {
                        push_with_promotions(out, color, to, Move::attack(*pawn, to, occupant));
                    }
                    Some(_) => {}
                    None => {
                        if let Some(target) = en_passant_target(board, color, to) {
                            out.push(Move::en_passant(*pawn, to, target));
                        }
                    }
                }
            }
        }
    }
}

/// Squares a pawn threatens diagonally, whether or not anything stands there.
pub fn pawn_attack_squares(pawn: &Piece) -> impl Iterator<Item = Square> + '_ {
    [7i8, 9].into_iter().filter_map(move |offset| {
        if is_diagonal_exclusion(pawn.square(), offset, pawn.color()) {
            None
        } else {
            offset_square(pawn.square(), offset * pawn.color().direction())
        }
    })
}

fn push_with_promotions(out: &mut Vec<Move>, color: Color, to: Square, mv: Move) {
    if color.is_pawn_promotion_square(to) {
        for kind in PROMOTION_KINDS {
            out.push(Move::promotion(mv.clone(), kind));
        }
    } else {
        out.push(mv);
    }
}

// The enemy pawn that just double-stepped, if it sits right behind `to`.
fn en_passant_target(board: &Board, color: Color, to: Square) -> Option<Piece> {
    let target = board.en_passant_pawn()?;
    let behind = offset_square(to, 8 * color.opposite_direction())?;
    (target.color() != color && target.square() == behind).then_some(target)
}

fn is_diagonal_exclusion(square: Square, offset: i8, color: Color) -> bool {
    let sq = square as usize;
    match offset {
        7 => (FILE_H[sq] && color.is_white()) || (FILE_A[sq] && !color.is_white()),
        9 => (FILE_A[sq] && color.is_white()) || (FILE_H[sq] && !color.is_white()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_attack_squares;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn starting_pawns_have_single_and_double_steps() {
        let board = Board::standard_board();
        let pawn = board.piece_at(52).expect("pawn on e2");
        let moves = pawn.generate_moves(&board);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.is_pawn_jump() && m.destination() == Some(36)));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        // Knight on e3 blocks both steps of the e2 pawn.
        let board =
            Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let pawn = board.piece_at(52).expect("pawn on e2");
        assert!(pawn.generate_moves(&board).is_empty());
    }

    #[test]
    fn far_rank_step_offers_four_promotions() {
        let board = Board::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").expect("FEN should parse");
        let pawn = board.piece_at(12).expect("pawn on e7");
        let moves = pawn.generate_moves(&board);
        let kinds: Vec<_> = moves.iter().filter_map(|m| m.promotion_kind()).collect();
        assert_eq!(
            kinds,
            vec![PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight]
        );
    }

    #[test]
    fn capture_onto_far_rank_is_promotion_wrapped() {
        let board = Board::from_fen("3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let pawn = board.piece_at(12).expect("pawn on e7");
        let moves = pawn.generate_moves(&board);
        // e8 is blocked by the king; d8 capture offers four promotions.
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.is_promotion() && m.is_attack()));
    }

    #[test]
    fn en_passant_needs_adjacent_jumped_pawn() {
        let board =
            Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("FEN should parse");
        let pawn = board.piece_at(28).expect("pawn on e5");
        let moves = pawn.generate_moves(&board);
        let en_passant: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(en_passant.len(), 1);
        assert_eq!(en_passant[0].destination(), Some(19));
        assert_eq!(en_passant[0].captured_piece().map(|p| p.square()), Some(27));
    }

    #[test]
    fn edge_pawns_attack_one_diagonal() {
        let board = Board::from_fen("4k3/8/8/8/8/8/P6P/4K3 w - - 0 1").expect("FEN should parse");
        let a2 = board.piece_at(48).expect("pawn on a2");
        let h2 = board.piece_at(55).expect("pawn on h2");
        assert_eq!(pawn_attack_squares(&a2).collect::<Vec<_>>(), vec![41]);
        assert_eq!(pawn_attack_squares(&h2).collect::<Vec<_>>(), vec![46]);
    }
}
