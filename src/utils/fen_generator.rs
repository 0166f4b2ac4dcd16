use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Color};
use crate::move_generation::castle_moves::has_castle_rights;
use crate::utils::board_utils::ALGEBRAIC_NOTATION;

pub fn generate_fen(board: &Board) -> String {
    format!(
        "{} {} {} {} {} {}",
        generate_board_field(board),
        board.side_to_move().fen_char(),
        generate_castling_field(board),
        generate_en_passant_field(board),
        board.halfmove_clock(),
        board.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(row * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();
    for (color, side, ch) in [
        (Color::White, CastleSide::KingSide, 'K'),
        (Color::White, CastleSide::QueenSide, 'Q'),
        (Color::Black, CastleSide::KingSide, 'k'),
        (Color::Black, CastleSide::QueenSide, 'q'),
    ] {
        if has_castle_rights(board, color, side) {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

// The square the jumped pawn passed over.
fn generate_en_passant_field(board: &Board) -> &'static str {
    let Some(pawn) = board.en_passant_pawn() else {
        return "-";
    };
    let target = pawn.square() as i16 + 8 * pawn.color().opposite_direction() as i16;
    usize::try_from(target)
        .ok()
        .and_then(|index| ALGEBRAIC_NOTATION.get(index))
        .copied()
        .unwrap_or("-")
}
