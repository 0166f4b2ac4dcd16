//! FEN-to-Board parser.
//!
//! Boards keep no separate castling-rights field, so the castling field is
//! folded into the first-move flags of the kings and rooks it names. Pawns
//! count as unmoved on their starting rank.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_builder::BoardBuilder;
use crate::game_state::chess_rules::{castle_layout, king_home_square};
use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};
use crate::move_generation::castle_moves::settle_castle_flags;
use crate::pieces::piece::Piece;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::board_utils::{RANK_SIX, RANK_THREE};

/// Castling field flags indexed by `[color][side]`.
type CastleFlags = [[bool; 2]; 2];

/// Parses a FEN string of 4 to 6 fields; missing clocks default to `0 1`.
pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    parse_fields(fen).inspect_err(|err| debug!(%fen, %err, "rejected FEN"))
}

fn parse_fields(fen: &str) -> ChessResult<Board> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(ChessError::InvalidFen(format!(
            "expected 4 to 6 fields, found {}",
            fields.len()
        )));
    }

    let placements = parse_board(fields[0])?;
    let side_to_move = parse_side_to_move(fields[1])?;
    let castle_flags = parse_castling_rights(fields[2])?;
    let halfmove_clock = match fields.get(4) {
        Some(text) => parse_clock(text, "halfmove clock")?,
        None => 0,
    };
    let fullmove_number = match fields.get(5) {
        Some(text) => parse_clock(text, "fullmove number")?,
        None => 1,
    };

    let mut builder = BoardBuilder::new();
    for (color, kind, square) in placements {
        let first_move = is_unmoved(color, kind, square, &castle_flags);
        builder.set_piece(Piece::new(kind, color, square, first_move));
    }
    settle_castle_flags(&mut builder);
    builder
        .set_move_maker(side_to_move)
        .set_clocks(halfmove_clock, fullmove_number);

    if let Some(pawn) = parse_en_passant(fields[3], side_to_move, &builder)? {
        builder.set_en_passant_pawn(pawn);
    }

    build_set_up_position(builder)
}

/// Builds a set-up position, rejecting it when the side that just moved is
/// still in check.
pub(crate) fn build_set_up_position(builder: BoardBuilder) -> ChessResult<Board> {
    let board = builder.try_build()?;
    let waiting = board.side_to_move().opposite();
    if board.player(waiting).is_in_check() {
        return Err(ChessError::OpponentInCheck(waiting));
    }
    Ok(board)
}

fn parse_board(board_part: &str) -> ChessResult<Vec<(Color, PieceKind, Square)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut placements = Vec::with_capacity(32);
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFenToken(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or(ChessError::InvalidFenToken(ch))?;
            if file >= 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank '{rank_str}' has too many files"
                )));
            }
            placements.push((color, kind, (row * 8 + file) as Square));
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(placements)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastleFlags> {
    let mut flags = [[false; 2]; 2];
    if castling_part == "-" {
        return Ok(flags);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, CastleSide::KingSide),
            'Q' => (Color::White, CastleSide::QueenSide),
            'k' => (Color::Black, CastleSide::KingSide),
            'q' => (Color::Black, CastleSide::QueenSide),
            _ => return Err(ChessError::InvalidFenToken(ch)),
        };
        flags[color.index()][side_index(side)] = true;
    }

    Ok(flags)
}

fn parse_clock(text: &str, name: &str) -> ChessResult<u16> {
    text.parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid {name}: {text}")))
}

// The en-passant field names the square behind a pawn of the side that just
// moved; that pawn must actually be there.
pub(crate) fn parse_en_passant(
    en_passant_part: &str,
    side_to_move: Color,
    builder: &BoardBuilder,
) -> ChessResult<Option<Piece>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let pawn_color = side_to_move.opposite();
    let on_expected_rank = match pawn_color {
        Color::White => RANK_THREE[target as usize],
        Color::Black => RANK_SIX[target as usize],
    };
    if !on_expected_rank || builder.piece_at(target).is_some() {
        return Err(ChessError::InvalidEnPassant(en_passant_part.to_owned()));
    }

    let pawn_square = (target as i16 + 8 * pawn_color.direction() as i16) as Square;
    match builder.piece_at(pawn_square) {
        Some(pawn) if pawn.is_pawn() && pawn.color() == pawn_color => Ok(Some(pawn)),
        _ => Err(ChessError::InvalidEnPassant(en_passant_part.to_owned())),
    }
}

fn is_unmoved(color: Color, kind: PieceKind, square: Square, flags: &CastleFlags) -> bool {
    let has_flag = |side: CastleSide| flags[color.index()][side_index(side)];
    match kind {
        PieceKind::Pawn => color.is_pawn_home_square(square),
        PieceKind::King => {
            square == king_home_square(color)
                && (has_flag(CastleSide::KingSide) || has_flag(CastleSide::QueenSide))
        }
        PieceKind::Rook => [CastleSide::KingSide, CastleSide::QueenSide]
            .into_iter()
            .any(|side| has_flag(side) && castle_layout(color, side).rook_home == square),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => false,
    }
}

const fn side_index(side: CastleSide) -> usize {
    match side {
        CastleSide::KingSide => 0,
        CastleSide::QueenSide => 1,
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = PieceKind::from_notation(ch.to_ascii_uppercase())?;
    Some((color, kind))
}
