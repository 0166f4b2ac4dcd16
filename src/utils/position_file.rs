//! JSON position files.
//!
//! A position file lists every piece explicitly, including first-move flags
//! and king castle history, so it preserves state that FEN can only
//! approximate. Squares are written in algebraic form.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_builder::BoardBuilder;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::pieces::piece::{CastleState, Piece};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use crate::utils::fen_parser::{build_set_up_position, parse_en_passant};

pub const POSITION_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionFile {
    pub format_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    pub side_to_move: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_passant_square: Option<String>,
    #[serde(default)]
    pub halfmove_clock: u16,
    #[serde(default = "first_fullmove")]
    pub fullmove_number: u16,
    pub pieces: Vec<PiecePlacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecePlacement {
    pub kind: PieceKind,
    pub color: Color,
    pub square: String,
    pub first_move: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub castle: Option<CastleState>,
}

fn first_fullmove() -> u16 {
    1
}

impl PositionFile {
    pub fn from_board(board: &Board, saved_at: Option<DateTime<Utc>>) -> Self {
        let pieces = board
            .all_pieces()
            .map(|piece| PiecePlacement {
                kind: piece.kind(),
                color: piece.color(),
                square: algebraic(piece.square()),
                first_move: piece.is_first_move(),
                castle: piece.castle_state(),
            })
            .collect();

        let en_passant_square = board.en_passant_pawn().map(|pawn| {
            let target = pawn.square() as i16 + 8 * pawn.color().opposite_direction() as i16;
            algebraic(target as u8)
        });

        Self {
            format_version: POSITION_FORMAT_VERSION,
            saved_at,
            side_to_move: board.side_to_move(),
            en_passant_square,
            halfmove_clock: board.halfmove_clock(),
            fullmove_number: board.fullmove_number(),
            pieces,
        }
    }

    /// Validates the document and builds the board it describes.
    pub fn to_board(&self) -> ChessResult<Board> {
        if self.format_version != POSITION_FORMAT_VERSION {
            return Err(ChessError::UnsupportedFormatVersion(self.format_version));
        }

        let mut builder = BoardBuilder::new();
        for placement in &self.pieces {
            let square = algebraic_to_square(&placement.square)?;
            if builder.piece_at(square).is_some() {
                return Err(ChessError::DuplicateSquare(square));
            }
            let piece = match placement.kind {
                PieceKind::King => Piece::king(
                    placement.color,
                    square,
                    placement.first_move,
                    placement.castle.unwrap_or_default(),
                ),
                kind => Piece::new(kind, placement.color, square, placement.first_move),
            };
            builder.set_piece(piece);
        }
        builder
            .set_move_maker(self.side_to_move)
            .set_clocks(self.halfmove_clock, self.fullmove_number);

        let en_passant = self.en_passant_square.as_deref().unwrap_or("-");
        if let Some(pawn) = parse_en_passant(en_passant, self.side_to_move, &builder)? {
            builder.set_en_passant_pawn(pawn);
        }

        build_set_up_position(builder)
    }
}

fn algebraic(square: u8) -> String {
    square_to_algebraic(square).unwrap_or("??").to_owned()
}

pub fn parse_position_json(json: &str) -> ChessResult<Board> {
    let document: PositionFile = serde_json::from_str(json)?;
    document.to_board()
}

/// Serializes `board`, stamped with the current time.
pub fn position_to_json(board: &Board) -> ChessResult<String> {
    let document = PositionFile::from_board(board, Some(Utc::now()));
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn read_position_file(path: impl AsRef<Path>) -> ChessResult<Board> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let board = parse_position_json(&text)
        .inspect_err(|err| debug!(path = %path.display(), %err, "rejected position file"))?;
    info!(path = %path.display(), "loaded position file");
    Ok(board)
}

pub fn write_position_file(path: impl AsRef<Path>, board: &Board) -> ChessResult<()> {
    let path = path.as_ref();
    fs::write(path, position_to_json(board)?)?;
    info!(path = %path.display(), "saved position file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_lookup::create_move;

    #[test]
    fn preserves_first_move_and_castle_history() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castled = create_move(&board, 60, 62).apply(&board);

        let json = position_to_json(&castled).expect("board should serialize");
        let restored = parse_position_json(&json).expect("json should parse");
        for square in 0..64u8 {
            assert_eq!(restored.piece_at(square), castled.piece_at(square));
        }
        assert!(restored.white_player().is_castled());
        assert_eq!(restored.to_fen(), castled.to_fen());
    }

    #[test]
    fn keeps_en_passant_target() {
        let board = Board::standard_board();
        let after = create_move(&board, 52, 36).apply(&board);
        let document = PositionFile::from_board(&after, None);
        assert_eq!(document.en_passant_square.as_deref(), Some("e3"));
        let restored = document.to_board().expect("document should build");
        assert_eq!(restored.en_passant_pawn().map(|p| p.square()), Some(36));
    }

    #[test]
    fn unknown_piece_kind_aborts_loading() {
        let json = r#"{
            "format_version": 1,
            "side_to_move": "White",
            "pieces": [
                { "kind": "Wizard", "color": "White", "square": "e1", "first_move": true }
            ]
        }"#;
        assert!(matches!(
            parse_position_json(json),
            Err(ChessError::PositionJson(_))
        ));
    }

    #[test]
    fn rejects_duplicates_and_bad_versions() {
        let mut document = PositionFile::from_board(&Board::standard_board(), None);
        document.format_version = 7;
        assert!(matches!(
            document.to_board(),
            Err(ChessError::UnsupportedFormatVersion(7))
        ));

        let mut document = PositionFile::from_board(&Board::standard_board(), None);
        let copy = document.pieces[0].clone();
        document.pieces.push(copy);
        assert!(matches!(
            document.to_board(),
            Err(ChessError::DuplicateSquare(_))
        ));

        let mut document = PositionFile::from_board(&Board::standard_board(), None);
        document.pieces[0].square = "j9".to_owned();
        assert!(matches!(
            document.to_board(),
            Err(ChessError::InvalidAlgebraic(_))
        ));
    }

    #[test]
    fn clocks_default_when_absent() {
        let json = r#"{
            "format_version": 1,
            "side_to_move": "Black",
            "pieces": [
                { "kind": "King", "color": "White", "square": "e1", "first_move": false },
                { "kind": "King", "color": "Black", "square": "e8", "first_move": false }
            ]
        }"#;
        let board = parse_position_json(json).expect("minimal document should parse");
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (0, 1));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("slate_chess_position_{}.json", std::process::id()));
        let board = Board::standard_board();
        write_position_file(&path, &board).expect("write should succeed");
        let restored = read_position_file(&path).expect("read should succeed");
        assert_eq!(restored.to_fen(), board.to_fen());
        let _ = fs::remove_file(&path);
    }
}
