//! Immutable board snapshots.
//!
//! A `Board` is built once from a [`BoardBuilder`] and never changes; every
//! move produces a new board. Construction partitions the pieces by color and
//! eagerly derives each side's pseudo-legal moves (castles included) and check
//! status, so the per-side views handed out by [`Board::player`] are cheap.

use std::fmt;

use tracing::trace;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board_builder::BoardBuilder;
use crate::game_state::chess_rules::standard_setup_at;
use crate::game_state::chess_types::{Color, Square, NUM_SQUARES};
use crate::game_state::player::{Player, PlayerState};
use crate::move_generation::castle_moves::{calculate_castles, is_square_attacked};
use crate::move_generation::chess_move::Move;
use crate::pieces::piece::Piece;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_board::render_board;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Option<Piece>; NUM_SQUARES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
    last_move: Move,
    halfmove_clock: u16,
    fullmove_number: u16,
    white_state: PlayerState,
    black_state: PlayerState,
}

impl Board {
    pub(crate) fn from_builder(builder: BoardBuilder) -> ChessResult<Self> {
        let white_pieces = collect_pieces(&builder.tiles, Color::White);
        let black_pieces = collect_pieces(&builder.tiles, Color::Black);
        let white_king = single_king(&white_pieces, Color::White)?;
        let black_king = single_king(&black_pieces, Color::Black)?;

        let mut board = Board {
            tiles: builder.tiles,
            white_pieces,
            black_pieces,
            side_to_move: builder.move_maker,
            en_passant_pawn: builder.en_passant_pawn,
            last_move: builder.transition_move.unwrap_or(Move::Null),
            halfmove_clock: builder.halfmove_clock,
            fullmove_number: builder.fullmove_number,
            white_state: PlayerState::new(Color::White, white_king),
            black_state: PlayerState::new(Color::Black, black_king),
        };

        // Each piece generates independently; castles need both sides' moves.
        let white_standard = board.standard_moves(Color::White);
        let black_standard = board.standard_moves(Color::Black);

        let white_in_check =
            is_square_attacked(&board, white_king.square(), Color::Black, &black_standard);
        let black_in_check =
            is_square_attacked(&board, black_king.square(), Color::White, &white_standard);

        let white_castles = calculate_castles(&board, Color::White, white_in_check, &black_standard);
        let black_castles = calculate_castles(&board, Color::Black, black_in_check, &white_standard);

        board.white_state.finish(white_standard, white_castles, white_in_check);
        board.black_state.finish(black_standard, black_castles, black_in_check);

        trace!(
            side_to_move = ?board.side_to_move,
            white_pieces = board.white_pieces.len(),
            black_pieces = board.black_pieces.len(),
            "board built"
        );

        Ok(board)
    }

    /// The standard starting position.
    pub fn standard_board() -> Self {
        let mut builder = BoardBuilder::new();
        for square in 0..NUM_SQUARES as Square {
            if let Some((color, kind)) = standard_setup_at(square) {
                builder.set_piece(Piece::new(kind, color, square, true));
            }
        }
        builder.set_move_maker(Color::White);
        builder.build()
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tiles.get(square as usize).copied().flatten()
    }

    /// White pieces followed by black pieces.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    pub fn pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    #[inline]
    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    #[inline]
    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The pawn that double-stepped on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// The move that produced this board; `Move::Null` for set-up positions.
    #[inline]
    pub fn last_move(&self) -> &Move {
        &self.last_move
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, color)
    }

    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    pub fn white_player(&self) -> Player<'_> {
        self.player(Color::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        self.player(Color::Black)
    }

    /// Pseudo-legal moves of both sides, White first.
    pub fn all_usable_moves(&self) -> impl Iterator<Item = &Move> {
        self.white_state
            .usable_moves
            .iter()
            .chain(self.black_state.usable_moves.iter())
    }

    /// Checkmate and stalemate tests for the side to move.
    pub fn status(&self) -> BoardStatus {
        let player = self.current_player();
        if player.has_escape_moves() {
            BoardStatus::InProgress
        } else if player.is_in_check() {
            BoardStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else {
            BoardStatus::Stalemate
        }
    }

    pub(crate) fn player_state(&self, color: Color) -> &PlayerState {
        match color {
            Color::White => &self.white_state,
            Color::Black => &self.black_state,
        }
    }

    fn standard_moves(&self, color: Color) -> Vec<Move> {
        self.pieces(color)
            .iter()
            .flat_map(|piece| piece.generate_moves(self))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

fn collect_pieces(tiles: &[Option<Piece>; NUM_SQUARES], color: Color) -> Vec<Piece> {
    tiles
        .iter()
        .flatten()
        .filter(|piece| piece.color() == color)
        .copied()
        .collect()
}

fn single_king(pieces: &[Piece], color: Color) -> ChessResult<Piece> {
    let mut kings = pieces.iter().filter(|piece| piece.is_king());
    match (kings.next(), kings.count()) {
        (Some(king), 0) => Ok(*king),
        (None, _) => Err(ChessError::InvalidKingCount { color, count: 0 }),
        (Some(_), extra) => Err(ChessError::InvalidKingCount {
            color,
            count: extra + 1,
        }),
    }
}
