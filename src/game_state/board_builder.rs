//! Mutable staging area for a new [`Board`].
//!
//! Move application, FEN parsing and position files all accumulate piece
//! placements here and then finalize into an immutable board.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square, NUM_SQUARES};
use crate::move_generation::chess_move::Move;
use crate::pieces::piece::Piece;

#[derive(Debug, Clone)]
pub struct BoardBuilder {
    pub(crate) tiles: [Option<Piece>; NUM_SQUARES],
    pub(crate) move_maker: Color,
    pub(crate) en_passant_pawn: Option<Piece>,
    pub(crate) transition_move: Option<Move>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            tiles: [None; NUM_SQUARES],
            move_maker: Color::White,
            en_passant_pawn: None,
            transition_move: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `piece` on its own square; the last write to a square wins.
    ///
    /// Piece constructors refuse off-board squares, so every piece lands.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.tiles[piece.square() as usize] = Some(piece);
        self
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.tiles.get_mut(square as usize).and_then(Option::take)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tiles.get(square as usize).copied().flatten()
    }

    pub fn set_move_maker(&mut self, color: Color) -> &mut Self {
        self.move_maker = color;
        self
    }

    /// The pawn that just double-stepped and may be taken en passant.
    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// The move that produced the board being built.
    pub fn set_move_transition(&mut self, mv: Move) -> &mut Self {
        self.transition_move = Some(mv);
        self
    }

    pub fn set_clocks(&mut self, halfmove_clock: u16, fullmove_number: u16) -> &mut Self {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self
    }

    /// Finalizes the board, failing when a color does not have exactly one king.
    pub fn try_build(self) -> ChessResult<Board> {
        Board::from_builder(self)
    }

    /// Finalizes a board staged from a position already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when a color does not have exactly one king. Move application
    /// only reaches this when the source board was itself inconsistent.
    pub fn build(self) -> Board {
        match self.try_build() {
            Ok(board) => board,
            Err(err) => panic!("board invariant violated: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::PieceKind;

    fn kings_only() -> BoardBuilder {
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Color::White, 60, true))
            .set_piece(Piece::new(PieceKind::King, Color::Black, 4, true));
        builder
    }

    #[test]
    fn last_write_per_square_wins() {
        let mut builder = kings_only();
        builder.set_piece(Piece::new(PieceKind::Knight, Color::White, 36, false));
        builder.set_piece(Piece::new(PieceKind::Bishop, Color::Black, 36, false));
        let board = builder.build();
        let piece = board.piece_at(36).expect("e4 is occupied");
        assert_eq!(piece.kind(), PieceKind::Bishop);
        assert_eq!(board.all_pieces().count(), 3);
    }

    #[test]
    fn missing_king_is_rejected() {
        let mut builder = BoardBuilder::new();
        builder.set_piece(Piece::new(PieceKind::King, Color::White, 60, true));
        let err = builder.try_build().expect_err("black has no king");
        assert!(matches!(
            err,
            ChessError::InvalidKingCount {
                color: Color::Black,
                count: 0
            }
        ));
    }

    #[test]
    fn second_king_is_rejected() {
        let mut builder = kings_only();
        builder.set_piece(Piece::new(PieceKind::King, Color::White, 0, false));
        assert!(builder.try_build().is_err());
    }

    #[test]
    #[should_panic(expected = "board invariant violated")]
    fn build_panics_without_kings() {
        BoardBuilder::new().build();
    }

    #[test]
    fn remove_piece_clears_the_square() {
        let mut builder = kings_only();
        builder.set_piece(Piece::new(PieceKind::Rook, Color::White, 63, true));
        assert!(builder.remove_piece(63).is_some());
        assert!(builder.piece_at(63).is_none());
        assert!(builder.remove_piece(63).is_none());
    }
}
