//! Immutable piece values and per-kind move generation dispatch.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square, NUM_SQUARES};
use crate::move_generation::chess_move::Move;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;
use crate::pieces::piece_cache::PIECE_CACHE;

/// Castling history carried by a king.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastleState {
    pub is_castled: bool,
    pub castled_king_side: bool,
    pub castled_queen_side: bool,
}

/// A piece on a particular square.
///
/// Pieces never change in place: moving one yields a new value at the
/// destination via [`Piece::move_piece`]. Equality compares every field.
///
/// Only pawns, kings and rooks track their first move; knights, bishops and
/// queens always report it as made, so their value depends on position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    first_move: bool,
    castle_state: Option<CastleState>,
}

impl Piece {
    /// Creates a piece; kings start with an empty castle state.
    ///
    /// # Panics
    ///
    /// Panics when `square` is off the board.
    pub const fn new(kind: PieceKind, color: Color, square: Square, first_move: bool) -> Self {
        assert!((square as usize) < NUM_SQUARES, "piece square is off the board");
        let castle_state = match kind {
            PieceKind::King => Some(CastleState {
                is_castled: false,
                castled_king_side: false,
                castled_queen_side: false,
            }),
            _ => None,
        };
        Self {
            kind,
            color,
            square,
            first_move: first_move && tracks_first_move(kind),
            castle_state,
        }
    }

    /// # Panics
    ///
    /// Panics when `square` is off the board.
    pub const fn king(color: Color, square: Square, first_move: bool, state: CastleState) -> Self {
        assert!((square as usize) < NUM_SQUARES, "piece square is off the board");
        Self {
            kind: PieceKind::King,
            color,
            square,
            first_move,
            castle_state: Some(state),
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// The same piece with its first move spent.
    pub const fn without_first_move(self) -> Self {
        Self {
            first_move: false,
            ..self
        }
    }

    /// `Some` for kings only.
    #[inline]
    pub const fn castle_state(&self) -> Option<CastleState> {
        self.castle_state
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    pub const fn is_rook(&self) -> bool {
        matches!(self.kind, PieceKind::Rook)
    }

    #[inline]
    pub const fn is_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    /// FEN character: upper case for White, lower case for Black.
    pub const fn fen_char(&self) -> char {
        let letter = self.kind.notation();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    /// Pseudo-legal moves of this piece on `board`, castles excluded.
    pub fn generate_moves(&self, board: &Board) -> Vec<Move> {
        let mut out = Vec::with_capacity(16);
        match self.kind {
            PieceKind::Pawn => generate_pawn_moves(self, board, &mut out),
            PieceKind::Knight => generate_knight_moves(self, board, &mut out),
            PieceKind::Bishop => generate_bishop_moves(self, board, &mut out),
            PieceKind::Rook => generate_rook_moves(self, board, &mut out),
            PieceKind::Queen => generate_queen_moves(self, board, &mut out),
            PieceKind::King => generate_king_moves(self, board, &mut out),
        }
        out
    }

    /// The piece that results from this piece making `mv`.
    ///
    /// Non-king successors come from the precomputed cache. Kings are built
    /// directly because they record which castle, if any, just happened.
    pub fn move_piece(&self, mv: &Move) -> Piece {
        let Some(destination) = mv.destination() else {
            return *self;
        };
        match PIECE_CACHE.get(self.kind, self.color, destination) {
            Some(piece) => piece,
            None => self.moved_king(destination, mv.castle_side()),
        }
    }

    fn moved_king(&self, destination: Square, castle: Option<CastleSide>) -> Piece {
        let previous = self.castle_state.unwrap_or_default();
        let state = CastleState {
            is_castled: previous.is_castled || castle.is_some(),
            castled_king_side: previous.castled_king_side
                || castle == Some(CastleSide::KingSide),
            castled_queen_side: previous.castled_queen_side
                || castle == Some(CastleSide::QueenSide),
        };
        Piece::king(self.color, destination, false, state)
    }
}

const fn tracks_first_move(kind: PieceKind) -> bool {
    matches!(kind, PieceKind::Pawn | PieceKind::King | PieceKind::Rook)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_compare_by_value() {
        let a = Piece::new(PieceKind::Rook, Color::White, 56, true);
        let b = Piece::new(PieceKind::Rook, Color::White, 56, true);
        let moved = Piece::new(PieceKind::Rook, Color::White, 56, false);
        assert_eq!(a, b);
        assert_ne!(a, moved);
    }

    #[test]
    fn only_kings_carry_castle_state() {
        assert!(Piece::new(PieceKind::King, Color::Black, 4, true)
            .castle_state()
            .is_some());
        assert!(Piece::new(PieceKind::Rook, Color::Black, 0, true)
            .castle_state()
            .is_none());
    }

    #[test]
    fn moving_a_piece_clears_first_move() {
        let rook = Piece::new(PieceKind::Rook, Color::White, 63, true);
        let mv = Move::quiet(rook, 47);
        let moved = rook.move_piece(&mv);
        assert_eq!(moved.square(), 47);
        assert!(!moved.is_first_move());
        assert_eq!(moved.kind(), PieceKind::Rook);
    }

    #[test]
    fn minor_pieces_and_queens_do_not_track_first_move() {
        for kind in [PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen] {
            let piece = Piece::new(kind, Color::Black, 1, true);
            assert!(!piece.is_first_move());
            assert_eq!(piece, Piece::new(kind, Color::Black, 1, false));
        }
        assert!(Piece::new(PieceKind::Pawn, Color::White, 52, true).is_first_move());
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn off_board_square_is_rejected() {
        let _ = Piece::new(PieceKind::Knight, Color::White, 64, false);
    }

    #[test]
    fn castling_king_records_side() {
        let king = Piece::new(PieceKind::King, Color::White, 60, true);
        let rook = Piece::new(PieceKind::Rook, Color::White, 63, true);
        let mv = Move::castle(king, 62, CastleSide::KingSide, rook, 61);
        let moved = king.move_piece(&mv);
        let state = moved.castle_state().expect("kings carry castle state");
        assert!(state.is_castled && state.castled_king_side && !state.castled_queen_side);

        // A later king move keeps the history.
        let step = Move::quiet(moved, 63);
        let later = moved.move_piece(&step);
        assert!(later.castle_state().is_some_and(|s| s.is_castled));
    }

    #[test]
    fn fen_chars_follow_color_case() {
        assert_eq!(Piece::new(PieceKind::Queen, Color::White, 59, true).fen_char(), 'Q');
        assert_eq!(Piece::new(PieceKind::Queen, Color::Black, 3, true).fen_char(), 'q');
    }
}
