//! Primitive chess types shared by every component.
//!
//! Squares are flat indices in `0..64`, rank-major from a8 (`0`) to h1 (`63`),
//! so White advances toward lower indices and Black toward higher ones.

use serde::{Deserialize, Serialize};

use crate::utils::board_utils::{RANK_EIGHT, RANK_ONE, RANK_SEVEN, RANK_TWO};

/// Board square index (`0..64`, a8 = 0, h1 = 63).
pub type Square = u8;

pub const NUM_SQUARES: usize = 64;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign applied to pawn offsets so that they point toward the far rank.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite_direction(self) -> i8 {
        -self.direction()
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    /// True when a pawn of this color landing on `square` must promote.
    #[inline]
    pub const fn is_pawn_promotion_square(self, square: Square) -> bool {
        match self {
            Color::White => RANK_EIGHT[square as usize],
            Color::Black => RANK_ONE[square as usize],
        }
    }

    /// True on the rank a pawn of this color starts from.
    #[inline]
    pub const fn is_pawn_home_square(self, square: Square) -> bool {
        match self {
            Color::White => RANK_TWO[square as usize],
            Color::Black => RANK_SEVEN[square as usize],
        }
    }

    /// Single-character FEN side-to-move field.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Upper-case letter used by FEN (White) and algebraic notation.
    #[inline]
    pub const fn notation(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn from_notation(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Order in which a pawn reaching the far rank offers its promotions.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Which rook a castle move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

#[inline]
pub const fn is_valid_square(square: i16) -> bool {
    square >= 0 && square < NUM_SQUARES as i16
}
