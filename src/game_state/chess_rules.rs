//! Canonical chess-rule constants.
//!
//! Holds the standard starting layout and the fixed square sets each color
//! uses to castle. Both colors' sets are mirror images of one another.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back rank from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Squares involved in one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleLayout {
    pub king_home: Square,
    pub king_destination: Square,
    pub rook_home: Square,
    pub rook_destination: Square,
    /// Squares between king and rook; all must be empty.
    pub between: &'static [Square],
    /// Squares the king crosses or lands on; none may be attacked.
    pub king_path: &'static [Square],
}

const WHITE_KING_SIDE: CastleLayout = CastleLayout {
    king_home: 60,
    king_destination: 62,
    rook_home: 63,
    rook_destination: 61,
    between: &[61, 62],
    king_path: &[61, 62],
};

const WHITE_QUEEN_SIDE: CastleLayout = CastleLayout {
    king_home: 60,
    king_destination: 58,
    rook_home: 56,
    rook_destination: 59,
    between: &[57, 58, 59],
    king_path: &[59, 58],
};

const BLACK_KING_SIDE: CastleLayout = CastleLayout {
    king_home: 4,
    king_destination: 6,
    rook_home: 7,
    rook_destination: 5,
    between: &[5, 6],
    king_path: &[5, 6],
};

const BLACK_QUEEN_SIDE: CastleLayout = CastleLayout {
    king_home: 4,
    king_destination: 2,
    rook_home: 0,
    rook_destination: 3,
    between: &[1, 2, 3],
    king_path: &[3, 2],
};

pub const fn castle_layout(color: Color, side: CastleSide) -> CastleLayout {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => WHITE_KING_SIDE,
        (Color::White, CastleSide::QueenSide) => WHITE_QUEEN_SIDE,
        (Color::Black, CastleSide::KingSide) => BLACK_KING_SIDE,
        (Color::Black, CastleSide::QueenSide) => BLACK_QUEEN_SIDE,
    }
}

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    match color {
        Color::White => 60,
        Color::Black => 4,
    }
}

/// Color and kind standing on `square` in the standard starting layout.
pub const fn standard_setup_at(square: Square) -> Option<(Color, PieceKind)> {
    let file = (square % 8) as usize;
    match square / 8 {
        0 => Some((Color::Black, BACK_RANK[file])),
        1 => Some((Color::Black, PieceKind::Pawn)),
        6 => Some((Color::White, PieceKind::Pawn)),
        7 => Some((Color::White, BACK_RANK[file])),
        _ => None,
    }
}
