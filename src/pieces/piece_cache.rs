//! Precomputed successor pieces.
//!
//! Every non-king piece that has just moved is fully described by its kind,
//! color and destination, so the whole set (5 kinds x 2 colors x 64 squares)
//! is built at compile time and copied out on each move.

use crate::game_state::chess_types::{Color, PieceKind, Square, NUM_SQUARES};
use crate::pieces::piece::Piece;

const CACHED_KINDS: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

const COLORS: [Color; 2] = [Color::White, Color::Black];

pub struct PieceCache {
    pieces: [[[Piece; NUM_SQUARES]; 2]; 5],
}

pub static PIECE_CACHE: PieceCache = PieceCache::build();

impl PieceCache {
    const fn build() -> Self {
        let placeholder = Piece::new(PieceKind::Pawn, Color::White, 0, false);
        let mut pieces = [[[placeholder; NUM_SQUARES]; 2]; 5];

        let mut k = 0;
        while k < CACHED_KINDS.len() {
            let mut c = 0;
            while c < COLORS.len() {
                let mut sq = 0;
                while sq < NUM_SQUARES {
                    pieces[k][c][sq] = Piece::new(CACHED_KINDS[k], COLORS[c], sq as Square, false);
                    sq += 1;
                }
                c += 1;
            }
            k += 1;
        }

        Self { pieces }
    }

    /// Moved piece of `kind` and `color` on `square`; `None` for kings.
    #[inline]
    pub fn get(&self, kind: PieceKind, color: Color, square: Square) -> Option<Piece> {
        if kind == PieceKind::King {
            return None;
        }
        self.pieces
            .get(kind.index())?
            .get(color.index())?
            .get(square as usize)
            .copied()
    }
}
