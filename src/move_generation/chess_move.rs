//! The closed set of move variants.
//!
//! Moves are plain values: they name the piece that moves, where it goes and
//! what it captures. They do not hold a board; [`Move::apply`] takes the board
//! the move is played from. Two moves are equal when they share source square,
//! destination square and moving piece, so the four promotion choices for one
//! pawn step compare equal to each other.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
use crate::pieces::piece::Piece;
use crate::utils::board_utils::ALGEBRAIC_NOTATION;

#[derive(Debug, Clone)]
pub enum Move {
    /// Non-capturing single step or slide, for any piece.
    Quiet { piece: Piece, destination: Square },
    /// Capture of the piece standing on the destination.
    Attack {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Pawn double step; the moved pawn becomes the next en-passant target.
    PawnJump { piece: Piece, destination: Square },
    /// Pawn capture of a pawn that sits one rank behind the destination.
    EnPassantAttack {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Pawn reaching the far rank; wraps the quiet step or capture it rides on.
    Promotion {
        inner: Box<Move>,
        promotion_kind: PieceKind,
    },
    Castle {
        king: Piece,
        destination: Square,
        side: CastleSide,
        rook: Piece,
        rook_destination: Square,
    },
    /// "No move". Returned by lookups that found nothing; never applied.
    Null,
}

impl Move {
    pub fn quiet(piece: Piece, destination: Square) -> Self {
        Move::Quiet { piece, destination }
    }

    pub fn attack(piece: Piece, destination: Square, captured: Piece) -> Self {
        Move::Attack {
            piece,
            destination,
            captured,
        }
    }

    pub fn pawn_jump(piece: Piece, destination: Square) -> Self {
        Move::PawnJump { piece, destination }
    }

    pub fn en_passant(piece: Piece, destination: Square, captured: Piece) -> Self {
        Move::EnPassantAttack {
            piece,
            destination,
            captured,
        }
    }

    pub fn promotion(inner: Move, promotion_kind: PieceKind) -> Self {
        Move::Promotion {
            inner: Box::new(inner),
            promotion_kind,
        }
    }

    pub fn castle(
        king: Piece,
        destination: Square,
        side: CastleSide,
        rook: Piece,
        rook_destination: Square,
    ) -> Self {
        Move::Castle {
            king,
            destination,
            side,
            rook,
            rook_destination,
        }
    }

    pub fn moving_piece(&self) -> Option<&Piece> {
        match self {
            Move::Quiet { piece, .. }
            | Move::Attack { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::EnPassantAttack { piece, .. } => Some(piece),
            Move::Castle { king, .. } => Some(king),
            Move::Promotion { inner, .. } => inner.moving_piece(),
            Move::Null => None,
        }
    }

    pub fn source(&self) -> Option<Square> {
        self.moving_piece().map(Piece::square)
    }

    pub fn destination(&self) -> Option<Square> {
        match self {
            Move::Quiet { destination, .. }
            | Move::Attack { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::EnPassantAttack { destination, .. }
            | Move::Castle { destination, .. } => Some(*destination),
            Move::Promotion { inner, .. } => inner.destination(),
            Move::Null => None,
        }
    }

    pub fn captured_piece(&self) -> Option<&Piece> {
        match self {
            Move::Attack { captured, .. } | Move::EnPassantAttack { captured, .. } => {
                Some(captured)
            }
            Move::Promotion { inner, .. } => inner.captured_piece(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    pub fn castle_side(&self) -> Option<CastleSide> {
        match self {
            Move::Castle { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// The rook's square before castling.
    pub fn rook_origin(&self) -> Option<Square> {
        match self {
            Move::Castle { rook, .. } => Some(rook.square()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_pawn_jump(&self) -> bool {
        matches!(self, Move::PawnJump { .. })
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self, Move::EnPassantAttack { .. })
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self {
            Move::Promotion { promotion_kind, .. } => Some(*promotion_kind),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Equal squares and mover, and also the same variant and promotion kind.
    ///
    /// `==` alone cannot tell a promotion from a plain push to the last rank,
    /// or a castle from a king step to the same square.
    pub fn is_same_play(&self, other: &Move) -> bool {
        self == other
            && mem::discriminant(self) == mem::discriminant(other)
            && self.promotion_kind() == other.promotion_kind()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
            && self.destination() == other.destination()
            && self.moving_piece() == other.moving_piece()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source().hash(state);
        self.destination().hash(state);
        self.moving_piece().hash(state);
    }
}

/// Long algebraic form (`e2e4`, `e7e8q`, `e1g1`); `0000` for the null move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(from), Some(to)) = (self.source(), self.destination()) else {
            return f.write_str("0000");
        };
        write!(
            f,
            "{}{}",
            ALGEBRAIC_NOTATION[from as usize], ALGEBRAIC_NOTATION[to as usize]
        )?;
        if let Some(kind) = self.promotion_kind() {
            write!(f, "{}", kind.notation().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
