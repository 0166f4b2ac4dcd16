//! Errors used throughout the rules engine.
//!
//! `ChessError` covers every recoverable failure mode on the input side of the
//! crate: FEN text, algebraic coordinates, long algebraic moves and position
//! files. Illegal moves are not errors; they surface as a `MoveStatus` on the
//! returned `MoveTransition`. Structural invariant violations found while
//! applying a move (wrong king count, applying the null move) panic instead.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Error, Debug)]
pub enum ChessError {
    /// FEN text did not have the expected field layout.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Unexpected character inside the FEN board or castling field.
    #[error("invalid FEN token '{0}'")]
    InvalidFenToken(char),

    /// An algebraic square like `e4` failed to parse.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A long algebraic move like `e2e4` failed to parse.
    #[error("invalid long algebraic move: {0}")]
    InvalidLongAlgebraic(String),

    #[error("square index out of range: {0}")]
    SquareOutOfRange(u8),

    /// A board must hold exactly one king per color.
    #[error("{color:?} has {count} kings, expected exactly one")]
    InvalidKingCount { color: Color, count: usize },

    /// The en-passant square does not sit behind a pawn that just double-stepped.
    #[error("no double-stepped pawn behind en-passant square {0}")]
    InvalidEnPassant(String),

    /// The side that just moved would still be in check.
    #[error("{0:?} is in check but it is not their move")]
    OpponentInCheck(Color),

    /// Two placements in a position file claim the same square.
    #[error("square {0} is occupied more than once")]
    DuplicateSquare(Square),

    /// The requested move is not among the usable moves of the board.
    #[error("no usable move matches {0}")]
    MoveNotFound(String),

    #[error("unsupported position file version {0}")]
    UnsupportedFormatVersion(u32),

    #[error("position file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("position file is malformed: {0}")]
    PositionJson(#[from] serde_json::Error),
}

/// Result alias for fallible engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
