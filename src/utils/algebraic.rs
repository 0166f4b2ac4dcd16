//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices reused by the FEN, long algebraic and notation components.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Square, NUM_SQUARES};
use crate::utils::board_utils::ALGEBRAIC_NOTATION;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file_index = file - b'a';
    let row_index = b'8' - rank;
    Ok(row_index * 8 + file_index)
}

/// Convert a square index to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<&'static str> {
    ALGEBRAIC_NOTATION
        .get(square as usize)
        .copied()
        .ok_or(ChessError::SquareOutOfRange(square))
}

/// File letter of an in-range square (for example: 'e' for e4).
#[inline]
pub fn file_char(square: Square) -> char {
    debug_assert!((square as usize) < NUM_SQUARES);
    char::from(b'a' + square % 8)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, file_char, square_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);
        assert_eq!(algebraic_to_square("e2").expect("e2 should parse"), 52);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a8");
        assert_eq!(square_to_algebraic(60).expect("60 should convert"), "e1");
        for sq in 0..64u8 {
            let text = square_to_algebraic(sq).expect("in-range square");
            assert_eq!(algebraic_to_square(text).expect("round trip"), sq);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(square_to_algebraic(64).is_err());
        assert_eq!(file_char(36), 'e');
    }
}
