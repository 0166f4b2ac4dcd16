//! Coordinate geometry lookup tables.
//!
//! Flat square arithmetic wraps around the board edges (a step of `-1` from a
//! file-a square lands on file h one rank up), so every generator consults these
//! file tables before stepping. All tables are computed at compile time.

use crate::game_state::chess_types::{Square, NUM_SQUARES};

pub const NUM_SQUARES_PER_ROW: usize = 8;

pub const FILE_A: [bool; NUM_SQUARES] = init_file(0);
pub const FILE_B: [bool; NUM_SQUARES] = init_file(1);
pub const FILE_G: [bool; NUM_SQUARES] = init_file(6);
pub const FILE_H: [bool; NUM_SQUARES] = init_file(7);

pub const RANK_EIGHT: [bool; NUM_SQUARES] = init_row(0);
pub const RANK_SEVEN: [bool; NUM_SQUARES] = init_row(1);
pub const RANK_SIX: [bool; NUM_SQUARES] = init_row(2);
pub const RANK_FIVE: [bool; NUM_SQUARES] = init_row(3);
pub const RANK_FOUR: [bool; NUM_SQUARES] = init_row(4);
pub const RANK_THREE: [bool; NUM_SQUARES] = init_row(5);
pub const RANK_TWO: [bool; NUM_SQUARES] = init_row(6);
pub const RANK_ONE: [bool; NUM_SQUARES] = init_row(7);

/// Algebraic name of every square, indexed by square.
#[rustfmt::skip]
pub const ALGEBRAIC_NOTATION: [&str; NUM_SQUARES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

const fn init_file(file: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut sq = file;
    while sq < NUM_SQUARES {
        table[sq] = true;
        sq += NUM_SQUARES_PER_ROW;
    }
    table
}

const fn init_row(row: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut sq = row * NUM_SQUARES_PER_ROW;
    while sq < (row + 1) * NUM_SQUARES_PER_ROW {
        table[sq] = true;
        sq += 1;
    }
    table
}

/// Square reached from `square` by `offset`, if it stays within `0..64`.
///
/// This only guards the index range; callers still own the file exclusions.
#[inline]
pub fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let candidate = square as i16 + offset as i16;
    if (0..NUM_SQUARES as i16).contains(&candidate) {
        Some(candidate as Square)
    } else {
        None
    }
}

/// Zero-based file (`a` = 0).
#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % NUM_SQUARES_PER_ROW as u8
}

/// Chess rank number (`1..=8`).
#[inline]
pub const fn rank_of(square: Square) -> u8 {
    8 - square / NUM_SQUARES_PER_ROW as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_tables_have_eight_squares_each() {
        for table in [FILE_A, FILE_B, FILE_G, FILE_H] {
            assert_eq!(table.iter().filter(|x| **x).count(), 8);
        }
        assert!(FILE_A[0] && FILE_A[56]);
        assert!(FILE_H[7] && FILE_H[63]);
        assert!(!FILE_A[1]);
    }

    #[test]
    fn rank_tables_follow_a8_origin() {
        assert!(RANK_EIGHT[0] && RANK_EIGHT[7]);
        assert!(RANK_TWO[48] && RANK_TWO[55]);
        assert!(RANK_ONE[63]);
        assert!(RANK_FOUR[36] && RANK_FIVE[28] && RANK_SIX[20] && RANK_THREE[44]);
    }

    #[test]
    fn offset_square_only_guards_range() {
        assert_eq!(offset_square(0, -1), None);
        assert_eq!(offset_square(63, 1), None);
        // Wraps from a7 to h8; exclusion tables are what prevent this.
        assert_eq!(offset_square(8, -1), Some(7));
    }

    #[test]
    fn file_and_rank_of_corners() {
        assert_eq!((file_of(0), rank_of(0)), (0, 8));
        assert_eq!((file_of(63), rank_of(63)), (7, 1));
        assert_eq!(ALGEBRAIC_NOTATION[36], "e4");
    }
}
