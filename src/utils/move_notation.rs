//! Standard algebraic notation (`Nf3`, `exd5`, `e8=Q+`, `O-O`).

use crate::game_state::board::Board;
use crate::game_state::chess_types::CastleSide;
use crate::move_generation::chess_move::Move;
use crate::utils::algebraic::file_char;
use crate::utils::board_utils::{file_of, rank_of, ALGEBRAIC_NOTATION};

impl Move {
    /// Renders this move as played from `board`.
    ///
    /// Ambiguous piece moves are disambiguated by source file, then rank.
    /// A `+` or `#` suffix is appended when the move checks or mates.
    pub fn to_san(&self, board: &Board) -> String {
        let (Some(piece), Some(from), Some(to)) = (self.moving_piece(), self.source(), self.destination())
        else {
            return "--".to_owned();
        };

        let mut out = String::new();
        match self {
            Move::Castle { side, .. } => out.push_str(match side {
                CastleSide::KingSide => "O-O",
                CastleSide::QueenSide => "O-O-O",
            }),
            _ if piece.is_pawn() => {
                if self.is_attack() {
                    out.push(file_char(from));
                    out.push('x');
                }
                out.push_str(ALGEBRAIC_NOTATION[to as usize]);
                if let Some(kind) = self.promotion_kind() {
                    out.push('=');
                    out.push(kind.notation());
                }
            }
            _ => {
                out.push(piece.kind().notation());
                out.push_str(&disambiguation(self, board));
                if self.is_attack() {
                    out.push('x');
                }
                out.push_str(ALGEBRAIC_NOTATION[to as usize]);
            }
        }

        let after = self.apply(board);
        let defender = after.current_player();
        if defender.is_in_check() {
            out.push(if defender.has_escape_moves() { '+' } else { '#' });
        }
        out
    }
}

fn disambiguation(mv: &Move, board: &Board) -> String {
    let (Some(piece), Some(from), Some(to)) = (mv.moving_piece(), mv.source(), mv.destination()) else {
        return String::new();
    };

    let rivals: Vec<u8> = board
        .player(piece.color())
        .usable_moves()
        .iter()
        .filter(|other| other.destination() == Some(to) && other.source() != Some(from))
        .filter_map(|other| {
            other
                .moving_piece()
                .filter(|p| p.kind() == piece.kind())
                .map(|p| p.square())
        })
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|sq| file_of(*sq) != file_of(from)) {
        file_char(from).to_string()
    } else if rivals.iter().all(|sq| rank_of(*sq) != rank_of(from)) {
        rank_of(from).to_string()
    } else {
        ALGEBRAIC_NOTATION[from as usize].to_owned()
    }
}
