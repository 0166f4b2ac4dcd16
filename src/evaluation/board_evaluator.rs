//! Static board evaluation.
//!
//! Scores are centipawns from White's point of view: positive favors White.
//! There is no search here; `depth` only scales the checkmate bonus so that a
//! caller exploring a tree can prefer faster mates.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::player::Player;

pub const CHECK_BONUS: i32 = 50;
pub const CHECKMATE_BONUS: i32 = 10_000;
pub const CASTLE_BONUS: i32 = 60;

pub trait BoardEvaluator: Send + Sync {
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

/// Material plus mobility, with bonuses for check, mate and having castled.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBoardEvaluator;

impl StandardBoardEvaluator {
    fn score_player(player: Player<'_>, depth: u32) -> i32 {
        let material: i32 = player.active_pieces().iter().map(|piece| piece.value()).sum();
        let mobility = player.usable_moves().len() as i32;

        let opponent = player.opponent();
        let mut bonus = 0;
        if opponent.is_in_check() {
            bonus += CHECK_BONUS;
            if opponent.board().side_to_move() == opponent.color() && !opponent.has_escape_moves() {
                bonus += CHECKMATE_BONUS * depth_bonus(depth);
            }
        }
        if player.is_castled() {
            bonus += CASTLE_BONUS;
        }

        material + mobility + bonus
    }
}

fn depth_bonus(depth: u32) -> i32 {
    if depth == 0 {
        1
    } else {
        100 * depth as i32
    }
}

impl BoardEvaluator for StandardBoardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        Self::score_player(board.player(Color::White), depth)
            - Self::score_player(board.player(Color::Black), depth)
    }
}
