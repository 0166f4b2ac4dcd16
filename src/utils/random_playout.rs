//! Uniformly random games, used for smoke testing the rules engine.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::board::{Board, BoardStatus};
use crate::move_generation::chess_move::Move;

#[derive(Debug, Clone)]
pub struct Playout {
    pub moves: Vec<Move>,
    pub final_board: Board,
    pub status: BoardStatus,
}

/// Plays up to `max_plies` uniformly random legal moves from `board`.
///
/// Stops early at checkmate or stalemate.
pub fn random_playout<R: Rng + ?Sized>(board: &Board, max_plies: usize, rng: &mut R) -> Playout {
    let mut current = board.clone();
    let mut moves = Vec::new();

    for _ in 0..max_plies {
        let legal = current.current_player().legal_moves();
        let Some(picked) = legal.choose(rng) else {
            break;
        };
        current = picked.apply(&current);
        moves.push(picked.clone());
    }

    let status = current.status();
    debug!(plies = moves.len(), ?status, "random playout finished");
    Playout {
        moves,
        final_board: current,
        status,
    }
}
