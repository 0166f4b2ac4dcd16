use std::panic;
use std::thread;

use crate::game_state::board::Board;
use crate::move_generation::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &Move, board_after: &Board) {
        self.nodes += 1;
        if mv.is_attack() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
        let defender = board_after.current_player();
        if defender.is_in_check() {
            self.checks += 1;
            if !defender.has_escape_moves() {
                self.checkmates += 1;
            }
        }
    }
}

/// Legal successors of `board` for the side to move.
fn legal_children(board: &Board) -> Vec<(Move, Board)> {
    let player = board.current_player();
    player
        .usable_moves()
        .iter()
        .filter_map(|mv| {
            let transition = player.apply_move(mv);
            transition
                .status()
                .is_done()
                .then(|| (mv.clone(), transition.into_board()))
        })
        .collect()
}

pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (mv, child) in legal_children(board) {
        perft_recurse(&mv, &child, depth, 1, &mut total);
    }
    total
}

/// Same counts as [`perft`], with one scoped worker per root move.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let root = legal_children(board);
    thread::scope(|scope| {
        let handles: Vec<_> = root
            .iter()
            .map(|(mv, child)| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(mv, child, depth, 1, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        total
    })
}

/// Leaf count below each legal root move, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_children(board)
        .into_iter()
        .map(|(mv, child)| {
            let mut local = PerftCounts::default();
            perft_recurse(&mv, &child, depth, 1, &mut local);
            (mv, local.nodes)
        })
        .collect()
}

fn perft_recurse(
    mv: &Move,
    board_after: &Board,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.record_leaf(mv, board_after);
        return;
    }

    for (child_move, child) in legal_children(board_after) {
        perft_recurse(&child_move, &child, search_depth, current_depth + 1, counts);
    }
}
