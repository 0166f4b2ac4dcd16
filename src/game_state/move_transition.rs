//! Result of attempting a move.

use crate::game_state::board::Board;
use crate::move_generation::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    /// The move is not among the mover's pseudo-legal moves.
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// Outcome of [`Player::apply_move`](crate::game_state::player::Player::apply_move).
///
/// Only a `Done` transition carries a new board; otherwise [`to_board`]
/// returns the unchanged source board.
///
/// [`to_board`]: MoveTransition::to_board
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    from_board: &'a Board,
    to_board: Option<Board>,
    transition_move: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn done(from_board: &'a Board, to_board: Board, transition_move: Move) -> Self {
        Self {
            from_board,
            to_board: Some(to_board),
            transition_move,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(from_board: &'a Board, transition_move: Move, status: MoveStatus) -> Self {
        Self {
            from_board,
            to_board: None,
            transition_move,
            status,
        }
    }

    #[inline]
    pub fn from_board(&self) -> &'a Board {
        self.from_board
    }

    pub fn to_board(&self) -> &Board {
        self.to_board.as_ref().unwrap_or(self.from_board)
    }

    #[inline]
    pub fn transition_move(&self) -> &Move {
        &self.transition_move
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// The board to continue from: the new board when done, else a copy of
    /// the source board.
    pub fn into_board(self) -> Board {
        match self.to_board {
            Some(board) => board,
            None => self.from_board.clone(),
        }
    }
}
