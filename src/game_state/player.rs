//! Per-side views over a board and the legality gate for moves.
//!
//! `PlayerState` is the per-color data a [`Board`] derives once at
//! construction. `Player` borrows the board and exposes that data together
//! with the operations that need the whole position, chiefly
//! [`Player::apply_move`].

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Color};
use crate::game_state::move_transition::{MoveStatus, MoveTransition};
use crate::move_generation::castle_moves::has_castle_rights;
use crate::move_generation::chess_move::Move;
use crate::pieces::piece::Piece;

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub(crate) color: Color,
    pub(crate) king: Piece,
    pub(crate) usable_moves: Vec<Move>,
    pub(crate) in_check: bool,
}

impl PlayerState {
    pub(crate) fn new(color: Color, king: Piece) -> Self {
        Self {
            color,
            king,
            usable_moves: Vec::new(),
            in_check: false,
        }
    }

    pub(crate) fn finish(&mut self, mut standard: Vec<Move>, castles: Vec<Move>, in_check: bool) {
        standard.extend(castles);
        self.usable_moves = standard;
        self.in_check = in_check;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    color: Color,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, color: Color) -> Self {
        Self { board, color }
    }

    #[inline]
    fn state(&self) -> &'a PlayerState {
        self.board.player_state(self.color)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.state().color
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.state().king
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.pieces(self.color)
    }

    /// Pseudo-legal moves, castles included.
    pub fn usable_moves(&self) -> &'a [Move] {
        &self.state().usable_moves
    }

    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.color.opposite())
    }

    /// True when an opponent move lands on this player's king.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.state().in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Tries every usable move; true if any of them completes.
    pub fn has_escape_moves(&self) -> bool {
        self.usable_moves()
            .iter()
            .any(|mv| self.apply_move(mv).status().is_done())
    }

    /// Usable moves that do not leave this player's king in check.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.usable_moves()
            .iter()
            .filter(|mv| self.apply_move(mv).status().is_done())
            .cloned()
            .collect()
    }

    pub fn is_castled(&self) -> bool {
        self.king().castle_state().is_some_and(|state| state.is_castled)
    }

    /// King and king-side rook are both unmoved on their home squares.
    pub fn is_king_side_castle_capable(&self) -> bool {
        has_castle_rights(self.board, self.color, CastleSide::KingSide)
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        has_castle_rights(self.board, self.color, CastleSide::QueenSide)
    }

    /// Attempts `mv` for this player.
    ///
    /// `mv` must match one of the usable moves in variant and promotion kind
    /// as well as squares and mover; the stored move is what gets played.
    /// Anything else (or any move attempted out of turn) is `IllegalMove`;
    /// moves that expose the own king are `LeavesPlayerInCheck`. In both
    /// cases the source board stays current.
    pub fn apply_move(&self, mv: &Move) -> MoveTransition<'a> {
        let usable = (self.color == self.board.side_to_move())
            .then(|| self.usable_moves().iter().find(|candidate| candidate.is_same_play(mv)))
            .flatten();
        let Some(usable) = usable else {
            debug!(%mv, color = ?self.color, "move is not usable");
            return MoveTransition::rejected(self.board, mv.clone(), MoveStatus::IllegalMove);
        };

        let to_board = usable.apply(self.board);
        if to_board.player(self.color).is_in_check() {
            debug!(%mv, color = ?self.color, "move leaves king in check");
            return MoveTransition::rejected(
                self.board,
                usable.clone(),
                MoveStatus::LeavesPlayerInCheck,
            );
        }

        MoveTransition::done(self.board, to_board, usable.clone())
    }
}
