//! Command-line configuration for the `slate_chess` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::utils::position_file::read_position_file;

/// Play, inspect and count chess positions.
#[derive(Debug, Clone, Parser)]
#[command(name = "slate_chess", version, about)]
pub struct AppConfig {
    /// Starting position as FEN; the standard start when omitted.
    #[arg(long, env = "SLATE_FEN", conflicts_with = "position_file")]
    pub fen: Option<String>,

    /// Starting position from a JSON position file.
    #[arg(long, env = "SLATE_POSITION_FILE")]
    pub position_file: Option<PathBuf>,

    /// Moves in long algebraic form (`e2e4 e7e5 g1f3`) played in order.
    pub moves: Vec<String>,

    /// Count perft nodes to this depth after playing the moves.
    #[arg(long)]
    pub perft: Option<u8>,

    /// Run perft with one worker thread per root move.
    #[arg(long, requires = "perft")]
    pub parallel: bool,

    /// Continue the game with this many random plies.
    #[arg(long, default_value_t = 0)]
    pub random_plies: usize,

    /// Seed for random plies; entropy when omitted.
    #[arg(long, env = "SLATE_SEED")]
    pub seed: Option<u64>,

    /// Save the final position to this JSON file.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Skip rendering the final board.
    #[arg(long, short)]
    pub quiet: bool,
}

impl AppConfig {
    /// Board the session starts from.
    pub fn starting_board(&self) -> ChessResult<Board> {
        match (&self.fen, &self.position_file) {
            (Some(fen), _) => Board::from_fen(fen),
            (None, Some(path)) => read_position_file(path),
            (None, None) => Ok(Board::standard_board()),
        }
    }
}
