use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use slate_chess::chess_errors::ChessResult;
use slate_chess::config::AppConfig;
use slate_chess::game_state::board::{Board, BoardStatus};
use slate_chess::move_generation::perft::{perft, perft_multi_threaded};
use slate_chess::utils::long_algebraic::long_algebraic_to_move;
use slate_chess::utils::position_file::write_position_file;
use slate_chess::utils::random_playout::random_playout;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slate_chess=info".into()),
        )
        .init();

    let config = AppConfig::parse();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "slate_chess failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> ChessResult<()> {
    let mut board = config.starting_board()?;

    for text in &config.moves {
        let mv = long_algebraic_to_move(&board, text)?;
        let san = mv.to_san(&board);
        let transition = board.current_player().apply_move(&mv);
        if !transition.status().is_done() {
            info!(%text, status = ?transition.status(), "move rejected, stopping");
            break;
        }
        println!("{san}");
        board = transition.into_board();
    }

    if config.random_plies > 0 {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let playout = random_playout(&board, config.random_plies, &mut rng);
        let mut replay = board.clone();
        for mv in &playout.moves {
            println!("{}", mv.to_san(&replay));
            replay = mv.apply(&replay);
        }
        board = playout.final_board;
    }

    if !config.quiet {
        println!("{board}");
    }
    println!("{}", board.to_fen());
    report_status(&board);

    if let Some(depth) = config.perft {
        let started = Instant::now();
        let counts = if config.parallel {
            perft_multi_threaded(&board, depth)
        } else {
            perft(&board, depth)
        };
        info!(depth, elapsed_ms = started.elapsed().as_millis() as u64, "perft finished");
        println!("{counts:?}");
    }

    if let Some(path) = &config.save {
        write_position_file(path, &board)?;
    }

    Ok(())
}

fn report_status(board: &Board) {
    match board.status() {
        BoardStatus::InProgress => {
            if board.current_player().is_in_check() {
                println!("{:?} is in check", board.side_to_move());
            }
        }
        BoardStatus::Checkmate { winner } => println!("checkmate, {winner:?} wins"),
        BoardStatus::Stalemate => println!("stalemate"),
    }
}
