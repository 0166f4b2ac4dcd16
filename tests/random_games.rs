use rand::rngs::StdRng;
use rand::SeedableRng;

use slate_chess::evaluation::board_evaluator::{BoardEvaluator, StandardBoardEvaluator};
use slate_chess::game_state::board::{Board, BoardStatus};
use slate_chess::game_state::chess_types::{Color, PieceKind};
use slate_chess::pieces::piece::Piece;
use slate_chess::utils::position_file::{parse_position_json, position_to_json};
use slate_chess::utils::random_playout::random_playout;

// FEN carries everything about a piece except a king's castling history.
fn placement(piece: Piece) -> (PieceKind, Color, u8, bool) {
    (piece.kind(), piece.color(), piece.square(), piece.is_first_move())
}

#[test]
fn random_games_keep_board_invariants() {
    for seed in 0..6u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let playout = random_playout(&Board::standard_board(), 80, &mut rng);

        let mut board = Board::standard_board();
        for mv in &playout.moves {
            let transition = board.current_player().apply_move(mv);
            assert!(transition.status().is_done(), "seed {seed}: {mv} should be legal");
            let next = transition.into_board();

            assert_ne!(next.side_to_move(), board.side_to_move());
            let destination = mv.destination().expect("played moves have a destination");
            assert_eq!(
                next.piece_at(destination).map(|p| p.color()),
                Some(board.side_to_move())
            );
            assert_eq!(
                next.all_pieces().count(),
                next.white_pieces().len() + next.black_pieces().len()
            );
            assert!(!next.player(board.side_to_move()).is_in_check());

            let reparsed = Board::from_fen(&next.to_fen()).expect("generated FEN should parse");
            assert_eq!(reparsed.to_fen(), next.to_fen());
            for square in 0..64u8 {
                assert_eq!(
                    reparsed.piece_at(square).map(placement),
                    next.piece_at(square).map(placement),
                    "seed {seed}: square {square} after {mv}"
                );
            }
            board = next;
        }
        assert_eq!(board.to_fen(), playout.final_board.to_fen());
    }
}

#[test]
fn finished_playouts_report_a_terminal_status() {
    for seed in 0..4u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let playout = random_playout(&Board::standard_board(), 60, &mut rng);
        let has_moves = !playout.final_board.current_player().legal_moves().is_empty();
        match playout.status {
            BoardStatus::InProgress => assert!(has_moves),
            BoardStatus::Checkmate { .. } | BoardStatus::Stalemate => assert!(!has_moves),
        }
    }
}

#[test]
fn position_files_survive_random_games() {
    let mut rng = StdRng::seed_from_u64(42);
    let playout = random_playout(&Board::standard_board(), 40, &mut rng);
    let json = position_to_json(&playout.final_board).expect("board should serialize");
    let restored = parse_position_json(&json).expect("json should parse");
    for square in 0..64u8 {
        assert_eq!(restored.piece_at(square), playout.final_board.piece_at(square));
    }
    let evaluator = StandardBoardEvaluator;
    assert_eq!(
        evaluator.evaluate(&restored, 0),
        evaluator.evaluate(&playout.final_board, 0)
    );
}
