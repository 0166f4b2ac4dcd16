use slate_chess::game_state::board::Board;
use slate_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use slate_chess::move_generation::perft::{perft, perft_divide, perft_multi_threaded};

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

fn nodes(fen: &str, depth: u8) -> usize {
    let board = Board::from_fen(fen).expect("perft FEN should parse");
    perft(&board, depth).nodes
}

#[test]
fn start_position_node_counts() {
    assert_eq!(nodes(STARTING_POSITION_FEN, 1), 20);
    assert_eq!(nodes(STARTING_POSITION_FEN, 2), 400);
    assert_eq!(nodes(STARTING_POSITION_FEN, 3), 8902);
}

#[test]
fn start_position_depth_three_breakdown() {
    let counts = perft(&Board::standard_board(), 3);
    assert_eq!(counts.captures, 34);
    assert_eq!(counts.checks, 12);
    assert_eq!(counts.en_passant, 0);
    assert_eq!(counts.castles, 0);
    assert_eq!(counts.checkmates, 0);
}

#[test]
fn kiwipete_node_counts() {
    let board = Board::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
    let depth_one = perft(&board, 1);
    assert_eq!(depth_one.nodes, 48);
    assert_eq!(depth_one.captures, 8);
    assert_eq!(depth_one.castles, 2);

    let depth_two = perft(&board, 2);
    assert_eq!(depth_two.nodes, 2039);
    assert_eq!(depth_two.captures, 351);
    assert_eq!(depth_two.en_passant, 1);
    assert_eq!(depth_two.castles, 91);
    assert_eq!(depth_two.checks, 3);
}

#[test]
fn position_three_node_counts() {
    assert_eq!(nodes(POSITION_3_FEN, 1), 14);
    assert_eq!(nodes(POSITION_3_FEN, 2), 191);

    let board = Board::from_fen(POSITION_3_FEN).expect("position 3 FEN should parse");
    let counts = perft(&board, 3);
    assert_eq!(counts.nodes, 2812);
    assert_eq!(counts.captures, 209);
    assert_eq!(counts.en_passant, 2);
    assert_eq!(counts.checks, 267);
}

#[test]
fn threaded_perft_matches() {
    let board = Board::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
    assert_eq!(perft_multi_threaded(&board, 2), perft(&board, 2));
}

#[test]
fn divide_lists_every_root_move() {
    let board = Board::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
    let divide = perft_divide(&board, 2);
    assert_eq!(divide.len(), 48);
    assert_eq!(divide.iter().map(|(_, nodes)| nodes).sum::<usize>(), 2039);
}
