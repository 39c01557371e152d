use crate::draughts_boards::draughts_board::{DraughtsBoard, NullReporter};
use std::collections::HashMap;

/// Counts the leaf nodes of the move tree `depth` plies deep. Every applied
/// move or capture is one ply, including each link of a capture chain.
pub fn perft(board: &DraughtsBoard, depth: u8) -> u64 {
    let mut node_count = 0u64;

    if depth == 0 {
        return 1u64;
    }

    for mv in board.generate_legal_moves() {
        let mut new_board = board.clone();
        new_board.apply(mv, &mut NullReporter);
        node_count += perft(&new_board, depth - 1);
    }
    node_count
}

/// Same count as `perft`, memoised on the Zobrist hash of each position.
pub fn perft_hashed(board: &DraughtsBoard, depth: u8, cache: &mut HashMap<(u64, u8), u64>) -> u64 {
    if depth == 0 {
        return 1u64;
    }
    if let Some(&count) = cache.get(&(board.hash(), depth)) {
        return count;
    }

    let mut node_count = 0u64;
    for mv in board.generate_legal_moves() {
        let mut new_board = board.clone();
        new_board.apply(mv, &mut NullReporter);
        node_count += perft_hashed(&new_board, depth - 1, cache);
    }
    cache.insert((board.hash(), depth), node_count);
    node_count
}
