//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises move generation and captures over every reachable position.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::default(), depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .map(|mv| {
            let mut next = board;
            next.place(mv, player);
            leaves_below(next, !player, depth - 1, false)
        })
        .sum()
}
