//! Shared helpers for integration tests.

use optimal_tictactoe::{actions, initial_state, result, Board};
use std::collections::HashSet;

/// Every board reachable from the empty board by legal play, terminal
/// boards included.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        for pos in actions(&board).unwrap_or_default() {
            stack.push(result(&board, pos).expect("enumerated move must apply"));
        }
    }
    let mut boards: Vec<_> = seen.into_iter().collect();
    boards.sort_by_key(|b| b.to_string());
    boards
}
