//! Turn derivation.

use super::terminal;
use crate::{Board, Player};
use tracing::instrument;

/// Returns the player to move, or `None` once the game is over.
///
/// X moves on an even number of filled squares, O on an odd number.
#[instrument(level = "trace")]
pub fn player(board: &Board) -> Option<Player> {
    if terminal(board) {
        return None;
    }
    if board.filled() % 2 == 0 {
        Some(Player::X)
    } else {
        Some(Player::O)
    }
}
