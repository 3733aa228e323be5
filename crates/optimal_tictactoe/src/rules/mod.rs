//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Every query is derived from the board
//! alone; nothing here mutates a board the caller can see.

pub mod draw;
pub mod outcome;
pub mod transition;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use outcome::{outcome, terminal, utility, Outcome};
pub use transition::{actions, result};
pub use turn::player;
pub use win::{owns_line, winner};

use crate::Board;

/// Returns the starting board: every square empty.
pub fn initial_state() -> Board {
    Board::new()
}
