//! Terminal detection and scoring.

use super::{is_full, winner};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Score from X's perspective: 1 for an X win, -1 for an O win, 0 for a draw.
    pub fn utility(&self) -> i8 {
        match self {
            Outcome::Winner(Player::X) => 1,
            Outcome::Winner(Player::O) => -1,
            Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Returns true if the game is over: the board is full or someone has won.
#[instrument(level = "trace")]
pub fn terminal(board: &Board) -> bool {
    is_full(board) || winner(board).is_some()
}

/// Scores the board from X's perspective.
///
/// Only meaningful on terminal boards. A board still in play scores 0,
/// the same as a draw.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Returns the outcome of a finished game, or `None` while it is in play.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if !terminal(board) {
        return None;
    }
    Some(match winner(board) {
        Some(player) => Outcome::Winner(player),
        None => Outcome::Draw,
    })
}
