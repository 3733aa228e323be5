//! In-memory game record.
//!
//! A `Game` threads a board through [`result`] and remembers the moves
//! applied to it, so drivers can alternate between human and engine moves
//! without bookkeeping of their own.

use crate::rules::{outcome, player, result, Outcome};
use crate::search::minimax;
use crate::{Board, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game: the current board plus the moves that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues a game from an existing board, with an empty history.
    #[instrument]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Replays moves from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first move error encountered.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played through this game.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the player to move, `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        player(&self.board)
    }

    /// Returns the outcome, `None` while the game is in play.
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.board)
    }

    /// Returns true once the game is over.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Plays the player to move at `pos`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`result`]; the game is unchanged on error.
    #[instrument(skip(self), fields(position = %pos, player = ?self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.board = result(&self.board, pos)?;
        self.history.push(pos);
        debug!(moves = self.history.len(), "Move applied");
        Ok(())
    }

    /// Plays the engine's move for the side to move.
    ///
    /// Returns the move played, or `None` if the game is already over.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Game::play`] if the engine's move is rejected.
    #[instrument(skip(self))]
    pub fn play_best(&mut self) -> Result<Option<Position>, MoveError> {
        let Some(pos) = minimax(&self.board) else {
            return Ok(None);
        };
        self.play(pos)?;
        Ok(Some(pos))
    }

    /// Lets the engine play both sides until the game ends.
    ///
    /// # Errors
    ///
    /// Returns the first rejected engine move, or `MoveError::GameOver` if
    /// the engine stops without the game being decided.
    #[instrument(skip(self))]
    pub fn play_out(&mut self) -> Result<Outcome, MoveError> {
        while self.play_best()?.is_some() {}
        let outcome = self.outcome().ok_or(MoveError::GameOver)?;
        info!(%outcome, moves = self.history.len(), "Game finished");
        Ok(outcome)
    }
}
