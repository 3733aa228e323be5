//! Optimal tic-tac-toe: board model, rules and perfect-play search.
//!
//! The crate exposes a small functional API. Boards are values; every rule
//! is a pure function of a board.
//!
//! # Architecture
//!
//! - **Board**: [`Board`], [`Square`], [`Player`] and [`Position`]
//! - **Rules**: [`player`], [`actions`], [`result`], [`winner`], [`terminal`], [`utility`]
//! - **Search**: [`minimax`] and [`search`], minimax with alpha-beta pruning
//! - **Game**: [`Game`], a board plus the moves that produced it
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{initial_state, minimax, result, terminal, Outcome, outcome};
//!
//! let mut board = initial_state();
//! while let Some(pos) = minimax(&board) {
//!     board = result(&board, pos).unwrap();
//! }
//! assert!(terminal(&board));
//! assert_eq!(outcome(&board), Some(Outcome::Draw));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

/// Alias for clarity when talking about the mark on a square.
pub type Mark = Player;

// Crate-level exports - Board model
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Errors
pub use error::{BoardParseError, MoveError};

// Crate-level exports - Rules
pub use rules::{
    actions, initial_state, outcome, player, result, terminal, utility, winner, Outcome,
};

// Crate-level exports - Search
pub use search::{minimax, search, Scored, SearchOutcome, SearchStats};

// Crate-level exports - Game record
pub use game::Game;
