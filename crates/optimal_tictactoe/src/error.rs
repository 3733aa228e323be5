//! Error types for move application and board parsing.

use crate::position::Position;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over, so nobody is to move.
    #[display("Game is already over")]
    GameOver,

    /// A (row, column) pair outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A flat board index outside 0-8.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    IndexOutOfRange(usize),
}

impl std::error::Error for MoveError {}

/// Error that can occur when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    CellCount(usize),

    /// A character that is not X, O or an empty marker.
    #[display("Unknown cell {:?} (expected X, O or .)", _0)]
    UnknownCell(char),

    /// The cells cannot arise from alternating play.
    #[display("Board is not reachable: {}", _0)]
    Unreachable(String),
}

impl std::error::Error for BoardParseError {}
