//! Board coordinates.
//!
//! A `Position` is both a square on the board and a move: placing the
//! current player's mark on that square.

use crate::error::MoveError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Variants are declared in row-major order, so the derived `Ord` and
/// [`Position::ALL`] both enumerate row 0 left to right, then row 1, then
/// row 2.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a label such as `"top-left"`, `"Top left"` or `"center"`.
    ///
    /// Matching ignores case and treats spaces and underscores as hyphens.
    #[instrument]
    pub fn from_label(s: &str) -> Option<Position> {
        let wanted = s.trim().to_lowercase().replace([' ', '_'], "-");
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == wanted)
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a 1-based square number as shown to players.
    pub fn from_square_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from a (row, column) pair.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` if either coordinate exceeds 2.
    pub fn from_coords(row: usize, col: usize) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self::ALL[row * 3 + col])
    }

    /// Filters positions by board state - returns only empty squares, row-major.
    #[instrument(level = "trace", skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::from_coords(row, col)
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(MoveError::IndexOutOfRange(index))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_match_index() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(pos.row() * 3 + pos.col(), index);
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Ok(*pos));
        }
    }

    #[test]
    fn test_from_coords_out_of_bounds() {
        assert_eq!(
            Position::from_coords(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            Position::try_from((1, 7)),
            Err(MoveError::OutOfBounds { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_index_conversions() {
        assert_eq!(Position::try_from(4), Ok(Position::Center));
        assert_eq!(Position::try_from(9), Err(MoveError::IndexOutOfRange(9)));
        assert_eq!(Position::from_square_number(1), Some(Position::TopLeft));
        assert_eq!(Position::from_square_number(9), Some(Position::BottomRight));
        assert_eq!(Position::from_square_number(0), None);
        assert_eq!(Position::from_square_number(10), None);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Position::from_label("center"), Some(Position::Center));
        assert_eq!(Position::from_label("Top left"), Some(Position::TopLeft));
        assert_eq!(Position::from_label("bottom_right"), Some(Position::BottomRight));
        assert_eq!(Position::from_label("top"), None);
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut shuffled = vec![Position::BottomRight, Position::Center, Position::TopRight];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Position::TopRight, Position::Center, Position::BottomRight]
        );
    }
}
