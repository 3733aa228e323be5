//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Owner of a line, if all three squares hold the same mark.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    }
}

/// Returns the winner of the board, if there is one.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// completed line decides.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Whether `player` has completed at least one line.
pub fn owns_line(board: &Board, player: Player) -> bool {
    LINES
        .into_iter()
        .any(|line| line_owner(board, line) == Some(player))
}
