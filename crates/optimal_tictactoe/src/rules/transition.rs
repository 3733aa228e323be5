//! Legal moves and move application.

use super::{player, terminal};
use crate::invariants::{InvariantSet, ReachableBoard};
use crate::{Board, MoveError, Position, Square};
use tracing::{debug, instrument};

/// Returns every empty square in row-major order, or `None` once the game
/// is over.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> Option<Vec<Position>> {
    if terminal(board) {
        return None;
    }
    Some(Position::valid_moves(board))
}

/// Returns the board that results from the player to move marking `pos`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// - `MoveError::SquareOccupied` if `pos` already holds a mark.
/// - `MoveError::GameOver` if the board is terminal.
///
/// A finished board has no player to move, so it gets its own error rather
/// than being reported as an invalid move or marked for nobody.
#[instrument(level = "trace")]
pub fn result(board: &Board, pos: Position) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        debug!(position = %pos, "Rejected move onto occupied square");
        return Err(MoveError::SquareOccupied(pos));
    }
    let mover = player(board).ok_or(MoveError::GameOver)?;

    let mut next = *board;
    next.set(pos, Square::Occupied(mover));

    debug_assert!(
        ReachableBoard::check_all(&next).is_ok(),
        "Move produced an unreachable board"
    );
    Ok(next)
}
