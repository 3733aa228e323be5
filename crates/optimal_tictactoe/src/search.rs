//! Minimax search with alpha-beta pruning.
//!
//! X maximizes and O minimizes the utility of the terminal board reached.
//! The game tree is small enough to search to the end from any position, so
//! there is no depth limit and no heuristic evaluation.
//!
//! # Example
//!
//! ```
//! use optimal_tictactoe::{minimax, Board, Position};
//!
//! // X to move with two in the top row.
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! assert_eq!(minimax(&board), Some(Position::TopRight));
//! ```

use crate::rules::{actions, player, result, utility};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Lower bound below every utility.
const NEG_INFINITY: i8 = i8::MIN;

/// Upper bound above every utility.
const INFINITY: i8 = i8::MAX;

/// Value of a search node and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scored {
    /// Game value from X's perspective.
    pub value: i8,
    /// Move leading to `value`; `None` at terminal nodes.
    pub best_move: Option<Position>,
}

/// Search statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, the root included.
    pub nodes: u64,
    /// Branches abandoned because they could not affect the result.
    pub cutoffs: u64,
}

/// Result of a full search from one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Game value of the board under optimal play by both sides.
    pub value: i8,
    /// Optimal move for the side to move, `None` if the game is over.
    pub best_move: Option<Position>,
    /// Search statistics.
    pub stats: SearchStats,
}

/// Returns the optimal move for the player to move, or `None` if the game
/// is over.
///
/// Among equally good moves the first in row-major order is chosen.
#[instrument]
pub fn minimax(board: &Board) -> Option<Position> {
    search(board).best_move
}

/// Searches the board to the end of the game.
///
/// The returned value is exact: pruning only skips branches that cannot
/// change it.
#[instrument]
pub fn search(board: &Board) -> SearchOutcome {
    let mut stats = SearchStats::default();

    let scored = match player(board) {
        Some(Player::O) => min_value(board, NEG_INFINITY, INFINITY, &mut stats),
        // X to move, or terminal (no move either way)
        _ => max_value(board, NEG_INFINITY, INFINITY, &mut stats),
    };

    debug!(
        value = scored.value,
        best_move = ?scored.best_move,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );

    SearchOutcome {
        value: scored.value,
        best_move: scored.best_move,
        stats,
    }
}

/// Terminal nodes score their utility and carry no move.
fn leaf(board: &Board) -> Scored {
    Scored {
        value: utility(board),
        best_move: None,
    }
}

/// Applies `pos`, skipping the branch if the move is rejected.
fn child(board: &Board, pos: Position) -> Option<Board> {
    match result(board, pos) {
        Ok(next) => Some(next),
        Err(err) => {
            warn!(%err, position = %pos, "Skipping invalid branch");
            None
        }
    }
}

fn max_value(board: &Board, alpha: i8, beta: i8, stats: &mut SearchStats) -> Scored {
    stats.nodes += 1;
    match actions(board) {
        Some(moves) => max_over(board, &moves, alpha, beta, stats),
        None => leaf(board),
    }
}

fn min_value(board: &Board, alpha: i8, beta: i8, stats: &mut SearchStats) -> Scored {
    stats.nodes += 1;
    match actions(board) {
        Some(moves) => min_over(board, &moves, alpha, beta, stats),
        None => leaf(board),
    }
}

/// Best of `moves` for X. Moves that cannot be applied are skipped.
fn max_over(
    board: &Board,
    moves: &[Position],
    mut alpha: i8,
    beta: i8,
    stats: &mut SearchStats,
) -> Scored {
    let mut best = Scored {
        value: NEG_INFINITY,
        best_move: None,
    };
    for &pos in moves {
        let Some(next) = child(board, pos) else {
            continue;
        };
        let value = min_value(&next, alpha, beta, stats).value;

        if value > best.value {
            best = Scored {
                value,
                best_move: Some(pos),
            };
        }
        if value >= beta {
            stats.cutoffs += 1;
            return best;
        }
        if value > alpha {
            alpha = value;
        }
    }
    best
}

/// Best of `moves` for O. Moves that cannot be applied are skipped.
fn min_over(
    board: &Board,
    moves: &[Position],
    alpha: i8,
    mut beta: i8,
    stats: &mut SearchStats,
) -> Scored {
    let mut best = Scored {
        value: INFINITY,
        best_move: None,
    };
    for &pos in moves {
        let Some(next) = child(board, pos) else {
            continue;
        };
        let value = max_value(&next, alpha, beta, stats).value;

        if value < best.value {
            best = Scored {
                value,
                best_move: Some(pos),
            };
        }
        if value <= alpha {
            stats.cutoffs += 1;
            return best;
        }
        if value < beta {
            beta = value;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes in the complete tic-tac-toe game tree, root included.
    const FULL_TREE_NODES: u64 = 549_946;

    #[test]
    fn test_no_move_on_terminal_board() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let outcome = search(&board);
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.value, 1);
        assert_eq!(outcome.stats.nodes, 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let outcome = search(&board);
        assert_eq!(outcome.best_move, Some(Position::TopRight));
        assert_eq!(outcome.value, 1);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O completes the middle row rather than blocking X.
        let board: Board = "XX. OO. X..".parse().unwrap();
        let outcome = search(&board);
        assert_eq!(outcome.best_move, Some(Position::MiddleRight));
        assert_eq!(outcome.value, -1);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X threatens the bottom row; O has no win of its own.
        let board: Board = "... .O. XX.".parse().unwrap();
        assert_eq!(minimax(&board), Some(Position::BottomRight));
    }

    #[test]
    fn test_max_skips_occupied_move() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let mut stats = SearchStats::default();
        let scored = max_over(
            &board,
            &[Position::TopLeft, Position::MiddleLeft, Position::TopRight],
            NEG_INFINITY,
            INFINITY,
            &mut stats,
        );
        assert_eq!(scored.best_move, Some(Position::TopRight));
        assert_eq!(scored.value, 1);
        // Only the legal child was visited.
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_min_skips_occupied_move() {
        let board: Board = "XX. OO. X..".parse().unwrap();
        let mut stats = SearchStats::default();
        let scored = min_over(
            &board,
            &[Position::TopLeft, Position::Center, Position::MiddleRight],
            NEG_INFINITY,
            INFINITY,
            &mut stats,
        );
        assert_eq!(scored.best_move, Some(Position::MiddleRight));
        assert_eq!(scored.value, -1);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_all_moves_rejected_leaves_no_move() {
        let board: Board = "X........".parse().unwrap();
        let mut stats = SearchStats::default();
        let scored = min_over(&board, &[Position::TopLeft], NEG_INFINITY, INFINITY, &mut stats);
        assert_eq!(scored.best_move, None);
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let outcome = search(&Board::new());
        assert_eq!(outcome.value, 0);
        // Every opening draws, so the first in row-major order wins the tie.
        assert_eq!(outcome.best_move, Some(Position::TopLeft));
    }

    #[test]
    fn test_pruning_skips_most_of_the_tree() {
        let outcome = search(&Board::new());
        assert!(outcome.stats.cutoffs > 0);
        assert!(outcome.stats.nodes < FULL_TREE_NODES);
    }
}
