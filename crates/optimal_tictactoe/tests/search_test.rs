//! Tests for the alpha-beta search against plain minimax.

mod common;

use common::reachable_boards;
use optimal_tictactoe::{
    actions, initial_state, minimax, player, result, search, terminal, utility, winner, Board,
    Game, Outcome, Player, Position,
};
use std::collections::HashMap;

/// Exhaustive minimax without pruning, memoized by board.
fn plain_value(board: &Board, memo: &mut HashMap<Board, i8>) -> i8 {
    if let Some(value) = memo.get(board) {
        return *value;
    }
    let value = match player(board) {
        None => utility(board),
        Some(mover) => {
            let children = actions(board)
                .unwrap()
                .into_iter()
                .map(|pos| plain_value(&result(board, pos).unwrap(), memo));
            match mover {
                Player::X => children.max().unwrap(),
                Player::O => children.min().unwrap(),
            }
        }
    };
    memo.insert(*board, value);
    value
}

#[test]
fn test_takes_winning_move() {
    let board: Board = "XX.\nOO.\n...".parse().unwrap();
    assert_eq!(player(&board), Some(Player::X));
    assert_eq!(minimax(&board), Position::from_coords(0, 2).ok());
}

#[test]
fn test_opposite_corners_hold_the_draw() {
    // X in opposite corners, O in the center, O to move.
    let board: Board = "X..\n.O.\n..X".parse().unwrap();
    let outcome = search(&board);
    assert_eq!(outcome.value, 0);

    let pos = outcome.best_move.expect("game is not over");
    let next = result(&board, pos).unwrap();
    assert_eq!(search(&next).value, 0);
}

#[test]
fn test_engine_self_play_draws() {
    let mut board = initial_state();
    let mut plies = 0;
    while let Some(pos) = minimax(&board) {
        assert!(board.is_empty(pos));
        board = result(&board, pos).unwrap();
        plies += 1;
    }
    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
    assert_eq!(plies, 9);
}

#[test]
fn test_game_play_out_draws() {
    let mut game = Game::new();
    assert_eq!(game.play_out(), Ok(Outcome::Draw));
}

#[test]
fn test_minimax_none_on_terminal_boards() {
    for board in reachable_boards().into_iter().filter(terminal) {
        assert_eq!(minimax(&board), None);
    }
}

#[test]
fn test_pruning_agrees_with_plain_minimax() {
    let mut memo = HashMap::new();
    for board in reachable_boards() {
        let expected = plain_value(&board, &mut memo);
        let outcome = search(&board);
        assert_eq!(outcome.value, expected, "value differs on\n{board}");

        if let Some(pos) = outcome.best_move {
            assert!(board.is_empty(pos), "occupied move on\n{board}");
            let next = result(&board, pos).unwrap();
            assert_eq!(
                plain_value(&next, &mut memo),
                expected,
                "suboptimal move {pos} on\n{board}"
            );
        } else {
            assert!(terminal(&board));
        }
    }
}

#[test]
fn test_ties_break_to_first_move_in_row_major_order() {
    let mut memo = HashMap::new();
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let best = plain_value(&board, &mut memo);
        let first_optimal = actions(&board)
            .unwrap()
            .into_iter()
            .find(|pos| plain_value(&result(&board, *pos).unwrap(), &mut memo) == best);
        assert_eq!(minimax(&board), first_optimal, "tie-break differs on\n{board}");
    }
}
