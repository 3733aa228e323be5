//! Game drivers: the code between the engine and a terminal.
//!
//! Every driver writes to a caller-supplied `Write` and, when interactive,
//! reads from a caller-supplied `BufRead`, so the binary passes locked
//! stdin/stdout and tests pass in-memory buffers.

use anyhow::{Context, Result, bail};
use optimal_tictactoe::{
    Board, Game, Outcome, Player, Position, SearchStats, outcome, player, search,
};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// JSON report printed by `best-move --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Board analysed, in text notation.
    pub board: String,
    /// Player to move, absent once the game is over.
    pub to_move: Option<Player>,
    /// Optimal move, absent once the game is over.
    pub best_move: Option<Position>,
    /// Row of the optimal move.
    pub row: Option<usize>,
    /// Column of the optimal move.
    pub col: Option<usize>,
    /// Game value under optimal play (1 X wins, -1 O wins, 0 draw).
    pub value: i8,
    /// Outcome if the game is already over.
    pub outcome: Option<Outcome>,
    /// Search statistics.
    pub stats: SearchStats,
}

impl BestMoveReport {
    /// Searches `board` and builds the report.
    #[instrument]
    pub fn analyse(board: &Board) -> Self {
        let result = search(board);
        Self {
            board: board.to_string(),
            to_move: player(board),
            best_move: result.best_move,
            row: result.best_move.map(Position::row),
            col: result.best_move.map(Position::col),
            value: result.value,
            outcome: outcome(board),
            stats: result.stats,
        }
    }
}

fn describe_value(value: i8) -> &'static str {
    match value {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

/// Prints the optimal move for `board`.
#[instrument(skip(out))]
pub fn best_move(board: &Board, json: bool, show_stats: bool, out: &mut impl Write) -> Result<()> {
    let report = BestMoveReport::analyse(board);

    if json {
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to encode report")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", board)?;
    match (report.to_move, report.best_move, report.outcome) {
        (Some(mover), Some(pos), _) => {
            writeln!(
                out,
                "{} to move: play {} (row {}, column {})",
                mover,
                pos,
                pos.row(),
                pos.col()
            )?;
            writeln!(out, "Value with best play: {}", describe_value(report.value))?;
        }
        (_, _, Some(outcome)) => writeln!(out, "Game over: {}", outcome)?,
        _ => bail!("Board is live but the search found no move"),
    }
    if show_stats {
        writeln!(
            out,
            "Searched {} nodes ({} cutoffs)",
            report.stats.nodes, report.stats.cutoffs
        )?;
    }
    Ok(())
}

/// Lets the engine play both sides from `board`, printing every position.
#[instrument(skip(out))]
pub fn self_play(board: Board, show_stats: bool, out: &mut impl Write) -> Result<Outcome> {
    let mut game = Game::from_board(board);
    writeln!(out, "{}", game.board())?;

    while let Some(mover) = game.to_move() {
        let result = search(game.board());
        let pos = result
            .best_move
            .context("Engine found no move on a live board")?;
        game.play(pos)?;

        writeln!(out, "\n{} plays {}", mover, pos)?;
        if show_stats {
            writeln!(out, "({} nodes, {} cutoffs)", result.stats.nodes, result.stats.cutoffs)?;
        }
        writeln!(out, "{}", game.board())?;
    }

    let outcome = game.outcome().context("Game ended without an outcome")?;
    writeln!(out, "\nResult: {}", outcome)?;
    info!(%outcome, moves = game.history().len(), "Self-play finished");
    Ok(outcome)
}

/// Parses a human move: a square number 1-9, a `row,col` pair (0-based),
/// or a label such as `center` or `top-left`.
#[instrument]
pub fn parse_move(input: &str) -> Option<Position> {
    let input = input.trim();

    if let Ok(number) = input.parse::<usize>() {
        return Position::from_square_number(number);
    }

    let coords: Vec<_> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if let [row, col] = coords.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        return Position::from_coords(row, col).ok();
    }

    Position::from_label(input)
}

/// Plays an interactive game: `human` reads moves from `input`, the engine
/// answers with its optimal move.
///
/// # Errors
///
/// Fails if `input` closes before the game is over or on I/O errors.
/// Unparseable or illegal moves are reported and re-prompted.
#[instrument(skip(input, out))]
pub fn play(
    human: Player,
    show_stats: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Outcome> {
    let mut game = Game::new();
    writeln!(out, "You are {}. X moves first.", human)?;

    while let Some(mover) = game.to_move() {
        if mover == human {
            writeln!(out, "\n{}", game.board().render_numbered())?;
            write!(out, "Your move ({}): ", human)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("Input closed before the game finished");
            }
            let Some(pos) = parse_move(&line) else {
                writeln!(
                    out,
                    "Enter a square 1-9, a row,col pair such as 0,2, or a label such as center"
                )?;
                continue;
            };
            if let Err(err) = game.play(pos) {
                writeln!(out, "{}", err)?;
                continue;
            }
            debug!(position = %pos, "Human moved");
        } else {
            let result = search(game.board());
            let pos = result
                .best_move
                .context("Engine found no move on a live board")?;
            game.play(pos)?;
            writeln!(out, "\nEngine plays {}", pos)?;
            if show_stats {
                writeln!(out, "({} nodes, {} cutoffs)", result.stats.nodes, result.stats.cutoffs)?;
            }
        }
    }

    let outcome = game.outcome().context("Game ended without an outcome")?;
    writeln!(out, "\n{}", game.board())?;
    let verdict = match outcome.winner() {
        Some(winner) if winner == human => "You win!".to_string(),
        Some(_) => "Engine wins.".to_string(),
        None => "Draw.".to_string(),
    };
    writeln!(out, "{}", verdict)?;
    info!(%outcome, "Interactive game finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square_number() {
        assert_eq!(parse_move("5\n"), Some(Position::Center));
        assert_eq!(parse_move("1"), Some(Position::TopLeft));
        assert_eq!(parse_move("0"), None);
        assert_eq!(parse_move("10"), None);
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_move("0,2"), Some(Position::TopRight));
        assert_eq!(parse_move(" 2 1 "), Some(Position::BottomCenter));
        assert_eq!(parse_move("3,0"), None);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_move("center"), Some(Position::Center));
        assert_eq!(parse_move("Bottom left"), Some(Position::BottomLeft));
        assert_eq!(parse_move("nowhere"), None);
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(1), "X wins");
        assert_eq!(describe_value(-1), "O wins");
        assert_eq!(describe_value(0), "draw");
    }
}
