//! Command-line interface for optimal_tictactoe.

use clap::{Parser, Subcommand};
use optimal_tictactoe::{Board, Player};

/// Optimal Tic-Tac-Toe - perfect-play engine
///
/// Boards are written as nine cells, row by row: `X`, `O` and `.` for an
/// empty square, e.g. `"XX.OO...."`. Whitespace and `|` are ignored.
#[derive(Parser, Debug)]
#[command(name = "optimal_tictactoe")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a board
    BestMove {
        /// Board to analyse
        board: Board,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        board: Option<Board>,
    },

    /// Play against the engine on the terminal
    Play {
        /// Mark the human plays (X moves first); overrides the config file
        #[arg(long)]
        human: Option<Player>,
    },
}
