//! Optimal Tic-Tac-Toe - command-line driver.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use optimal_tictactoe::Board;
use optimal_tictactoe_cli::{Cli, CliConfig, Command, best_move, play, self_play};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting optimal_tictactoe");
    debug!(?config, "Configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::BestMove { board, json } => best_move(&board, json, *config.show_stats(), &mut out),
        Command::SelfPlay { board } => {
            self_play(board.unwrap_or_else(Board::new), *config.show_stats(), &mut out)?;
            Ok(())
        }
        Command::Play { human } => {
            let human = human.unwrap_or(*config.human());
            let stdin = std::io::stdin();
            play(human, *config.show_stats(), &mut stdin.lock(), &mut out)?;
            Ok(())
        }
    }
}
