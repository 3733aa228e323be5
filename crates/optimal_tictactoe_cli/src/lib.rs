//! Command-line driver for the optimal_tictactoe engine.
//!
//! # Architecture
//!
//! - **Cli**: clap argument definitions
//! - **Config**: optional TOML settings
//! - **Driver**: best-move reports, self-play and interactive games over
//!   any reader/writer pair

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError};
pub use driver::{BestMoveReport, best_move, parse_move, play, self_play};
