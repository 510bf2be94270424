//! noughts CLI - tic-tac-toe with snapshot history and time travel
//!
//! Two ways to drive the same game core:
//! - Play an interactive game on the terminal
//! - Replay a scripted click sequence, optionally jumping afterwards

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with snapshot history and time travel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Apply a scripted click sequence and print the result
    Replay(noughts::cli::commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Replay(args) => noughts::cli::commands::replay::execute(args),
    }
}
