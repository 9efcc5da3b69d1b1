//! Hexmind CLI - console front end for the Hex engine
//!
//! Commands:
//! - play: run a game (human vs human, human vs AI, AI vs AI)

mod play;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexmind")]
#[command(about = "The board game Hex with an automated player")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on an N x N board
    Play(play::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => play::run(args),
    }
}
