//! qmaze CLI - Teaching toolkit for maze navigation with tabular Q-learning
//!
//! This CLI provides a unified interface for:
//! - Training the greedy agent on a maze and printing the learned policy
//! - Exporting the learned action-value table for further analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qmaze")]
#[command(version, about = "Maze navigation with tabular Q-learning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the agent on a maze
    Train(qmaze::cli::commands::train::TrainArgs),

    /// Train and export the learned Q-table as CSV
    Export(qmaze::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => qmaze::cli::commands::train::execute(args),
        Commands::Export(args) => qmaze::cli::commands::export::execute(args),
    }
}
