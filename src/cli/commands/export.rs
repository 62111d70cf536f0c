//! Export command - Train in-process and export the learned Q-table
//!
//! Learned tables are not persisted across runs, so the export trains a
//! fresh agent before writing the CSV.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    export::write_q_values_csv,
    grid::GridEnvironment,
    pipeline::{TrainingConfig, TrainingPipeline},
    q_learning::QLearningAgent,
    types::{DiscountFactor, LearningRate},
};

#[derive(Parser, Debug)]
#[command(about = "Train and export the learned Q-table as CSV")]
pub struct ExportArgs {
    /// Maze file to train on (built-in demo maze when omitted)
    pub maze: Option<PathBuf>,

    /// Output CSV file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 200)]
    pub episodes: usize,

    /// Safety cap on steps per episode
    #[arg(long, default_value_t = 1_000)]
    pub max_steps: usize,

    /// Learning rate α in (0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub learning_rate: f64,

    /// Discount factor γ in [0, 1)
    #[arg(long, default_value_t = 0.5)]
    pub discount_factor: f64,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let maze = super::load_maze(args.maze.as_deref())?;
    let environment = GridEnvironment::parse(&maze)?;
    let mut agent = QLearningAgent::new(
        &environment,
        LearningRate::new(args.learning_rate)?,
        DiscountFactor::new(args.discount_factor)?,
    );

    let config = TrainingConfig {
        episodes: args.episodes,
        max_steps: args.max_steps,
    };
    TrainingPipeline::new(config).run(&environment, &mut agent)?;

    write_q_values_csv(&args.output, &environment, agent.q_table())?;
    println!("Q-table written to {}", args.output.display());

    Ok(())
}
