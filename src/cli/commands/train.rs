//! Train command - Train the greedy maze agent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::render_policy,
    cli::output::{format_number, print_kv, print_section},
    grid::{GridEnvironment, RewardTable},
    pipeline::{JsonlObserver, ProgressObserver, TrainingConfig, TrainingPipeline},
    q_learning::QLearningAgent,
    types::{DiscountFactor, LearningRate},
};

#[derive(Parser, Debug)]
#[command(about = "Train the maze agent", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Maze file to train on (built-in demo maze when omitted)
    pub maze: Option<PathBuf>,

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

    /// Reward for entering the goal cell
    #[arg(long, default_value_t = 10.0)]
    pub reward_goal: f64,

    /// Reward for entering open floor
    #[arg(long, default_value_t = -0.1)]
    pub reward_step: f64,

    /// Reward for attempting to enter a wall or the start cell
    #[arg(long, default_value_t = -2.0)]
    pub reward_blocked: f64,

    /// Reward for attempting to leave the grid
    #[arg(long, default_value_t = -5.0)]
    pub reward_out_of_bounds: f64,

    /// Optional file for JSONL observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,

    /// Print the learned policy map after training
    #[arg(long, default_value_t = true)]
    pub policy: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let maze = super::load_maze(args.maze.as_deref())?;
    let rewards = RewardTable {
        out_of_bounds: args.reward_out_of_bounds,
        blocked: args.reward_blocked,
        goal: args.reward_goal,
        step: args.reward_step,
    };

    let environment = GridEnvironment::parse_with_rewards(&maze, rewards)?;
    let mut agent = QLearningAgent::new(
        &environment,
        LearningRate::new(args.learning_rate)?,
        DiscountFactor::new(args.discount_factor)?,
    );

    let config = TrainingConfig {
        episodes: args.episodes,
        max_steps: args.max_steps,
    };
    let mut pipeline = TrainingPipeline::new(config);
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let result = pipeline.run(&environment, &mut agent)?;

    print_section("Training Summary");
    print_kv("Episodes", &format_number(result.total_episodes));
    print_kv("Reached goal", &format_number(result.successes));
    print_kv(
        "Success rate",
        &format!("{:.1}%", result.success_rate * 100.0),
    );
    print_kv("Total steps", &format_number(result.total_steps));
    match result.best_steps {
        Some(best) => print_kv("Best episode", &format!("{} steps", format_number(best))),
        None => print_kv("Best episode", "never reached the goal"),
    }
    print_kv(
        "Final episode",
        &format!(
            "{} steps, score {:.1}",
            format_number(result.final_steps),
            result.final_score
        ),
    );

    if args.policy {
        print_section("Learned Policy");
        println!("{}", render_policy(&environment, agent.q_table()));
    }

    if let Some(path) = &args.summary {
        result.save(path)?;
        println!("Summary written to {}", path.display());
    }

    Ok(())
}
