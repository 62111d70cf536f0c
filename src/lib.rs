//! Grid-maze navigation with tabular Q-learning
//!
//! This crate provides:
//! - A deterministic grid-world maze parsed from text, with a pure
//!   transition function and tunable reward shaping
//! - A greedy tabular Q-learning agent over the maze's state space
//! - A training pipeline with composable observers (progress, metrics,
//!   JSONL traces)
//! - Policy extraction/rendering and CSV export of the learned table
//!
//! It is a teaching example: one environment, one agent, no persistence of
//! learned tables, no concurrency.
//!
//! # Examples
//!
//! ```
//! use qmaze::{
//!     DiscountFactor, GridEnvironment, LearningRate, QLearningAgent, TrainingConfig,
//!     TrainingPipeline,
//! };
//!
//! let environment = GridEnvironment::parse("#.##\n#  #\n#  *\n####")?;
//! let mut agent = QLearningAgent::new(
//!     &environment,
//!     LearningRate::new(1.0)?,
//!     DiscountFactor::new(0.5)?,
//! );
//!
//! let config = TrainingConfig {
//!     episodes: 50,
//!     max_steps: 500,
//! };
//! let result = TrainingPipeline::new(config).run(&environment, &mut agent)?;
//! assert!(result.successes > 0);
//! # Ok::<(), qmaze::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod export;
pub mod grid;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod types;

pub use error::{Error, Result};
pub use grid::{Action, CellKind, GridEnvironment, RewardTable, Transition};
pub use pipeline::{TrainingConfig, TrainingPipeline, TrainingResult};
pub use q_learning::{QLearningAgent, QTable};
pub use types::{Coordinate, DiscountFactor, LearningRate};
