//! Tabular Q-learning over the maze grid
//!
//! This module implements one-step temporal difference (TD) learning for
//! maze navigation. The action-value table bootstraps each estimate from
//! the best estimate at the successor state:
//!
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') − Q(s,a)]
//!
//! The agent is purely exploitative: it always follows the greedy policy
//! over its current estimates, with ties broken by the fixed action order
//! Up, Down, Left, Right. Negative rewards for rejected moves are what
//! push it off bad routes.
//!
//! ## Usage Example
//!
//! ```
//! use qmaze::{DiscountFactor, GridEnvironment, LearningRate, QLearningAgent};
//!
//! let environment = GridEnvironment::parse("#.#\n# *")?;
//! let mut agent = QLearningAgent::new(
//!     &environment,
//!     LearningRate::new(1.0)?,
//!     DiscountFactor::new(0.5)?,
//! );
//!
//! let action = agent.select_best_action();
//! let transition = environment.attempt(agent.position(), action);
//! agent.apply_transition(action, transition);
//! # Ok::<(), qmaze::Error>(())
//! ```

pub mod agent;
pub mod q_table;

// Public re-exports
pub use agent::QLearningAgent;
pub use q_table::QTable;
