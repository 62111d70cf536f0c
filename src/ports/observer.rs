//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events, allowing
//! composable data collection without coupling the episode loop to specific
//! output formats or metrics.

use crate::{
    Result,
    grid::{Action, Transition},
    pipeline::training::EpisodeResult,
    types::Coordinate,
};

/// Observer trait for monitoring training
///
/// Observers can be composed to collect different types of data during
/// training. Examples include:
/// - Progress bars for user feedback
/// - JSONL export for analysis
/// - Metrics tracking for evaluation
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - For each step in the episode
///    - `on_episode_end(episode, result)`
/// 3. `on_training_end()` - Once at the end
///
/// All methods have no-op default implementations, so an observer only
/// implements the events it cares about.
pub trait Observer: Send {
    /// Called when training starts.
    ///
    /// # Parameters
    ///
    /// * `total_episodes` - Total number of episodes that will be run
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the episode (0-based)
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each step of an episode, after the learning update has
    /// been applied.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the current episode
    /// * `step` - Step number within the episode (0-based)
    /// * `from` - Position the action was attempted from
    /// * `action` - The action the agent selected
    /// * `transition` - Outcome of the attempt
    fn on_step(
        &mut self,
        _episode: usize,
        _step: usize,
        _from: Coordinate,
        _action: Action,
        _transition: &Transition,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends, whether the goal was reached or the
    /// step cap fired.
    fn on_episode_end(&mut self, _episode: usize, _result: &EpisodeResult) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// This is the last method called in the observation lifecycle. Use it
    /// to finalize outputs, flush files, or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
