//! Observer adapters for training pipelines
//!
//! Observers allow composable data collection during training without
//! coupling the episode loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    grid::{Action, Transition},
    pipeline::training::EpisodeResult,
    ports::Observer,
    types::Coordinate,
};

/// Observation of a single step during an episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepObservation {
    /// Step number within the episode
    pub step: usize,
    /// Position the action was attempted from
    pub from: Coordinate,
    /// Action selected by the greedy policy
    pub action: Action,
    /// Position after the attempt
    pub to: Coordinate,
    /// Reward received
    pub reward: f64,
    /// Whether the agent actually moved
    pub moved: bool,
}

/// Complete observation of a training episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Episode number
    pub episode: usize,
    /// Steps in the episode
    pub steps: Vec<StepObservation>,
    /// Episode score
    pub score: f64,
    /// Whether the goal was reached
    pub reached_goal: bool,
}

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    successes: usize,
    last_steps: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            successes: 0,
            last_steps: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, result: &EpisodeResult) -> Result<()> {
        if result.reached_goal {
            self.successes += 1;
        }
        self.last_steps = result.steps;

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(format!(
                "goal:{} steps:{}",
                self.successes, self.last_steps
            ));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!(
                "goal:{} steps:{}",
                self.successes, self.last_steps
            ));
        }
        Ok(())
    }
}

/// Metrics observer - Tracks per-episode step counts and successes
pub struct MetricsObserver {
    steps_per_episode: Vec<usize>,
    successes: usize,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            steps_per_episode: Vec::new(),
            successes: 0,
        }
    }

    /// Number of episodes observed so far.
    pub fn episodes(&self) -> usize {
        self.steps_per_episode.len()
    }

    /// Number of episodes that reached the goal.
    pub fn successes(&self) -> usize {
        self.successes
    }

    /// Mean steps per episode, or 0.0 before any episode completed.
    pub fn mean_steps(&self) -> f64 {
        if self.steps_per_episode.is_empty() {
            return 0.0;
        }
        self.steps_per_episode.iter().sum::<usize>() as f64 / self.steps_per_episode.len() as f64
    }

    /// Step count of the most recent episode.
    pub fn last_steps(&self) -> Option<usize> {
        self.steps_per_episode.last().copied()
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, result: &EpisodeResult) -> Result<()> {
        self.steps_per_episode.push(result.steps);
        if result.reached_goal {
            self.successes += 1;
        }
        Ok(())
    }
}

/// JSONL observer - Writes one JSON line per episode
///
/// Each line is an [`Observation`] with the full step trace, suitable for
/// replaying or plotting a training run.
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current_steps: Vec<StepObservation>,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| crate::Error::Io {
            operation: format!("create observations file {}", path.as_ref().display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            current_steps: Vec::new(),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_step(
        &mut self,
        _episode: usize,
        step: usize,
        from: Coordinate,
        action: Action,
        transition: &Transition,
    ) -> Result<()> {
        self.current_steps.push(StepObservation {
            step,
            from,
            action,
            to: transition.position,
            reward: transition.reward,
            moved: transition.moved,
        });
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, result: &EpisodeResult) -> Result<()> {
        let observation = Observation {
            episode,
            steps: std::mem::take(&mut self.current_steps),
            score: result.score,
            reached_goal: result.reached_goal,
        };
        serde_json::to_writer(&mut self.writer, &observation)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
