//! Episode driving loop for the greedy maze agent

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    grid::GridEnvironment,
    ports::Observer,
    q_learning::QLearningAgent,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub episodes: usize,

    /// Safety cap on steps per episode. A degenerate reward configuration
    /// can make the greedy loop non-terminating, so the cap is mandatory.
    pub max_steps: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 200,
            max_steps: 1_000,
        }
    }
}

/// Result of a single episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeResult {
    /// Episode index (0-based)
    pub episode: usize,

    /// Steps taken before the goal or the step cap
    pub steps: usize,

    /// Sum of rewards received during this episode
    pub score: f64,

    /// Whether the goal was reached before the step cap
    pub reached_goal: bool,
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes run
    pub total_episodes: usize,

    /// Episodes that reached the goal
    pub successes: usize,

    /// Episodes stopped by the step cap
    pub failures: usize,

    /// Success rate
    pub success_rate: f64,

    /// Steps summed over all episodes
    pub total_steps: usize,

    /// Fewest steps of any successful episode
    pub best_steps: Option<usize>,

    /// Steps of the final episode
    pub final_steps: usize,

    /// Score of the final episode
    pub final_score: f64,
}

impl TrainingResult {
    /// Create a new training result from per-episode outcomes.
    pub fn new(episodes: &[EpisodeResult]) -> Self {
        let total_episodes = episodes.len();
        let successes = episodes.iter().filter(|e| e.reached_goal).count();
        let failures = total_episodes - successes;
        let success_rate = if total_episodes > 0 {
            successes as f64 / total_episodes as f64
        } else {
            0.0
        };
        let total_steps = episodes.iter().map(|e| e.steps).sum();
        let best_steps = episodes
            .iter()
            .filter(|e| e.reached_goal)
            .map(|e| e.steps)
            .min();
        let (final_steps, final_score) = episodes
            .last()
            .map(|e| (e.steps, e.score))
            .unwrap_or((0, 0.0));

        Self {
            total_episodes,
            successes,
            failures,
            success_rate,
            total_steps,
            best_steps,
            final_steps,
            final_score,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Training pipeline: repeated greedy episodes over one environment
///
/// The pipeline owns the termination policy the agent deliberately does
/// not: each episode runs `select_best_action → attempt → apply_transition`
/// until the agent stands on the goal or the step cap fires. The agent's
/// value table carries over between episodes, so later episodes benefit
/// from earlier wandering.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run training with the given environment and agent
    pub fn run(
        &mut self,
        environment: &GridEnvironment,
        agent: &mut QLearningAgent,
    ) -> Result<TrainingResult> {
        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut episodes = Vec::with_capacity(self.config.episodes);
        for episode in 0..self.config.episodes {
            let result = self.run_episode(episode, environment, agent)?;
            episodes.push(result);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(&episodes))
    }

    fn run_episode(
        &mut self,
        episode: usize,
        environment: &GridEnvironment,
        agent: &mut QLearningAgent,
    ) -> Result<EpisodeResult> {
        for observer in &mut self.observers {
            observer.on_episode_start(episode)?;
        }

        agent.restart();
        let score_before = agent.score();
        let mut steps = 0;

        while agent.position() != environment.goal() && steps < self.config.max_steps {
            let from = agent.position();
            let action = agent.select_best_action();
            let transition = environment.attempt(from, action);
            agent.apply_transition(action, transition);

            for observer in &mut self.observers {
                observer.on_step(episode, steps, from, action, &transition)?;
            }
            steps += 1;
        }

        let result = EpisodeResult {
            episode,
            steps,
            score: agent.score() - score_before,
            reached_goal: agent.position() == environment.goal(),
        };

        for observer in &mut self.observers {
            observer.on_episode_end(episode, &result)?;
        }

        Ok(result)
    }
}
