//! Training pipeline abstractions
//!
//! This module provides the external driving loop the core agent and
//! environment deliberately do not own:
//! - Running repeated greedy episodes with a step cap
//! - Recording observations during training

pub mod observers;
pub mod training;

// Re-export observer implementations (adapters)
pub use observers::{JsonlObserver, MetricsObserver, Observation, ProgressObserver, StepObservation};
pub use training::{EpisodeResult, TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::Observer;
