//! Error types for the qmaze crate

use thiserror::Error;

use crate::types::Coordinate;

/// Main error type for the qmaze crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("maze has no start cell (expected exactly one '.')")]
    MissingStart,

    #[error("maze has more than one start cell: first at {first}, second at {second}")]
    DuplicateStart {
        first: Coordinate,
        second: Coordinate,
    },

    #[error("maze has no goal cell (expected exactly one '*')")]
    MissingGoal,

    #[error("maze has more than one goal cell: first at {first}, second at {second}")]
    DuplicateGoal {
        first: Coordinate,
        second: Coordinate,
    },

    #[error("learning rate {value} is out of range (must be in (0, 1])")]
    InvalidLearningRate { value: f64 },

    #[error("discount factor {value} is out of range (must be in [0, 1))")]
    InvalidDiscountFactor { value: f64 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
