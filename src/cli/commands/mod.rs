//! CLI command implementations

use std::path::Path;

use anyhow::{Context, Result};

pub mod export;
pub mod train;

/// The demo maze used when no maze file is given.
pub const DEFAULT_MAZE: &str = "\
    #.########
    #  #     #
    #  #  #  #
    #     #  #
    #  ##### #
    #  #     *
    ##########";

/// Read maze text from a file, or fall back to the built-in demo maze.
pub(crate) fn load_maze(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read maze file {}", path.display())),
        None => Ok(DEFAULT_MAZE.to_string()),
    }
}
