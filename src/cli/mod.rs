//! CLI infrastructure for the qmaze teaching toolkit
//!
//! This module provides the command-line interface for training the maze
//! agent and exporting what it learned.

pub mod commands;
pub mod output;
