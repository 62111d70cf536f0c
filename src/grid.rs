//! Deterministic grid-world maze environment
//!
//! This module owns the maze domain model:
//! - Cell classification parsed from maze text
//! - The four movement actions and their fixed evaluation order
//! - The environment itself: start/goal cells, the grid domain, and the
//!   pure transition function with its reward shaping

pub mod action;
pub mod cell;
pub mod environment;

pub use action::Action;
pub use cell::CellKind;
pub use environment::{GridEnvironment, RewardTable, Transition};
