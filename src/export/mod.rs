//! Export functionality for analysis and research
//!
//! This module provides functionality to export the learned action-value
//! table in CSV format.

pub mod q_values;

pub use q_values::{QValueRecord, write_q_values_csv};
