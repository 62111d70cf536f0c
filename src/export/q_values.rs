//! CSV export of the learned action-value table

use std::path::Path;

use serde::Serialize;

use crate::{
    Result,
    grid::{Action, GridEnvironment},
    q_learning::QTable,
    types::Coordinate,
};

/// A single row in the Q-value CSV export
#[derive(Debug, Clone, Serialize)]
pub struct QValueRecord {
    /// State row
    pub row: usize,
    /// State column
    pub col: usize,
    /// Action
    pub action: Action,
    /// Learned estimate for the state-action pair
    pub value: f64,
}

/// Write the full Q-table as CSV, one row per (state, action) pair.
///
/// Rows are ordered by state (row-major) and then by the fixed action
/// order, so exports of the same table are byte-identical.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_q_values_csv<P: AsRef<Path>>(
    path: P,
    environment: &GridEnvironment,
    q_table: &QTable,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut states: Vec<Coordinate> = environment.states().collect();
    states.sort();

    for state in states {
        for action in Action::ALL {
            writer.serialize(QValueRecord {
                row: state.row(),
                col: state.col(),
                action,
                value: q_table.get(state, action),
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
