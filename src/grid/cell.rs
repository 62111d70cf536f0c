//! Cell classification for parsed maze text

use serde::{Deserialize, Serialize};

/// The kind of a single maze cell.
///
/// Classified once from the maze text at environment construction and
/// immutable afterwards. Any symbol without a reserved meaning (including
/// space) denotes open floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Impassable cell (`#`). Moving into it is rejected and penalized.
    Wall,
    /// The unique start cell (`.`). The agent begins here and may not
    /// re-enter it.
    Start,
    /// The unique goal cell (`*`). Entering it ends an episode.
    Goal,
    /// Open floor (any other symbol).
    Open,
}

impl CellKind {
    /// Classify a single maze symbol.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '#' => CellKind::Wall,
            '.' => CellKind::Start,
            '*' => CellKind::Goal,
            _ => CellKind::Open,
        }
    }

    /// Whether the agent may move onto a cell of this kind.
    ///
    /// Walls block, and so does the start cell: once the agent has left it,
    /// it never goes back.
    pub fn is_enterable(&self) -> bool {
        matches!(self, CellKind::Goal | CellKind::Open)
    }

    /// The canonical maze symbol for this kind.
    pub fn symbol(&self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Start => '.',
            CellKind::Goal => '*',
            CellKind::Open => ' ',
        }
    }
}
