//! Movement actions over the maze grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// One of the four movement actions.
///
/// The enumeration order Up, Down, Left, Right is fixed: greedy action
/// selection evaluates candidates in [`Action::ALL`] order and resolves
/// ties toward the earliest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions, in the fixed evaluation order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Number of actions.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable index of this action within [`Action::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// The coordinate one cell in this direction, if it exists.
    ///
    /// Returns `None` when the move would cross the top or left edge of the
    /// coordinate space; the environment treats that the same as any other
    /// coordinate outside the grid domain.
    pub fn apply_to(self, position: Coordinate) -> Option<Coordinate> {
        match self {
            Action::Up => position
                .row()
                .checked_sub(1)
                .map(|row| Coordinate::new(row, position.col())),
            Action::Down => Some(Coordinate::new(position.row() + 1, position.col())),
            Action::Left => position
                .col()
                .checked_sub(1)
                .map(|col| Coordinate::new(position.row(), col)),
            Action::Right => Some(Coordinate::new(position.row(), position.col() + 1)),
        }
    }

    /// Single-character arrow for policy rendering.
    pub const fn arrow(self) -> char {
        match self {
            Action::Up => '^',
            Action::Down => 'v',
            Action::Left => '<',
            Action::Right => '>',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        };
        write!(f, "{name}")
    }
}
